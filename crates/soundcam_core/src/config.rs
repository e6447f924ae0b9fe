//! Configuração do nó via TOML.
//!
//! [`NodeConfig`] é estado do host, não do núcleo: é passado por valor a
//! cada tick, sem nada retido entre chamadas. [`NodeSettings`] é o objeto
//! persistido pelo editor de grafos — apenas tag de versão e posição do nó
//! no canvas, nenhum outro estado atravessa sessões.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Versão do nó gravada nas configurações persistidas.
pub const NODE_VERSION: &str = "0.0.1";

// ──────────────────────────────────────────────
// NodeConfig – parâmetros por tick
// ──────────────────────────────────────────────

/// Parâmetros resolvidos pelo host e fornecidos a cada tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Largura do raster de saída (px)
    pub output_width: u32,
    /// Altura do raster de saída (px)
    pub output_height: u32,
    /// Emite a string de latência por tick
    pub measure_latency: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            output_width: 1280,
            output_height: 720,
            measure_latency: true,
        }
    }
}

impl NodeConfig {
    /// Carrega configuração de um arquivo TOML, caindo no padrão em caso
    /// de erro.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str::<NodeConfig>(&content) {
                    Ok(config) => {
                        info!("Configuração carregada de {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        warn!("Erro ao parsear {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    warn!("Erro ao ler {}: {}", path.display(), e);
                }
            }
        }

        info!("Usando configuração padrão");
        NodeConfig::default()
    }

    /// Salva configuração em arquivo TOML.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(path, content).map_err(|e| e.to_string())?;
        info!("Configuração salva em {}", path.display());
        Ok(())
    }

    /// Valida a configuração e retorna lista de erros.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.output_width == 0 {
            errors.push("Largura de saída não pode ser 0".into());
        }
        if self.output_height == 0 {
            errors.push("Altura de saída não pode ser 0".into());
        }

        errors
    }
}

// ──────────────────────────────────────────────
// NodeSettings – estado persistido pelo editor
// ──────────────────────────────────────────────

/// Objeto de configuração persistido pelo host para este nó.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSettings {
    /// Tag de versão do nó
    pub ver: String,
    /// Posição no canvas do editor
    pub pos: [f32; 2],
}

impl NodeSettings {
    /// Settings para um nó na posição dada, com a versão corrente.
    pub fn at(pos: [f32; 2]) -> Self {
        Self {
            ver: NODE_VERSION.into(),
            pos,
        }
    }
}

impl Default for NodeSettings {
    fn default() -> Self {
        Self::at([0.0, 0.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = NodeConfig::default();
        let errors = config.validate();
        assert!(errors.is_empty(), "Erros: {:?}", errors);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let config = NodeConfig {
            output_width: 0,
            output_height: 0,
            ..Default::default()
        };
        assert_eq!(config.validate().len(), 2);
    }

    #[test]
    fn roundtrip_toml() {
        let config = NodeConfig {
            output_width: 640,
            output_height: 360,
            measure_latency: false,
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: NodeConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.output_width, 640);
        assert_eq!(parsed.output_height, 360);
        assert!(!parsed.measure_latency);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let partial = r#"
output_width = 640
"#;
        let config: NodeConfig = toml::from_str(partial).unwrap();
        assert_eq!(config.output_width, 640);
        // Outros campos devem ter valor padrão
        assert_eq!(config.output_height, 720);
        assert!(config.measure_latency);
    }

    #[test]
    fn settings_roundtrip_keeps_version_and_pos() {
        let settings = NodeSettings::at([120.5, -40.0]);
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: NodeSettings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, settings);
        assert_eq!(parsed.ver, NODE_VERSION);
    }
}
