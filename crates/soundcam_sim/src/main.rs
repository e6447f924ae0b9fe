//! # SoundCam Sim
//!
//! Replay de capturas do sensor pelo pipeline completo do nó, sem o editor
//! de grafos. Lê um arquivo `.jsonl` (uma linha JSON por frame, exatamente
//! como chega pela serial), executa um tick por linha e grava cada raster
//! publicado como PNG.
//!
//! ## Uso
//! ```bash
//! soundcam_sim captura.jsonl          # frames em ./frames
//! soundcam_sim captura.jsonl saida/   # diretório customizado
//! ```

use soundcam_core::{DeviceRegistry, NodeConfig, QueuedChannel, run_tick};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Nome sob o qual o canal de replay entra no registry.
const DEVICE_NAME: &str = "replay";

fn main() {
    // ── Logging ──
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // ── Argumentos ──
    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("Uso: soundcam_sim <captura.jsonl> [dir_saida]");
        std::process::exit(2);
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "frames".into()));

    // ── Carregar config ──
    let config_path = Path::new("soundcam.toml");
    let config = NodeConfig::load(config_path);

    // Salva config padrão se não existir
    if !config_path.exists() {
        if let Err(e) = config.save(config_path) {
            warn!("Não foi possível salvar config padrão: {e}");
        }
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            error!("Config inválida: {e}");
        }
        std::process::exit(1);
    }

    // ── Canal de replay ──
    let capture = match std::fs::read_to_string(&input) {
        Ok(content) => content,
        Err(e) => {
            error!("Erro ao ler {input}: {e}");
            std::process::exit(1);
        }
    };

    let mut channel = QueuedChannel::new();
    let mut total_lines = 0usize;
    for line in capture.lines().filter(|l| !l.trim().is_empty()) {
        channel.push_line(line.as_bytes());
        total_lines += 1;
    }

    let mut devices = DeviceRegistry::new();
    devices.insert(DEVICE_NAME, Box::new(channel));

    if let Err(e) = std::fs::create_dir_all(&out_dir) {
        error!("Erro ao criar {}: {e}", out_dir.display());
        std::process::exit(1);
    }

    // ── Banner ──
    println!();
    println!("══════════════════════════════════════════════");
    println!("   📷 SOUNDCAM SIM – REPLAY (Rust)");
    println!("══════════════════════════════════════════════");
    println!("  Captura:   {input} ({total_lines} linhas)");
    println!("  Saída:     {}", out_dir.display());
    println!(
        "  Resolução: {}x{}",
        config.output_width, config.output_height
    );
    println!("══════════════════════════════════════════════");
    println!();

    // ── Loop de ticks ──
    let mut published = 0usize;
    let mut dropped = 0usize;

    for tick in 0..total_lines {
        let output = run_tick(&config, &mut devices, DEVICE_NAME);
        let elapsed = output.elapsed.unwrap_or_default();

        match output.image {
            Some(image) => {
                let path = out_dir.join(format!("frame_{tick:04}.png"));
                match image.save(&path) {
                    Ok(()) => {
                        published += 1;
                        info!("tick {tick:04} → {} | {elapsed}", path.display());
                    }
                    Err(e) => error!("Erro ao gravar {}: {e}", path.display()),
                }
            }
            None => {
                dropped += 1;
                info!("tick {tick:04} → sem frame | {elapsed}");
            }
        }
    }

    info!("Replay concluído: {published} frames publicados, {dropped} ticks sem frame");
}
