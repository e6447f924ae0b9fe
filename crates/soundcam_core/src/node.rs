//! Orquestração de um tick do nó SoundCam.
//!
//! Executado uma vez por avaliação do grafo, síncrono e de passada única:
//! reader → transformador → saídas. Nenhum estado sobrevive entre ticks;
//! a seleção de dispositivo e a configuração chegam frescas do host a cada
//! chamada.

use tracing::debug;

use crate::channel::DeviceRegistry;
use crate::config::NodeConfig;
use crate::reader;
use crate::timing::TickTimer;
use crate::transform;
use crate::types::ColorFrame;

/// Saídas publicadas por um tick.
#[derive(Debug, Default)]
pub struct TickOutput {
    /// Raster em falsa-cor na resolução configurada, ou `None` se o tick
    /// não produziu frame válido.
    pub image: Option<ColorFrame>,
    /// Latência formatada (`NNNNms`); presente apenas com instrumentação
    /// habilitada e dispositivo selecionado.
    pub elapsed: Option<String>,
}

/// Executa um tick completo do nó.
///
/// Seleção vazia significa "nenhum dispositivo": nada é lido, nada é
/// medido. Um nome que não resolve no registry é tratado da mesma forma
/// que um canal ocioso — o host pode ter trocado ou removido o dispositivo
/// entre ticks — mas ainda conta como tick medido, já que houve seleção.
pub fn run_tick(config: &NodeConfig, devices: &mut DeviceRegistry, selection: &str) -> TickOutput {
    if selection.is_empty() {
        return TickOutput::default();
    }

    let timer = TickTimer::start_if(config.measure_latency);

    let grid = match devices.get_mut(selection) {
        Some(channel) => reader::poll_frame(channel),
        None => {
            debug!("Dispositivo selecionado '{selection}' não está registrado");
            None
        }
    };

    let image = grid.map(|grid| {
        transform::process_frame(&grid, config.output_width, config.output_height)
    });

    TickOutput {
        image,
        elapsed: timer.finish(),
    }
}

// ──────────────────────────────────────────────
// Testes – cenários fim-a-fim
// ──────────────────────────────────────────────
