//! # SoundCam Core
//!
//! Núcleo do nó "SoundCam" para o editor de grafos: lê frames 16x16 de um
//! sensor acústico via canal serial, converte cada frame em um raster de
//! falsa-cor e publica a imagem mais uma medição de latência por tick.
//!
//! O host (editor de grafos) é dono do ciclo de vida das portas seriais,
//! do loop de avaliação e das texturas; este crate só consome canais já
//! abertos e parâmetros de janela já resolvidos.
//!
//! ## Módulos
//! - [`types`] – [`SensorGrid`] 16x16 e o raster de saída
//! - [`channel`] – Trait do canal serial e registry nome → dispositivo
//! - [`reader`] – Decodificação do wire format (JSON por linha)
//! - [`transform`] – Pipeline geométrico + falsa-cor
//! - [`colormap`] – Mapa jet (azul → vermelho)
//! - [`timing`] – Medição de latência por tick
//! - [`config`] – Configuração TOML e settings persistidos
//! - [`node`] – Orquestração de um tick completo

pub mod channel;
pub mod colormap;
pub mod config;
pub mod node;
pub mod reader;
pub mod timing;
pub mod transform;
pub mod types;

// Re-exports convenientes
pub use channel::{DeviceRegistry, QueuedChannel, SerialChannel};
pub use config::{NODE_VERSION, NodeConfig, NodeSettings};
pub use node::{TickOutput, run_tick};
pub use reader::{DecodeError, decode_frame, poll_frame};
pub use transform::process_frame;
pub use types::{ColorFrame, GRID_SIZE, SensorGrid};
