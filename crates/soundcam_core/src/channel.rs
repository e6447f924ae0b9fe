//! Seam entre o nó e o canal serial do host.
//!
//! O host abre, fecha e reconfigura as portas; o núcleo só consome. O trait
//! [`SerialChannel`] expõe o mínimo que o tick precisa: checar se há bytes
//! pendentes e ler uma linha. O [`DeviceRegistry`] substitui o par de listas
//! paralelas (nomes + conexões) do design original por um único mapa
//! nome → canal, eliminando o invariante frágil de índices casados.

use std::collections::{BTreeMap, VecDeque};
use std::io;

/// Canal serial já aberto, de posse do host.
///
/// A leitura só acontece depois de [`bytes_pending`] retornar `true`, então
/// `read_line` nunca bloqueia esperando o sensor dentro de um tick.
///
/// [`bytes_pending`]: SerialChannel::bytes_pending
pub trait SerialChannel {
    /// Há bytes aguardando no buffer de recepção?
    fn bytes_pending(&self) -> bool;

    /// Lê um registro terminado em `\n` (o `\n` pode ou não vir incluso).
    fn read_line(&mut self) -> io::Result<Vec<u8>>;
}

// ──────────────────────────────────────────────
// DeviceRegistry
// ──────────────────────────────────────────────

/// Mapa de dispositivos selecionáveis: nome → canal aberto.
///
/// Preenchido e mantido pelo host; o núcleo apenas resolve a seleção
/// corrente a cada tick. Um nome ausente é tratado como "nenhum
/// dispositivo", nunca como erro — o host pode trocar ou remover canais
/// entre ticks.
#[derive(Default)]
pub struct DeviceRegistry {
    channels: BTreeMap<String, Box<dyn SerialChannel>>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra (ou substitui) um canal sob o nome dado.
    pub fn insert(&mut self, name: impl Into<String>, channel: Box<dyn SerialChannel>) {
        self.channels.insert(name.into(), channel);
    }

    /// Remove o canal associado ao nome, se existir.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn SerialChannel>> {
        self.channels.remove(name)
    }

    /// Resolve a seleção corrente para o canal correspondente.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn SerialChannel + '_)> {
        match self.channels.get_mut(name) {
            Some(c) => Some(c.as_mut()),
            None => None,
        }
    }

    /// Nomes registrados, em ordem estável (para o combo de seleção do host).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.channels.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }
}

// ──────────────────────────────────────────────
// QueuedChannel – replay e testes
// ──────────────────────────────────────────────

/// Canal em memória com linhas pré-enfileiradas.
///
/// Usado pelo `soundcam_sim` para reproduzir capturas gravadas e pelos
/// testes para roteirizar cenários de tick.
#[derive(Default)]
pub struct QueuedChannel {
    lines: VecDeque<Vec<u8>>,
}

impl QueuedChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enfileira uma linha como se tivesse chegado pela serial.
    pub fn push_line(&mut self, line: impl Into<Vec<u8>>) {
        self.lines.push_back(line.into());
    }
}

impl SerialChannel for QueuedChannel {
    fn bytes_pending(&self) -> bool {
        !self.lines.is_empty()
    }

    fn read_line(&mut self) -> io::Result<Vec<u8>> {
        self.lines
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::WouldBlock, "canal sem dados"))
    }
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────
