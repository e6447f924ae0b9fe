//! Tipos centrais do nó SoundCam.
//!
//! O sensor entrega frames 16x16 de intensidade acústica (uint8). O shape
//! é garantido pelo tipo [`SensorGrid`]: depois do decode não existe caminho
//! para uma matriz de outro tamanho chegar ao transformador.

use image::RgbImage;

/// Lado do frame do sensor (16x16).
pub const GRID_SIZE: usize = 16;

/// Raster de saída em falsa-cor, 3 canais RGB, na resolução configurada
/// pelo host.
pub type ColorFrame = RgbImage;

// ──────────────────────────────────────────────
// SensorGrid
// ──────────────────────────────────────────────

/// Frame validado do sensor: matriz 16x16 de intensidades (0–255).
///
/// Construído uma vez por tick pelo reader e consumido pelo transformador;
/// nunca mutado depois de criado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorGrid([[u8; GRID_SIZE]; GRID_SIZE]);

impl SensorGrid {
    /// Cria um grid a partir de uma matriz já no shape correto.
    pub fn new(cells: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self(cells)
    }

    /// Coage linhas decodificadas do wire format para o grid fixo.
    ///
    /// Retorna `None` se o número de linhas ou de colunas não for
    /// exatamente 16 (política de descarte silencioso do reader).
    pub fn from_rows(rows: &[Vec<u8>]) -> Option<Self> {
        if rows.len() != GRID_SIZE {
            return None;
        }
        let mut cells = [[0u8; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != GRID_SIZE {
                return None;
            }
            cells[r].copy_from_slice(row);
        }
        Some(Self(cells))
    }

    /// Linhas do grid, na ordem em que vieram do sensor.
    pub fn rows(&self) -> &[[u8; GRID_SIZE]; GRID_SIZE] {
        &self.0
    }

    /// Intensidade na posição (linha, coluna).
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row][col]
    }

    /// Rotação de 90° anti-horária (correção da orientação de montagem
    /// do sensor). Equivale a `out[r][c] = in[c][N-1-r]`.
    pub fn rotate_ccw(&self) -> SensorGrid {
        let mut out = [[0u8; GRID_SIZE]; GRID_SIZE];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.0[c][GRID_SIZE - 1 - r];
            }
        }
        SensorGrid(out)
    }

    /// Grid totalmente zerado (sem sinal).
    pub fn zeroed() -> Self {
        Self([[0u8; GRID_SIZE]; GRID_SIZE])
    }
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────
