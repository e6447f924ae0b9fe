//! Frame Transformer – do grid 16x16 ao raster em falsa-cor.
//!
//! Pipeline fixo e sensível à ordem:
//! 1. rotação 90° anti-horária (orientação de montagem do sensor);
//! 2. recorte das linhas 3..12, todas as colunas → região útil 9x16;
//! 3. upscale bilinear para a resolução de saída do host;
//! 4. máscara binária sobre o cinza redimensionado (≥ 1 → 255, 0 → 0);
//! 5. falsa-cor jet em 3 canais;
//! 6. AND por pixel com a máscara.
//!
//! A máscara distingue "leitura zero" de "sinal fraco": sem ela, o zero do
//! colormap renderizaria azul-escuro visível em vez de vazio.
//!
//! Função pura: o shape da entrada é garantido por [`SensorGrid`], então
//! não existe caminho de erro aqui.

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::colormap::jet;
use crate::types::{ColorFrame, GRID_SIZE, SensorGrid};

/// Primeira linha mantida após a rotação.
pub const CROP_ROW_START: usize = 3;
/// Limite superior (exclusivo) do recorte.
pub const CROP_ROW_END: usize = 12;

/// Transforma um frame validado no raster de saída `width`x`height`.
pub fn process_frame(grid: &SensorGrid, width: u32, height: u32) -> ColorFrame {
    let rotated = grid.rotate_ccw();

    // Região útil: 9 linhas x 16 colunas, em escala de cinza
    let crop_height = (CROP_ROW_END - CROP_ROW_START) as u32;
    let mut gray = GrayImage::new(GRID_SIZE as u32, crop_height);
    for (y, row) in rotated.rows()[CROP_ROW_START..CROP_ROW_END].iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            gray.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }

    // Triangle = interpolação bilinear, o equivalente do resize padrão
    // do pipeline de captura
    let resized = imageops::resize(&gray, width, height, FilterType::Triangle);

    // Falsa-cor + máscara em uma passada: intensidade zero vira pixel
    // preto em vez da cor do zero do colormap
    let mut out = RgbImage::new(width, height);
    for (x, y, pixel) in resized.enumerate_pixels() {
        let v = pixel.0[0];
        let rgb = if v >= 1 { jet(v) } else { [0, 0, 0] };
        out.put_pixel(x, y, Rgb(rgb));
    }
    out
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────
