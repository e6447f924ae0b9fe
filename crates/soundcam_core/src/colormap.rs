//! Mapa de falsa-cor estilo "jet".
//!
//! Intensidade baixa → azul, alta → vermelho, com verde no meio da escala.
//! A forma exata dos valores não é contrato de compatibilidade; o que os
//! consumidores dependem é da ordenação (mais intenso nunca fica "mais
//! azul") e dos extremos azul/vermelho.

/// Mapeia uma intensidade escalar [0,255] para RGB.
pub fn jet(value: u8) -> [u8; 3] {
    let x = f32::from(value) / 255.0;

    let r = (1.5 - (4.0 * x - 3.0).abs()).clamp(0.0, 1.0);
    let g = (1.5 - (4.0 * x - 2.0).abs()).clamp(0.0, 1.0);
    let b = (1.5 - (4.0 * x - 1.0).abs()).clamp(0.0, 1.0);

    [
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ]
}
