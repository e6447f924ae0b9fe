//! Medição de latência por tick.
//!
//! Política adotada: o cronômetro roda sempre que há dispositivo
//! selecionado e a instrumentação está habilitada — inclusive em ticks
//! ociosos, que reportam uma medição próxima de zero. Sem dispositivo
//! selecionado, nenhuma medição é emitida.

use std::time::Instant;

/// Cronômetro de um tick. Criado antes do reader, finalizado depois do
/// transformador (ou logo após o reader, se não houve frame).
pub struct TickTimer(Option<Instant>);

impl TickTimer {
    /// Inicia o cronômetro se a instrumentação estiver habilitada;
    /// caso contrário retorna um timer inerte que não produz medição.
    pub fn start_if(enabled: bool) -> Self {
        Self(enabled.then(Instant::now))
    }

    /// Encerra o tick e formata o tempo decorrido, se medido.
    pub fn finish(self) -> Option<String> {
        self.0.map(|start| format_elapsed_ms(start.elapsed().as_millis()))
    }
}

/// Formata milissegundos no padrão do display do host: `NNNNms`,
/// zero-padded para 4 dígitos.
pub fn format_elapsed_ms(ms: u128) -> String {
    format!("{ms:04}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_elapsed_ms(0), "0000ms");
        assert_eq!(format_elapsed_ms(7), "0007ms");
        assert_eq!(format_elapsed_ms(42), "0042ms");
        assert_eq!(format_elapsed_ms(9999), "9999ms");
    }

    #[test]
    fn format_matches_display_pattern() {
        for ms in [0u128, 1, 123, 4567] {
            let s = format_elapsed_ms(ms);
            assert_eq!(s.len(), 6);
            assert!(s.ends_with("ms"));
            assert!(s[..4].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn disabled_timer_produces_nothing() {
        assert!(TickTimer::start_if(false).finish().is_none());
    }

    #[test]
    fn enabled_timer_produces_measurement() {
        let s = TickTimer::start_if(true).finish().unwrap();
        assert!(s.ends_with("ms"));
        assert!(s.len() >= 6);
    }
}
