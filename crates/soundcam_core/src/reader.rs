//! Frame Reader – decodificação do wire format serial.
//!
//! O sensor emite um registro por frame: uma linha UTF-8 terminada em `\n`
//! contendo um array JSON de 16 linhas com 16 inteiros em [0,255] cada.
//!
//! Política de descarte: uma linha corrompida nunca pode travar o grafo.
//! Qualquer falha de decodificação vira "sem frame neste tick", logada em
//! `debug!` e nada mais. O tipo [`DecodeError`] existe para que os testes
//! enxerguem cada classe de falha, em vez do catch-all opaco do design
//! original.

use crate::channel::SerialChannel;
use crate::types::{GRID_SIZE, SensorGrid};
use tracing::debug;

/// Falhas possíveis ao decodificar uma linha do sensor.
///
/// Valores fora de [0,255] e elementos não inteiros caem em [`Json`]:
/// o serde rejeita ambos ao deserializar para `u8`.
///
/// [`Json`]: DecodeError::Json
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("linha não é UTF-8 válido: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),

    #[error("shape {rows}x{cols} (esperado {GRID_SIZE}x{GRID_SIZE})")]
    BadShape { rows: usize, cols: usize },
}

/// Decodifica uma linha crua do canal em um [`SensorGrid`].
pub fn decode_frame(line: &[u8]) -> Result<SensorGrid, DecodeError> {
    let text = std::str::from_utf8(line)?;
    let rows: Vec<Vec<u8>> = serde_json::from_str(text.trim_end())?;
    SensorGrid::from_rows(&rows).ok_or_else(|| DecodeError::BadShape {
        rows: rows.len(),
        cols: rows.first().map_or(0, Vec::len),
    })
}

/// Tenta obter um frame do canal neste tick.
///
/// Retorna `None` quando não há bytes pendentes ou quando a linha lida não
/// decodifica — nos dois casos o tick simplesmente não contribui com saída.
pub fn poll_frame(channel: &mut dyn SerialChannel) -> Option<SensorGrid> {
    if !channel.bytes_pending() {
        return None;
    }

    let line = match channel.read_line() {
        Ok(line) => line,
        Err(e) => {
            debug!("Erro de leitura no canal serial: {e}");
            return None;
        }
    };

    match decode_frame(&line) {
        Ok(grid) => Some(grid),
        Err(e) => {
            debug!("Frame descartado: {e}");
            None
        }
    }
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::QueuedChannel;

    fn grid_json(value: u8) -> String {
        let row: Vec<String> = (0..GRID_SIZE).map(|_| value.to_string()).collect();
        let row = format!("[{}]", row.join(","));
        let rows: Vec<String> = (0..GRID_SIZE).map(|_| row.clone()).collect();
        format!("[{}]", rows.join(","))
    }

    #[test]
    fn decodes_valid_frame() {
        let grid = decode_frame(grid_json(9).as_bytes()).unwrap();
        assert_eq!(grid.get(0, 0), 9);
        assert_eq!(grid.get(15, 15), 9);
    }

    #[test]
    fn decodes_frame_with_trailing_newline() {
        let line = format!("{}\r\n", grid_json(3));
        assert!(decode_frame(line.as_bytes()).is_ok());
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = decode_frame(&[0xFF, 0xFE, b'[']).unwrap_err();
        assert!(matches!(err, DecodeError::Utf8(_)));
    }

    #[test]
    fn rejects_truncated_json() {
        let full = grid_json(1);
        let truncated = &full[..full.len() / 2];
        let err = decode_frame(truncated.as_bytes()).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn rejects_non_integer_values() {
        let err = decode_frame(br#"[["a","b"]]"#).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn rejects_values_out_of_u8_range() {
        let mut bad = grid_json(0);
        bad = bad.replacen("[0,", "[300,", 1);
        let err = decode_frame(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn rejects_wrong_row_count() {
        // 15 linhas em vez de 16
        let row = format!("[{}]", vec!["0"; GRID_SIZE].join(","));
        let rows: Vec<String> = (0..GRID_SIZE - 1).map(|_| row.clone()).collect();
        let payload = format!("[{}]", rows.join(","));

        let err = decode_frame(payload.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::BadShape { rows: 15, cols: 16 }
        ));
    }

    #[test]
    fn rejects_wrong_column_count() {
        let row = format!("[{}]", vec!["0"; GRID_SIZE + 1].join(","));
        let rows: Vec<String> = (0..GRID_SIZE).map(|_| row.clone()).collect();
        let payload = format!("[{}]", rows.join(","));

        let err = decode_frame(payload.as_bytes()).unwrap_err();
        assert!(matches!(err, DecodeError::BadShape { rows: 16, .. }));
    }

    #[test]
    fn poll_returns_none_on_idle_channel() {
        let mut ch = QueuedChannel::new();
        assert!(poll_frame(&mut ch).is_none());
    }

    #[test]
    fn poll_swallows_malformed_line() {
        let mut ch = QueuedChannel::new();
        ch.push_line("isto não é JSON\n".as_bytes());
        assert!(poll_frame(&mut ch).is_none());
        // A linha ruim foi consumida; o canal volta a ficar ocioso
        assert!(!ch.bytes_pending());
    }

    #[test]
    fn poll_yields_grid_for_valid_line() {
        let mut ch = QueuedChannel::new();
        ch.push_line(format!("{}\n", grid_json(5)).into_bytes());
        let grid = poll_frame(&mut ch).unwrap();
        assert_eq!(grid.get(7, 7), 5);
    }
}
