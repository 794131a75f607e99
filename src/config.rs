//! Application configuration and constants

use crate::sink::SinkKind;

// === Environment ===
pub const SINK_ENV: &str = "RAWPRUNE_SINK";

// === Preview ===
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
pub const SEPARATOR_WIDTH: usize = 50;

// === Confirmation ===
pub const YES_ANSWERS: &[&str] = &["y", "yes", "是"];
pub const NO_ANSWERS: &[&str] = &["n", "no", "否"];

/// Default removal sink (RAWPRUNE_SINK env var, falling back to permanent delete)
pub fn default_sink() -> SinkKind {
    match std::env::var(SINK_ENV) {
        Ok(value) => match sink_from_str(&value) {
            Some(kind) => {
                crate::ui::debug(&format!("Using {}={}", SINK_ENV, value));
                kind
            }
            None => {
                crate::ui::warn(&format!(
                    "Ignoring {}={} (expected \"delete\" or \"trash\")",
                    SINK_ENV, value
                ));
                SinkKind::Delete
            }
        },
        Err(_) => SinkKind::Delete,
    }
}

fn sink_from_str(value: &str) -> Option<SinkKind> {
    match value.trim().to_ascii_lowercase().as_str() {
        "delete" => Some(SinkKind::Delete),
        "trash" => Some(SinkKind::Trash),
        _ => None,
    }
}

/// Format a byte count as MiB with two decimals
pub fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)
}
