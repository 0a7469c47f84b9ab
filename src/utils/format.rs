//! Formatting utilities for display values.

/// Format file size for display (e.g., "1.2K", "3.4M").
pub fn format_size(size: Option<u64>) -> String {
    match size {
        None => "-".to_string(),
        Some(bytes) if bytes >= 1_000_000_000 => {
            format!("{:.1}G", bytes as f64 / 1_000_000_000.0)
        }
        Some(bytes) if bytes >= 1_000_000 => format!("{:.1}M", bytes as f64 / 1_000_000.0),
        Some(bytes) if bytes >= 1_000 => format!("{:.1}K", bytes as f64 / 1_000.0),
        Some(bytes) => format!("{}B", bytes),
    }
}
