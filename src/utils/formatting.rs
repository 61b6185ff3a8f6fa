//! Formatting utilities used for CLI outputs.

/// Round hours for display only; the calculator never rounds.
pub fn round_hours(hours: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (hours * factor).round() / factor
}

pub fn hours2readable(hours: f64, decimals: u32) -> String {
    format!("{:.*} h", decimals as usize, round_hours(hours, decimals))
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
