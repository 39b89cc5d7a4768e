//! Formatting utilities for terminal output

use crate::core::WILDCARD;

/// Render a mask with blanks for hidden letters, e.g. `"c _ t"`
#[must_use]
pub fn spaced_mask(mask: &str) -> String {
    mask.chars()
        .map(|c| if c == WILDCARD { '_' } else { c })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining attempts as hearts, spent ones as crosses
#[must_use]
pub fn attempts_gauge(used: usize, max: usize) -> String {
    let used = used.min(max);
    format!("{}{}", "♥".repeat(max - used), "✗".repeat(used))
}
