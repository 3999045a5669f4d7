//! Block-character chart rendering.
//!
//! All charts draw with sub-character vertical precision using the eighth
//! block glyphs, one column (or cell) per sample.

pub mod sparkline;
pub mod surface;
pub mod sweep;

/// Block characters for sub-character precision (from empty to full)
pub const BIN_CHARS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Map `value` inside `[lo, hi]` to `0.0..=1.0`, collapsing flat ranges.
pub fn normalize(value: f64, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.5
    }
}
