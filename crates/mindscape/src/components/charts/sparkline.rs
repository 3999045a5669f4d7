//! One-row sparklines for universe timelines.

use ratatui::{
    style::{Color, Style},
    text::Span,
};

use super::{BIN_CHARS, normalize};

/// Build sparkline spans for a timeline, one glyph per step, scaled to the
/// shared `[lo, hi]` range so multiple timelines stay comparable.
pub fn sparkline_spans(
    timeline: &[f64],
    lo: f64,
    hi: f64,
    width: usize,
    color: Color,
) -> Vec<Span<'static>> {
    timeline
        .iter()
        .take(width)
        .map(|&value| {
            let t = normalize(value, lo, hi);
            let level = 1 + (t * 7.0).round() as usize;
            Span::styled(BIN_CHARS[level.min(8)], Style::default().fg(color))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_are_truncated_to_width() {
        let timeline = vec![1.0; 50];
        let spans = sparkline_spans(&timeline, 0.0, 2.0, 10, Color::Cyan);
        assert_eq!(spans.len(), 10);
    }

    #[test]
    fn extremes_map_to_extreme_glyphs() {
        let spans = sparkline_spans(&[0.0, 10.0], 0.0, 10.0, 10, Color::Cyan);
        assert_eq!(spans[0].content, BIN_CHARS[1]);
        assert_eq!(spans[1].content, BIN_CHARS[8]);
    }

    #[test]
    fn flat_range_renders_mid_height() {
        let spans = sparkline_spans(&[3.0, 3.0], 3.0, 3.0, 10, Color::Cyan);
        assert_eq!(spans[0].content, spans[1].content);
    }
}
