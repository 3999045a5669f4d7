//! Column chart of a one-parameter sweep.

use mindscape_core::grid::SweepLine;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::util::format::format_compact;

use super::{BIN_CHARS, normalize};

/// Render a sweep as one column per sample, scaled to the value range.
pub fn render_sweep(frame: &mut Frame, area: Rect, line: &SweepLine) {
    let height = area.height.saturating_sub(2) as usize;

    if height < 3 || area.width < 20 || line.c.is_empty() {
        let msg = Paragraph::new("Area too small").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, area);
        return;
    }

    let Some((lo, hi)) = line.value_range() else {
        return;
    };

    let num_cols = line.c.len().min(area.width as usize);
    let height_units = height * 8;
    let bar_heights: Vec<usize> = line.c[..num_cols]
        .iter()
        .map(|&c| {
            // Flat sweeps render at half height rather than vanishing.
            let t = normalize(c, lo, hi);
            ((0.05 + 0.95 * t) * height_units as f64).round() as usize
        })
        .collect();

    let x_offset = (area.width as usize).saturating_sub(num_cols) / 2;

    for row in 0..height {
        let row_base = (height - 1 - row) * 8;
        let row_top = row_base + 8;
        let mut spans = Vec::new();

        if x_offset > 0 {
            spans.push(Span::raw(" ".repeat(x_offset)));
        }

        for (i, &bar_h) in bar_heights.iter().enumerate() {
            let t = normalize(line.c[i], lo, hi);
            let color = if t < 1.0 / 3.0 {
                Color::Blue
            } else if t < 2.0 / 3.0 {
                Color::Yellow
            } else {
                Color::Green
            };

            let char_to_use = if bar_h >= row_top {
                "█"
            } else if bar_h > row_base {
                let fill_level = bar_h - row_base;
                BIN_CHARS[fill_level.min(8)]
            } else {
                " "
            };

            spans.push(Span::styled(char_to_use, Style::default().fg(color)));
        }

        let row_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }

    // X-axis labels: sweep range and swept parameter, value range on the
    // right.
    let label_y = area.y + height as u16;
    let x_min = line.x.first().copied().unwrap_or(0.0);
    let x_max = line.x.last().copied().unwrap_or(0.0);
    let label_line = Line::from(vec![
        Span::styled(
            format!("{x_min:.1}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(" "),
        Span::styled(
            format!("≤ {} ≤", line.parameter.symbol()),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{x_max:.1}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("   "),
        Span::styled(
            format!("C ∈ [{}, {}]", format_compact(lo), format_compact(hi)),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let label_area = Rect::new(area.x, label_y, area.width, 1);
    frame.render_widget(Paragraph::new(label_line), label_area);
}
