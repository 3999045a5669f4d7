//! Shaded heatmap of a two-parameter surface.

use mindscape_core::grid::SurfaceGrid;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::util::format::format_compact;

use super::normalize;

/// Shade glyphs from low to high cell values.
const SHADE_CHARS: [&str; 5] = [" ", "░", "▒", "▓", "█"];

/// Cold-to-hot ramp for cell values.
const RAMP: [Color; 5] = [
    Color::Blue,
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Red,
];

fn cell_style(t: f64) -> (usize, Color) {
    let shade = ((t * (SHADE_CHARS.len() - 1) as f64).round() as usize).min(SHADE_CHARS.len() - 1);
    let color = RAMP[((t * (RAMP.len() - 1) as f64).round() as usize).min(RAMP.len() - 1)];
    (shade, color)
}

/// Render a surface grid, one character per displayed cell.
///
/// The y axis grows upward: the top row of the chart shows the largest y
/// sample, matching how the surface would be read on paper.
pub fn render_surface(frame: &mut Frame, area: Rect, grid: &SurfaceGrid) {
    let height = area.height.saturating_sub(2) as usize;
    let width = area.width.saturating_sub(2) as usize;

    if height < 5 || width < 10 || grid.rows() == 0 || grid.cols() == 0 {
        let msg = Paragraph::new("Area too small").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, area);
        return;
    }

    let Some((lo, hi)) = grid.value_range() else {
        return;
    };

    let display_rows = height.min(grid.rows());
    let display_cols = width.min(grid.cols());

    for row in 0..display_rows {
        // Top chart row = last grid row (largest y).
        let grid_row = (grid.rows() - 1) - row * grid.rows() / display_rows;
        let mut spans = Vec::with_capacity(display_cols + 1);

        for col in 0..display_cols {
            let grid_col = col * grid.cols() / display_cols;
            let t = normalize(grid.z[grid_row][grid_col], lo, hi);
            let (shade, color) = cell_style(t);
            spans.push(Span::styled(
                SHADE_CHARS[shade],
                Style::default().fg(color),
            ));
        }

        let row_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }

    // Axis labels under the map.
    let x_min = grid.x.first().copied().unwrap_or(0.0);
    let x_max = grid.x.last().copied().unwrap_or(0.0);
    let y_min = grid.y.first().copied().unwrap_or(0.0);
    let y_max = grid.y.last().copied().unwrap_or(0.0);

    let label_line = Line::from(vec![
        Span::styled(
            format!(
                "{} ∈ [{x_min:.1}, {x_max:.1}] → | {} ∈ [{y_min:.1}, {y_max:.1}] ↑",
                grid.x_parameter.symbol(),
                grid.y_parameter.symbol()
            ),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("   "),
        Span::styled(
            format!("C ∈ [{}, {}]", format_compact(lo), format_compact(hi)),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let label_area = Rect::new(area.x, area.y + display_rows as u16, area.width, 1);
    frame.render_widget(Paragraph::new(label_line), label_area);
}
