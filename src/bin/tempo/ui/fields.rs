//! Field list widget - one row per note value with the selected row highlighted

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use tempo_sync::{FieldSet, TempoSync};

const LABEL_WIDTH: usize = 28;
const VALUE_WIDTH: usize = 12;

/// Render every field of the current table
pub fn render_fields(frame: &mut Frame, area: Rect, sync: &TempoSync<FieldSet>, selected: usize) {
    if area.height == 0 || area.width < 20 {
        return;
    }

    // Keep the selection visible when the list is taller than the area
    let visible = area.height as usize;
    let first = selected.saturating_sub(visible.saturating_sub(1));

    let table = sync.table();
    let lines: Vec<Line> = table
        .entries()
        .iter()
        .zip(sync.presenter().fields())
        .enumerate()
        .skip(first)
        .take(visible)
        .map(|(i, (entry, field))| {
            let is_selected = i == selected;
            let label_style = if is_selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let value_style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Cyan)
            };

            Line::from(vec![
                Span::raw(if is_selected { " > " } else { "   " }),
                Span::styled(format!("{:<LABEL_WIDTH$}", entry.id), label_style),
                Span::styled(format!("{:>VALUE_WIDTH$}", field.text), value_style),
                Span::styled(
                    format!("   x{}", entry.ratio),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
