//! Transport bar widget - shows table, driving field and shared pulse

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use tempo_sync::{FieldSet, TempoSync};

/// Render the transport bar
pub fn render_transport(frame: &mut Frame, area: Rect, sync: &TempoSync<FieldSet>) {
    let block = Block::default().title(" tempo ").borders(Borders::ALL);
    let table = sync.table();

    let mut spans = vec![
        Span::styled(
            format!(" Table: {}  ", table.name()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{} fields, {} decimals  ", table.len(), table.precision()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    match sync.last_edit() {
        Some(edit) => {
            spans.push(Span::styled(
                format!("{} = {}  ", edit.id, edit.value),
                Style::default().fg(Color::Green),
            ));
            spans.push(Span::styled(
                format!("Pulse: {:.3} notes/min", edit.pulse()),
                Style::default().fg(Color::Magenta),
            ));
        }
        None => spans.push(Span::styled(
            "No tempo set",
            Style::default().fg(Color::Yellow),
        )),
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
