//! TUI module for tempo
//!
//! One row per note value. Typing into the selected row resynchronizes
//! every other row on each keystroke.

mod fields;
mod transport;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};

use tempo_sync::{FieldSet, NoteValueTable, TempoSync};

use fields::render_fields;
use transport::render_transport;

/// UI application state
pub struct UiApp {
    /// Synchronizer owning the displayed fields
    sync: TempoSync<FieldSet>,
    /// Tables reachable with Tab
    tables: Vec<NoteValueTable>,
    /// Index into `tables`
    current_table: usize,
    /// Selected row
    selected: usize,
    /// Last input error, cleared by the next accepted edit
    status: Option<String>,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    pub fn new(sync: TempoSync<FieldSet>, tables: Vec<NoteValueTable>) -> Self {
        let selected = sync
            .last_edit()
            .and_then(|e| sync.table().position(&e.id))
            .unwrap_or(0);

        Self {
            sync,
            tables,
            current_table: 0,
            selected,
            status: None,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            // Input events are handled one at a time, each pass completes before the next
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }

        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let last = self.sync.table().len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
            }
            KeyCode::Tab => self.next_table(),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                self.edit(|text| text.push(c));
            }
            KeyCode::Backspace => {
                self.edit(|text| {
                    text.pop();
                });
            }
            KeyCode::Delete => self.edit(String::clear),
            _ => {}
        }
    }

    /// Change the selected field's text and resynchronize
    fn edit(&mut self, change: impl FnOnce(&mut String)) {
        let Some(field) = self.sync.presenter().fields().get(self.selected) else {
            return;
        };
        let id = field.id.clone();
        let mut text = field.text.clone();
        change(&mut text);

        self.sync.presenter_mut().set_text(&id, text.as_str());
        self.status = self.sync.on_input(&id, &text).err().map(|e| e.to_string());
    }

    fn next_table(&mut self) {
        if self.tables.len() < 2 {
            return;
        }
        self.current_table = (self.current_table + 1) % self.tables.len();
        self.sync.set_table(self.tables[self.current_table].clone());

        self.selected = self
            .sync
            .last_edit()
            .and_then(|e| self.sync.table().position(&e.id))
            .unwrap_or(0);
        self.status = None;
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Transport bar
                Constraint::Min(4),    // Fields
                Constraint::Length(1), // Status
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        render_transport(frame, chunks[0], &self.sync);

        let fields_block = Block::default()
            .title(" Note values ")
            .borders(Borders::ALL);
        let fields_inner = fields_block.inner(chunks[1]);
        frame.render_widget(fields_block, chunks[1]);
        render_fields(frame, fields_inner, &self.sync, self.selected);

        if let Some(status) = &self.status {
            let status = Paragraph::new(format!(" {}", status))
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(status, chunks[2]);
        }

        let help = Paragraph::new(" [Up/Down] Select  [0-9 . -] Edit  [Tab] Table  [Q] Quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
