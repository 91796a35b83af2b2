//! TempoApp - application builder and runner

use color_eyre::eyre::{eyre, Result as EyreResult};

use tempo_sync::{FieldSet, NoteValueTable, TempoSync};

use super::ui::UiApp;

/// Field seeded with the starting tempo when the table has it
const SEED_FIELD: &str = "quarter-note";

/// Main application builder
pub struct TempoApp {
    bpm: f64,
    tables: Vec<NoteValueTable>,
}

impl TempoApp {
    /// Create a new TempoApp with no tables
    pub fn new() -> Self {
        Self {
            bpm: 120.0,
            tables: Vec::new(),
        }
    }

    /// Starting tempo for the seed field
    pub fn bpm(mut self, bpm: f64) -> Self {
        self.bpm = bpm;
        self
    }

    /// Add a table; Tab cycles through them in the order added
    pub fn table(mut self, table: NoteValueTable) -> Self {
        self.tables.push(table);
        self
    }

    /// Run the terminal UI until the user quits
    pub fn run(self) -> EyreResult<()> {
        let first = self
            .tables
            .first()
            .cloned()
            .ok_or_else(|| eyre!("no tables to show"))?;

        let seed = if first.contains(SEED_FIELD) {
            SEED_FIELD.to_string()
        } else {
            first.ids().next().unwrap_or_default().to_string()
        };

        let mut sync = TempoSync::new(first, FieldSet::new());
        sync.seed(&seed, self.bpm)?;

        let mut terminal = ratatui::init();
        let result = UiApp::new(sync, self.tables).run(&mut terminal);
        ratatui::restore();
        result
    }
}

impl Default for TempoApp {
    fn default() -> Self {
        Self::new()
    }
}
