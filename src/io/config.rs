//! User-defined tables stored as JSON
//!
//! ```json
//! {
//!   "name": "swing",
//!   "precision": 2,
//!   "entries": [
//!     { "id": "quarter-note", "ratio": { "numerator": 1, "denominator": 1 } },
//!     { "id": "eighth-note-triplet", "ratio": { "numerator": 3, "denominator": 1 } }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tempo::{NoteValueTable, NotesPerBeat, TableError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub name: String,
    #[serde(default = "default_precision")]
    pub precision: u8,
    pub entries: Vec<EntryConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryConfig {
    pub id: String,
    pub ratio: NotesPerBeat,
}

fn default_precision() -> u8 {
    2
}

impl TableConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading table config from {}", path.display());
        let json = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&json)
    }

    pub fn from_table(table: &NoteValueTable) -> Self {
        Self {
            name: table.name().to_string(),
            precision: table.precision(),
            entries: table
                .entries()
                .iter()
                .map(|e| EntryConfig {
                    id: e.id.clone(),
                    ratio: e.ratio,
                })
                .collect(),
        }
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Parse)
    }

    /// Validate into a table
    pub fn build(&self) -> Result<NoteValueTable, ConfigError> {
        self.entries
            .iter()
            .fold(
                NoteValueTable::builder(self.precision).name(self.name.as_str()),
                |b, e| b.entry(e.id.as_str(), e.ratio),
            )
            .build()
            .map_err(ConfigError::Table)
    }
}

/// Errors that can occur when loading a table definition
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Table(TableError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "Could not read table config: {}", err),
            ConfigError::Parse(err) => write!(f, "Invalid table config: {}", err),
            ConfigError::Table(err) => write!(f, "Invalid table: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Table(err) => Some(err),
        }
    }
}
