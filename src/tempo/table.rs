use super::ratio::NotesPerBeat;
use super::sync::ConversionEvent;

/// Largest supported output precision (f64 carries ~15-17 significant digits)
pub const MAX_PRECISION: u8 = 15;

/// A single field of a table: identifier plus its ratio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteValue {
    /// Stable identifier, e.g. "eighth-note-triplet"
    pub id: String,
    pub ratio: NotesPerBeat,
}

/// Immutable, validated, ordered set of note values sharing one pulse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteValueTable {
    name: String,
    entries: Vec<NoteValue>,
    precision: u8,
}

impl NoteValueTable {
    /// Start a table whose outputs are rounded to `precision` decimal places
    pub fn builder(precision: u8) -> TableBuilder {
        TableBuilder::new(precision)
    }

    /// Table from constant entries validated at compile time
    pub(crate) fn from_static(name: &str, precision: u8, entries: &[(&str, NotesPerBeat)]) -> Self {
        Self {
            name: name.to_string(),
            entries: entries
                .iter()
                .map(|(id, ratio)| NoteValue {
                    id: id.to_string(),
                    ratio: ratio.reduce(),
                })
                .collect(),
            precision,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decimal places applied to every synchronized value
    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[NoteValue] {
        &self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn ratio(&self, id: &str) -> Option<NotesPerBeat> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.ratio)
    }

    /// Capture an edit of `id` to `value`; `None` if the table has no such field
    pub fn event(&self, id: &str, value: f64) -> Option<ConversionEvent> {
        self.ratio(id).map(|ratio| ConversionEvent {
            id: id.to_string(),
            ratio,
            value,
        })
    }
}

/// Builder validating a table once, before any synchronization runs
#[derive(Debug, Clone)]
pub struct TableBuilder {
    name: String,
    entries: Vec<NoteValue>,
    precision: u8,
}

impl TableBuilder {
    fn new(precision: u8) -> Self {
        Self {
            name: String::from("custom"),
            entries: Vec::new(),
            precision,
        }
    }

    /// Display name for this table (default: "custom")
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append a field; order of calls is the output order
    pub fn entry(mut self, id: impl Into<String>, ratio: NotesPerBeat) -> Self {
        self.entries.push(NoteValue {
            id: id.into(),
            ratio,
        });
        self
    }

    pub fn build(self) -> Result<NoteValueTable, TableError> {
        if self.precision > MAX_PRECISION {
            return Err(TableError::PrecisionTooLarge(self.precision));
        }

        if self.entries.is_empty() {
            return Err(TableError::Empty);
        }

        for (i, entry) in self.entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(TableError::EmptyId { index: i });
            }
            if !entry.ratio.is_positive() {
                return Err(TableError::NonPositiveRatio {
                    id: entry.id.clone(),
                });
            }
            if self.entries[..i].iter().any(|e| e.id == entry.id) {
                return Err(TableError::DuplicateId(entry.id.clone()));
            }
        }

        let entries = self
            .entries
            .into_iter()
            .map(|e| NoteValue {
                ratio: e.ratio.reduce(),
                ..e
            })
            .collect();

        Ok(NoteValueTable {
            name: self.name,
            entries,
            precision: self.precision,
        })
    }
}

/// Errors that can occur when building a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// No entries were added
    Empty,
    /// Entry at `index` has a blank identifier
    EmptyId { index: usize },
    /// The same identifier appears twice
    DuplicateId(String),
    /// Ratio is zero or has a zero denominator
    NonPositiveRatio { id: String },
    /// More decimal places than f64 can represent
    PrecisionTooLarge(u8),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::Empty => write!(f, "Table has no entries"),
            TableError::EmptyId { index } => {
                write!(f, "Table entry {} has an empty identifier", index)
            }
            TableError::DuplicateId(id) => write!(f, "Duplicate table entry '{}'", id),
            TableError::NonPositiveRatio { id } => {
                write!(f, "Table entry '{}' must have a strictly positive ratio", id)
            }
            TableError::PrecisionTooLarge(p) => write!(
                f,
                "Precision of {} decimal places exceeds the maximum of {}",
                p, MAX_PRECISION
            ),
        }
    }
}

impl std::error::Error for TableError {}
