// Purpose - boundary between the synchronizer and whatever displays the fields

#[cfg(feature = "serde")]
pub mod config;
pub mod fields;

pub use fields::FieldSet;

use crate::tempo::rounding::round_to_places;
use crate::tempo::sync::synchronize_event;
use crate::tempo::{Conversion, ConversionEvent, NoteValueTable, SyncError};

/// Something that shows one numeric field per table entry
pub trait Presenter {
    /// Write every synchronized value into its field
    fn apply_values(&mut self, conversion: &Conversion);

    /// Rebuild the fields for a different table
    fn show_table(&mut self, _table: &NoteValueTable) {}

    /// Overwrite a single field that was not typed by the user
    fn show_value(&mut self, _id: &str, _value: f64) {}
}

/// Drives a presenter from raw field input
pub struct TempoSync<P: Presenter> {
    table: NoteValueTable,
    presenter: P,
    last: Option<ConversionEvent>,
}

impl<P: Presenter> TempoSync<P> {
    pub fn new(table: NoteValueTable, mut presenter: P) -> Self {
        presenter.show_table(&table);
        Self {
            table,
            presenter,
            last: None,
        }
    }

    pub fn table(&self) -> &NoteValueTable {
        &self.table
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Most recent accepted edit
    pub fn last_edit(&self) -> Option<&ConversionEvent> {
        self.last.as_ref()
    }

    /// Handle text typed into field `id`.
    ///
    /// On error nothing is written to the presenter.
    pub fn on_input(&mut self, id: &str, raw: &str) -> Result<Conversion, InputError> {
        let value = match parse_bpm(raw) {
            Some(value) => value,
            None => {
                let err = InputError::NonNumeric {
                    id: id.to_string(),
                    text: raw.to_string(),
                };
                log::warn!("{}", err);
                return Err(err);
            }
        };

        self.apply(id, value)
    }

    /// Set field `id` to `value` from code (initial tempo, replay) and
    /// synchronize the rest
    pub fn seed(&mut self, id: &str, value: f64) -> Result<Conversion, InputError> {
        let conversion = self.apply(id, value)?;
        self.show_seed(id, value);
        Ok(conversion)
    }

    /// Switch presentation context; the last edit is replayed when its
    /// field exists in the new table
    pub fn set_table(&mut self, table: NoteValueTable) {
        log::info!("Switching to table '{}'", table.name());
        self.table = table;
        self.presenter.show_table(&self.table);

        let replay = self
            .last
            .take()
            .and_then(|last| self.table.event(&last.id, last.value));
        if let Some(event) = replay {
            let (id, value) = (event.id.clone(), event.value);
            self.apply_event(event);
            self.show_seed(&id, value);
        }
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    fn apply(&mut self, id: &str, value: f64) -> Result<Conversion, InputError> {
        let event = match self.table.event(id, value) {
            Some(event) => event,
            None => {
                let err = InputError::from(SyncError::UnknownKey(id.to_string()));
                log::warn!("{}", err);
                return Err(err);
            }
        };

        Ok(self.apply_event(event))
    }

    fn apply_event(&mut self, event: ConversionEvent) -> Conversion {
        let conversion = synchronize_event(&self.table, &event);
        self.presenter.apply_values(&conversion);
        self.last = Some(event);
        conversion
    }

    fn show_seed(&mut self, id: &str, value: f64) {
        let shown = round_to_places(value, self.table.precision());
        self.presenter.show_value(id, shown);
    }
}

/// Parse field text as a tempo. Empty or non-finite text is rejected.
pub fn parse_bpm(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Errors that can occur when handling field input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Field text is not a finite number
    NonNumeric { id: String, text: String },
    /// Field is not part of the current table
    UnknownKey(String),
}

impl From<SyncError> for InputError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::UnknownKey(id) => InputError::UnknownKey(id),
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::NonNumeric { id, text } => {
                write!(f, "Ignoring '{}' in {}: not a number", text, id)
            }
            InputError::UnknownKey(id) => write!(f, "Ignoring edit of unknown field '{}'", id),
        }
    }
}

impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tempo::presets;

    /// Records every call for inspection
    #[derive(Default)]
    struct Recorder {
        applied: Vec<Conversion>,
        tables: Vec<String>,
        shown: Vec<(String, f64)>,
    }

    impl Presenter for Recorder {
        fn apply_values(&mut self, conversion: &Conversion) {
            self.applied.push(conversion.clone());
        }

        fn show_table(&mut self, table: &NoteValueTable) {
            self.tables.push(table.name().to_string());
        }

        fn show_value(&mut self, id: &str, value: f64) {
            self.shown.push((id.to_string(), value));
        }
    }

    #[test]
    fn test_parse_bpm() {
        assert_eq!(parse_bpm("120"), Some(120.0));
        assert_eq!(parse_bpm(" 92.5 "), Some(92.5));
        assert_eq!(parse_bpm("-4"), Some(-4.0));
        assert_eq!(parse_bpm(""), None);
        assert_eq!(parse_bpm("abc"), None);
        assert_eq!(parse_bpm("inf"), None);
        assert_eq!(parse_bpm("NaN"), None);
    }

    #[test]
    fn test_on_input_applies_conversion() {
        let mut sync = TempoSync::new(presets::base(), Recorder::default());
        let conversion = sync.on_input("quarter-note", "120").unwrap();

        assert_eq!(conversion.get("half-note"), Some(60.0));
        assert_eq!(sync.presenter().applied.len(), 1);
        assert_eq!(sync.presenter().tables, ["base"]);
        assert_eq!(sync.last_edit().map(|e| e.id.as_str()), Some("quarter-note"));
    }

    #[test]
    fn test_bad_input_writes_nothing() {
        let mut sync = TempoSync::new(presets::base(), Recorder::default());

        let err = sync.on_input("quarter-note", "12a").unwrap_err();
        assert!(matches!(err, InputError::NonNumeric { .. }));

        let err = sync.on_input("whole-note", "60").unwrap_err();
        assert_eq!(err, InputError::UnknownKey("whole-note".into()));

        assert!(sync.presenter().applied.is_empty());
        assert!(sync.last_edit().is_none());
    }

    #[test]
    fn test_set_table_replays_shared_field() {
        let mut sync = TempoSync::new(presets::base(), Recorder::default());
        sync.on_input("quarter-note", "100").unwrap();

        sync.set_table(presets::subdivision());
        let presenter = sync.presenter();
        assert_eq!(presenter.tables, ["base", "subdivision"]);
        assert_eq!(presenter.shown, [("quarter-note".to_string(), 100.0)]);

        let replayed = presenter.applied.last().unwrap();
        assert_eq!(replayed.get("eighth-note-triplet"), Some(33.333));
    }

    #[test]
    fn test_set_table_drops_missing_field() {
        let mut sync = TempoSync::new(presets::base(), Recorder::default());
        sync.on_input("half-note", "60").unwrap();

        sync.set_table(presets::subdivision());
        assert_eq!(sync.presenter().applied.len(), 1);
        assert!(sync.presenter().shown.is_empty());
        assert!(sync.last_edit().is_none());
    }
}
