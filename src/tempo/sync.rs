//! Tempo synchronization: one edited field drives every other field.
//!
//! ```text
//! pulse   = edited_bpm * edited_ratio      (notes per minute)
//! bpm[k]  = round(pulse / ratio[k], precision)
//! ```

use super::ratio::NotesPerBeat;
use super::rounding::round_to_places;
use super::table::NoteValueTable;

/// A single user edit, alive for one synchronization pass
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionEvent {
    /// Field that was edited
    pub id: String,
    /// Its ratio in the table
    pub ratio: NotesPerBeat,
    /// New BPM typed into the field
    pub value: f64,
}

impl ConversionEvent {
    /// Notes per minute shared by every field
    pub fn pulse(&self) -> f64 {
        self.value * self.ratio.as_f64()
    }
}

/// Synchronized values for every field except the edited one, in table order
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    edited: String,
    pulse: f64,
    values: Vec<(String, f64)>,
}

impl Conversion {
    /// Identifier of the field that drove this pass
    pub fn edited(&self) -> &str {
        &self.edited
    }

    pub fn pulse(&self) -> f64 {
        self.pulse
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Recompute every sibling of `edited_id` from its new value.
///
/// Zero and negative values are accepted and carried through the arithmetic.
pub fn synchronize(
    table: &NoteValueTable,
    edited_id: &str,
    edited_value: f64,
) -> Result<Conversion, SyncError> {
    let event = table
        .event(edited_id, edited_value)
        .ok_or_else(|| SyncError::UnknownKey(edited_id.to_string()))?;

    Ok(synchronize_event(table, &event))
}

/// Same as [`synchronize`] for an event already resolved against `table`
pub fn synchronize_event(table: &NoteValueTable, event: &ConversionEvent) -> Conversion {
    let pulse = event.pulse();
    let precision = table.precision();

    let values: Vec<(String, f64)> = table
        .entries()
        .iter()
        .filter(|entry| entry.id != event.id)
        .map(|entry| {
            let bpm = round_to_places(pulse / entry.ratio.as_f64(), precision);
            (entry.id.clone(), bpm)
        })
        .collect();

    log::debug!(
        "{} = {} on '{}' -> pulse {} ({} fields)",
        event.id,
        event.value,
        table.name(),
        pulse,
        values.len()
    );

    Conversion {
        edited: event.id.clone(),
        pulse,
        values,
    }
}

/// Errors that can occur during synchronization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The edited field is not part of the table
    UnknownKey(String),
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncError::UnknownKey(id) => write!(f, "Unknown note value '{}'", id),
        }
    }
}

impl std::error::Error for SyncError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tempo::presets;

    #[test]
    fn test_quarter_note_drives_base_table() {
        let table = presets::base();
        let out = synchronize(&table, "quarter-note", 120.0).unwrap();

        assert_eq!(out.edited(), "quarter-note");
        assert_eq!(out.pulse(), 120.0);
        let values: Vec<(&str, f64)> = out.iter().collect();
        assert_eq!(
            values,
            [
                ("dotted-half-note", 40.0),
                ("half-note", 60.0),
                ("dotted-quarter-note", 80.0),
                ("dotted-eighth-note", 160.0),
                ("eighth-note", 240.0),
            ]
        );
    }

    #[test]
    fn test_eighth_note_inverse() {
        let table = presets::base();
        let out = synchronize(&table, "eighth-note", 240.0).unwrap();
        assert_eq!(out.get("quarter-note"), Some(120.0));
        assert_eq!(out.get("eighth-note"), None);
    }

    #[test]
    fn test_subdivision_three_places() {
        let table = presets::subdivision();
        let out = synchronize(&table, "quarter-note", 100.0).unwrap();
        assert_eq!(out.get("eighth-note-triplet"), Some(33.333));
        assert_eq!(out.get("dotted-eighth-note"), Some(75.0));
        assert_eq!(out.get("quarter-note-5:3"), Some(60.0));
        assert_eq!(out.get("sixteenth-note-7:6"), Some(21.429));
    }

    #[test]
    fn test_mixed_ratio_rounding_edge() {
        // 0.7 * (1 + 2/3) / (2 + 2/3) lands just below 0.4375
        let table = presets::subdivision();
        let out = synchronize(&table, "quarter-note-5:3", 0.7).unwrap();
        assert_eq!(out.get("eighth-note-4:3"), Some(0.437));
    }

    #[test]
    fn test_unknown_key() {
        let table = presets::base();
        let result = synchronize(&table, "whole-note", 60.0);
        assert_eq!(result, Err(SyncError::UnknownKey("whole-note".into())));
    }

    #[test]
    fn test_zero_and_negative_values_propagate() {
        let table = presets::base();

        let out = synchronize(&table, "quarter-note", 0.0).unwrap();
        assert!(out.iter().all(|(_, v)| v == 0.0));

        let out = synchronize(&table, "quarter-note", -120.0).unwrap();
        assert_eq!(out.get("half-note"), Some(-60.0));
        assert_eq!(out.get("eighth-note"), Some(-240.0));
    }

    #[test]
    fn test_event_pulse() {
        let event = ConversionEvent {
            id: "dotted-quarter-note".into(),
            ratio: NotesPerBeat::new(3, 2),
            value: 80.0,
        };
        assert_eq!(event.pulse(), 120.0);
    }

    #[test]
    fn test_single_entry_table_yields_nothing() {
        let table = NoteValueTable::builder(2)
            .entry("quarter-note", NotesPerBeat::ONE)
            .build()
            .unwrap();
        let out = synchronize(&table, "quarter-note", 90.0).unwrap();
        assert!(out.is_empty());
    }
}
