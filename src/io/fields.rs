use super::Presenter;
use crate::tempo::rounding::display_value;
use crate::tempo::{Conversion, NoteValueTable};

/// One displayed input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: String,
    /// Text currently shown (what the user typed, or the last synchronized value)
    pub text: String,
}

/// In-memory set of numeric fields, one per table entry, in table order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_table(table: &NoteValueTable) -> Self {
        let mut fields = Self::new();
        fields.show_table(table);
        fields
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.field(id).map(|f| f.text.as_str())
    }

    /// Replace the text of a field as the user types; returns false if no such field
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.id == id) {
            Some(field) => {
                field.text = text.into();
                true
            }
            None => false,
        }
    }

    fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }
}

impl Presenter for FieldSet {
    fn apply_values(&mut self, conversion: &Conversion) {
        for (id, value) in conversion.iter() {
            self.set_text(id, display_value(value));
        }
    }

    fn show_table(&mut self, table: &NoteValueTable) {
        self.fields = table
            .ids()
            .map(|id| Field {
                id: id.to_string(),
                text: String::new(),
            })
            .collect();
    }

    fn show_value(&mut self, id: &str, value: f64) {
        self.set_text(id, display_value(value));
    }
}
