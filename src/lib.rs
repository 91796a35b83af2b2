pub mod io; // Presenter adapter and table configuration
pub mod tempo; // Note-value tables and tempo synchronization

pub use io::{FieldSet, InputError, Presenter, TempoSync};
pub use tempo::{synchronize, Conversion, NoteValueTable, NotesPerBeat, SyncError, TableVariant};
