pub mod presets;
pub mod ratio;
pub mod rounding;
pub mod sync;
pub mod table;

pub use presets::TableVariant;
pub use ratio::NotesPerBeat;
pub use sync::{synchronize, Conversion, ConversionEvent, SyncError};
pub use table::{NoteValue, NoteValueTable, TableBuilder, TableError};
