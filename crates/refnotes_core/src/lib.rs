//! Footnote collection core for RefNotes.
//! Producers register notes while rendering content; renderers query them afterwards.

pub mod logging;
pub mod model;
pub mod registry;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::note_code::{IntoNoteCode, NoteCode};
pub use model::note_data::{note_data, note_data_from_json, NoteData};
pub use registry::note_registry::{NoteEntry, NoteRegistry, NoteSnapshot, SnapshotNote};
pub use registry::shared::SharedNoteRegistry;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
