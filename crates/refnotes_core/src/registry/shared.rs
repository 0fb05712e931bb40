//! Lock-guarded registry handle for collaborators on different threads.
//!
//! One mutex guards both mappings, so a `with`/`with_mut` closure always
//! observes a consistent registry.

use crate::model::note_code::{IntoNoteCode, NoteCode};
use crate::model::note_data::NoteData;
use crate::registry::note_registry::{NoteRegistry, NoteSnapshot};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle; clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct SharedNoteRegistry {
    inner: Arc<Mutex<NoteRegistry>>,
}

impl SharedNoteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a read sequence under one lock acquisition.
    pub fn with<T>(&self, f: impl FnOnce(&NoteRegistry) -> T) -> T {
        f(&self.inner.lock())
    }

    /// Runs a mutation sequence under one lock acquisition.
    pub fn with_mut<T>(&self, f: impl FnOnce(&mut NoteRegistry) -> T) -> T {
        f(&mut self.inner.lock())
    }

    pub fn has_notes(&self) -> bool {
        self.with(NoteRegistry::has_notes)
    }

    pub fn get_codes(&self) -> Vec<NoteCode> {
        self.with(NoteRegistry::get_codes)
    }

    pub fn get_messages(&self, code: impl IntoNoteCode) -> Vec<String> {
        self.with(|registry| registry.get_messages(code))
    }

    pub fn get_message(&self, code: impl IntoNoteCode) -> String {
        self.with(|registry| registry.get_message(code))
    }

    /// Owned copy of the data, since the lock is released on return.
    pub fn get_data(&self, code: impl IntoNoteCode) -> Option<NoteData> {
        self.with(|registry| registry.get_data(code).cloned())
    }

    pub fn add(&self, message: impl Into<String>, code: impl IntoNoteCode) -> NoteCode {
        self.with_mut(|registry| registry.add(message, code))
    }

    pub fn add_with_data(
        &self,
        message: impl Into<String>,
        code: impl IntoNoteCode,
        data: NoteData,
    ) -> NoteCode {
        self.with_mut(|registry| registry.add_with_data(message, code, data))
    }

    pub fn add_data(&self, data: NoteData, code: impl IntoNoteCode) {
        self.with_mut(|registry| registry.add_data(data, code));
    }

    pub fn append_data(&self, data: NoteData, code: impl IntoNoteCode) {
        self.with_mut(|registry| registry.append_data(data, code));
    }

    pub fn remove(&self, code: impl IntoNoteCode) {
        self.with_mut(|registry| registry.remove(code));
    }

    pub fn clear(&self) {
        self.with_mut(NoteRegistry::clear);
    }

    pub fn snapshot(&self) -> NoteSnapshot {
        self.with(NoteRegistry::snapshot)
    }
}

impl From<NoteRegistry> for SharedNoteRegistry {
    fn from(registry: NoteRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }
}
