//! In-memory note registry.
//!
//! # Responsibility
//! - Collect note messages per identifier while content is being produced.
//! - Hold optional structured data per identifier for the note renderer.
//!
//! # Invariants
//! - Identifier order is first-use order; `remove` keeps the order of the rest.
//! - Messages for one identifier are append-only until the note is removed.
//! - Every operation is total: absence degrades to empty values or `None`.
//! - Auto-assigned codes are `len() + 1`, so a code freed by `remove` can be
//!   handed out again.

use crate::model::note_code::{IntoNoteCode, NoteCode};
use crate::model::note_data::{merge_into, NoteData};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Registry of notes and their data, keyed by `NoteCode`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteRegistry {
    notes: IndexMap<NoteCode, Vec<String>>,
    note_data: IndexMap<NoteCode, NoteData>,
}

/// Borrowed view of one note, in registry order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEntry<'a> {
    pub code: &'a NoteCode,
    pub messages: &'a [String],
    pub data: Option<&'a NoteData>,
}

/// Owned, serializable copy of a registry.
///
/// Data recorded for codes that have no messages is not included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteSnapshot {
    pub notes: Vec<SnapshotNote>,
}

/// One note inside a `NoteSnapshot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotNote {
    pub code: NoteCode,
    pub messages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<NoteData>,
}

impl NoteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notes (identifiers with messages).
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns whether any note is stored.
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }

    /// Returns whether `code` has a notes entry.
    pub fn contains(&self, code: impl IntoNoteCode) -> bool {
        code.into_note_code()
            .is_some_and(|code| self.notes.contains_key(&code))
    }

    /// All note codes in first-use order.
    pub fn get_codes(&self) -> Vec<NoteCode> {
        self.notes.keys().cloned().collect()
    }

    /// First code in first-use order, `None` when there are no notes.
    pub fn get_first_code(&self) -> Option<NoteCode> {
        self.notes.keys().next().cloned()
    }

    /// Last code in first-use order, `None` when there are no notes.
    pub fn get_last_code(&self) -> Option<NoteCode> {
        self.notes.keys().next_back().cloned()
    }

    /// Alias of [`NoteRegistry::get_first_code`].
    pub fn get_code(&self) -> Option<NoteCode> {
        self.get_first_code()
    }

    /// Messages for `code`, or every message in registry order when omitted.
    ///
    /// Unknown codes yield an empty list.
    pub fn get_messages(&self, code: impl IntoNoteCode) -> Vec<String> {
        match code.into_note_code() {
            Some(code) => self.notes.get(&code).cloned().unwrap_or_default(),
            None => self.notes.values().flatten().cloned().collect(),
        }
    }

    /// First message of `code` (or of the first note when omitted).
    ///
    /// Returns an empty string when there is nothing to return.
    pub fn get_message(&self, code: impl IntoNoteCode) -> String {
        self.resolve(code)
            .and_then(|code| self.notes.get(&code))
            .and_then(|messages| messages.first())
            .cloned()
            .unwrap_or_default()
    }

    /// Data recorded for `code` (or for the first note when omitted).
    pub fn get_data(&self, code: impl IntoNoteCode) -> Option<&NoteData> {
        let code = self.resolve(code)?;
        self.note_data.get(&code)
    }

    /// Adds a message, creating the note when the code is new.
    ///
    /// An omitted or empty code is auto-assigned as `len() + 1`. Returns the
    /// code the message was stored under.
    pub fn add(&mut self, message: impl Into<String>, code: impl IntoNoteCode) -> NoteCode {
        self.add_with_data(message, code, NoteData::new())
    }

    /// Like [`NoteRegistry::add`], additionally replacing the note's data
    /// when `data` is non-empty.
    pub fn add_with_data(
        &mut self,
        message: impl Into<String>,
        code: impl IntoNoteCode,
        data: NoteData,
    ) -> NoteCode {
        let code = code
            .into_note_code()
            .unwrap_or_else(|| NoteCode::Number(self.notes.len() as u64 + 1));

        let messages = self.notes.entry(code.clone()).or_default();
        messages.push(message.into());
        debug!(
            "event=note_add module=registry code={} message_count={} with_data={}",
            code,
            messages.len(),
            !data.is_empty()
        );

        if !data.is_empty() {
            self.note_data.insert(code.clone(), data);
        }

        code
    }

    /// Replaces the data for `code` (or for the first note when omitted).
    ///
    /// Without a code and without notes there is nothing to attach to, so the
    /// call is dropped.
    pub fn add_data(&mut self, data: NoteData, code: impl IntoNoteCode) {
        let Some(code) = self.resolve(code) else {
            warn!("event=note_data_set module=registry status=skipped reason=no_code");
            return;
        };

        debug!(
            "event=note_data_set module=registry code={} keys={}",
            code,
            data.len()
        );
        self.note_data.insert(code, data);
    }

    /// Shallow-merges `data` into the data for `code` (or the first note).
    ///
    /// Incoming keys overwrite existing ones; when no data exists yet the
    /// mapping is stored as given.
    pub fn append_data(&mut self, data: NoteData, code: impl IntoNoteCode) {
        let Some(code) = self.resolve(code) else {
            warn!("event=note_data_merge module=registry status=skipped reason=no_code");
            return;
        };

        let incoming_keys = data.len();
        let merged = match self.note_data.get_mut(&code) {
            Some(existing) => {
                merge_into(existing, data);
                existing.len()
            }
            None => {
                self.note_data.insert(code.clone(), data);
                incoming_keys
            }
        };
        debug!(
            "event=note_data_merge module=registry code={} incoming_keys={} keys={}",
            code, incoming_keys, merged
        );
    }

    /// Removes the note and its data. Unknown codes are ignored.
    pub fn remove(&mut self, code: impl IntoNoteCode) {
        let Some(code) = code.into_note_code() else {
            return;
        };

        let had_note = self.notes.shift_remove(&code).is_some();
        let had_data = self.note_data.shift_remove(&code).is_some();
        if had_note || had_data {
            debug!(
                "event=note_remove module=registry code={} had_note={} had_data={}",
                code, had_note, had_data
            );
        }
    }

    /// Drops every note and all data.
    pub fn clear(&mut self) {
        debug!(
            "event=registry_clear module=registry notes={} data_entries={}",
            self.notes.len(),
            self.note_data.len()
        );
        self.notes.clear();
        self.note_data.clear();
    }

    /// Iterates notes in registry order.
    pub fn entries(&self) -> impl Iterator<Item = NoteEntry<'_>> + '_ {
        self.notes.iter().map(|(code, messages)| NoteEntry {
            code,
            messages: messages.as_slice(),
            data: self.note_data.get(code),
        })
    }

    /// Owned copy of every note with its data.
    pub fn snapshot(&self) -> NoteSnapshot {
        NoteSnapshot {
            notes: self
                .entries()
                .map(|entry| SnapshotNote {
                    code: entry.code.clone(),
                    messages: entry.messages.to_vec(),
                    data: entry.data.cloned(),
                })
                .collect(),
        }
    }

    fn resolve(&self, code: impl IntoNoteCode) -> Option<NoteCode> {
        code.into_note_code().or_else(|| self.get_code())
    }
}

impl From<NoteSnapshot> for NoteRegistry {
    fn from(snapshot: NoteSnapshot) -> Self {
        let mut registry = Self::new();
        for note in snapshot.notes {
            let Some(code) = note.code.into_note_code() else {
                continue;
            };
            registry
                .notes
                .entry(code.clone())
                .or_default()
                .extend(note.messages);
            if let Some(data) = note.data {
                registry.note_data.insert(code, data);
            }
        }
        registry
    }
}
