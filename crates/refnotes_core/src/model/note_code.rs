//! Note identifier model.
//!
//! # Responsibility
//! - Represent caller-supplied and auto-assigned note identifiers.
//! - Define which identifiers count as "empty" (treated as omitted).
//!
//! # Invariants
//! - Auto-assigned identifiers are always `NoteCode::Number` and positive.
//! - `Text("")` and `Number(0)` are empty and never stored by `add`.
//! - Canonical decimal text (`"2"`, `"0"`) is always held as `Number`, so a
//!   code given as text or as a number names the same note.

use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Identifier for one note in a registry.
///
/// Serialized untagged, so JSON sees either a bare string or a bare number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum NoteCode {
    /// Numeric identifier, used for auto-assigned codes.
    Number(u64),
    /// Caller-chosen token.
    Text(String),
}

impl NoteCode {
    /// Returns whether this code should be treated as omitted.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Number(value) => *value == 0,
            Self::Text(value) => value.is_empty(),
        }
    }

    /// Re-classifies a hand-built `Text` variant, e.g. `Text("2")`.
    fn normalized(self) -> Self {
        match self {
            Self::Text(value) => Self::from_text(value),
            number => number,
        }
    }

    /// Classifies text input: canonical decimals become `Number`.
    ///
    /// Canonical means no sign, no leading zeros (except `"0"` itself) and a
    /// value that fits in `u64`; `"02"` or `"-1"` stay `Text`.
    fn from_text(value: impl AsRef<str> + Into<String>) -> Self {
        let text = value.as_ref();
        let canonical = text == "0"
            || (!text.is_empty()
                && !text.starts_with('0')
                && text.bytes().all(|b| b.is_ascii_digit()));
        if canonical {
            if let Ok(number) = text.parse::<u64>() {
                return Self::Number(number);
            }
        }
        Self::Text(value.into())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNoteCode {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for NoteCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawNoteCode::deserialize(deserializer)? {
            RawNoteCode::Number(value) => Self::Number(value),
            RawNoteCode::Text(value) => Self::from_text(value),
        })
    }
}

impl Display for NoteCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for NoteCode {
    fn from(value: &str) -> Self {
        Self::from_text(value)
    }
}

impl From<String> for NoteCode {
    fn from(value: String) -> Self {
        Self::from_text(value)
    }
}

impl From<&String> for NoteCode {
    fn from(value: &String) -> Self {
        Self::from_text(value.as_str())
    }
}

impl From<u64> for NoteCode {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for NoteCode {
    fn from(value: u32) -> Self {
        Self::Number(u64::from(value))
    }
}

impl From<usize> for NoteCode {
    fn from(value: usize) -> Self {
        Self::Number(value as u64)
    }
}

impl FromStr for NoteCode {
    type Err = Infallible;

    /// Same classification as `From<&str>`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_text(value))
    }
}

/// Argument accepted wherever an operation takes an optional note code.
///
/// Empty codes (see [`NoteCode::is_empty`]) resolve to `None`, so callers can
/// pass `""`, `"0"`, `0` or `None` interchangeably to mean "omitted".
pub trait IntoNoteCode {
    fn into_note_code(self) -> Option<NoteCode>;
}

impl IntoNoteCode for Option<NoteCode> {
    fn into_note_code(self) -> Option<NoteCode> {
        self.map(NoteCode::normalized)
            .filter(|code| !code.is_empty())
    }
}

impl IntoNoteCode for NoteCode {
    fn into_note_code(self) -> Option<NoteCode> {
        Some(self).into_note_code()
    }
}

impl IntoNoteCode for &NoteCode {
    fn into_note_code(self) -> Option<NoteCode> {
        Some(self.clone()).into_note_code()
    }
}

macro_rules! impl_into_note_code {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoNoteCode for $ty {
                fn into_note_code(self) -> Option<NoteCode> {
                    Some(NoteCode::from(self)).into_note_code()
                }
            }
        )*
    };
}

impl_into_note_code!(&str, String, &String, u64, u32, usize);
