//! Note model shared by producers and renderers.
//!
//! # Responsibility
//! - Define note identifiers and the opaque data payload type.
//!
//! # Invariants
//! - Identifiers compare by value; the registry joins notes and data on them.

pub mod note_code;
pub mod note_data;
