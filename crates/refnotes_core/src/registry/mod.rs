//! Note collection and the shared handle around it.
//!
//! # Responsibility
//! - Accumulate note messages and data while content is produced.
//! - Serve the query side used to render the collected notes.
//!
//! # Invariants
//! - No registry operation fails; missing notes degrade to empty values.
//! - Registries are explicit instances, never process-global state.

pub mod note_registry;
pub mod shared;
