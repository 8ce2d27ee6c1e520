//! # hdg Domain Layer
//!
//! Core types for turning a flat document into a hierarchy of chunks and a
//! typed structural graph. This crate has no I/O and no async code; it owns
//! the entities, the value objects, the read-only graph navigator and the
//! error type shared by every other layer.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Chunks, elements, edges and the document aggregate |
//! | [`value_objects`] | Heading matches, embeddings, processing options |
//! | [`navigation`] | Root/child/parent lookups and invariant checks |
//! | [`constants`] | Domain constants |
//! | [`error`] | Domain error and result types |

pub mod constants;
pub mod entities;
pub mod error;
pub mod navigation;
pub mod value_objects;

pub use entities::*;
pub use error::{Error, Result};
pub use navigation::GraphNavigator;
pub use value_objects::*;
