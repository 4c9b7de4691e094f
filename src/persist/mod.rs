//! Save documents.
//!
//! Converts `GameState` to and from the external JSON schema. No file I/O
//! happens here; callers own reading and writing the text.

pub mod document;

pub use document::StateDocument;
