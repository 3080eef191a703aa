//! Storage module for uploaded brand logos
//!
//! Provides a directory-backed blob store that validates extensions,
//! generates collision-resistant filenames and serves files back under a
//! configured URL prefix.

mod local_store;

pub use local_store::LocalFileStore;
