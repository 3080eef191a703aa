//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for systems outside the application core, such as the
//! file system backed upload store.

pub mod storage;
