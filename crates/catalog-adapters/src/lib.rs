//! Infrastructure adapters for the catalog.
//!
//! This crate implements the ports defined in `catalog_core::application::ports`.
//! It contains all I/O: aggregate stores and binary media storage.

pub mod gateway;
pub mod media;

// Re-export commonly used adapters
pub use gateway::{FileCatalog, InMemoryCatalog};
pub use media::{InMemoryMediaStorage, LocalMediaStorage};
