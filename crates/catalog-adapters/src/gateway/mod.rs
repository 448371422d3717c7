//! Aggregate gateways.
//!
//! Both stores implement all four aggregate gateways on one type so that a
//! single instance can be shared by every service.

mod file;
mod memory;
mod record;
mod table;

pub use file::FileCatalog;
pub use memory::InMemoryCatalog;
