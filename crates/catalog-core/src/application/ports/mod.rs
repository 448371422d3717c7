//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `catalog-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `CategoryGateway`, `GenreGateway`, `CastMemberGateway`, `VideoGateway`:
//!     aggregate persistence and existence checks
//!   - `MediaResourceGateway`: binary media storage
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    CastMemberGateway, CategoryGateway, GenreGateway, MediaResourceGateway, VideoGateway,
};

#[cfg(test)]
pub use output::{
    MockCastMemberGateway, MockCategoryGateway, MockGenreGateway, MockMediaResourceGateway,
    MockVideoGateway,
};
