//! Application layer for the catalog.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (one service per aggregate)
//! - **Integrity**: Reference checks against other aggregate stores
//! - **Ports**: Interface definitions (traits) for gateways and media storage
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod integrity;
pub mod ports;
pub mod services;

pub use services::{
    CastMemberService, CategoryService, CreateCastMember, CreateCategory, CreateGenre,
    CreateVideo, GenreService, MediaUploads, UpdateCastMember, UpdateCategory, UpdateGenre,
    UpdateMediaStatus, UpdateVideo, VideoService,
};

pub use ports::{
    CastMemberGateway, CategoryGateway, GenreGateway, MediaResourceGateway, VideoGateway,
};

pub use error::ApplicationError;
pub use integrity::check_references;
