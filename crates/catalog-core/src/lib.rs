//! Catalog Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers of the video catalog administration
//! backend: self-validating aggregates, the notification they accumulate
//! errors into, referential-integrity checks across aggregate stores and the
//! media attachment saga used when a video is created.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           catalog-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (CategoryService, ..., VideoService)   │
//! │   integrity checks, media saga          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Category/Genre/CastMember/Video       │
//! │   gateways, MediaResourceGateway)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    catalog-adapters (Infrastructure)    │
//! │ (InMemoryCatalog, FileCatalog, media)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Category, Genre, CastMember, Video,   │
//! │   Notification, validators)             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_core::prelude::*;
//!
//! let service = CategoryService::new(categories);
//! let id = service.create(CreateCategory {
//!     name: "Movies".into(),
//!     description: None,
//!     active: true,
//! })?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CastMemberService, CategoryService, CreateCastMember, CreateCategory, CreateGenre,
        CreateVideo, GenreService, MediaUploads, UpdateCastMember, UpdateCategory, UpdateGenre,
        UpdateMediaStatus, UpdateVideo, VideoService,
        ports::{
            CastMemberGateway, CategoryGateway, GenreGateway, MediaResourceGateway, VideoGateway,
        },
    };
    pub use crate::domain::{
        AggregateKind, AudioVideoMedia, CastMember, CastMemberId, CastMemberType, Category,
        CategoryId, Genre, GenreId, ImageMedia, MediaStatus, Notification, Rating, Resource,
        ValidationError, Video, VideoDetails, VideoId, VideoMediaType, VideoReferences,
        VideoResource,
    };
    pub use crate::error::{CatalogError, CatalogResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
