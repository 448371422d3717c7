// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for the catalog.
//!
//! Pure business rules: aggregates, their validators and the notification
//! they report into. Nothing here performs I/O or logs; lookups against
//! other aggregates go through ports in the application layer.
//!
//! ## Invariants
//!
//! - **Only valid aggregates exist**: every constructor and mutator runs its
//!   validator and returns `Err(DomainError::Notification)` otherwise
//! - **Failed mutations are atomic**: the aggregate keeps its previous state
//! - **Errors accumulate**: validators never stop at the first failure
pub mod common;
pub mod entities;
pub mod error;
pub mod validation;
pub mod value_objects;

pub use common::{CastMemberId, CategoryId, GenreId, Identifier, VideoId, unique_ids};
pub use entities::{
    cast_member::{CastMember, CastMemberValidator},
    category::{Category, CategoryValidator},
    genre::{Genre, GenreValidator},
    media::{AudioVideoMedia, ImageMedia, Resource, VideoResource, media_folder, media_location},
    video::{Video, VideoDetails, VideoReferences, VideoState, VideoValidator},
};
pub use error::{DomainError, ErrorCategory};
pub use validation::{Notification, ValidationError, Validator};
pub use value_objects::{AggregateKind, CastMemberType, MediaStatus, Rating, VideoMediaType};
