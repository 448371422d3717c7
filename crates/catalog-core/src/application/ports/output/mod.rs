//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `catalog-adapters` crate provides implementations.
//!
//! Every call is synchronous and may block; implementations must be safe to
//! share between threads.

use crate::domain::{
    AudioVideoMedia, CastMember, CastMemberId, Category, CategoryId, Genre, GenreId, ImageMedia,
    Resource, Video, VideoId, VideoMediaType, VideoResource,
};
use crate::error::CatalogResult;

/// Port for category persistence.
///
/// Implemented by:
/// - `catalog_adapters::gateway::InMemoryCatalog` (testing, embedding)
/// - `catalog_adapters::gateway::FileCatalog` (JSON files)
#[cfg_attr(test, mockall::automock)]
pub trait CategoryGateway: Send + Sync {
    /// Insert a new category and return it as stored.
    fn create(&self, category: Category) -> CatalogResult<Category>;

    /// Replace a stored category.
    fn update(&self, category: Category) -> CatalogResult<Category>;

    fn find_by_id(&self, id: &CategoryId) -> CatalogResult<Option<Category>>;

    /// Remove a category. Removing an unknown id is not an error.
    fn delete_by_id(&self, id: &CategoryId) -> CatalogResult<()>;

    /// Return the subset of `ids` that exist.
    fn exists_by_ids(&self, ids: &[CategoryId]) -> CatalogResult<Vec<CategoryId>>;

    /// All categories, newest first.
    fn list(&self) -> CatalogResult<Vec<Category>>;
}

/// Port for genre persistence.
#[cfg_attr(test, mockall::automock)]
pub trait GenreGateway: Send + Sync {
    fn create(&self, genre: Genre) -> CatalogResult<Genre>;
    fn update(&self, genre: Genre) -> CatalogResult<Genre>;
    fn find_by_id(&self, id: &GenreId) -> CatalogResult<Option<Genre>>;
    fn delete_by_id(&self, id: &GenreId) -> CatalogResult<()>;
    fn exists_by_ids(&self, ids: &[GenreId]) -> CatalogResult<Vec<GenreId>>;
    fn list(&self) -> CatalogResult<Vec<Genre>>;
}

/// Port for cast member persistence.
#[cfg_attr(test, mockall::automock)]
pub trait CastMemberGateway: Send + Sync {
    fn create(&self, member: CastMember) -> CatalogResult<CastMember>;
    fn update(&self, member: CastMember) -> CatalogResult<CastMember>;
    fn find_by_id(&self, id: &CastMemberId) -> CatalogResult<Option<CastMember>>;
    fn delete_by_id(&self, id: &CastMemberId) -> CatalogResult<()>;
    fn exists_by_ids(&self, ids: &[CastMemberId]) -> CatalogResult<Vec<CastMemberId>>;
    fn list(&self) -> CatalogResult<Vec<CastMember>>;
}

/// Port for video persistence.
#[cfg_attr(test, mockall::automock)]
pub trait VideoGateway: Send + Sync {
    fn create(&self, video: Video) -> CatalogResult<Video>;
    fn update(&self, video: Video) -> CatalogResult<Video>;
    fn find_by_id(&self, id: &VideoId) -> CatalogResult<Option<Video>>;
    fn delete_by_id(&self, id: &VideoId) -> CatalogResult<()>;
    fn list(&self) -> CatalogResult<Vec<Video>>;
}

/// Port for binary media storage.
///
/// Implemented by:
/// - `catalog_adapters::media::InMemoryMediaStorage` (testing)
/// - `catalog_adapters::media::LocalMediaStorage` (files under a media root)
///
/// Stored content lives under `videoId-<id>/type-<TYPE>`, so clearing a
/// video removes every slot at once.
#[cfg_attr(test, mockall::automock)]
pub trait MediaResourceGateway: Send + Sync {
    /// Store a video or trailer resource and describe it.
    fn store_audio_video(
        &self,
        video_id: &VideoId,
        resource: VideoResource,
    ) -> CatalogResult<AudioVideoMedia>;

    /// Store a banner, thumbnail or thumbnail-half resource and describe it.
    fn store_image(&self, video_id: &VideoId, resource: VideoResource)
    -> CatalogResult<ImageMedia>;

    /// Read back the stored content of one slot.
    fn get_resource(
        &self,
        video_id: &VideoId,
        kind: VideoMediaType,
    ) -> CatalogResult<Option<Resource>>;

    /// Remove everything stored for a video.
    fn clear_resources(&self, video_id: &VideoId) -> CatalogResult<()>;
}
