//! Media storage adapters.
//!
//! Both storages key content by `videoId-<id>/type-<TYPE>`, so each slot of
//! a video holds at most one resource and clearing a video removes them all.

mod local;
mod memory;

pub use local::LocalMediaStorage;
pub use memory::InMemoryMediaStorage;

use catalog_core::{
    application::ApplicationError,
    domain::{VideoId, VideoMediaType},
    error::CatalogResult,
};

/// Reject a resource sent to the wrong kind of slot.
fn ensure_slot(video_id: &VideoId, kind: VideoMediaType, audio_video: bool) -> CatalogResult<()> {
    if kind.is_audio_video() == audio_video {
        return Ok(());
    }
    let expected = if audio_video { "audio/video" } else { "image" };
    Err(ApplicationError::media_storage(
        video_id,
        format!("{kind} is not an {expected} slot"),
    )
    .into())
}
