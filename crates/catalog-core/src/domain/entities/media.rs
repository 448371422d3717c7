//! Media descriptors and upload payloads.
//!
//! A [`Resource`] is what a client uploads; it is never stored as such. The
//! media gateway turns it into an [`AudioVideoMedia`] or [`ImageMedia`]
//! descriptor, which is what a [`Video`](super::video::Video) keeps.

use sha2::{Digest, Sha256};

use crate::domain::{
    common::VideoId,
    value_objects::{MediaStatus, VideoMediaType},
};

/// Storage key of a video's media slot: `videoId-<id>/type-<TYPE>`.
pub fn media_location(video_id: &VideoId, kind: VideoMediaType) -> String {
    format!("videoId-{video_id}/type-{kind}")
}

/// Storage prefix shared by every slot of a video.
pub fn media_folder(video_id: &VideoId) -> String {
    format!("videoId-{video_id}")
}

// ── Descriptors ───────────────────────────────────────────────────────────────

/// Encoded media slot (video or trailer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioVideoMedia {
    checksum: String,
    name: String,
    raw_location: String,
    encoded_location: String,
    status: MediaStatus,
}

impl AudioVideoMedia {
    /// A freshly stored, not yet encoded media.
    pub fn new(
        checksum: impl Into<String>,
        name: impl Into<String>,
        raw_location: impl Into<String>,
    ) -> Self {
        Self {
            checksum: checksum.into(),
            name: name.into(),
            raw_location: raw_location.into(),
            encoded_location: String::new(),
            status: MediaStatus::Pending,
        }
    }

    /// Rebuild a descriptor from stored values.
    pub fn with(
        checksum: impl Into<String>,
        name: impl Into<String>,
        raw_location: impl Into<String>,
        encoded_location: impl Into<String>,
        status: MediaStatus,
    ) -> Self {
        Self {
            checksum: checksum.into(),
            name: name.into(),
            raw_location: raw_location.into(),
            encoded_location: encoded_location.into(),
            status,
        }
    }

    /// Same media, now being encoded.
    pub fn processing(&self) -> Self {
        Self {
            status: MediaStatus::Processing,
            ..self.clone()
        }
    }

    /// Same media, encoded at `encoded_location`.
    pub fn completed(&self, encoded_location: impl Into<String>) -> Self {
        Self {
            encoded_location: encoded_location.into(),
            status: MediaStatus::Completed,
            ..self.clone()
        }
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn raw_location(&self) -> &str {
        &self.raw_location
    }
    pub fn encoded_location(&self) -> &str {
        &self.encoded_location
    }
    pub const fn status(&self) -> MediaStatus {
        self.status
    }
}

/// Image slot (banner, thumbnail, thumbnail-half).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMedia {
    checksum: String,
    name: String,
    location: String,
}

impl ImageMedia {
    pub fn new(
        checksum: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            checksum: checksum.into(),
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn location(&self) -> &str {
        &self.location
    }
}

// ── Upload payloads ───────────────────────────────────────────────────────────

/// Raw uploaded content.
#[derive(Clone, PartialEq, Eq)]
pub struct Resource {
    checksum: String,
    content: Vec<u8>,
    content_type: String,
    name: String,
}

impl Resource {
    /// Wrap uploaded bytes, computing their SHA-256 checksum.
    pub fn new(content: Vec<u8>, content_type: impl Into<String>, name: impl Into<String>) -> Self {
        let checksum = format!("{:x}", Sha256::digest(&content));
        Self {
            checksum,
            content,
            content_type: content_type.into(),
            name: name.into(),
        }
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }
    pub fn content(&self) -> &[u8] {
        &self.content
    }
    pub fn content_type(&self) -> &str {
        &self.content_type
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource")
            .field("checksum", &self.checksum)
            .field("content", &format_args!("<{} bytes>", self.content.len()))
            .field("content_type", &self.content_type)
            .field("name", &self.name)
            .finish()
    }
}

/// A resource tagged with the slot it is meant for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoResource {
    resource: Resource,
    kind: VideoMediaType,
}

impl VideoResource {
    pub fn new(resource: Resource, kind: VideoMediaType) -> Self {
        Self { resource, kind }
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub const fn kind(&self) -> VideoMediaType {
        self.kind
    }

    pub fn into_resource(self) -> Resource {
        self.resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_checksum_is_sha256_hex() {
        let resource = Resource::new(b"abc".to_vec(), "text/plain", "a.txt");
        assert_eq!(
            resource.checksum(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn new_audio_video_media_is_pending_and_unencoded() {
        let media = AudioVideoMedia::new("abc", "movie.mp4", "/raw/movie.mp4");
        assert_eq!(media.status(), MediaStatus::Pending);
        assert!(media.encoded_location().is_empty());
    }

    #[test]
    fn status_transitions_keep_identity_fields() {
        let media = AudioVideoMedia::new("abc", "movie.mp4", "/raw/movie.mp4");

        let processing = media.processing();
        assert_eq!(processing.status(), MediaStatus::Processing);
        assert_eq!(processing.checksum(), "abc");

        let completed = processing.completed("/encoded/movie");
        assert_eq!(completed.status(), MediaStatus::Completed);
        assert_eq!(completed.encoded_location(), "/encoded/movie");
        assert_eq!(completed.raw_location(), "/raw/movie.mp4");
    }

    #[test]
    fn media_location_follows_folder_convention() {
        let id = VideoId::from("123");
        assert_eq!(
            media_location(&id, VideoMediaType::ThumbnailHalf),
            "videoId-123/type-THUMBNAIL_HALF"
        );
        assert!(media_location(&id, VideoMediaType::Video).starts_with(&media_folder(&id)));
    }

    #[test]
    fn debug_hides_resource_bytes() {
        let resource = Resource::new(vec![0; 1024], "video/mp4", "v.mp4");
        let debug = format!("{resource:?}");
        assert!(debug.contains("<1024 bytes>"));
    }
}
