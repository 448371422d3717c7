//! In-memory media storage for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use catalog_core::{
    application::{ApplicationError, ports::MediaResourceGateway},
    domain::{
        AudioVideoMedia, ImageMedia, Resource, VideoId, VideoMediaType, VideoResource,
        media_folder, media_location,
    },
    error::CatalogResult,
};

use super::ensure_slot;

/// Thread-safe in-memory media storage. Clones share the same content.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMediaStorage {
    inner: Arc<RwLock<HashMap<String, Resource>>>,
}

impl InMemoryMediaStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored locations, sorted (testing helper).
    pub fn locations(&self) -> Vec<String> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut locations: Vec<String> = inner.keys().cloned().collect();
        locations.sort();
        locations
    }

    fn put(&self, video_id: &VideoId, upload: VideoResource) -> CatalogResult<(String, Resource)> {
        let location = media_location(video_id, upload.kind());
        let resource = upload.into_resource();
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(location.clone(), resource.clone());
        Ok((location, resource))
    }
}

impl MediaResourceGateway for InMemoryMediaStorage {
    fn store_audio_video(
        &self,
        video_id: &VideoId,
        resource: VideoResource,
    ) -> CatalogResult<AudioVideoMedia> {
        ensure_slot(video_id, resource.kind(), true)?;
        let (location, resource) = self.put(video_id, resource)?;
        Ok(AudioVideoMedia::new(
            resource.checksum(),
            resource.name(),
            location,
        ))
    }

    fn store_image(&self, video_id: &VideoId, resource: VideoResource) -> CatalogResult<ImageMedia> {
        ensure_slot(video_id, resource.kind(), false)?;
        let (location, resource) = self.put(video_id, resource)?;
        Ok(ImageMedia::new(resource.checksum(), resource.name(), location))
    }

    fn get_resource(
        &self,
        video_id: &VideoId,
        kind: VideoMediaType,
    ) -> CatalogResult<Option<Resource>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.get(&media_location(video_id, kind)).cloned())
    }

    fn clear_resources(&self, video_id: &VideoId) -> CatalogResult<()> {
        let prefix = format!("{}/", media_folder(video_id));
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.retain(|location, _| !location.starts_with(&prefix));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(kind: VideoMediaType) -> VideoResource {
        VideoResource::new(Resource::new(b"data".to_vec(), "application/octet-stream", "f"), kind)
    }

    #[test]
    fn stores_under_the_slot_location() {
        let storage = InMemoryMediaStorage::new();
        let id = VideoId::from("v1");

        let media = storage
            .store_audio_video(&id, upload(VideoMediaType::Trailer))
            .unwrap();
        assert_eq!(media.raw_location(), "videoId-v1/type-TRAILER");
        assert!(
            storage
                .get_resource(&id, VideoMediaType::Trailer)
                .unwrap()
                .is_some()
        );
    }

    #[test]
    fn images_are_refused_by_the_audio_video_slot() {
        let storage = InMemoryMediaStorage::new();
        let err = storage
            .store_audio_video(&VideoId::from("v1"), upload(VideoMediaType::Banner))
            .unwrap_err();
        assert!(err.to_string().contains("BANNER is not an audio/video slot"));
    }

    #[test]
    fn clear_only_touches_one_video() {
        let storage = InMemoryMediaStorage::new();
        storage
            .store_image(&VideoId::from("v1"), upload(VideoMediaType::Banner))
            .unwrap();
        storage
            .store_image(&VideoId::from("v10"), upload(VideoMediaType::Banner))
            .unwrap();

        storage.clear_resources(&VideoId::from("v1")).unwrap();
        assert_eq!(storage.locations(), vec!["videoId-v10/type-BANNER"]);
    }
}
