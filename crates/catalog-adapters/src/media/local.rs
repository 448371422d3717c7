//! Local filesystem media storage using std::fs.
//!
//! Layout under the media root:
//!
//! ```text
//! videoId-<id>/
//!   type-VIDEO/
//!     resource.json   name, content type and checksum
//!     <name>          raw bytes
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use catalog_core::{
    application::{ApplicationError, ports::MediaResourceGateway},
    domain::{
        AudioVideoMedia, ImageMedia, Resource, VideoId, VideoMediaType, VideoResource,
        media_folder, media_location,
    },
    error::{CatalogError, CatalogResult},
};

use super::ensure_slot;

const METADATA_FILE: &str = "resource.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoredResource {
    name: String,
    content_type: String,
    checksum: String,
}

/// Production media storage writing under a root directory.
#[derive(Debug, Clone)]
pub struct LocalMediaStorage {
    root: PathBuf,
}

impl LocalMediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Folder of `video_id` under the root.
    ///
    /// Ids are joined onto the root, so only ASCII letters, digits, `-` and
    /// `_` are accepted; anything else could name a path outside it.
    fn video_folder(&self, video_id: &VideoId) -> CatalogResult<PathBuf> {
        let id = video_id.as_str();
        let plain = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !plain {
            return Err(ApplicationError::media_storage(
                video_id,
                format!("id {id:?} is not a valid media folder name"),
            )
            .into());
        }
        Ok(self.root.join(media_folder(video_id)))
    }

    fn slot_path(&self, video_id: &VideoId, kind: VideoMediaType) -> CatalogResult<PathBuf> {
        self.video_folder(video_id)?;
        Ok(self.root.join(media_location(video_id, kind)))
    }

    /// Write `upload` into its slot directory, replacing previous content.
    fn put(&self, video_id: &VideoId, upload: VideoResource) -> CatalogResult<(String, Resource)> {
        let location = media_location(video_id, upload.kind());
        let slot = self.slot_path(video_id, upload.kind())?;
        let resource = upload.into_resource();

        if slot.exists() {
            fs::remove_dir_all(&slot).map_err(|e| map_io_error(video_id, &slot, e))?;
        }
        fs::create_dir_all(&slot).map_err(|e| map_io_error(video_id, &slot, e))?;

        let file_name = file_name_of(resource.name());
        let content_path = slot.join(&file_name);
        fs::write(&content_path, resource.content())
            .map_err(|e| map_io_error(video_id, &content_path, e))?;

        let metadata = StoredResource {
            name: resource.name().to_owned(),
            content_type: resource.content_type().to_owned(),
            checksum: resource.checksum().to_owned(),
        };
        let json = serde_json::to_vec_pretty(&metadata).map_err(|e| {
            ApplicationError::Serialization {
                reason: e.to_string(),
            }
        })?;
        let metadata_path = slot.join(METADATA_FILE);
        fs::write(&metadata_path, json).map_err(|e| map_io_error(video_id, &metadata_path, e))?;

        debug!(location = %location, bytes = resource.content().len(), "Stored media");
        Ok((format!("{location}/{file_name}"), resource))
    }
}

impl MediaResourceGateway for LocalMediaStorage {
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
        let slot = self.slot_path(video_id, kind)?;
        let metadata_path = slot.join(METADATA_FILE);

        let json = match fs::read(&metadata_path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(map_io_error(video_id, &metadata_path, e)),
        };
        let metadata: StoredResource =
            serde_json::from_slice(&json).map_err(|e| ApplicationError::Serialization {
                reason: format!("{}: {e}", metadata_path.display()),
            })?;

        let content_path = slot.join(file_name_of(&metadata.name));
        let content = fs::read(&content_path).map_err(|e| map_io_error(video_id, &content_path, e))?;
        let resource = Resource::new(content, metadata.content_type, metadata.name);

        if resource.checksum() != metadata.checksum {
            return Err(ApplicationError::media_storage(
                video_id,
                format!("checksum mismatch for {}", content_path.display()),
            )
            .into());
        }
        Ok(Some(resource))
    }

    fn clear_resources(&self, video_id: &VideoId) -> CatalogResult<()> {
        let folder = self.video_folder(video_id)?;
        match fs::remove_dir_all(&folder) {
            Ok(()) => {
                debug!(folder = %folder.display(), "Cleared media");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io_error(video_id, &folder, e)),
        }
    }
}

/// Keep only the final path component of an uploaded name.
fn file_name_of(name: &str) -> String {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty() && *n != METADATA_FILE)
        .map_or_else(|| "content".to_owned(), str::to_owned)
}

fn map_io_error(video_id: &VideoId, path: &Path, e: io::Error) -> CatalogError {
    ApplicationError::media_storage(video_id, format!("{}: {e}", path.display())).into()
}
