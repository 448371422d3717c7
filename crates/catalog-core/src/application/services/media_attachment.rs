//! Storing uploaded resources and attaching them to a video.

use tracing::debug;

use crate::{
    application::ports::MediaResourceGateway,
    domain::{Resource, Video, VideoMediaType, VideoResource},
    error::CatalogResult,
};

/// Optional upload for each media slot of a video.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaUploads {
    pub video: Option<Resource>,
    pub trailer: Option<Resource>,
    pub banner: Option<Resource>,
    pub thumbnail: Option<Resource>,
    pub thumbnail_half: Option<Resource>,
}

impl MediaUploads {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        [
            self.video.is_some(),
            self.trailer.is_some(),
            self.banner.is_some(),
            self.thumbnail.is_some(),
            self.thumbnail_half.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// Present uploads tagged with their slot, in slot order.
    pub fn into_resources(self) -> Vec<VideoResource> {
        [
            (self.video, VideoMediaType::Video),
            (self.trailer, VideoMediaType::Trailer),
            (self.banner, VideoMediaType::Banner),
            (self.thumbnail, VideoMediaType::Thumbnail),
            (self.thumbnail_half, VideoMediaType::ThumbnailHalf),
        ]
        .into_iter()
        .filter_map(|(resource, kind)| resource.map(|resource| VideoResource::new(resource, kind)))
        .collect()
    }
}

/// Store every present upload and set the matching slot on `video`.
///
/// Absent slots produce no storage call. Stops at the first failure; the
/// caller decides whether to compensate.
pub(crate) fn attach_media(
    media: &dyn MediaResourceGateway,
    video: &mut Video,
    uploads: MediaUploads,
) -> CatalogResult<()> {
    let video_id = video.id().clone();

    for upload in uploads.into_resources() {
        let kind = upload.kind();
        debug!(kind = %kind, checksum = upload.resource().checksum(), "Storing media");

        match kind {
            VideoMediaType::Video => {
                let stored = media.store_audio_video(&video_id, upload)?;
                video.update_video_media(Some(stored))?;
            }
            VideoMediaType::Trailer => {
                let stored = media.store_audio_video(&video_id, upload)?;
                video.update_trailer_media(Some(stored))?;
            }
            VideoMediaType::Banner => {
                let stored = media.store_image(&video_id, upload)?;
                video.update_banner_media(Some(stored))?;
            }
            VideoMediaType::Thumbnail => {
                let stored = media.store_image(&video_id, upload)?;
                video.update_thumbnail_media(Some(stored))?;
            }
            VideoMediaType::ThumbnailHalf => {
                let stored = media.store_image(&video_id, upload)?;
                video.update_thumbnail_half_media(Some(stored))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(name: &str) -> Resource {
        Resource::new(name.as_bytes().to_vec(), "application/octet-stream", name)
    }

    #[test]
    fn into_resources_keeps_slot_order_and_skips_absent() {
        let uploads = MediaUploads {
            thumbnail_half: Some(resource("half")),
            video: Some(resource("video")),
            ..Default::default()
        };
        assert_eq!(uploads.len(), 2);

        let kinds: Vec<_> = uploads
            .into_resources()
            .iter()
            .map(VideoResource::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![VideoMediaType::Video, VideoMediaType::ThumbnailHalf]
        );
    }

    #[test]
    fn default_uploads_are_empty() {
        assert!(MediaUploads::default().is_empty());
    }
}
