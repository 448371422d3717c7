//! Video Service - video use cases and the media attachment saga.
//!
//! Creating a video runs through these states:
//!
//! ```text
//! Validated -> ResourcesAttached -> Persisted
//!                    |                  |
//!                    +--------+---------+
//!                             v
//!                    CompensatedFailure
//! ```
//!
//! 1. References (categories, genres, cast members) and fields are checked
//!    into one notification; nothing is stored if it has errors.
//! 2. Each present upload is stored through the media gateway and attached
//!    to its slot.
//! 3. The video is persisted.
//! 4. If 2 or 3 fails, everything stored for the video is cleared once and
//!    an internal error carrying the video id and the cause is returned.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::{
    application::{
        integrity::check_references,
        ports::{
            CastMemberGateway, CategoryGateway, GenreGateway, MediaResourceGateway, VideoGateway,
        },
        services::media_attachment::{MediaUploads, attach_media},
    },
    domain::{
        AggregateKind, DomainError, MediaStatus, Notification, Resource, Video, VideoDetails,
        VideoId, VideoMediaType, VideoReferences,
    },
    error::{CatalogError, CatalogResult},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateVideo {
    pub details: VideoDetails,
    pub references: VideoReferences,
    pub uploads: MediaUploads,
}

/// Input for [`VideoService::update`]. Slots without an upload keep their
/// current media.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateVideo {
    pub id: VideoId,
    pub details: VideoDetails,
    pub references: VideoReferences,
    pub uploads: MediaUploads,
}

/// Encoder progress report for one stored media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMediaStatus {
    pub video_id: VideoId,
    /// Checksum of the raw media the report is about.
    pub checksum: String,
    pub status: MediaStatus,
    pub folder: String,
    pub file: String,
}

pub struct VideoService {
    videos: Arc<dyn VideoGateway>,
    categories: Arc<dyn CategoryGateway>,
    genres: Arc<dyn GenreGateway>,
    members: Arc<dyn CastMemberGateway>,
    media: Arc<dyn MediaResourceGateway>,
}

impl VideoService {
    pub fn new(
        videos: Arc<dyn VideoGateway>,
        categories: Arc<dyn CategoryGateway>,
        genres: Arc<dyn GenreGateway>,
        members: Arc<dyn CastMemberGateway>,
        media: Arc<dyn MediaResourceGateway>,
    ) -> Self {
        Self {
            videos,
            categories,
            genres,
            members,
            media,
        }
    }

    /// Create a video, storing and attaching its uploads.
    #[instrument(
        skip_all,
        fields(title = %command.details.title, uploads = command.uploads.len())
    )]
    pub fn create(&self, command: CreateVideo) -> CatalogResult<VideoId> {
        let mut notification = self.check_references(&command.references)?;
        let video =
            notification.validate(|| Video::new_video(command.details, command.references));

        let video = match video {
            Some(video) if !notification.has_error() => video,
            _ => {
                return Err(
                    DomainError::notification("Could not create Aggregate Video", notification)
                        .into(),
                );
            }
        };

        let id = video.id().clone();
        match self.attach_and_create(video, command.uploads) {
            Ok(created) => {
                info!(id = %id, media = created.media_count(), "Video created");
                Ok(id)
            }
            Err(cause) => Err(self.compensate(&id, cause)),
        }
    }

    /// Replace a video's fields and references and store any new uploads.
    ///
    /// Stored media is not cleared on failure; earlier uploads still belong
    /// to the video.
    #[instrument(skip_all, fields(id = %command.id, uploads = command.uploads.len()))]
    pub fn update(&self, command: UpdateVideo) -> CatalogResult<VideoId> {
        let mut video = self.get(&command.id)?;
        let mut notification = self.check_references(&command.references)?;

        notification.validate(|| {
            video.update(command.details, command.references)?;
            Ok(())
        });

        if notification.has_error() {
            return Err(
                DomainError::notification("Could not update Aggregate Video", notification).into(),
            );
        }

        let id = video.id().clone();
        attach_media(self.media.as_ref(), &mut video, command.uploads)
            .and_then(|()| self.videos.update(video))
            .map_err(|cause| {
                warn!(error = %cause, "Video update failed");
                CatalogError::internal_with(
                    format!("An error on update video was observed [videoId: {id}]"),
                    id.as_str(),
                    cause,
                )
            })?;

        info!("Video updated");
        Ok(id)
    }

    pub fn get(&self, id: &VideoId) -> CatalogResult<Video> {
        self.videos
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found(AggregateKind::Video, id).into())
    }

    /// Delete a video and everything stored for it. Unknown ids are ignored.
    #[instrument(skip_all, fields(id = %id))]
    pub fn delete(&self, id: &VideoId) -> CatalogResult<()> {
        self.videos.delete_by_id(id)?;
        self.media.clear_resources(id)?;
        info!("Video deleted");
        Ok(())
    }

    pub fn list(&self) -> CatalogResult<Vec<Video>> {
        self.videos.list()
    }

    /// Read back the content stored in one media slot.
    pub fn get_media(&self, id: &VideoId, kind: VideoMediaType) -> CatalogResult<Resource> {
        let video = self.get(id)?;
        self.media
            .get_resource(video.id(), kind)?
            .ok_or_else(|| {
                DomainError::not_found(AggregateKind::Video, format!("{id} and media {kind}"))
                    .into()
            })
    }

    /// Apply an encoder progress report to the video or trailer slot whose
    /// raw media has the reported checksum. Reports for unknown media are
    /// ignored.
    #[instrument(skip_all, fields(id = %command.video_id, status = %command.status))]
    pub fn update_media_status(&self, command: UpdateMediaStatus) -> CatalogResult<()> {
        let mut video = self.get(&command.video_id)?;

        let Some(kind) = [VideoMediaType::Video, VideoMediaType::Trailer]
            .into_iter()
            .find(|kind| {
                video
                    .audio_video(*kind)
                    .is_some_and(|media| media.checksum() == command.checksum)
            })
        else {
            warn!(checksum = %command.checksum, "No media matches status report");
            return Ok(());
        };

        match command.status {
            MediaStatus::Processing => {
                video.processing(kind)?;
            }
            MediaStatus::Completed => {
                let location = format!("{}/{}", command.folder, command.file);
                video.completed(kind, &location)?;
            }
            MediaStatus::Pending => return Ok(()),
        }

        self.videos.update(video)?;
        info!(kind = %kind, "Media status updated");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Check categories, genres and cast members, in that order.
    fn check_references(&self, references: &VideoReferences) -> CatalogResult<Notification> {
        let mut notification = Notification::new();
        notification.append_all(check_references(
            AggregateKind::Category,
            &references.categories,
            |ids| self.categories.exists_by_ids(ids),
        )?);
        notification.append_all(check_references(
            AggregateKind::Genre,
            &references.genres,
            |ids| self.genres.exists_by_ids(ids),
        )?);
        notification.append_all(check_references(
            AggregateKind::CastMember,
            &references.cast_members,
            |ids| self.members.exists_by_ids(ids),
        )?);
        Ok(notification)
    }

    fn attach_and_create(&self, mut video: Video, uploads: MediaUploads) -> CatalogResult<Video> {
        attach_media(self.media.as_ref(), &mut video, uploads)?;
        self.videos.create(video)
    }

    /// Clear whatever was stored for `id` and wrap `cause`.
    ///
    /// A failing clear does not replace `cause`: it is logged and appended to
    /// the message.
    fn compensate(&self, id: &VideoId, cause: CatalogError) -> CatalogError {
        warn!(id = %id, error = %cause, "Video creation failed, clearing stored media");

        let mut message = format!("An error on create video was observed [videoId: {id}]");
        if let Err(clear_error) = self.media.clear_resources(id) {
            error!(id = %id, error = %clear_error, "Clearing stored media failed");
            message.push_str(&format!("; clearing stored media also failed: {clear_error}"));
        }

        CatalogError::internal_with(message, id.as_str(), cause)
    }
}
