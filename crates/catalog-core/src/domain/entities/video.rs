//! The `Video` aggregate.
//!
//! Besides its scalar fields a video references categories, genres and cast
//! members by identifier, and owns five optional media slots. Construction
//! follows a two-step flow: callers fill a [`VideoDetails`] descriptor, the
//! factory validates it, and only then is a `Video` produced.

use chrono::{DateTime, Utc};

use crate::domain::{
    common::{CastMemberId, CategoryId, GenreId, VideoId, now, unique_ids},
    entities::media::{AudioVideoMedia, ImageMedia},
    error::DomainError,
    validation::{Notification, ValidationError, Validator, rules},
    value_objects::{Rating, VideoMediaType},
};

const TITLE_MAX_LENGTH: usize = 255;
const DESCRIPTION_MAX_LENGTH: usize = 4_000;

/// Unvalidated scalar fields of a video, as received from a caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoDetails {
    pub title: String,
    pub description: String,
    pub launched_at: Option<i32>,
    pub duration: f64,
    pub rating: Option<Rating>,
    pub opened: bool,
    pub published: bool,
}

/// References from a video to other aggregates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoReferences {
    pub categories: Vec<CategoryId>,
    pub genres: Vec<GenreId>,
    pub cast_members: Vec<CastMemberId>,
}

impl VideoReferences {
    fn deduplicated(self) -> Self {
        Self {
            categories: unique_ids(self.categories),
            genres: unique_ids(self.genres),
            cast_members: unique_ids(self.cast_members),
        }
    }
}

/// Everything needed to rebuild a stored video.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoState {
    pub id: VideoId,
    pub details: VideoDetails,
    pub references: VideoReferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub video: Option<AudioVideoMedia>,
    pub trailer: Option<AudioVideoMedia>,
    pub banner: Option<ImageMedia>,
    pub thumbnail: Option<ImageMedia>,
    pub thumbnail_half: Option<ImageMedia>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    id: VideoId,
    title: String,
    description: String,
    launched_at: i32,
    duration: f64,
    rating: Rating,
    opened: bool,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    video: Option<AudioVideoMedia>,
    trailer: Option<AudioVideoMedia>,
    banner: Option<ImageMedia>,
    thumbnail: Option<ImageMedia>,
    thumbnail_half: Option<ImageMedia>,
    references: VideoReferences,
}

/// Validated, non-optional scalars extracted from a [`VideoDetails`].
struct CheckedDetails {
    title: String,
    description: String,
    launched_at: i32,
    duration: f64,
    rating: Rating,
    opened: bool,
    published: bool,
}

impl Video {
    pub fn new_video(
        details: VideoDetails,
        references: VideoReferences,
    ) -> Result<Self, DomainError> {
        let checked = Self::checked(details, "Failed to create a Aggregate Video")?;
        let now = now();
        Ok(Self {
            id: VideoId::unique(),
            title: checked.title,
            description: checked.description,
            launched_at: checked.launched_at,
            duration: checked.duration,
            rating: checked.rating,
            opened: checked.opened,
            published: checked.published,
            created_at: now,
            updated_at: now,
            video: None,
            trailer: None,
            banner: None,
            thumbnail: None,
            thumbnail_half: None,
            references: references.deduplicated(),
        })
    }

    /// Rebuild a stored video. Still validated.
    pub fn with(state: VideoState) -> Result<Self, DomainError> {
        let checked = Self::checked(state.details, "Failed to load a Aggregate Video")?;
        Ok(Self {
            id: state.id,
            title: checked.title,
            description: checked.description,
            launched_at: checked.launched_at,
            duration: checked.duration,
            rating: checked.rating,
            opened: checked.opened,
            published: checked.published,
            created_at: state.created_at,
            updated_at: state.updated_at,
            video: state.video,
            trailer: state.trailer,
            banner: state.banner,
            thumbnail: state.thumbnail,
            thumbnail_half: state.thumbnail_half,
            references: state.references.deduplicated(),
        })
    }

    /// Replace scalar fields and references. Media slots are kept.
    pub fn update(
        &mut self,
        details: VideoDetails,
        references: VideoReferences,
    ) -> Result<&mut Self, DomainError> {
        let checked = Self::checked(details, "Failed to update a Aggregate Video")?;
        self.title = checked.title;
        self.description = checked.description;
        self.launched_at = checked.launched_at;
        self.duration = checked.duration;
        self.rating = checked.rating;
        self.opened = checked.opened;
        self.published = checked.published;
        self.references = references.deduplicated();
        self.updated_at = now();
        Ok(self)
    }

    // ── Media slots ───────────────────────────────────────────────────────────

    pub fn update_video_media(
        &mut self,
        media: Option<AudioVideoMedia>,
    ) -> Result<&mut Self, DomainError> {
        self.video = media;
        self.touched()
    }

    pub fn update_trailer_media(
        &mut self,
        media: Option<AudioVideoMedia>,
    ) -> Result<&mut Self, DomainError> {
        self.trailer = media;
        self.touched()
    }

    pub fn update_banner_media(
        &mut self,
        media: Option<ImageMedia>,
    ) -> Result<&mut Self, DomainError> {
        self.banner = media;
        self.touched()
    }

    pub fn update_thumbnail_media(
        &mut self,
        media: Option<ImageMedia>,
    ) -> Result<&mut Self, DomainError> {
        self.thumbnail = media;
        self.touched()
    }

    pub fn update_thumbnail_half_media(
        &mut self,
        media: Option<ImageMedia>,
    ) -> Result<&mut Self, DomainError> {
        self.thumbnail_half = media;
        self.touched()
    }

    /// Mark the video or trailer slot as being encoded.
    pub fn processing(&mut self, kind: VideoMediaType) -> Result<&mut Self, DomainError> {
        let media = self.encoded_slot(kind)?.map(AudioVideoMedia::processing);
        self.set_encoded_slot(kind, media)
    }

    /// Mark the video or trailer slot as encoded at `encoded_location`.
    pub fn completed(
        &mut self,
        kind: VideoMediaType,
        encoded_location: &str,
    ) -> Result<&mut Self, DomainError> {
        let media = self
            .encoded_slot(kind)?
            .map(|media| media.completed(encoded_location));
        self.set_encoded_slot(kind, media)
    }

    pub fn audio_video(&self, kind: VideoMediaType) -> Option<&AudioVideoMedia> {
        match kind {
            VideoMediaType::Video => self.video.as_ref(),
            VideoMediaType::Trailer => self.trailer.as_ref(),
            _ => None,
        }
    }

    pub fn image(&self, kind: VideoMediaType) -> Option<&ImageMedia> {
        match kind {
            VideoMediaType::Banner => self.banner.as_ref(),
            VideoMediaType::Thumbnail => self.thumbnail.as_ref(),
            VideoMediaType::ThumbnailHalf => self.thumbnail_half.as_ref(),
            _ => None,
        }
    }

    /// Number of media slots currently filled.
    pub fn media_count(&self) -> usize {
        VideoMediaType::ALL
            .into_iter()
            .filter(|kind| self.audio_video(*kind).is_some() || self.image(*kind).is_some())
            .count()
    }

    // ── Validation ────────────────────────────────────────────────────────────

    pub fn validate(&self, handler: &mut Notification) {
        VideoValidator {
            title: &self.title,
            description: &self.description,
            launched_at: Some(self.launched_at),
            rating: Some(self.rating),
        }
        .validate(handler);
    }

    fn checked(details: VideoDetails, message: &str) -> Result<CheckedDetails, DomainError> {
        let mut notification = Notification::new();
        VideoValidator::from_details(&details).validate(&mut notification);
        match (details.launched_at, details.rating) {
            (Some(launched_at), Some(rating)) if !notification.has_error() => Ok(CheckedDetails {
                title: details.title,
                description: details.description,
                launched_at,
                duration: details.duration,
                rating,
                opened: details.opened,
                published: details.published,
            }),
            _ => Err(DomainError::notification(message, notification)),
        }
    }

    fn touched(&mut self) -> Result<&mut Self, DomainError> {
        self.updated_at = now();
        let mut notification = Notification::new();
        self.validate(&mut notification);
        notification.into_result("Failed to update a Aggregate Video")?;
        Ok(self)
    }

    fn encoded_slot(&self, kind: VideoMediaType) -> Result<Option<&AudioVideoMedia>, DomainError> {
        if !kind.is_audio_video() {
            return Err(ValidationError::new(format!("media type {kind} has no encoding status")).into());
        }
        Ok(self.audio_video(kind))
    }

    fn set_encoded_slot(
        &mut self,
        kind: VideoMediaType,
        media: Option<AudioVideoMedia>,
    ) -> Result<&mut Self, DomainError> {
        // Nothing stored in that slot: nothing to transition.
        if media.is_none() {
            return Ok(self);
        }
        match kind {
            VideoMediaType::Video => self.update_video_media(media),
            _ => self.update_trailer_media(media),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn id(&self) -> &VideoId {
        &self.id
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub const fn launched_at(&self) -> i32 {
        self.launched_at
    }
    pub const fn duration(&self) -> f64 {
        self.duration
    }
    pub const fn rating(&self) -> Rating {
        self.rating
    }
    pub const fn is_opened(&self) -> bool {
        self.opened
    }
    pub const fn is_published(&self) -> bool {
        self.published
    }
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
    pub fn video(&self) -> Option<&AudioVideoMedia> {
        self.video.as_ref()
    }
    pub fn trailer(&self) -> Option<&AudioVideoMedia> {
        self.trailer.as_ref()
    }
    pub fn banner(&self) -> Option<&ImageMedia> {
        self.banner.as_ref()
    }
    pub fn thumbnail(&self) -> Option<&ImageMedia> {
        self.thumbnail.as_ref()
    }
    pub fn thumbnail_half(&self) -> Option<&ImageMedia> {
        self.thumbnail_half.as_ref()
    }
    pub fn categories(&self) -> &[CategoryId] {
        &self.references.categories
    }
    pub fn genres(&self) -> &[GenreId] {
        &self.references.genres
    }
    pub fn cast_members(&self) -> &[CastMemberId] {
        &self.references.cast_members
    }
    pub fn references(&self) -> &VideoReferences {
        &self.references
    }

    /// The scalar fields as a descriptor, e.g. to feed a partial update.
    pub fn details(&self) -> VideoDetails {
        VideoDetails {
            title: self.title.clone(),
            description: self.description.clone(),
            launched_at: Some(self.launched_at),
            duration: self.duration,
            rating: Some(self.rating),
            opened: self.opened,
            published: self.published,
        }
    }
}

/// Field rules for [`Video`], in declaration order: title, description,
/// launch year, rating.
pub struct VideoValidator<'a> {
    title: &'a str,
    description: &'a str,
    launched_at: Option<i32>,
    rating: Option<Rating>,
}

impl<'a> VideoValidator<'a> {
    pub fn from_details(details: &'a VideoDetails) -> Self {
        Self {
            title: &details.title,
            description: &details.description,
            launched_at: details.launched_at,
            rating: details.rating,
        }
    }
}

impl Validator for VideoValidator<'_> {
    fn validate(&self, handler: &mut Notification) {
        handler.check(rules::required_text("title", self.title, 1, TITLE_MAX_LENGTH));
        handler.check(rules::length_between(
            "description",
            self.description,
            0,
            DESCRIPTION_MAX_LENGTH,
        ));
        handler.check(rules::present("launchedAt", self.launched_at.as_ref()));
        handler.check(rules::present("rating", self.rating.as_ref()));
    }
}
