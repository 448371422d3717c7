//! On-disk representation of the aggregates.
//!
//! Aggregates carry no serde derives; every stored row goes through a record
//! and back through the aggregate's validating `with` constructor, so a file
//! edited into an invalid state surfaces as a notification error on read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use catalog_core::{
    domain::{
        AudioVideoMedia, CastMember, CastMemberId, CastMemberType, Category, CategoryId, Genre,
        GenreId, ImageMedia, MediaStatus, Rating, Video, VideoDetails, VideoId, VideoReferences,
        VideoState,
    },
    error::CatalogResult,
};

use super::table::Row;

/// A row that can be written to and read from a JSON file.
pub(crate) trait Persisted: Row {
    type Record: Serialize + DeserializeOwned;

    /// File name under the data directory.
    const FILE: &'static str;

    fn to_record(&self) -> Self::Record;
    fn from_record(record: Self::Record) -> CatalogResult<Self>;
}

// ── Category ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CategoryRecord {
    id: CategoryId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deleted_at: Option<DateTime<Utc>>,
}

impl Persisted for Category {
    type Record = CategoryRecord;

    const FILE: &'static str = "categories.json";

    fn to_record(&self) -> CategoryRecord {
        CategoryRecord {
            id: self.id().clone(),
            name: self.name().to_owned(),
            description: self.description().map(str::to_owned),
            active: self.is_active(),
            created_at: self.created_at(),
            updated_at: self.updated_at(),
            deleted_at: self.deleted_at(),
        }
    }

    fn from_record(record: CategoryRecord) -> CatalogResult<Self> {
        Ok(Category::with(
            record.id,
            record.name,
            record.description,
            record.active,
            record.created_at,
            record.updated_at,
            record.deleted_at,
        )?)
    }
}

// ── Genre ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GenreRecord {
    id: GenreId,
    name: String,
    active: bool,
    #[serde(default)]
    categories: Vec<CategoryId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deleted_at: Option<DateTime<Utc>>,
}

impl Persisted for Genre {
    type Record = GenreRecord;

    const FILE: &'static str = "genres.json";

    fn to_record(&self) -> GenreRecord {
        GenreRecord {
            id: self.id().clone(),
            name: self.name().to_owned(),
            active: self.is_active(),
            categories: self.categories().to_vec(),
            created_at: self.created_at(),
            updated_at: self.updated_at(),
            deleted_at: self.deleted_at(),
        }
    }

    fn from_record(record: GenreRecord) -> CatalogResult<Self> {
        Ok(Genre::with(
            record.id,
            record.name,
            record.active,
            record.categories,
            record.created_at,
            record.updated_at,
            record.deleted_at,
        )?)
    }
}

// ── CastMember ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CastMemberRecord {
    id: CastMemberId,
    name: String,
    #[serde(rename = "type")]
    kind: CastMemberType,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Persisted for CastMember {
    type Record = CastMemberRecord;

    const FILE: &'static str = "cast_members.json";

    fn to_record(&self) -> CastMemberRecord {
        CastMemberRecord {
            id: self.id().clone(),
            name: self.name().to_owned(),
            kind: self.kind(),
            created_at: self.created_at(),
            updated_at: self.updated_at(),
        }
    }

    fn from_record(record: CastMemberRecord) -> CatalogResult<Self> {
        Ok(CastMember::with(
            record.id,
            record.name,
            record.kind,
            record.created_at,
            record.updated_at,
        )?)
    }
}

// ── Video ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct AudioVideoMediaRecord {
    checksum: String,
    name: String,
    raw_location: String,
    #[serde(default)]
    encoded_location: String,
    #[serde(default)]
    status: MediaStatus,
}

impl From<&AudioVideoMedia> for AudioVideoMediaRecord {
    fn from(media: &AudioVideoMedia) -> Self {
        Self {
            checksum: media.checksum().to_owned(),
            name: media.name().to_owned(),
            raw_location: media.raw_location().to_owned(),
            encoded_location: media.encoded_location().to_owned(),
            status: media.status(),
        }
    }
}

impl From<AudioVideoMediaRecord> for AudioVideoMedia {
    fn from(record: AudioVideoMediaRecord) -> Self {
        AudioVideoMedia::with(
            record.checksum,
            record.name,
            record.raw_location,
            record.encoded_location,
            record.status,
        )
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ImageMediaRecord {
    checksum: String,
    name: String,
    location: String,
}

impl From<&ImageMedia> for ImageMediaRecord {
    fn from(media: &ImageMedia) -> Self {
        Self {
            checksum: media.checksum().to_owned(),
            name: media.name().to_owned(),
            location: media.location().to_owned(),
        }
    }
}

impl From<ImageMediaRecord> for ImageMedia {
    fn from(record: ImageMediaRecord) -> Self {
        ImageMedia::new(record.checksum, record.name, record.location)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct VideoRecord {
    id: VideoId,
    title: String,
    #[serde(default)]
    description: String,
    launched_at: Option<i32>,
    duration: f64,
    rating: Option<Rating>,
    opened: bool,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    categories: Vec<CategoryId>,
    #[serde(default)]
    genres: Vec<GenreId>,
    #[serde(default)]
    cast_members: Vec<CastMemberId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    video: Option<AudioVideoMediaRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trailer: Option<AudioVideoMediaRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    banner: Option<ImageMediaRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thumbnail: Option<ImageMediaRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thumbnail_half: Option<ImageMediaRecord>,
}

impl Persisted for Video {
    type Record = VideoRecord;

    const FILE: &'static str = "videos.json";

    fn to_record(&self) -> VideoRecord {
        VideoRecord {
            id: self.id().clone(),
            title: self.title().to_owned(),
            description: self.description().to_owned(),
            launched_at: Some(self.launched_at()),
            duration: self.duration(),
            rating: Some(self.rating()),
            opened: self.is_opened(),
            published: self.is_published(),
            created_at: self.created_at(),
            updated_at: self.updated_at(),
            categories: self.categories().to_vec(),
            genres: self.genres().to_vec(),
            cast_members: self.cast_members().to_vec(),
            video: self.video().map(Into::into),
            trailer: self.trailer().map(Into::into),
            banner: self.banner().map(Into::into),
            thumbnail: self.thumbnail().map(Into::into),
            thumbnail_half: self.thumbnail_half().map(Into::into),
        }
    }

    fn from_record(record: VideoRecord) -> CatalogResult<Self> {
        Ok(Video::with(VideoState {
            id: record.id,
            details: VideoDetails {
                title: record.title,
                description: record.description,
                launched_at: record.launched_at,
                duration: record.duration,
                rating: record.rating,
                opened: record.opened,
                published: record.published,
            },
            references: VideoReferences {
                categories: record.categories,
                genres: record.genres,
                cast_members: record.cast_members,
            },
            created_at: record.created_at,
            updated_at: record.updated_at,
            video: record.video.map(Into::into),
            trailer: record.trailer.map(Into::into),
            banner: record.banner.map(Into::into),
            thumbnail: record.thumbnail.map(Into::into),
            thumbnail_half: record.thumbnail_half.map(Into::into),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_stored_category_is_a_notification_error() {
        let json = r#"{
            "id": "c1",
            "name": "",
            "active": true,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let record: CategoryRecord = serde_json::from_str(json).unwrap();

        let err = Category::from_record(record).unwrap_err();
        assert_eq!(err.to_string(), "Failed to load a Aggregate Category");
        assert_eq!(err.errors().len(), 1);
    }

    #[test]
    fn cast_member_type_is_stored_under_type() {
        let member = CastMember::new_member("Vin Diesel", Some(CastMemberType::Actor)).unwrap();
        let json = serde_json::to_value(member.to_record()).unwrap();
        assert_eq!(json["type"], "ACTOR");
    }

    #[test]
    fn video_media_survives_the_record() {
        let mut video = Video::new_video(
            VideoDetails {
                title: "Title".into(),
                launched_at: Some(2020),
                rating: Some(Rating::Age12),
                ..Default::default()
            },
            VideoReferences::default(),
        )
        .unwrap();
        video
            .update_trailer_media(Some(
                AudioVideoMedia::new("abc", "t.mp4", "/raw").completed("/enc"),
            ))
            .unwrap();

        let json = serde_json::to_string(&video.to_record()).unwrap();
        let restored = Video::from_record(serde_json::from_str(&json).unwrap()).unwrap();
        assert_eq!(restored, video);
    }

    #[test]
    fn null_rating_on_disk_is_reported() {
        let json = r#"{
            "id": "v1",
            "title": "Title",
            "launched_at": 2020,
            "duration": 1.0,
            "rating": null,
            "opened": false,
            "published": false,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let record: VideoRecord = serde_json::from_str(json).unwrap();
        let err = Video::from_record(record).unwrap_err();
        assert_eq!(err.errors()[0].message(), "'rating' should not be null");
    }
}
