//! Serializable views of the aggregates for `--output-format json`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use catalog_core::domain::{
    AudioVideoMedia, CastMember, CastMemberType, Category, Genre, ImageMedia, MediaStatus, Video,
};

#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Category> for CategoryView {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id().to_string(),
            name: c.name().to_owned(),
            description: c.description().map(str::to_owned),
            is_active: c.is_active(),
            created_at: c.created_at(),
            updated_at: c.updated_at(),
            deleted_at: c.deleted_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenreView {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Genre> for GenreView {
    fn from(g: &Genre) -> Self {
        Self {
            id: g.id().to_string(),
            name: g.name().to_owned(),
            is_active: g.is_active(),
            categories: g.categories().iter().map(ToString::to_string).collect(),
            created_at: g.created_at(),
            updated_at: g.updated_at(),
            deleted_at: g.deleted_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CastMemberView {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CastMemberType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&CastMember> for CastMemberView {
    fn from(m: &CastMember) -> Self {
        Self {
            id: m.id().to_string(),
            name: m.name().to_owned(),
            kind: m.kind(),
            created_at: m.created_at(),
            updated_at: m.updated_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AudioVideoView {
    pub checksum: String,
    pub name: String,
    pub raw_location: String,
    pub encoded_location: String,
    pub status: MediaStatus,
}

impl From<&AudioVideoMedia> for AudioVideoView {
    fn from(m: &AudioVideoMedia) -> Self {
        Self {
            checksum: m.checksum().to_owned(),
            name: m.name().to_owned(),
            raw_location: m.raw_location().to_owned(),
            encoded_location: m.encoded_location().to_owned(),
            status: m.status(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImageView {
    pub checksum: String,
    pub name: String,
    pub location: String,
}

impl From<&ImageMedia> for ImageView {
    fn from(m: &ImageMedia) -> Self {
        Self {
            checksum: m.checksum().to_owned(),
            name: m.name().to_owned(),
            location: m.location().to_owned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VideoView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub launched_at: i32,
    pub duration: f64,
    pub rating: String,
    pub opened: bool,
    pub published: bool,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub cast_members: Vec<String>,
    pub video: Option<AudioVideoView>,
    pub trailer: Option<AudioVideoView>,
    pub banner: Option<ImageView>,
    pub thumbnail: Option<ImageView>,
    pub thumbnail_half: Option<ImageView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Video> for VideoView {
    fn from(v: &Video) -> Self {
        Self {
            id: v.id().to_string(),
            title: v.title().to_owned(),
            description: v.description().to_owned(),
            launched_at: v.launched_at(),
            duration: v.duration(),
            rating: v.rating().label().to_owned(),
            opened: v.is_opened(),
            published: v.is_published(),
            categories: v.categories().iter().map(ToString::to_string).collect(),
            genres: v.genres().iter().map(ToString::to_string).collect(),
            cast_members: v.cast_members().iter().map(ToString::to_string).collect(),
            video: v.video().map(AudioVideoView::from),
            trailer: v.trailer().map(AudioVideoView::from),
            banner: v.banner().map(ImageView::from),
            thumbnail: v.thumbnail().map(ImageView::from),
            thumbnail_half: v.thumbnail_half().map(ImageView::from),
            created_at: v.created_at(),
            updated_at: v.updated_at(),
        }
    }
}
