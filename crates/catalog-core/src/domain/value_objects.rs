//! Domain value objects: AggregateKind, CastMemberType, Rating, MediaStatus,
//! VideoMediaType.
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each carries its canonical string form and a parser.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::validation::ValidationError;

// ── AggregateKind ─────────────────────────────────────────────────────────────

/// The four aggregate types of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregateKind {
    Category,
    Genre,
    CastMember,
    Video,
}

impl AggregateKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Genre => "Genre",
            Self::CastMember => "CastMember",
            Self::Video => "Video",
        }
    }

    /// Human-readable plural, used in referential-integrity messages.
    pub const fn plural(&self) -> &'static str {
        match self {
            Self::Category => "categories",
            Self::Genre => "genres",
            Self::CastMember => "cast members",
            Self::Video => "videos",
        }
    }

    /// Name of the matching CLI subcommand.
    pub const fn command_name(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Genre => "genre",
            Self::CastMember => "cast-member",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CastMemberType ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CastMemberType {
    Actor,
    Director,
}

impl CastMemberType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Actor => "ACTOR",
            Self::Director => "DIRECTOR",
        }
    }
}

impl fmt::Display for CastMemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CastMemberType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ACTOR" => Ok(Self::Actor),
            "DIRECTOR" => Ok(Self::Director),
            other => Err(ValidationError::new(format!(
                "unknown cast member type: {other}"
            ))),
        }
    }
}

// ── Rating ────────────────────────────────────────────────────────────────────

/// Content rating of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "ER")]
    Er,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "10")]
    Age10,
    #[serde(rename = "12")]
    Age12,
    #[serde(rename = "14")]
    Age14,
    #[serde(rename = "16")]
    Age16,
    #[serde(rename = "18")]
    Age18,
}

impl Rating {
    pub const ALL: [Rating; 7] = [
        Self::Er,
        Self::L,
        Self::Age10,
        Self::Age12,
        Self::Age14,
        Self::Age16,
        Self::Age18,
    ];

    /// Display label, e.g. `"L"` or `"14"`.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Er => "ER",
            Self::L => "L",
            Self::Age10 => "10",
            Self::Age12 => "12",
            Self::Age14 => "14",
            Self::Age16 => "16",
            Self::Age18 => "18",
        }
    }

    /// Enum-style name, e.g. `"AGE_14"`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Er => "ER",
            Self::L => "L",
            Self::Age10 => "AGE_10",
            Self::Age12 => "AGE_12",
            Self::Age14 => "AGE_14",
            Self::Age16 => "AGE_16",
            Self::Age18 => "AGE_18",
        }
    }

    /// Look a rating up by label or name. Unknown input yields `None`, which the
    /// video validator reports as a missing rating.
    pub fn of(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(value) || r.name().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── MediaStatus ───────────────────────────────────────────────────────────────

/// Encoding lifecycle of an audio/video media slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    #[default]
    Pending,
    Processing,
    Completed,
}

impl MediaStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for MediaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "PROCESSING" => Ok(Self::Processing),
            "COMPLETED" => Ok(Self::Completed),
            other => Err(ValidationError::new(format!("unknown media status: {other}"))),
        }
    }
}

// ── VideoMediaType ────────────────────────────────────────────────────────────

/// Purpose of an uploaded resource; one per media slot of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoMediaType {
    Video,
    Trailer,
    Banner,
    Thumbnail,
    ThumbnailHalf,
}

impl VideoMediaType {
    pub const ALL: [VideoMediaType; 5] = [
        Self::Video,
        Self::Trailer,
        Self::Banner,
        Self::Thumbnail,
        Self::ThumbnailHalf,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "VIDEO",
            Self::Trailer => "TRAILER",
            Self::Banner => "BANNER",
            Self::Thumbnail => "THUMBNAIL",
            Self::ThumbnailHalf => "THUMBNAIL_HALF",
        }
    }

    /// Video and trailer are encoded media; the rest are images.
    pub const fn is_audio_video(&self) -> bool {
        matches!(self, Self::Video | Self::Trailer)
    }
}

impl fmt::Display for VideoMediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoMediaType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "VIDEO" => Ok(Self::Video),
            "TRAILER" => Ok(Self::Trailer),
            "BANNER" => Ok(Self::Banner),
            "THUMBNAIL" => Ok(Self::Thumbnail),
            "THUMBNAIL_HALF" => Ok(Self::ThumbnailHalf),
            other => Err(ValidationError::new(format!("unknown media type: {other}"))),
        }
    }
}
