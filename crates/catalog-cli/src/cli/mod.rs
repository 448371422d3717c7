//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use catalog_core::domain::{CastMemberType, MediaStatus, VideoMediaType};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "catalog",
    bin_name = "catalog",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Video catalog administration",
    long_about = "Manage categories, genres, cast members and videos. Every write \
                  is validated as a whole and reports all problems at once.",
    after_help = "EXAMPLES:\n\
        \x20 catalog category create --name Movies\n\
        \x20 catalog genre create --name Action --category <CATEGORY_ID>\n\
        \x20 catalog video create --title Fast --launched-at 2022 --rating 14 --video ./fast.mp4\n\
        \x20 catalog completions bash > /usr/share/bash-completion/completions/catalog",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage categories.
    #[command(subcommand, visible_alias = "cat")]
    Category(CategoryCommands),

    /// Manage genres.
    #[command(subcommand)]
    Genre(GenreCommands),

    /// Manage cast members.
    #[command(subcommand, visible_alias = "member")]
    CastMember(CastMemberCommands),

    /// Manage videos and their media.
    #[command(subcommand)]
    Video(VideoCommands),

    /// Initialise a catalog configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 catalog init\n\
            \x20 catalog init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 catalog completions bash > ~/.local/share/bash-completion/completions/catalog\n\
            \x20 catalog completions zsh  > ~/.zfunc/_catalog\n\
            \x20 catalog completions fish > ~/.config/fish/completions/catalog.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the catalog configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 catalog config get storage.data_dir\n\
            \x20 catalog config list\n\
            \x20 catalog config path"
    )]
    Config(ConfigCommands),
}

// ── category ──────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum CategoryCommands {
    /// Create a category.
    Create(CategoryArgs),
    /// Replace a category's fields.
    Update {
        #[arg(value_name = "ID")]
        id: String,
        #[command(flatten)]
        fields: CategoryArgs,
    },
    /// Show one category.
    Get {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Delete a category.
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List all categories, newest first.
    #[command(visible_alias = "ls")]
    List,
}

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[arg(short = 'n', long = "name", default_value = "", help = "Category name")]
    pub name: String,

    #[arg(short = 'd', long = "description", help = "Free-text description")]
    pub description: Option<String>,

    #[arg(long = "inactive", help = "Store the category as inactive")]
    pub inactive: bool,
}

// ── genre ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum GenreCommands {
    /// Create a genre.
    Create(GenreArgs),
    /// Replace a genre's fields.
    Update {
        #[arg(value_name = "ID")]
        id: String,
        #[command(flatten)]
        fields: GenreArgs,
    },
    /// Show one genre.
    Get {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Delete a genre.
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List all genres, newest first.
    #[command(visible_alias = "ls")]
    List,
}

#[derive(Debug, Args)]
pub struct GenreArgs {
    #[arg(short = 'n', long = "name", default_value = "", help = "Genre name")]
    pub name: String,

    #[arg(long = "inactive", help = "Store the genre as inactive")]
    pub inactive: bool,

    /// Repeat to link several categories.
    #[arg(long = "category", value_name = "CATEGORY_ID", help = "Linked category")]
    pub categories: Vec<String>,
}

// ── cast member ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum CastMemberCommands {
    /// Create a cast member.
    Create(CastMemberArgs),
    /// Replace a cast member's fields.
    Update {
        #[arg(value_name = "ID")]
        id: String,
        #[command(flatten)]
        fields: CastMemberArgs,
    },
    /// Show one cast member.
    Get {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Delete a cast member.
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List all cast members, newest first.
    #[command(visible_alias = "ls")]
    List,
}

#[derive(Debug, Args)]
pub struct CastMemberArgs {
    #[arg(short = 'n', long = "name", default_value = "", help = "Cast member name")]
    pub name: String,

    /// Left optional so a missing type is reported with the other errors.
    #[arg(short = 't', long = "type", value_enum, help = "Cast member type")]
    pub kind: Option<MemberKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MemberKind {
    Actor,
    Director,
}

impl From<MemberKind> for CastMemberType {
    fn from(kind: MemberKind) -> Self {
        match kind {
            MemberKind::Actor => Self::Actor,
            MemberKind::Director => Self::Director,
        }
    }
}

// ── video ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum VideoCommands {
    /// Create a video, uploading any given media files.
    #[command(after_help = "EXAMPLES:\n\
        \x20 catalog video create --title Fast --launched-at 2022 --rating 14 \\\n\
        \x20     --category <ID> --genre <ID> --cast-member <ID> \\\n\
        \x20     --video ./fast.mp4 --banner ./banner.jpg")]
    Create(VideoArgs),
    /// Replace a video's fields, uploading any given media files.
    Update {
        #[arg(value_name = "ID")]
        id: String,
        #[command(flatten)]
        fields: VideoArgs,
    },
    /// Show one video.
    Get {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Delete a video and its stored media.
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List all videos, newest first.
    #[command(visible_alias = "ls")]
    List,
    /// Fetch a stored media resource.
    Media(MediaArgs),
    /// Record an encoding status change for a video or trailer.
    MediaStatus(MediaStatusArgs),
}

#[derive(Debug, Args)]
pub struct VideoArgs {
    #[arg(long = "title", default_value = "", help = "Video title")]
    pub title: String,

    #[arg(long = "description", default_value = "", help = "Synopsis")]
    pub description: String,

    #[arg(long = "launched-at", value_name = "YEAR", help = "Launch year")]
    pub launched_at: Option<i32>,

    #[arg(long = "duration", default_value_t = 0.0, help = "Duration in minutes")]
    pub duration: f64,

    /// Unknown labels are reported as a missing rating.
    #[arg(long = "rating", help = "Rating: ER, L, 10, 12, 14, 16 or 18")]
    pub rating: Option<String>,

    #[arg(long = "opened", help = "Mark the video as opened")]
    pub opened: bool,

    #[arg(long = "published", help = "Mark the video as published")]
    pub published: bool,

    #[arg(long = "category", value_name = "CATEGORY_ID")]
    pub categories: Vec<String>,

    #[arg(long = "genre", value_name = "GENRE_ID")]
    pub genres: Vec<String>,

    #[arg(long = "cast-member", value_name = "CAST_MEMBER_ID")]
    pub cast_members: Vec<String>,

    #[command(flatten)]
    pub media: MediaFiles,
}

/// Local files uploaded into the five media slots.
#[derive(Debug, Default, Args)]
pub struct MediaFiles {
    #[arg(long = "video", value_name = "FILE")]
    pub video: Option<PathBuf>,

    #[arg(long = "trailer", value_name = "FILE")]
    pub trailer: Option<PathBuf>,

    #[arg(long = "banner", value_name = "FILE")]
    pub banner: Option<PathBuf>,

    #[arg(long = "thumbnail", value_name = "FILE")]
    pub thumbnail: Option<PathBuf>,

    #[arg(long = "thumbnail-half", value_name = "FILE")]
    pub thumbnail_half: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct MediaArgs {
    #[arg(value_name = "ID")]
    pub id: String,

    #[arg(short = 't', long = "type", value_enum, help = "Media slot")]
    pub kind: MediaKind,

    /// Write the content here instead of printing a summary.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct MediaStatusArgs {
    #[arg(value_name = "ID")]
    pub id: String,

    #[arg(long = "checksum", help = "Checksum of the stored resource")]
    pub checksum: String,

    #[arg(long = "status", value_enum)]
    pub status: StatusArg,

    #[arg(long = "folder", default_value = "", help = "Encoded output folder")]
    pub folder: String,

    #[arg(long = "file", default_value = "", help = "Encoded output file")]
    pub file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MediaKind {
    Video,
    Trailer,
    Banner,
    Thumbnail,
    ThumbnailHalf,
}

impl From<MediaKind> for VideoMediaType {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Video => Self::Video,
            MediaKind::Trailer => Self::Trailer,
            MediaKind::Banner => Self::Banner,
            MediaKind::Thumbnail => Self::Thumbnail,
            MediaKind::ThumbnailHalf => Self::ThumbnailHalf,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Pending,
    Processing,
    Completed,
}

impl From<StatusArg> for MediaStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Pending => Self::Pending,
            StatusArg::Processing => Self::Processing,
            StatusArg::Completed => Self::Completed,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `catalog init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `catalog completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `catalog config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `storage.data_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
