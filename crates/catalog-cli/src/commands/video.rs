//! `catalog video ...`

use std::{fs, path::Path};

use tracing::debug;

use catalog_core::prelude::{
    CastMemberId, CategoryId, CreateVideo, GenreId, MediaStatus, MediaUploads, Rating, Resource,
    UpdateMediaStatus, UpdateVideo, Video, VideoDetails, VideoId, VideoMediaType, VideoReferences,
    VideoService,
};

use crate::{
    cli::{MediaArgs, MediaFiles, MediaStatusArgs, VideoArgs, VideoCommands},
    commands::Services,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    view::VideoView,
};

pub fn execute(cmd: VideoCommands, services: Services, output: OutputManager) -> CliResult<()> {
    let service = services.videos;

    match cmd {
        VideoCommands::Create(args) => {
            let (details, references, media) = split(args);
            let uploads = read_uploads(media)?;
            let count = uploads.len();
            let id = service.create(CreateVideo {
                details,
                references,
                uploads,
            })?;
            output.emit(&serde_json::json!({ "id": id.as_str() }), |out| {
                out.success(&format!("Created video {id} with {count} media file(s)"))
            })
        }
        VideoCommands::Update { id, fields } => {
            let (details, references, media) = split(fields);
            let id = service.update(UpdateVideo {
                id: VideoId::from(id),
                details,
                references,
                uploads: read_uploads(media)?,
            })?;
            output.emit(&serde_json::json!({ "id": id.as_str() }), |out| {
                out.success(&format!("Updated video {id}"))
            })
        }
        VideoCommands::Get { id } => {
            let video = service.get(&VideoId::from(id))?;
            output.emit(&VideoView::from(&video), |out| show(out, &video))
        }
        VideoCommands::Delete { id } => {
            let id = VideoId::from(id);
            service.delete(&id)?;
            output.emit(&serde_json::json!({ "deleted": id.as_str() }), |out| {
                out.success(&format!("Deleted video {id} and its media"))
            })
        }
        VideoCommands::List => {
            let videos = service.list()?;
            let views: Vec<_> = videos.iter().map(VideoView::from).collect();
            output.emit(&views, |out| {
                if videos.is_empty() {
                    return out.info("No videos yet");
                }
                out.header("Videos:")?;
                for v in &videos {
                    out.print(&format!(
                        "  {}  {} ({}, rated {}, {} media)",
                        v.id(),
                        v.title(),
                        v.launched_at(),
                        v.rating(),
                        v.media_count()
                    ))?;
                }
                Ok(())
            })
        }
        VideoCommands::Media(args) => media(&service, args, &output),
        VideoCommands::MediaStatus(args) => media_status(&service, args, &output),
    }
}

fn split(args: VideoArgs) -> (VideoDetails, VideoReferences, MediaFiles) {
    let details = VideoDetails {
        title: args.title,
        description: args.description,
        launched_at: args.launched_at,
        duration: args.duration,
        rating: args.rating.as_deref().and_then(Rating::of),
        opened: args.opened,
        published: args.published,
    };
    let references = VideoReferences {
        categories: args.categories.into_iter().map(CategoryId::from).collect(),
        genres: args.genres.into_iter().map(GenreId::from).collect(),
        cast_members: args.cast_members.into_iter().map(CastMemberId::from).collect(),
    };
    (details, references, args.media)
}

fn read_uploads(files: MediaFiles) -> CliResult<MediaUploads> {
    let read = |path: Option<std::path::PathBuf>| path.as_deref().map(read_resource).transpose();

    Ok(MediaUploads {
        video: read(files.video)?,
        trailer: read(files.trailer)?,
        banner: read(files.banner)?,
        thumbnail: read(files.thumbnail)?,
        thumbnail_half: read(files.thumbnail_half)?,
    })
}

fn read_resource(path: &Path) -> CliResult<Resource> {
    if !path.is_file() {
        return Err(CliError::MediaFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content =
        fs::read(path).with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("content")
        .to_owned();

    debug!(file = %path.display(), bytes = content.len(), "Read media file");
    Ok(Resource::new(content, content_type_of(path), name))
}

fn content_type_of(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("mp4") => "video/mp4",
        Some("mkv") => "video/x-matroska",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

fn media(service: &VideoService, args: MediaArgs, output: &OutputManager) -> CliResult<()> {
    let kind = VideoMediaType::from(args.kind);
    let resource = service.get_media(&VideoId::from(args.id), kind)?;

    if let Some(path) = &args.output {
        fs::write(path, resource.content())
            .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;
    }

    let summary = serde_json::json!({
        "type": kind.as_str(),
        "name": resource.name(),
        "content_type": resource.content_type(),
        "checksum": resource.checksum(),
        "size": resource.content().len(),
    });
    output.emit(&summary, |out| {
        out.header(&format!("{kind} media"))?;
        out.field("name", resource.name())?;
        out.field("content type", resource.content_type())?;
        out.field("checksum", resource.checksum())?;
        out.field("size", format!("{} bytes", resource.content().len()))?;
        if let Some(path) = &args.output {
            out.success(&format!("Written to {}", path.display()))?;
        }
        Ok(())
    })
}

fn media_status(
    service: &VideoService,
    args: MediaStatusArgs,
    output: &OutputManager,
) -> CliResult<()> {
    let status = MediaStatus::from(args.status);
    if status == MediaStatus::Completed && (args.folder.is_empty() || args.file.is_empty()) {
        return Err(CliError::InvalidInput {
            message: "--folder and --file are required when the status is completed".into(),
        });
    }

    let video_id = VideoId::from(args.id);
    service.update_media_status(UpdateMediaStatus {
        video_id: video_id.clone(),
        checksum: args.checksum,
        status,
        folder: args.folder,
        file: args.file,
    })?;

    output.emit(
        &serde_json::json!({ "id": video_id.as_str(), "status": status.as_str() }),
        |out| out.success(&format!("Recorded {status} for video {video_id}")),
    )
}

fn show(out: &OutputManager, v: &Video) -> std::io::Result<()> {
    let join = |ids: Vec<String>| if ids.is_empty() { "-".to_owned() } else { ids.join(", ") };

    out.header(v.title())?;
    out.field("id", v.id())?;
    out.field("launched at", v.launched_at())?;
    out.field("duration", v.duration())?;
    out.field("rating", v.rating())?;
    out.field("opened", v.is_opened())?;
    out.field("published", v.is_published())?;
    out.field("categories", join(v.categories().iter().map(ToString::to_string).collect()))?;
    out.field("genres", join(v.genres().iter().map(ToString::to_string).collect()))?;
    out.field(
        "cast members",
        join(v.cast_members().iter().map(ToString::to_string).collect()),
    )?;

    for kind in VideoMediaType::ALL {
        let slot = if kind.is_audio_video() {
            v.audio_video(kind)
                .map(|m| format!("{} [{}] {}", m.name(), m.status(), m.raw_location()))
        } else {
            v.image(kind).map(|m| format!("{} {}", m.name(), m.location()))
        };
        out.field(kind.as_str(), slot.as_deref().unwrap_or("-"))?;
    }
    Ok(())
}
