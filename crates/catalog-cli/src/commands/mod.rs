//! Command handlers, one module per top-level subcommand.

use std::sync::Arc;

use tracing::debug;

use catalog_adapters::{FileCatalog, LocalMediaStorage};
use catalog_core::prelude::{CastMemberService, CategoryService, GenreService, VideoService};

use crate::{config::AppConfig, error::CliResult};

pub mod cast_member;
pub mod category;
pub mod completions;
pub mod config;
pub mod genre;
pub mod init;
pub mod video;

/// Services wired to the file-backed adapters named in the configuration.
pub struct Services {
    pub categories: CategoryService,
    pub genres: GenreService,
    pub cast_members: CastMemberService,
    pub videos: VideoService,
}

impl Services {
    pub fn open(config: &AppConfig) -> CliResult<Self> {
        debug!(
            data_dir = %config.storage.data_dir.display(),
            media_dir = %config.storage.media_dir.display(),
            "Opening catalog"
        );

        let store = Arc::new(FileCatalog::open(&config.storage.data_dir)?);
        let media = Arc::new(LocalMediaStorage::new(&config.storage.media_dir));

        Ok(Self {
            categories: CategoryService::new(store.clone()),
            genres: GenreService::new(store.clone(), store.clone()),
            cast_members: CastMemberService::new(store.clone()),
            videos: VideoService::new(store.clone(), store.clone(), store.clone(), store, media),
        })
    }
}
