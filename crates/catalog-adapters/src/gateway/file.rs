//! JSON-file catalog store.
//!
//! One file per aggregate kind under a data directory, each holding a JSON
//! array of records. Every operation reads the file, applies the change and,
//! for writes, replaces the file through a temporary sibling and a rename.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tracing::debug;

use catalog_core::{
    application::{
        ApplicationError,
        ports::{CastMemberGateway, CategoryGateway, GenreGateway, VideoGateway},
    },
    domain::{CastMember, CastMemberId, Category, CategoryId, Genre, GenreId, Video, VideoId},
    error::{CatalogError, CatalogResult},
};

use super::{record::Persisted, table::Table};

/// File-backed store implementing every aggregate gateway.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    root: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileCatalog {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> CatalogResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| map_io_error(&root, e, "create data directory"))?;
        Ok(Self {
            root,
            lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of<R: Persisted>(&self) -> PathBuf {
        self.root.join(R::FILE)
    }

    fn load<R: Persisted>(&self) -> CatalogResult<Table<R>> {
        let path = self.path_of::<R>();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Table::default()),
            Err(e) => return Err(map_io_error(&path, e, "read")),
        };

        let records: Vec<R::Record> =
            serde_json::from_str(&content).map_err(|e| ApplicationError::Serialization {
                reason: format!("{}: {e}", path.display()),
            })?;

        let rows = records
            .into_iter()
            .map(R::from_record)
            .collect::<CatalogResult<Vec<R>>>()?;
        Ok(Table::from_rows(rows))
    }

    fn save<R: Persisted>(&self, table: &Table<R>) -> CatalogResult<()> {
        let path = self.path_of::<R>();
        let records: Vec<R::Record> = table
            .newest_first()
            .iter()
            .map(R::to_record)
            .collect();

        let json =
            serde_json::to_string_pretty(&records).map_err(|e| ApplicationError::Serialization {
                reason: format!("{}: {e}", path.display()),
            })?;

        let staging = path.with_extension("json.tmp");
        fs::write(&staging, json).map_err(|e| map_io_error(&staging, e, "write"))?;
        fs::rename(&staging, &path).map_err(|e| map_io_error(&path, e, "replace"))?;

        debug!(path = %path.display(), rows = table.len(), "Saved table");
        Ok(())
    }

    fn read<R: Persisted, T>(&self, f: impl FnOnce(&Table<R>) -> T) -> CatalogResult<T> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(f(&self.load::<R>()?))
    }

    fn write<R: Persisted, T>(
        &self,
        f: impl FnOnce(&mut Table<R>) -> CatalogResult<T>,
    ) -> CatalogResult<T> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;
        let mut table = self.load::<R>()?;
        let result = f(&mut table)?;
        self.save(&table)?;
        Ok(result)
    }
}

macro_rules! impl_gateway {
    ($gateway:ident, $aggregate:ty, $id:ty) => {
        impl $gateway for FileCatalog {
            fn create(&self, row: $aggregate) -> CatalogResult<$aggregate> {
                self.write(|table: &mut Table<$aggregate>| table.insert(row))
            }

            fn update(&self, row: $aggregate) -> CatalogResult<$aggregate> {
                self.write(|table: &mut Table<$aggregate>| table.replace(row))
            }

            fn find_by_id(&self, id: &$id) -> CatalogResult<Option<$aggregate>> {
                self.read(|table: &Table<$aggregate>| table.get(id))
            }

            fn delete_by_id(&self, id: &$id) -> CatalogResult<()> {
                self.write(|table: &mut Table<$aggregate>| {
                    table.remove(id);
                    Ok(())
                })
            }

            fn list(&self) -> CatalogResult<Vec<$aggregate>> {
                self.read(|table: &Table<$aggregate>| table.newest_first())
            }

            impl_gateway!(@exists $gateway, $aggregate, $id);
        }
    };
    (@exists VideoGateway, $aggregate:ty, $id:ty) => {};
    (@exists $gateway:ident, $aggregate:ty, $id:ty) => {
        fn exists_by_ids(&self, ids: &[$id]) -> CatalogResult<Vec<$id>> {
            self.read(|table: &Table<$aggregate>| table.existing(ids))
        }
    };
}

impl_gateway!(CategoryGateway, Category, CategoryId);
impl_gateway!(GenreGateway, Genre, GenreId);
impl_gateway!(CastMemberGateway, CastMember, CastMemberId);
impl_gateway!(VideoGateway, Video, VideoId);

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CatalogError {
    ApplicationError::gateway(
        format!("{operation} {}", path.display()),
        format!("Failed to {operation}: {e}"),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::domain::{CastMemberType, Rating, VideoDetails, VideoReferences};
    use tempfile::TempDir;

    fn store() -> (TempDir, FileCatalog) {
        let dir = TempDir::new().unwrap();
        let catalog = FileCatalog::open(dir.path().join("data")).unwrap();
        (dir, catalog)
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let (_dir, store) = store();
        assert!(CategoryGateway::list(&store).unwrap().is_empty());
    }

    #[test]
    fn rows_survive_reopening() {
        let (dir, store) = store();
        let member = CastMember::new_member("Vin Diesel", Some(CastMemberType::Actor)).unwrap();
        CastMemberGateway::create(&store, member.clone()).unwrap();

        let reopened = FileCatalog::open(dir.path().join("data")).unwrap();
        assert_eq!(
            CastMemberGateway::find_by_id(&reopened, member.id()).unwrap(),
            Some(member)
        );
        assert!(dir.path().join("data/cast_members.json").exists());
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let (dir, store) = store();
        fs::write(dir.path().join("data/genres.json"), "not json").unwrap();

        let err = GenreGateway::list(&store).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Application(ApplicationError::Serialization { .. })
        ));
    }

    #[test]
    fn update_replaces_the_stored_video() {
        let (_dir, store) = store();
        let mut video = Video::new_video(
            VideoDetails {
                title: "Title".into(),
                launched_at: Some(2021),
                rating: Some(Rating::Age16),
                ..Default::default()
            },
            VideoReferences::default(),
        )
        .unwrap();
        VideoGateway::create(&store, video.clone()).unwrap();

        let renamed = VideoDetails {
            title: "Renamed".into(),
            ..video.details()
        };
        video.update(renamed, VideoReferences::default()).unwrap();
        VideoGateway::update(&store, video.clone()).unwrap();

        let stored = VideoGateway::find_by_id(&store, video.id()).unwrap().unwrap();
        assert_eq!(stored.title(), "Renamed");
    }

    #[test]
    fn exists_by_ids_reads_the_file() {
        let (_dir, store) = store();
        let category = Category::new_category("Movies", None, true).unwrap();
        CategoryGateway::create(&store, category.clone()).unwrap();

        let found = CategoryGateway::exists_by_ids(
            &store,
            &[category.id().clone(), CategoryId::from("nope")],
        )
        .unwrap();
        assert_eq!(found, vec![category.id().clone()]);
    }
}
