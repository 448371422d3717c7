//! In-memory catalog store.

use std::sync::{Arc, RwLock};

use catalog_core::{
    application::{
        ApplicationError,
        ports::{CastMemberGateway, CategoryGateway, GenreGateway, VideoGateway},
    },
    domain::{CastMember, CastMemberId, Category, CategoryId, Genre, GenreId, Video, VideoId},
    error::CatalogResult,
};

use super::table::Table;

#[derive(Debug, Default)]
struct Tables {
    categories: Table<Category>,
    genres: Table<Genre>,
    cast_members: Table<CastMember>,
    videos: Table<Video>,
}

/// Thread-safe in-memory store implementing every aggregate gateway.
///
/// Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<Tables>>,
}

impl InMemoryCatalog {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored aggregates of every kind.
    pub fn len(&self) -> CatalogResult<usize> {
        self.read(|tables| {
            tables.categories.len()
                + tables.genres.len()
                + tables.cast_members.len()
                + tables.videos.len()
        })
    }

    pub fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> CatalogResult<T> {
        let tables = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(f(&tables))
    }

    fn write<T>(&self, f: impl FnOnce(&mut Tables) -> CatalogResult<T>) -> CatalogResult<T> {
        let mut tables = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        f(&mut tables)
    }
}

macro_rules! impl_gateway {
    ($gateway:ident, $aggregate:ty, $id:ty, $table:ident) => {
        impl $gateway for InMemoryCatalog {
            fn create(&self, row: $aggregate) -> CatalogResult<$aggregate> {
                self.write(|tables| tables.$table.insert(row))
            }

            fn update(&self, row: $aggregate) -> CatalogResult<$aggregate> {
                self.write(|tables| tables.$table.replace(row))
            }

            fn find_by_id(&self, id: &$id) -> CatalogResult<Option<$aggregate>> {
                self.read(|tables| tables.$table.get(id))
            }

            fn delete_by_id(&self, id: &$id) -> CatalogResult<()> {
                self.write(|tables| {
                    tables.$table.remove(id);
                    Ok(())
                })
            }

            fn list(&self) -> CatalogResult<Vec<$aggregate>> {
                self.read(|tables| tables.$table.newest_first())
            }

            impl_gateway!(@exists $gateway, $id, $table);
        }
    };
    (@exists VideoGateway, $id:ty, $table:ident) => {};
    (@exists $gateway:ident, $id:ty, $table:ident) => {
        fn exists_by_ids(&self, ids: &[$id]) -> CatalogResult<Vec<$id>> {
            self.read(|tables| tables.$table.existing(ids))
        }
    };
}

impl_gateway!(CategoryGateway, Category, CategoryId, categories);
impl_gateway!(GenreGateway, Genre, GenreId, genres);
impl_gateway!(CastMemberGateway, CastMember, CastMemberId, cast_members);
impl_gateway!(VideoGateway, Video, VideoId, videos);

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::domain::CastMemberType;

    #[test]
    fn clones_share_state() {
        let store = InMemoryCatalog::new();
        let other = store.clone();

        let category = Category::new_category("Movies", None, true).unwrap();
        CategoryGateway::create(&store, category.clone()).unwrap();

        assert_eq!(
            CategoryGateway::find_by_id(&other, category.id()).unwrap(),
            Some(category)
        );
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn delete_is_idempotent() {
        let store = InMemoryCatalog::new();
        let member = CastMember::new_member("Vin Diesel", Some(CastMemberType::Actor)).unwrap();
        let id = member.id().clone();
        CastMemberGateway::create(&store, member).unwrap();

        CastMemberGateway::delete_by_id(&store, &id).unwrap();
        CastMemberGateway::delete_by_id(&store, &id).unwrap();
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn exists_by_ids_returns_the_found_subset() {
        let store = InMemoryCatalog::new();
        let genre = Genre::new_genre("Action", true).unwrap();
        GenreGateway::create(&store, genre.clone()).unwrap();

        let found =
            GenreGateway::exists_by_ids(&store, &[GenreId::from("missing"), genre.id().clone()])
                .unwrap();
        assert_eq!(found, vec![genre.id().clone()]);
    }
}
