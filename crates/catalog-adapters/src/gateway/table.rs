//! Keyed rows shared by the in-memory and file-backed stores.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use catalog_core::{
    application::ApplicationError,
    domain::{
        AggregateKind, CastMember, CastMemberId, Category, CategoryId, Genre, GenreId,
        Identifier, Video, VideoId,
    },
    error::CatalogResult,
};

/// An aggregate that can live in a [`Table`].
pub(crate) trait Row: Clone {
    type Id: Identifier;

    const KIND: AggregateKind;

    fn row_id(&self) -> &Self::Id;
    fn created_at(&self) -> DateTime<Utc>;
}

macro_rules! impl_row {
    ($aggregate:ty, $id:ty, $kind:expr) => {
        impl Row for $aggregate {
            type Id = $id;

            const KIND: AggregateKind = $kind;

            fn row_id(&self) -> &Self::Id {
                self.id()
            }

            fn created_at(&self) -> DateTime<Utc> {
                <$aggregate>::created_at(self)
            }
        }
    };
}

impl_row!(Category, CategoryId, AggregateKind::Category);
impl_row!(Genre, GenreId, AggregateKind::Genre);
impl_row!(CastMember, CastMemberId, AggregateKind::CastMember);
impl_row!(Video, VideoId, AggregateKind::Video);

#[derive(Debug, Clone)]
pub(crate) struct Table<R: Row> {
    rows: HashMap<R::Id, R>,
}

impl<R: Row> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }
}

impl<R: Row> Table<R> {
    pub(crate) fn from_rows(rows: impl IntoIterator<Item = R>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| (row.row_id().clone(), row))
                .collect(),
        }
    }

    pub(crate) fn insert(&mut self, row: R) -> CatalogResult<R> {
        if self.rows.contains_key(row.row_id()) {
            return Err(ApplicationError::gateway(
                format!("create {}", R::KIND),
                format!("{} {} already exists", R::KIND, row.row_id()),
            )
            .into());
        }
        self.rows.insert(row.row_id().clone(), row.clone());
        Ok(row)
    }

    pub(crate) fn replace(&mut self, row: R) -> CatalogResult<R> {
        match self.rows.get_mut(row.row_id()) {
            Some(existing) => {
                *existing = row.clone();
                Ok(row)
            }
            None => Err(ApplicationError::gateway(
                format!("update {}", R::KIND),
                format!("{} {} does not exist", R::KIND, row.row_id()),
            )
            .into()),
        }
    }

    pub(crate) fn get(&self, id: &R::Id) -> Option<R> {
        self.rows.get(id).cloned()
    }

    /// Returns whether a row was removed.
    pub(crate) fn remove(&mut self, id: &R::Id) -> bool {
        self.rows.remove(id).is_some()
    }

    /// The requested ids that have a row, in request order.
    pub(crate) fn existing(&self, ids: &[R::Id]) -> Vec<R::Id> {
        ids.iter()
            .filter(|id| self.rows.contains_key(*id))
            .cloned()
            .collect()
    }

    /// Every row, newest first. Ties are broken by id, descending.
    pub(crate) fn newest_first(&self) -> Vec<R> {
        let mut rows: Vec<R> = self.rows.values().cloned().collect();
        rows.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.row_id().value().cmp(a.row_id().value()))
        });
        rows
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> Category {
        Category::new_category(name, None, true).unwrap()
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut table = Table::default();
        let movies = category("Movies");
        table.insert(movies.clone()).unwrap();

        let err = table.insert(movies).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn replace_requires_an_existing_row() {
        let mut table = Table::<Category>::default();
        assert!(table.replace(category("Movies")).is_err());
    }

    #[test]
    fn existing_keeps_request_order() {
        let first = category("First");
        let second = category("Second");
        let table = Table::from_rows([first.clone(), second.clone()]);

        let found = table.existing(&[
            second.id().clone(),
            CategoryId::from("missing"),
            first.id().clone(),
        ]);
        assert_eq!(found, vec![second.id().clone(), first.id().clone()]);
    }

    #[test]
    fn newest_first_orders_by_creation() {
        let older = category("Older");
        let newer = category("Newer");
        let table = Table::from_rows([older.clone(), newer.clone()]);

        let names: Vec<_> = table
            .newest_first()
            .iter()
            .map(|c| c.name().to_owned())
            .collect();
        assert_eq!(names, vec!["Newer", "Older"]);
    }
}
