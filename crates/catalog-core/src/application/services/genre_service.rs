//! Genre Service - genre use cases.
//!
//! Genres reference categories, so create and update first check those
//! references against the category store and then merge any field errors
//! into the same notification.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{
        integrity::check_references,
        ports::{CategoryGateway, GenreGateway},
    },
    domain::{AggregateKind, CategoryId, DomainError, Genre, GenreId, Notification},
    error::CatalogResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGenre {
    pub name: String,
    pub active: bool,
    pub categories: Vec<CategoryId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateGenre {
    pub id: GenreId,
    pub name: String,
    pub active: bool,
    pub categories: Vec<CategoryId>,
}

pub struct GenreService {
    genres: Arc<dyn GenreGateway>,
    categories: Arc<dyn CategoryGateway>,
}

impl GenreService {
    pub fn new(genres: Arc<dyn GenreGateway>, categories: Arc<dyn CategoryGateway>) -> Self {
        Self { genres, categories }
    }

    #[instrument(skip_all, fields(name = %command.name, categories = command.categories.len()))]
    pub fn create(&self, command: CreateGenre) -> CatalogResult<GenreId> {
        let mut notification = self.check_categories(&command.categories)?;

        let genre = notification.validate(|| {
            let mut genre = Genre::new_genre(command.name, command.active)?;
            genre.add_categories(command.categories)?;
            Ok(genre)
        });

        let genre = match genre {
            Some(genre) if !notification.has_error() => genre,
            _ => {
                return Err(
                    DomainError::notification("Could not create Aggregate Genre", notification)
                        .into(),
                );
            }
        };

        let created = self.genres.create(genre)?;
        info!(id = %created.id(), "Genre created");
        Ok(created.id().clone())
    }

    #[instrument(skip_all, fields(id = %command.id))]
    pub fn update(&self, command: UpdateGenre) -> CatalogResult<GenreId> {
        let mut genre = self.get(&command.id)?;
        let mut notification = self.check_categories(&command.categories)?;

        notification.validate(|| {
            genre.update(command.name, command.active, command.categories)?;
            Ok(())
        });

        if notification.has_error() {
            return Err(
                DomainError::notification("Could not update Aggregate Genre", notification).into(),
            );
        }

        let updated = self.genres.update(genre)?;
        info!("Genre updated");
        Ok(updated.id().clone())
    }

    pub fn get(&self, id: &GenreId) -> CatalogResult<Genre> {
        self.genres
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found(AggregateKind::Genre, id).into())
    }

    /// Delete a genre. Unknown ids are ignored.
    #[instrument(skip_all, fields(id = %id))]
    pub fn delete(&self, id: &GenreId) -> CatalogResult<()> {
        self.genres.delete_by_id(id)?;
        info!("Genre deleted");
        Ok(())
    }

    pub fn list(&self) -> CatalogResult<Vec<Genre>> {
        self.genres.list()
    }

    fn check_categories(&self, ids: &[CategoryId]) -> CatalogResult<Notification> {
        check_references(AggregateKind::Category, ids, |ids| {
            self.categories.exists_by_ids(ids)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockCategoryGateway, MockGenreGateway};

    fn service(genres: MockGenreGateway, categories: MockCategoryGateway) -> GenreService {
        GenreService::new(Arc::new(genres), Arc::new(categories))
    }

    fn messages(err: crate::error::CatalogError) -> Vec<String> {
        err.errors().into_iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn create_without_categories_skips_the_lookup() {
        let mut categories = MockCategoryGateway::new();
        categories.expect_exists_by_ids().never();
        let mut genres = MockGenreGateway::new();
        genres
            .expect_create()
            .times(1)
            .returning(|genre| Ok(genre));

        let id = service(genres, categories)
            .create(CreateGenre {
                name: "Action".into(),
                active: true,
                categories: Vec::new(),
            })
            .unwrap();
        assert!(!id.as_str().is_empty());
    }

    #[test]
    fn create_keeps_valid_category_references() {
        let mut categories = MockCategoryGateway::new();
        categories
            .expect_exists_by_ids()
            .times(1)
            .returning(|ids| Ok(ids.to_vec()));
        let mut genres = MockGenreGateway::new();
        genres
            .expect_create()
            .times(1)
            .withf(|genre| genre.categories() == [CategoryId::from("1"), CategoryId::from("2")])
            .returning(|genre| Ok(genre));

        service(genres, categories)
            .create(CreateGenre {
                name: "Action".into(),
                active: true,
                categories: vec!["1".into(), "2".into()],
            })
            .unwrap();
    }

    #[test]
    fn integrity_errors_come_before_field_errors() {
        let mut categories = MockCategoryGateway::new();
        categories
            .expect_exists_by_ids()
            .times(1)
            .returning(|_| Ok(vec![CategoryId::from("123")]));
        let mut genres = MockGenreGateway::new();
        genres.expect_create().never();

        let err = service(genres, categories)
            .create(CreateGenre {
                name: " ".into(),
                active: true,
                categories: vec!["123".into(), "456".into(), "789".into()],
            })
            .unwrap_err();

        assert_eq!(err.to_string(), "Could not create Aggregate Genre");
        assert_eq!(
            messages(err),
            vec![
                "Some categories could not be found: 456, 789",
                "'name' should not be empty",
            ]
        );
    }

    #[test]
    fn update_of_unknown_genre_fails_before_checking_references() {
        let mut categories = MockCategoryGateway::new();
        categories.expect_exists_by_ids().never();
        let mut genres = MockGenreGateway::new();
        genres.expect_find_by_id().times(1).returning(|_| Ok(None));

        let err = service(genres, categories)
            .update(UpdateGenre {
                id: "g1".into(),
                name: "Action".into(),
                active: true,
                categories: vec!["1".into()],
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "Genre with ID g1 was not found");
    }

    #[test]
    fn update_with_missing_category_is_rejected() {
        let stored = Genre::new_genre("Action", true).unwrap();
        let id = stored.id().clone();

        let mut categories = MockCategoryGateway::new();
        categories
            .expect_exists_by_ids()
            .returning(|_| Ok(Vec::new()));
        let mut genres = MockGenreGateway::new();
        genres
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        genres.expect_update().never();

        let err = service(genres, categories)
            .update(UpdateGenre {
                id,
                name: "Drama".into(),
                active: false,
                categories: vec!["c1".into()],
            })
            .unwrap_err();
        assert_eq!(
            messages(err),
            vec!["Some categories could not be found: c1"]
        );
    }

    #[test]
    fn update_persists_new_state() {
        let stored = Genre::new_genre("Action", true).unwrap();
        let id = stored.id().clone();

        let mut categories = MockCategoryGateway::new();
        categories
            .expect_exists_by_ids()
            .returning(|ids| Ok(ids.to_vec()));
        let mut genres = MockGenreGateway::new();
        genres
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        genres
            .expect_update()
            .times(1)
            .withf(|genre| genre.name() == "Drama" && !genre.is_active() && genre.categories().len() == 1)
            .returning(|genre| Ok(genre));

        service(genres, categories)
            .update(UpdateGenre {
                id,
                name: "Drama".into(),
                active: false,
                categories: vec!["c1".into()],
            })
            .unwrap();
    }
}
