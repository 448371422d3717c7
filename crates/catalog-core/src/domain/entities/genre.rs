//! The `Genre` aggregate.
//!
//! A genre references categories by identifier. Whether those identifiers
//! resolve is checked by the application layer before the genre is written;
//! the aggregate only guarantees its own fields.

use chrono::{DateTime, Utc};

use crate::domain::{
    common::{CategoryId, GenreId, now, unique_ids},
    error::DomainError,
    validation::{Notification, Validator, rules},
};

const NAME_MIN_LENGTH: usize = 1;
const NAME_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    id: GenreId,
    name: String,
    active: bool,
    categories: Vec<CategoryId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Genre {
    pub fn new_genre(name: impl Into<String>, active: bool) -> Result<Self, DomainError> {
        let now = now();
        let genre = Self {
            id: GenreId::unique(),
            name: name.into(),
            active,
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
        };
        genre.self_validate("Failed to create a Aggregate Genre")?;
        Ok(genre)
    }

    /// Rebuild a genre from stored values. Still validated.
    pub fn with(
        id: GenreId,
        name: impl Into<String>,
        active: bool,
        categories: Vec<CategoryId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        let genre = Self {
            id,
            name: name.into(),
            active,
            categories: unique_ids(categories),
            created_at,
            updated_at,
            deleted_at,
        };
        genre.self_validate("Failed to load a Aggregate Genre")?;
        Ok(genre)
    }

    /// Replace name, active flag and the whole category set.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        active: bool,
        categories: Vec<CategoryId>,
    ) -> Result<&mut Self, DomainError> {
        let mut next = self.clone();
        if active {
            next.set_active();
        } else {
            next.set_inactive();
        }
        next.name = name.into();
        next.categories = unique_ids(categories);
        next.updated_at = now();
        next.self_validate("Failed to update a Aggregate Genre")?;
        *self = next;
        Ok(self)
    }

    pub fn activate(&mut self) -> Result<&mut Self, DomainError> {
        self.set_active();
        self.updated_at = now();
        self.self_validate("Failed to activate a Aggregate Genre")?;
        Ok(self)
    }

    pub fn deactivate(&mut self) -> Result<&mut Self, DomainError> {
        self.set_inactive();
        self.updated_at = now();
        self.self_validate("Failed to deactivate a Aggregate Genre")?;
        Ok(self)
    }

    /// Add one category. Adding an already-present id is a no-op.
    pub fn add_category(&mut self, id: CategoryId) -> Result<&mut Self, DomainError> {
        if !self.categories.contains(&id) {
            self.categories.push(id);
            self.updated_at = now();
        }
        self.self_validate("Failed to update a Aggregate Genre")?;
        Ok(self)
    }

    pub fn add_categories(
        &mut self,
        ids: impl IntoIterator<Item = CategoryId>,
    ) -> Result<&mut Self, DomainError> {
        let before = self.categories.len();
        let merged = unique_ids(self.categories.drain(..).chain(ids));
        self.categories = merged;
        if self.categories.len() != before {
            self.updated_at = now();
        }
        self.self_validate("Failed to update a Aggregate Genre")?;
        Ok(self)
    }

    pub fn remove_category(&mut self, id: &CategoryId) -> Result<&mut Self, DomainError> {
        let before = self.categories.len();
        self.categories.retain(|existing| existing != id);
        if self.categories.len() != before {
            self.updated_at = now();
        }
        self.self_validate("Failed to update a Aggregate Genre")?;
        Ok(self)
    }

    pub fn validate(&self, handler: &mut Notification) {
        GenreValidator::new(&self.name).validate(handler);
    }

    fn self_validate(&self, message: &str) -> Result<(), DomainError> {
        let mut notification = Notification::new();
        self.validate(&mut notification);
        notification.into_result(message)
    }

    fn set_active(&mut self) {
        self.deleted_at = None;
        self.active = true;
    }

    fn set_inactive(&mut self) {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now());
        }
        self.active = false;
    }

    pub fn id(&self) -> &GenreId {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub const fn is_active(&self) -> bool {
        self.active
    }
    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

/// Field rules for [`Genre`].
pub struct GenreValidator<'a> {
    name: &'a str,
}

impl<'a> GenreValidator<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }
}

impl Validator for GenreValidator<'_> {
    fn validate(&self, handler: &mut Notification) {
        handler.check(rules::required_text(
            "name",
            self.name,
            NAME_MIN_LENGTH,
            NAME_MAX_LENGTH,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action() -> Genre {
        Genre::new_genre("Action", true).unwrap()
    }

    #[test]
    fn new_genre_starts_without_categories() {
        let genre = action();
        assert_eq!(genre.name(), "Action");
        assert!(genre.is_active());
        assert!(genre.categories().is_empty());
        assert!(genre.deleted_at().is_none());
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Genre::new_genre(" ", true).unwrap_err();
        assert_eq!(err.errors()[0].message(), "'name' should not be empty");
    }

    #[test]
    fn name_longer_than_255_is_rejected() {
        let err = Genre::new_genre("g".repeat(256), true).unwrap_err();
        assert_eq!(
            err.errors()[0].message(),
            "'name' must be between 1 and 255 characters"
        );
    }

    #[test]
    fn add_category_ignores_duplicates() {
        let mut genre = action();
        genre.add_category(CategoryId::from("123")).unwrap();
        genre.add_category(CategoryId::from("123")).unwrap();
        genre
            .add_categories([CategoryId::from("456"), CategoryId::from("123")])
            .unwrap();

        assert_eq!(
            genre.categories(),
            &[CategoryId::from("123"), CategoryId::from("456")]
        );
    }

    #[test]
    fn remove_category() {
        let mut genre = action();
        genre
            .add_categories([CategoryId::from("1"), CategoryId::from("2")])
            .unwrap();
        genre.remove_category(&CategoryId::from("1")).unwrap();
        assert_eq!(genre.categories(), &[CategoryId::from("2")]);
    }

    #[test]
    fn update_replaces_categories_and_deactivates() {
        let mut genre = action();
        genre.add_category(CategoryId::from("1")).unwrap();

        genre
            .update("Drama", false, vec![CategoryId::from("2")])
            .unwrap();

        assert_eq!(genre.name(), "Drama");
        assert!(!genre.is_active());
        assert!(genre.deleted_at().is_some());
        assert_eq!(genre.categories(), &[CategoryId::from("2")]);
    }

    #[test]
    fn failed_update_leaves_genre_untouched() {
        let mut genre = action();
        let before = genre.clone();
        assert!(genre.update("", false, vec![]).is_err());
        assert_eq!(genre, before);
    }

    #[test]
    fn validate_is_idempotent() {
        let mut genre = action();
        genre.add_category(CategoryId::from("1")).unwrap();
        let before = genre.clone();

        for _ in 0..2 {
            let mut notification = Notification::new();
            genre.validate(&mut notification);
            assert!(!notification.has_error());
        }
        assert_eq!(genre, before);
    }
}
