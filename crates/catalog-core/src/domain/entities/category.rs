//! The `Category` aggregate.
//!
//! A category exists only in a valid state: every constructor and mutator
//! runs [`CategoryValidator`] and refuses to hand back an instance that broke
//! a rule. Mutators work on a candidate copy, so a failed update leaves the
//! original untouched.

use chrono::{DateTime, Utc};

use crate::domain::{
    common::{CategoryId, now},
    error::DomainError,
    validation::{Notification, Validator, rules},
};

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Create a new category with a fresh identifier.
    pub fn new_category(
        name: impl Into<String>,
        description: Option<String>,
        active: bool,
    ) -> Result<Self, DomainError> {
        let now = now();
        let category = Self {
            id: CategoryId::unique(),
            name: name.into(),
            description,
            active,
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
        };
        category.self_validate("Failed to create a Aggregate Category")?;
        Ok(category)
    }

    /// Rebuild a category from stored values. Still validated.
    pub fn with(
        id: CategoryId,
        name: impl Into<String>,
        description: Option<String>,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        let category = Self {
            id,
            name: name.into(),
            description,
            active,
            created_at,
            updated_at,
            deleted_at,
        };
        category.self_validate("Failed to load a Aggregate Category")?;
        Ok(category)
    }

    /// Replace name, description and active flag.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        active: bool,
    ) -> Result<&mut Self, DomainError> {
        let mut next = self.clone();
        if active {
            next.set_active();
        } else {
            next.set_inactive();
        }
        next.name = name.into();
        next.description = description;
        next.updated_at = now();
        next.self_validate("Failed to update a Aggregate Category")?;
        *self = next;
        Ok(self)
    }

    pub fn activate(&mut self) -> Result<&mut Self, DomainError> {
        self.set_active();
        self.updated_at = now();
        self.self_validate("Failed to activate a Aggregate Category")?;
        Ok(self)
    }

    pub fn deactivate(&mut self) -> Result<&mut Self, DomainError> {
        self.set_inactive();
        self.updated_at = now();
        self.self_validate("Failed to deactivate a Aggregate Category")?;
        Ok(self)
    }

    /// Run the category rules into `handler`.
    pub fn validate(&self, handler: &mut Notification) {
        CategoryValidator::new(&self.name).validate(handler);
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

    pub fn id(&self) -> &CategoryId {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub const fn is_active(&self) -> bool {
        self.active
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

/// Field rules for [`Category`].
pub struct CategoryValidator<'a> {
    name: &'a str,
}

impl<'a> CategoryValidator<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }
}

impl Validator for CategoryValidator<'_> {
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

    fn errors_of(result: Result<Category, DomainError>) -> Vec<String> {
        match result {
            Err(DomainError::Notification { notification, .. }) => notification
                .iter()
                .map(|e| e.message().to_owned())
                .collect(),
            other => panic!("expected notification error, got {other:?}"),
        }
    }

    #[test]
    fn new_active_category_has_no_deleted_at() {
        let category = Category::new_category("Movies", Some("Most watched".into()), true).unwrap();

        assert_eq!(category.name(), "Movies");
        assert_eq!(category.description(), Some("Most watched"));
        assert!(category.is_active());
        assert!(category.deleted_at().is_none());
        assert_eq!(category.created_at(), category.updated_at());
    }

    #[test]
    fn new_inactive_category_is_soft_deleted() {
        let category = Category::new_category("Movies", None, false).unwrap();
        assert!(!category.is_active());
        assert!(category.deleted_at().is_some());
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(
            errors_of(Category::new_category("  ", None, true)),
            vec!["'name' should not be empty"]
        );
    }

    #[test]
    fn short_and_long_names_are_rejected() {
        let expected = vec!["'name' must be between 3 and 255 characters"];
        assert_eq!(errors_of(Category::new_category("Fi ", None, true)), expected);
        assert_eq!(
            errors_of(Category::new_category("x".repeat(256), None, true)),
            expected
        );
    }

    #[test]
    fn deactivate_then_activate() {
        let mut category = Category::new_category("Movies", None, true).unwrap();

        category.deactivate().unwrap();
        assert!(!category.is_active());
        assert!(category.deleted_at().is_some());

        category.activate().unwrap();
        assert!(category.is_active());
        assert!(category.deleted_at().is_none());
    }

    #[test]
    fn update_changes_fields_and_keeps_identity() {
        let mut category = Category::new_category("Movies", None, true).unwrap();
        let id = category.id().clone();
        let created = category.created_at();

        category
            .update("Films", Some("Updated".into()), false)
            .unwrap();

        assert_eq!(category.id(), &id);
        assert_eq!(category.name(), "Films");
        assert!(!category.is_active());
        assert_eq!(category.created_at(), created);
        assert!(category.updated_at() >= created);
    }

    #[test]
    fn failed_update_leaves_category_untouched() {
        let mut category = Category::new_category("Movies", None, true).unwrap();
        let before = category.clone();

        assert!(category.update("", None, false).is_err());
        assert_eq!(category, before);
    }

    #[test]
    fn validate_is_idempotent() {
        let category = Category::new_category("Movies", None, true).unwrap();
        for _ in 0..2 {
            let mut notification = Notification::new();
            category.validate(&mut notification);
            assert!(!notification.has_error());
        }
    }
}
