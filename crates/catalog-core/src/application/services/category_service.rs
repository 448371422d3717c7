//! Category Service - category use cases.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::ports::CategoryGateway,
    domain::{AggregateKind, Category, CategoryId, DomainError},
    error::CatalogResult,
};

/// Input for [`CategoryService::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

/// Input for [`CategoryService::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategory {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

pub struct CategoryService {
    categories: Arc<dyn CategoryGateway>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryGateway>) -> Self {
        Self { categories }
    }

    #[instrument(skip_all, fields(name = %command.name))]
    pub fn create(&self, command: CreateCategory) -> CatalogResult<CategoryId> {
        let category = Category::new_category(command.name, command.description, command.active)?;
        let created = self.categories.create(category)?;

        info!(id = %created.id(), "Category created");
        Ok(created.id().clone())
    }

    #[instrument(skip_all, fields(id = %command.id))]
    pub fn update(&self, command: UpdateCategory) -> CatalogResult<CategoryId> {
        let mut category = self.get(&command.id)?;
        category.update(command.name, command.description, command.active)?;
        let updated = self.categories.update(category)?;

        info!("Category updated");
        Ok(updated.id().clone())
    }

    pub fn get(&self, id: &CategoryId) -> CatalogResult<Category> {
        self.categories
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found(AggregateKind::Category, id).into())
    }

    /// Delete a category. Unknown ids are ignored.
    #[instrument(skip_all, fields(id = %id))]
    pub fn delete(&self, id: &CategoryId) -> CatalogResult<()> {
        self.categories.delete_by_id(id)?;
        info!("Category deleted");
        Ok(())
    }

    pub fn list(&self) -> CatalogResult<Vec<Category>> {
        self.categories.list()
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::{application::ports::MockCategoryGateway, error::CatalogError};

    fn create_command(name: &str) -> CreateCategory {
        CreateCategory {
            name: name.into(),
            description: Some("Most watched".into()),
            active: true,
        }
    }

    #[test]
    fn create_persists_a_valid_category() {
        let mut gateway = MockCategoryGateway::new();
        gateway
            .expect_create()
            .times(1)
            .withf(|category| category.name() == "Movies" && category.is_active())
            .returning(|category| Ok(category));

        let service = CategoryService::new(Arc::new(gateway));
        let id = service.create(create_command("Movies")).unwrap();
        assert!(!id.as_str().is_empty());
    }

    #[test]
    fn create_with_invalid_name_never_reaches_the_gateway() {
        let mut gateway = MockCategoryGateway::new();
        gateway.expect_create().never();

        let service = CategoryService::new(Arc::new(gateway));
        let err = service.create(create_command(" ")).unwrap_err();

        assert_eq!(err.to_string(), "Failed to create a Aggregate Category");
        assert_eq!(err.errors()[0].message(), "'name' should not be empty");
    }

    #[test]
    fn update_of_unknown_category_is_not_found() {
        let mut gateway = MockCategoryGateway::new();
        gateway
            .expect_find_by_id()
            .with(eq(CategoryId::from("123")))
            .times(1)
            .returning(|_| Ok(None));
        gateway.expect_update().never();

        let service = CategoryService::new(Arc::new(gateway));
        let err = service
            .update(UpdateCategory {
                id: "123".into(),
                name: "Movies".into(),
                description: None,
                active: true,
            })
            .unwrap_err();

        assert_eq!(err.to_string(), "Category with ID 123 was not found");
    }

    #[test]
    fn update_replaces_fields_of_the_stored_category() {
        let stored = Category::new_category("Movies", None, true).unwrap();
        let id = stored.id().clone();

        let mut gateway = MockCategoryGateway::new();
        gateway
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        gateway
            .expect_update()
            .times(1)
            .withf(|category| category.name() == "Films" && !category.is_active())
            .returning(|category| Ok(category));

        let service = CategoryService::new(Arc::new(gateway));
        let updated = service
            .update(UpdateCategory {
                id: id.clone(),
                name: "Films".into(),
                description: None,
                active: false,
            })
            .unwrap();
        assert_eq!(updated, id);
    }

    #[test]
    fn gateway_failures_propagate() {
        let mut gateway = MockCategoryGateway::new();
        gateway
            .expect_list()
            .returning(|| Err(CatalogError::internal("store offline")));

        let service = CategoryService::new(Arc::new(gateway));
        assert!(service.list().is_err());
    }

    #[test]
    fn delete_forwards_to_the_gateway() {
        let mut gateway = MockCategoryGateway::new();
        gateway
            .expect_delete_by_id()
            .with(eq(CategoryId::from("123")))
            .times(1)
            .returning(|_| Ok(()));

        let service = CategoryService::new(Arc::new(gateway));
        service.delete(&CategoryId::from("123")).unwrap();
    }
}
