use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::categories_model::Category;
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::constants::{ALL_CATEGORIES, DEFAULT_CATEGORIES};
use crate::errors::{DatabaseError, Error, Result};
use crate::utils::validation::require_text;

pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        CategoryService { repository }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    fn get_category_names(&self, user_id: &str) -> Result<Vec<String>> {
        let categories = self.repository.list(user_id)?;
        let mut names = Vec::with_capacity(categories.len() + 1);
        names.push(ALL_CATEGORIES.to_string());
        names.extend(categories.into_iter().map(|c| c.name));
        Ok(names)
    }

    fn get_categories(&self, user_id: &str) -> Result<Vec<Category>> {
        self.repository.list(user_id)
    }

    fn resolve_category(&self, user_id: &str, name: &str) -> Result<Category> {
        self.repository
            .find_by_name(user_id, name.trim())?
            .ok_or_else(|| Error::InvalidCategory(name.to_string()))
    }

    async fn create_category(&self, user_id: &str, name: &str) -> Result<Category> {
        let name = require_text("name", name)?;
        if name == ALL_CATEGORIES {
            return Err(Error::invalid_input(format!("'{}' is reserved", ALL_CATEGORIES)));
        }
        if self.repository.find_by_name(user_id, &name)?.is_some() {
            return Err(Error::ConstraintViolation(format!(
                "Category '{}' already exists",
                name
            )));
        }
        debug!("Creating category '{}' for user {}", name, user_id);
        self.repository
            .insert(user_id, &name)
            .await
            .map_err(|e| match e {
                Error::Database(DatabaseError::UniqueViolation(_)) => {
                    Error::ConstraintViolation(format!("Category '{}' already exists", name))
                }
                other => other,
            })
    }

    async fn ensure_category(&self, user_id: &str, name: &str) -> Result<Category> {
        let name = require_text("name", name)?;
        match self.repository.find_by_name(user_id, &name)? {
            Some(existing) => Ok(existing),
            None => self.create_category(user_id, &name).await,
        }
    }

    async fn delete_category(&self, user_id: &str, category_id: &str) -> Result<()> {
        let deleted = self
            .repository
            .delete(user_id, category_id)
            .await
            .map_err(|e| match e {
                Error::Database(DatabaseError::ForeignKeyViolation(_)) => {
                    Error::ConstraintViolation(
                        "Category is still used by expenses".to_string(),
                    )
                }
                other => other,
            })?;
        if deleted == 0 {
            return Err(Error::NotFound("Category".to_string()));
        }
        Ok(())
    }

    async fn seed_default_categories(&self, user_id: &str) -> Result<usize> {
        let names = DEFAULT_CATEGORIES.iter().map(|n| n.to_string()).collect();
        let inserted = self.repository.insert_missing(user_id, names).await?;
        info!("Seeded {} default categories for user {}", inserted, user_id);
        Ok(inserted)
    }
}
