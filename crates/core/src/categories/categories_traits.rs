use crate::categories::categories_model::Category;
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for category repository operations
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// All categories of a user, sorted by name.
    fn list(&self, user_id: &str) -> Result<Vec<Category>>;
    fn find_by_name(&self, user_id: &str, name: &str) -> Result<Option<Category>>;
    async fn insert(&self, user_id: &str, name: &str) -> Result<Category>;
    /// Inserts every name the user does not have yet. Returns the number inserted.
    async fn insert_missing(&self, user_id: &str, names: Vec<String>) -> Result<usize>;
    async fn delete(&self, user_id: &str, category_id: &str) -> Result<usize>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    /// Category names prefixed with the "All Categories" filter entry.
    fn get_category_names(&self, user_id: &str) -> Result<Vec<String>>;
    fn get_categories(&self, user_id: &str) -> Result<Vec<Category>>;
    /// Looks a category up by name; unknown names are an `InvalidCategory` error.
    fn resolve_category(&self, user_id: &str, name: &str) -> Result<Category>;
    async fn create_category(&self, user_id: &str, name: &str) -> Result<Category>;
    /// Returns the named category, creating it first if needed.
    async fn ensure_category(&self, user_id: &str, name: &str) -> Result<Category>;
    async fn delete_category(&self, user_id: &str, category_id: &str) -> Result<()>;
    async fn seed_default_categories(&self, user_id: &str) -> Result<usize>;
}
