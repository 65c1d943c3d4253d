use crate::categories::categories_model::{Category, NewCategory};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for category repository operations.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    fn get_categories(&self) -> Result<Vec<Category>>;
    fn get_category_by_id(&self, category_id: &str) -> Result<Option<Category>>;
    async fn create_category(&self, category: Category) -> Result<Category>;
}

/// Trait for category service operations.
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn get_categories(&self) -> Result<Vec<Category>>;
    fn get_category(&self, category_id: &str) -> Result<Option<Category>>;
    fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>>;
    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;
}
