use crate::categories::categories_model::{Category, NewCategory};
use crate::categories::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::{Result, ValidationError};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct CategoryService<T: CategoryRepositoryTrait> {
    category_repository: Arc<T>,
}

impl<T: CategoryRepositoryTrait> CategoryService<T> {
    pub fn new(category_repository: Arc<T>) -> Self {
        CategoryService {
            category_repository,
        }
    }
}

#[async_trait]
impl<T: CategoryRepositoryTrait + Send + Sync> CategoryServiceTrait for CategoryService<T> {
    fn get_categories(&self) -> Result<Vec<Category>> {
        self.category_repository.get_categories()
    }

    fn get_category(&self, category_id: &str) -> Result<Option<Category>> {
        self.category_repository.get_category_by_id(category_id)
    }

    fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        let categories = self.category_repository.get_categories()?;
        Ok(categories.into_iter().find(|c| c.slug() == slug))
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        if new_category.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }

        let now = Utc::now();
        let category = Category {
            id: new_category
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_category.name.trim().to_string(),
            description: new_category.description,
            created_at: now,
            updated_at: now,
        };

        self.category_repository.create_category(category).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::RwLock;

    struct MockCategoryRepository {
        categories: RwLock<Vec<Category>>,
    }

    impl MockCategoryRepository {
        fn new(categories: Vec<Category>) -> Self {
            Self {
                categories: RwLock::new(categories),
            }
        }
    }

    #[async_trait]
    impl CategoryRepositoryTrait for MockCategoryRepository {
        fn get_categories(&self) -> Result<Vec<Category>> {
            Ok(self.categories.read().unwrap().clone())
        }

        fn get_category_by_id(&self, category_id: &str) -> Result<Option<Category>> {
            Ok(self
                .categories
                .read()
                .unwrap()
                .iter()
                .find(|c| c.id == category_id)
                .cloned())
        }

        async fn create_category(&self, new_category: Category) -> Result<Category> {
            self.categories.write().unwrap().push(new_category.clone());
            Ok(new_category)
        }
    }

    fn make_category(id: &str, name: &str) -> Category {
        let now = Utc::now();
        Category {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_slug_is_lowercase_and_hyphenated() {
        let category = make_category("cat1", "Ocio y Tiempo Libre");
        assert_eq!(category.slug(), "ocio-y-tiempo-libre");
    }

    #[test]
    fn test_get_category_by_slug() {
        let repository = Arc::new(MockCategoryRepository::new(vec![
            make_category("cat1", "Alimentación"),
            make_category("cat2", "Suscripciones"),
        ]));
        let service = CategoryService::new(repository);

        let found = service.get_category_by_slug("suscripciones").unwrap();
        assert_eq!(found.unwrap().id, "cat2");

        let missing = service.get_category_by_slug("transporte").unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_create_category_requires_name() {
        let repository = Arc::new(MockCategoryRepository::new(vec![]));
        let service = CategoryService::new(repository);

        let result = service
            .create_category(NewCategory {
                id: None,
                name: "   ".to_string(),
                description: String::new(),
            })
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_create_category_mints_id_and_trims_name() {
        let repository = Arc::new(MockCategoryRepository::new(vec![]));
        let service = CategoryService::new(repository);

        let created = service
            .create_category(NewCategory {
                id: None,
                name: "  Transporte ".to_string(),
                description: "Bus, metro, gasolina".to_string(),
            })
            .await
            .unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.name, "Transporte");
    }
}
