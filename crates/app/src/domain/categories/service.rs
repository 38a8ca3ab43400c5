//! Categories service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        categories::{
            data::NewCategory,
            errors::CategoriesServiceError,
            records::{CategoryRecord, CategoryUuid},
            repository::PgCategoriesRepository,
        },
        products::records::ProductRecord,
    },
    pagination::{Page, PageRequest},
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let category = self.repository.get_category(&mut tx, category).await?;

        tx.commit().await?;

        Ok(category)
    }

    async fn list_categories_below(
        &self,
        category: CategoryUuid,
    ) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.get_category(&mut tx, category).await?;

        let descendants = self
            .repository
            .list_categories_below(&mut tx, category)
            .await?;

        tx.commit().await?;

        Ok(descendants)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_category(&mut tx, category.uuid, &category.name, category.parent)
            .await?;

        tx.commit().await?;

        info!(category = %created.uuid, name = %created.name, "created category");

        Ok(created)
    }

    async fn list_products_below(
        &self,
        category: CategoryUuid,
        request: PageRequest,
    ) -> Result<Page<ProductRecord>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.get_category(&mut tx, category).await?;

        let total = self
            .repository
            .count_products_below(&mut tx, category)
            .await?;

        let products = self
            .repository
            .list_products_below(&mut tx, category, request)
            .await?;

        tx.commit().await?;

        Ok(Page::new(products, request, total))
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieves every category, ordered by name.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;

    /// Retrieve a single category.
    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Retrieves every descendant of `category` at any depth, ordered by name.
    /// The category itself is not included.
    async fn list_categories_below(
        &self,
        category: CategoryUuid,
    ) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;

    /// Creates a category, optionally beneath an existing parent.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Pages through the products filed under `category` or any of its
    /// descendants, ordered by model.
    async fn list_products_below(
        &self,
        category: CategoryUuid,
        request: PageRequest,
    ) -> Result<Page<ProductRecord>, CategoriesServiceError>;
}
