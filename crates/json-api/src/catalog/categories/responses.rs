//! Category response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::{domain::categories::records::CategoryRecord, pagination::Page};

use crate::products::responses::ProductResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    pub uuid: Uuid,
    pub name: String,

    /// Parent category; `None` for a top-level category
    pub parent: Option<Uuid>,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        Self {
            uuid: category.uuid.into(),
            name: category.name,
            parent: category.parent.map(Into::into),
        }
    }
}

/// A category page: the category and everything filed beneath it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryTreeResponse {
    pub category: CategoryResponse,

    /// Descendants at any depth, ordered by name
    pub descendants: Vec<CategoryResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductPageResponse {
    pub items: Vec<ProductResponse>,
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl From<Page<ProductResponse>> for ProductPageResponse {
    fn from(page: Page<ProductResponse>) -> Self {
        Self {
            has_next: page.has_next(),
            has_previous: page.has_previous(),
            page: page.page,
            per_page: page.per_page,
            total_items: page.total_items,
            total_pages: page.total_pages,
            items: page.items,
        }
    }
}
