//! Category Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    catalog::categories::{errors::into_status_error, responses::CategoryResponse},
    extensions::*,
    state::State,
};

/// Category Index Handler
///
/// The shop page: every category, ordered by name.
#[endpoint(tags("catalog"), summary = "List Categories")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<CategoryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .categories
        .list_categories()
        .await
        .map_err(into_status_error)?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::categories::{
        CategoriesServiceError, MockCategoriesService, records::CategoryUuid,
    };

    use crate::test_helpers::{categories_service, make_category};

    use super::*;

    fn make_service(categories: MockCategoriesService) -> Service {
        categories_service(categories, Router::with_path("catalog/categories").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_categories() -> TestResult {
        let kitchen = make_category(CategoryUuid::new(), "Kitchen");
        let garden = make_category(CategoryUuid::new(), "Garden");

        let mut categories = MockCategoriesService::new();

        categories
            .expect_list_categories()
            .once()
            .return_once(move || Ok(vec![garden, kitchen]));

        let mut res = TestClient::get("http://example.com/catalog/categories")
            .send(&make_service(categories))
            .await;

        let body: Vec<CategoryResponse> = res.take_json().await?;
        let names: Vec<&str> = body.iter().map(|category| category.name.as_str()).collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(names, vec!["Garden", "Kitchen"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_failure_returns_500() {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_list_categories()
            .once()
            .return_once(|| Err(CategoriesServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/catalog/categories")
            .send(&make_service(categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
