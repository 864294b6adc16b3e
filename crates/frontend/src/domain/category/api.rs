use contracts::domain::category::Category;
use contracts::shared::{Collection, PageQuery};
use web_sys::File;

use crate::shared::api::{ApiClient, ApiResult};
use crate::shared::upload::upload_image;

pub async fn fetch_categories(api: &ApiClient, query: PageQuery) -> ApiResult<Collection<Category>> {
    api.get_page("/categories", &query).await
}

/// Create a category, with its image in the same multipart request
pub async fn create_category(
    api: &ApiClient,
    name: &str,
    slug: &str,
    image: Option<&File>,
    max_bytes: u64,
) -> ApiResult<Category> {
    upload_image(api, "/categories", "image", image, &[("name", name), ("slug", slug)], max_bytes).await
}
