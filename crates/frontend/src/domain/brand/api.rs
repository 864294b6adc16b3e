use contracts::domain::brand::Brand;
use contracts::shared::{Collection, PageQuery};
use web_sys::File;

use crate::shared::api::{ApiClient, ApiResult};
use crate::shared::upload::upload_image;

pub async fn fetch_brands(api: &ApiClient, query: PageQuery) -> ApiResult<Collection<Brand>> {
    api.get_page("/brands", &query).await
}

/// Create a brand together with its logo
pub async fn create_brand(
    api: &ApiClient,
    name: &str,
    description: &str,
    logo: &File,
    max_bytes: u64,
) -> ApiResult<Brand> {
    let fields = [("name", name), ("description", description)];
    upload_image(api, "/brands", "logo", Some(logo), &fields, max_bytes).await
}

pub async fn delete_brand(api: &ApiClient, id: &str) -> ApiResult<serde_json::Value> {
    api.delete(&format!("/brands/{}", urlencoding::encode(id))).await
}
