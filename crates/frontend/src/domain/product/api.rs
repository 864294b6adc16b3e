use contracts::domain::product::{Product, ProductStatusDto};
use contracts::shared::{Collection, PageQuery};

use crate::shared::api::{ApiClient, ApiResult};

pub async fn fetch_products(api: &ApiClient, query: PageQuery) -> ApiResult<Collection<Product>> {
    api.get_page("/products", &query).await
}

/// Show or hide a product in the storefront
pub async fn set_active(api: &ApiClient, id: &str, is_active: bool) -> ApiResult<Product> {
    let path = format!("/products/{}/status", urlencoding::encode(id));
    api.patch_json(&path, &ProductStatusDto { is_active }).await
}

pub async fn delete_product(api: &ApiClient, id: &str) -> ApiResult<serde_json::Value> {
    api.delete(&format!("/products/{}", urlencoding::encode(id))).await
}
