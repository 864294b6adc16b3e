use contracts::domain::faq::{CreateFaqDto, Faq};
use contracts::shared::{Collection, PageQuery};

use crate::shared::api::{ApiClient, ApiResult};

pub async fn fetch_faqs(api: &ApiClient, query: PageQuery) -> ApiResult<Collection<Faq>> {
    api.get_page("/faqs", &query).await
}

pub async fn create_faq(api: &ApiClient, dto: &CreateFaqDto) -> ApiResult<Faq> {
    api.post_json("/faqs", dto).await
}

pub async fn delete_faq(api: &ApiClient, id: &str) -> ApiResult<serde_json::Value> {
    api.delete(&format!("/faqs/{}", urlencoding::encode(id))).await
}
