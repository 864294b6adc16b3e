use contracts::domain::return_exchange::{ReturnExchange, ReturnStatus, ReviewReturnDto};
use contracts::shared::{Collection, PageQuery};

use crate::shared::api::{ApiClient, ApiResult};

pub async fn fetch_returns(api: &ApiClient, query: PageQuery) -> ApiResult<Collection<ReturnExchange>> {
    api.get_page("/return-exchanges", &query).await
}

/// Approve or reject a pending request
pub async fn review(
    api: &ApiClient,
    id: &str,
    status: ReturnStatus,
    note: Option<String>,
) -> ApiResult<ReturnExchange> {
    let path = format!("/return-exchanges/{}/review", urlencoding::encode(id));
    api.patch_json(&path, &ReviewReturnDto { status, note }).await
}
