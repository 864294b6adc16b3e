use contracts::domain::dashboard::DashboardSummary;

use crate::shared::api::{ApiClient, ApiResult};

pub async fn fetch_summary(api: &ApiClient) -> ApiResult<DashboardSummary> {
    api.get("/dashboard/summary").await
}
