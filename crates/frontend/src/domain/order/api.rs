use contracts::domain::order::{CreateOrderPlacedBatchDto, DailyOrderLine, Order, OrderPlacedBatch};
use contracts::shared::{Collection, PageQuery};

use crate::shared::api::{ApiClient, ApiResult};

pub async fn fetch_orders(api: &ApiClient, query: PageQuery) -> ApiResult<Collection<Order>> {
    api.get_page("/orders", &query).await
}

/// Order lines of every order placed on `date` (`YYYY-MM-DD`)
pub async fn fetch_daily_lines(api: &ApiClient, date: &str) -> ApiResult<Collection<DailyOrderLine>> {
    api.get(&format!("/orders/daily?date={}", urlencoding::encode(date))).await
}

pub async fn create_order_placed_batch(
    api: &ApiClient,
    dto: &CreateOrderPlacedBatchDto,
) -> ApiResult<OrderPlacedBatch> {
    api.post_json("/orders/order-placed-batches", dto).await
}
