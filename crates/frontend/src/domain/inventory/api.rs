use contracts::domain::inventory::{InventoryItem, InventoryKind, UpdateInventoryDto};
use contracts::shared::{Collection, PageQuery};

use crate::shared::api::{required_data, ApiClient, ApiError, ApiResult};

/// Safety stop for `fetch_all_inventory` against a backend that never reports a last page
const MAX_PAGES: usize = 100;

pub async fn fetch_inventory(
    api: &ApiClient,
    kind: InventoryKind,
    query: PageQuery,
) -> ApiResult<Collection<InventoryItem>> {
    api.get_page(&format!("/inventory/{}", kind.path_segment()), &query).await
}

/// Every record of `kind`, read page by page until the backend reports the last page.
pub async fn fetch_all_inventory(
    api: &ApiClient,
    kind: InventoryKind,
    page_size: usize,
) -> Result<Vec<InventoryItem>, ApiError> {
    let mut items = Vec::new();
    let mut query = Some(PageQuery::from_page_index(0, page_size));
    let mut pages = 0;
    while let Some(current) = query.take() {
        let ok = fetch_inventory(api, kind, current.clone()).await?;
        let next = current.next_after(ok.pagination.as_ref());
        items.extend(required_data(ok)?.into_items());
        pages += 1;
        if pages >= MAX_PAGES && next.is_some() {
            log::warn!("stopped reading {} inventory after {} pages", kind.path_segment(), pages);
            break;
        }
        query = next;
    }
    Ok(items)
}

pub async fn update_quantity(
    api: &ApiClient,
    kind: InventoryKind,
    id: &str,
    quantity: i64,
) -> ApiResult<InventoryItem> {
    let path = format!("/inventory/{}/{}", kind.path_segment(), urlencoding::encode(id));
    api.put_json(&path, &UpdateInventoryDto { quantity }).await
}
