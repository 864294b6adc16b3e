//! Daily orders to order-placed batch.
//!
//! Today's order lines are matched against soft inventory to suggest a stock
//! status per line; the operator can override any suggestion, then posts the
//! selected lines as one batch.

use std::collections::HashMap;

use contracts::domain::inventory::InventoryItem;
use contracts::domain::order::{BatchLine, CreateOrderPlacedBatchDto, DailyOrderLine, StockStatus};
use thiserror::Error;

/// Stock status suggested for a line ordering `ordered` units.
///
/// `available` is `None` when soft inventory has no record for the product.
pub fn suggest_stock_status(ordered: i64, available: Option<i64>) -> StockStatus {
    match available {
        None => StockStatus::Unknown,
        Some(a) if a <= 0 => StockStatus::OutOfStock,
        Some(a) if a >= ordered => StockStatus::InStock,
        Some(_) => StockStatus::Partial,
    }
}

/// Soft stock per product and size
#[derive(Debug, Default)]
pub struct Availability(HashMap<(String, Option<String>), i64>);

impl Availability {
    pub fn from_items(items: &[InventoryItem]) -> Self {
        let mut map = HashMap::new();
        for item in items {
            *map.entry((item.product_id.clone(), normalize_size(item.size.as_deref())))
                .or_insert(0) += item.quantity;
        }
        Self(map)
    }

    pub fn for_line(&self, line: &DailyOrderLine) -> Option<i64> {
        self.0
            .get(&(line.product_id.clone(), normalize_size(line.size.as_deref())))
            .copied()
    }
}

fn normalize_size(size: Option<&str>) -> Option<String> {
    size.map(|s| s.trim().to_uppercase()).filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyLineRow {
    pub line: DailyOrderLine,
    pub available: Option<i64>,
    pub status: StockStatus,
    /// Set once the operator picked a status by hand
    pub overridden: bool,
}

pub fn build_rows(lines: Vec<DailyOrderLine>, availability: &Availability) -> Vec<DailyLineRow> {
    lines
        .into_iter()
        .map(|line| {
            let available = availability.for_line(&line);
            DailyLineRow {
                status: suggest_stock_status(line.quantity, available),
                available,
                overridden: false,
                line,
            }
        })
        .collect()
}

/// Record a manual status for the line `line_id`
pub fn override_status(rows: &mut [DailyLineRow], line_id: &str, status: StockStatus) {
    if let Some(row) = rows.iter_mut().find(|r| r.line.id == line_id) {
        row.status = status;
        row.overridden = true;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("Select at least one order line")]
    NothingSelected,
    #[error("{0} selected line(s) still have an unknown stock status")]
    UnknownStatus(usize),
}

/// Batch body for the selected rows, in row order.
pub fn batch_request(
    date: &str,
    rows: &[DailyLineRow],
    is_selected: impl Fn(&str) -> bool,
) -> Result<CreateOrderPlacedBatchDto, BatchError> {
    let selected: Vec<&DailyLineRow> = rows.iter().filter(|r| is_selected(&r.line.id)).collect();
    if selected.is_empty() {
        return Err(BatchError::NothingSelected);
    }
    let unknown = selected
        .iter()
        .filter(|r| r.status == StockStatus::Unknown)
        .count();
    if unknown > 0 {
        return Err(BatchError::UnknownStatus(unknown));
    }
    Ok(CreateOrderPlacedBatchDto {
        date: date.to_string(),
        lines: selected
            .into_iter()
            .map(|r| BatchLine {
                order_line_id: r.line.id.clone(),
                stock_status: r.status,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, product_id: &str, size: Option<&str>, quantity: i64) -> DailyOrderLine {
        DailyOrderLine {
            id: id.to_string(),
            order_id: format!("o-{}", id),
            order_number: format!("WZ-{}", id),
            product_id: product_id.to_string(),
            product_name: "Linen shirt".to_string(),
            sku: "LS-01".to_string(),
            size: size.map(str::to_string),
            quantity,
        }
    }

    fn stock(product_id: &str, size: Option<&str>, quantity: i64) -> InventoryItem {
        InventoryItem {
            id: format!("inv-{}-{:?}", product_id, size),
            product_id: product_id.to_string(),
            product_name: "Linen shirt".to_string(),
            sku: "LS-01".to_string(),
            size: size.map(str::to_string),
            quantity,
            updated_at: None,
        }
    }

    #[test]
    fn test_suggestion_thresholds() {
        assert_eq!(suggest_stock_status(2, Some(5)), StockStatus::InStock);
        assert_eq!(suggest_stock_status(2, Some(2)), StockStatus::InStock);
        assert_eq!(suggest_stock_status(3, Some(1)), StockStatus::Partial);
        assert_eq!(suggest_stock_status(3, Some(0)), StockStatus::OutOfStock);
        assert_eq!(suggest_stock_status(3, Some(-2)), StockStatus::OutOfStock);
        assert_eq!(suggest_stock_status(3, None), StockStatus::Unknown);
    }

    #[test]
    fn test_availability_matches_product_and_size() {
        let availability = Availability::from_items(&[
            stock("p1", Some("M"), 4),
            stock("p1", Some("L"), 0),
            stock("p2", None, 7),
        ]);
        assert_eq!(availability.for_line(&line("1", "p1", Some(" m "), 1)), Some(4));
        assert_eq!(availability.for_line(&line("2", "p1", Some("L"), 1)), Some(0));
        assert_eq!(availability.for_line(&line("3", "p2", None, 1)), Some(7));
        assert_eq!(availability.for_line(&line("4", "p1", Some("XL"), 1)), None);
    }

    #[test]
    fn test_build_rows_suggests_per_line() {
        let availability = Availability::from_items(&[stock("p1", Some("M"), 2)]);
        let rows = build_rows(
            vec![line("1", "p1", Some("M"), 1), line("2", "p1", Some("M"), 5), line("3", "p9", None, 1)],
            &availability,
        );
        let statuses: Vec<_> = rows.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![StockStatus::InStock, StockStatus::Partial, StockStatus::Unknown]
        );
        assert!(rows.iter().all(|r| !r.overridden));
    }

    #[test]
    fn test_stock_on_a_later_page_is_found() {
        use contracts::shared::{PageQuery, Pagination};

        let all: Vec<InventoryItem> = (0..1001).map(|i| stock(&format!("p{}", i), None, 3)).collect();
        let page_size = 500;
        let total_pages = (all.len() as u64).div_ceil(page_size as u64);

        // walk the pages the way the loader does
        let mut collected = Vec::new();
        let mut query = Some(PageQuery::from_page_index(0, page_size));
        while let Some(current) = query.take() {
            let start = (current.page - 1) * page_size;
            collected.extend(all.iter().skip(start).take(page_size).cloned());
            let pagination = Pagination {
                total: all.len() as u64,
                page: current.page as u64,
                limit: page_size as u64,
                total_pages,
                has_next_page: (current.page as u64) < total_pages,
                has_prev_page: current.page > 1,
            };
            query = current.next_after(Some(&pagination));
        }
        assert_eq!(collected.len(), 1001);

        let rows = build_rows(vec![line("1", "p1000", None, 2)], &Availability::from_items(&collected));
        assert_eq!(rows[0].available, Some(3));
        assert_eq!(rows[0].status, StockStatus::InStock);
    }

    #[test]
    fn test_override_replaces_suggestion() {
        let mut rows = build_rows(vec![line("1", "p9", None, 1)], &Availability::default());
        override_status(&mut rows, "1", StockStatus::OutOfStock);
        assert_eq!(rows[0].status, StockStatus::OutOfStock);
        assert!(rows[0].overridden);
    }

    #[test]
    fn test_batch_requires_selection() {
        let rows = build_rows(vec![line("1", "p1", None, 1)], &Availability::default());
        assert_eq!(
            batch_request("2024-05-01", &rows, |_| false).unwrap_err(),
            BatchError::NothingSelected
        );
    }

    #[test]
    fn test_unknown_selected_line_blocks_batch() {
        let availability = Availability::from_items(&[stock("p1", None, 3)]);
        let rows = build_rows(vec![line("1", "p1", None, 1), line("2", "p9", None, 1)], &availability);
        assert_eq!(
            batch_request("2024-05-01", &rows, |_| true).unwrap_err(),
            BatchError::UnknownStatus(1)
        );

        // an unselected unknown line does not block
        let dto = batch_request("2024-05-01", &rows, |id| id == "1").unwrap();
        assert_eq!(dto.date, "2024-05-01");
        assert_eq!(
            dto.lines,
            vec![BatchLine {
                order_line_id: "1".to_string(),
                stock_status: StockStatus::InStock
            }]
        );
    }
}
