use serde::{Deserialize, Serialize};

use crate::shared::EntityCollection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    OrderPlaced,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::OrderPlaced => "Order placed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub status: OrderStatus,
    pub total_amount: f64,
    #[serde(default)]
    pub item_count: u32,
    pub created_at: Option<String>,
}

impl EntityCollection for Order {
    const COLLECTION: &'static str = "orders";
}

/// Stock availability recorded by the operator for a daily order line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StockStatus {
    InStock,
    Partial,
    OutOfStock,
    Unknown,
}

impl StockStatus {
    pub const CHOICES: [StockStatus; 4] = [
        StockStatus::InStock,
        StockStatus::Partial,
        StockStatus::OutOfStock,
        StockStatus::Unknown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In stock",
            StockStatus::Partial => "Partial",
            StockStatus::OutOfStock => "Out of stock",
            StockStatus::Unknown => "Unknown",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            StockStatus::InStock => "inStock",
            StockStatus::Partial => "partial",
            StockStatus::OutOfStock => "outOfStock",
            StockStatus::Unknown => "unknown",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::CHOICES.into_iter().find(|s| s.key() == key)
    }
}

/// One product line of an order placed today
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyOrderLine {
    pub id: String,
    pub order_id: String,
    pub order_number: String,
    pub product_id: String,
    pub product_name: String,
    pub sku: String,
    pub size: Option<String>,
    pub quantity: i64,
}

impl EntityCollection for DailyOrderLine {
    const COLLECTION: &'static str = "orderLines";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchLine {
    pub order_line_id: String,
    pub stock_status: StockStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPlacedBatchDto {
    /// `YYYY-MM-DD`
    pub date: String,
    pub lines: Vec<BatchLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPlacedBatch {
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub line_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_key_roundtrips_through_serde_name() {
        for status in StockStatus::CHOICES {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.key()));
            assert_eq!(StockStatus::from_key(status.key()), Some(status));
        }
        assert_eq!(StockStatus::from_key("bogus"), None);
    }

    #[test]
    fn test_order_status_wire_name() {
        let s: OrderStatus = serde_json::from_str("\"orderPlaced\"").unwrap();
        assert_eq!(s, OrderStatus::OrderPlaced);
    }
}
