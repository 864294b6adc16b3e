use serde::{Deserialize, Serialize};

/// Counters shown on the dashboard landing page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSummary {
    pub total_products: u64,
    pub total_orders: u64,
    pub pending_orders: u64,
    pub pending_returns: u64,
    pub low_stock_items: u64,
    pub revenue_today: f64,
}
