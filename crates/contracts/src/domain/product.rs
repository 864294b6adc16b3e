use serde::{Deserialize, Serialize};

use crate::shared::EntityCollection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub category_name: Option<String>,
    pub brand_name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: Option<String>,
}

impl EntityCollection for Product {
    const COLLECTION: &'static str = "products";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStatusDto {
    pub is_active: bool,
}
