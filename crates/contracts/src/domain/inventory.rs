use serde::{Deserialize, Serialize};

use crate::shared::EntityCollection;

/// Soft inventory is the sellable count shown to the storefront;
/// hard inventory is the physical count in the warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryKind {
    Soft,
    Hard,
}

impl InventoryKind {
    pub fn path_segment(&self) -> &'static str {
        match self {
            InventoryKind::Soft => "soft",
            InventoryKind::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InventoryKind::Soft => "Soft inventory",
            InventoryKind::Hard => "Hard inventory",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub sku: String,
    pub size: Option<String>,
    pub quantity: i64,
    pub updated_at: Option<String>,
}

impl EntityCollection for InventoryItem {
    const COLLECTION: &'static str = "inventory";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInventoryDto {
    pub quantity: i64,
}
