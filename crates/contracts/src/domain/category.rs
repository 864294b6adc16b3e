use serde::{Deserialize, Serialize};

use crate::shared::EntityCollection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub parent_name: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub product_count: u64,
}

impl EntityCollection for Category {
    const COLLECTION: &'static str = "categories";
}
