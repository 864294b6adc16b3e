use serde::{Deserialize, Serialize};

use crate::shared::EntityCollection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl EntityCollection for Brand {
    const COLLECTION: &'static str = "brands";
}
