use serde::{Deserialize, Serialize};

use crate::shared::EntityCollection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl EntityCollection for Faq {
    const COLLECTION: &'static str = "faqs";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaqDto {
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
}
