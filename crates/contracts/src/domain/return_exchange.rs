use serde::{Deserialize, Serialize};

use crate::shared::EntityCollection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnKind {
    Return,
    Exchange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnStatus {
    Requested,
    Approved,
    Rejected,
    Completed,
}

impl ReturnStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReturnStatus::Requested => "Requested",
            ReturnStatus::Approved => "Approved",
            ReturnStatus::Rejected => "Rejected",
            ReturnStatus::Completed => "Completed",
        }
    }

    /// Only requests still awaiting review can be approved or rejected
    pub fn is_pending(&self) -> bool {
        matches!(self, ReturnStatus::Requested)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnExchange {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub kind: ReturnKind,
    pub status: ReturnStatus,
    pub reason: Option<String>,
    pub created_at: Option<String>,
}

impl EntityCollection for ReturnExchange {
    const COLLECTION: &'static str = "returnExchanges";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewReturnDto {
    pub status: ReturnStatus,
    pub note: Option<String>,
}
