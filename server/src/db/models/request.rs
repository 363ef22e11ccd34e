//! Buy Request Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use soko_shared::models::RequestStatus;
use surrealdb::RecordId;

/// Buy request ID type
pub type BuyRequestId = RecordId;

/// Buy request model matching SurrealDB schema (table `request`)
///
/// The customer posts what they want to buy; sellers bid on it with
/// offers. `status` drives the ledger: only `open` requests appear in
/// the marketplace listing and only `open` requests can accept an offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyRequest {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<BuyRequestId>,
    #[serde(with = "serde_helpers::record_id")]
    pub customer_id: RecordId,
    pub title: String,
    pub description: String,
    pub budget_min: f64,
    pub budget_max: f64,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    /// 参考图片 URL 列表
    #[serde(default)]
    pub images: Vec<String>,
    pub quantity: u32,
    pub status: RequestStatus,
    pub created_at: i64,
}

impl BuyRequest {
    /// Budget range label shown on seller-side listings, e.g. `KES 1000-2000`
    pub fn budget_label(&self) -> String {
        format!("KES {}-{}", self.budget_min, self.budget_max)
    }
}
