//! Offer Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use soko_shared::models::OfferStatus;
use surrealdb::RecordId;

/// Offer ID type
pub type OfferId = RecordId;

/// Offer model matching SurrealDB schema
///
/// One row per seller per request; the `offer_request_seller_unique`
/// index enforces this below the repository pre-check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<OfferId>,
    #[serde(with = "serde_helpers::record_id")]
    pub request_id: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub seller_id: RecordId,
    pub price: f64,
    pub description: String,
    pub delivery_details: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub terms: Option<String>,
    pub status: OfferStatus,
    pub created_at: i64,
}
