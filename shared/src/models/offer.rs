//! Offer Models

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Offer lifecycle status
///
/// `Pending` is the only non-terminal state: acceptance moves exactly one
/// offer per request to `Accepted` and every sibling to `Declined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Declined,
}

/// Offer response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferView {
    pub id: String,
    /// Parent request (String ID)
    pub request_id: String,
    /// Submitting seller (String ID)
    pub seller_id: String,
    pub price: f64,
    pub description: String,
    pub delivery_details: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub terms: Option<String>,
    pub status: OfferStatus,
    pub created_at: Timestamp,
}

/// Offer enriched with seller details, as seen by the request owner
///
/// The seller fields are joined at read time and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferWithSeller {
    #[serde(flatten)]
    pub offer: OfferView,
    /// Seller display name (`business_name` when set, `full_name` otherwise)
    #[serde(default)]
    pub seller_name: Option<String>,
    #[serde(default)]
    pub seller_location: Option<String>,
}

/// Offer enriched with its parent request, as seen by the submitting seller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferWithRequest {
    #[serde(flatten)]
    pub offer: OfferView,
    #[serde(default)]
    pub request_title: Option<String>,
    /// Formatted budget range, e.g. `"KES 5000-20000"`
    #[serde(default)]
    pub request_budget: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_offer() -> OfferView {
        OfferView {
            id: "offer:abc".into(),
            request_id: "request:xyz".into(),
            seller_id: "user:s1".into(),
            price: 1500.0,
            description: "Handmade".into(),
            delivery_details: "3 days".into(),
            images: vec![],
            terms: None,
            status: OfferStatus::Pending,
            created_at: 1,
        }
    }

    #[test]
    fn enriched_offer_flattens_base_fields() {
        let enriched = OfferWithSeller {
            offer: sample_offer(),
            seller_name: Some("Mama Njeri Crafts".into()),
            seller_location: Some("Nairobi".into()),
        };
        let value = serde_json::to_value(&enriched).unwrap();
        // Base offer fields sit at the top level next to the seller fields
        assert_eq!(value["id"], "offer:abc");
        assert_eq!(value["status"], "pending");
        assert_eq!(value["seller_name"], "Mama Njeri Crafts");
    }

    #[test]
    fn enriched_offer_roundtrips() {
        let enriched = OfferWithRequest {
            offer: sample_offer(),
            request_title: Some("Leather bag".into()),
            request_budget: Some("KES 1000-2000".into()),
        };
        let value = serde_json::to_value(&enriched).unwrap();
        let parsed: OfferWithRequest = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.offer.id, "offer:abc");
        assert_eq!(parsed.request_budget.as_deref(), Some("KES 1000-2000"));
    }
}
