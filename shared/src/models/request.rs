//! Purchase Request Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Request lifecycle status
///
/// The only transition driven by the marketplace core is
/// `Open -> OfferAccepted` (via offer acceptance). `Completed` and
/// `Cancelled` exist for fulfilment flows outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Open,
    OfferAccepted,
    Completed,
    Cancelled,
}

/// Purchase request response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestView {
    pub id: String,
    /// Owning customer (String ID)
    pub customer_id: String,
    pub title: String,
    pub description: String,
    pub budget_min: f64,
    pub budget_max: f64,
    pub categories: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub quantity: u32,
    pub status: RequestStatus,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_snake_case_wire_form() {
        assert_eq!(
            serde_json::to_value(RequestStatus::OfferAccepted).unwrap(),
            serde_json::json!("offer_accepted")
        );
        let parsed: RequestStatus = serde_json::from_value(serde_json::json!("open")).unwrap();
        assert_eq!(parsed, RequestStatus::Open);
    }
}
