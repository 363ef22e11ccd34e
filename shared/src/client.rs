//! Client-related types shared between server and client
//!
//! Request payloads and response envelopes used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::UserInfo;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: crate::models::UserRole,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub business_description: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token response returned by both register and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
    pub user: UserInfo,
}

// =============================================================================
// Marketplace API DTOs
// =============================================================================

/// Payload for posting a new buy request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestCreate {
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
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Payload for submitting an offer on a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferCreate {
    pub request_id: String,
    pub price: f64,
    pub description: String,
    pub delivery_details: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub terms: Option<String>,
}

/// Payload for sending a message in a request conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCreate {
    pub request_id: String,
    #[serde(default)]
    pub offer_id: Option<String>,
    pub receiver_id: String,
    pub content: String,
}

/// Plain acknowledgement body, e.g. `{"message": "Offer accepted"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_create_fills_defaults() {
        let payload: RequestCreate = serde_json::from_str(
            r#"{
                "title": "Office chairs",
                "description": "Ten ergonomic chairs",
                "budget_min": 5000,
                "budget_max": 20000
            }"#,
        )
        .unwrap();
        assert_eq!(payload.quantity, 1);
        assert!(payload.categories.is_empty());
        assert!(payload.location.is_none());
    }

    #[test]
    fn register_request_rejects_unknown_role() {
        let result: Result<RegisterRequest, _> = serde_json::from_str(
            r#"{
                "email": "a@b.co",
                "password": "secret123",
                "full_name": "A",
                "role": "admin"
            }"#,
        );
        assert!(result.is_err());
    }
}
