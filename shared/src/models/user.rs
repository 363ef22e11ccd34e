//! User Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Account role deciding which side of the marketplace the user acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Posts purchase requests and accepts offers
    Customer,
    /// Submits offers against open requests
    Seller,
}

impl UserRole {
    /// Wire form of the role, as carried in JWT claims
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Seller => "seller",
        }
    }
}

/// Subscription lifecycle of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Trial,
    Active,
    Expired,
}

/// User response (without password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Seller storefront name, shown instead of `full_name` when set
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub business_description: Option<String>,
    pub is_verified: bool,
    pub subscription_status: SubscriptionStatus,
    pub trial_expires_at: Timestamp,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_uses_snake_case_wire_form() {
        assert_eq!(
            serde_json::to_value(UserRole::Customer).unwrap(),
            serde_json::json!("customer")
        );
        assert_eq!(
            serde_json::to_value(UserRole::Seller).unwrap(),
            serde_json::json!("seller")
        );
        assert!(serde_json::from_value::<UserRole>(serde_json::json!("admin")).is_err());
    }

    #[test]
    fn subscription_status_roundtrip() {
        for (status, wire) in [
            (SubscriptionStatus::Trial, "trial"),
            (SubscriptionStatus::Active, "active"),
            (SubscriptionStatus::Expired, "expired"),
        ] {
            assert_eq!(serde_json::to_value(status).unwrap(), serde_json::json!(wire));
            let parsed: SubscriptionStatus =
                serde_json::from_value(serde_json::json!(wire)).unwrap();
            assert_eq!(parsed, status);
        }
    }
}
