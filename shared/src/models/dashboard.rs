//! Dashboard Models

use serde::{Deserialize, Serialize};

/// Role-specific dashboard counters
///
/// The shape is decided by the caller's role, so the two variants never
/// overlap on the wire and an untagged enum can tell them apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DashboardStats {
    Customer(CustomerStats),
    Seller(SellerStats),
}

/// Counters shown on the customer dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerStats {
    /// Requests ever posted by the customer
    pub total_requests: u64,
    /// Requests still in `open` status
    pub active_requests: u64,
    /// Offers received across all of the customer's requests
    pub total_offers_received: u64,
}

/// Counters shown on the seller dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerStats {
    /// Offers ever submitted by the seller
    pub total_offers: u64,
    pub accepted_offers: u64,
    pub pending_offers: u64,
}
