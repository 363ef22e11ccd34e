//! Shared types for the Soko marketplace
//!
//! Common types used by both soko-server and its clients: wire models,
//! request/response DTOs, and utility types.

pub mod client;
pub mod models;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Wire model re-exports (for convenient access)
pub use models::{
    DashboardStats, MessageView, OfferStatus, OfferView, OfferWithRequest, OfferWithSeller,
    RequestStatus, RequestView, SubscriptionStatus, UserInfo, UserRole,
};
