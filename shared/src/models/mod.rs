//! Wire Models
//!
//! API response shapes for every marketplace entity. Persisted records are
//! converted into these types at the handler boundary; ids are plain
//! `table:key` strings.

// Identity
pub mod user;

// Marketplace
pub mod message;
pub mod offer;
pub mod request;

// Aggregates
pub mod dashboard;

// Re-exports
pub use dashboard::{CustomerStats, DashboardStats, SellerStats};
pub use message::MessageView;
pub use offer::{OfferStatus, OfferView, OfferWithRequest, OfferWithSeller};
pub use request::{RequestStatus, RequestView};
pub use user::{SubscriptionStatus, UserInfo, UserRole};
