//! Database Models

// Serde helpers
pub mod serde_helpers;

// Identity
pub mod user;

// Marketplace
pub mod message;
pub mod offer;
pub mod request;

// Re-exports
pub use message::{Message, MessageId};
pub use offer::{Offer, OfferId};
pub use request::{BuyRequest, BuyRequestId};
pub use user::{User, UserId};
