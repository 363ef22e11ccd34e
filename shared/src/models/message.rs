//! Message Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// A single message inside a request conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageView {
    pub id: String,
    /// Conversation anchor (String ID)
    pub request_id: String,
    /// Optional offer the message refers to
    #[serde(default)]
    pub offer_id: Option<String>,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub created_at: Timestamp,
}
