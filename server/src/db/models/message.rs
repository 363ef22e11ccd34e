//! Message Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Message ID type
pub type MessageId = RecordId;

/// Message model matching SurrealDB schema
///
/// Messages hang off a request; `offer_id` is only set when the message
/// refers to a concrete offer. Foreign keys are stored as given, there is
/// no existence check on send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<MessageId>,
    #[serde(with = "serde_helpers::record_id")]
    pub request_id: RecordId,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub offer_id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub sender_id: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub receiver_id: RecordId,
    pub content: String,
    pub created_at: i64,
}
