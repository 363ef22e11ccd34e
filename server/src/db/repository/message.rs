//! Message Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Message;
use crate::utils::time;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

/// Hard cap on conversation length per fetch
const CONVERSATION_LIMIT: usize = 100;

#[derive(Clone)]
pub struct MessageRepository {
    base: BaseRepository,
}

impl MessageRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Store a message inside a request conversation
    ///
    /// Foreign keys are stored as given; there is no existence check on
    /// the request, offer or receiver.
    pub async fn create(
        &self,
        sender_id: RecordId,
        request_id: RecordId,
        offer_id: Option<RecordId>,
        receiver_id: RecordId,
        content: String,
    ) -> RepoResult<Message> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE message SET
                    request_id = $request_id,
                    offer_id = $offer_id,
                    sender_id = $sender_id,
                    receiver_id = $receiver_id,
                    content = $content,
                    created_at = $created_at
                RETURN AFTER"#,
            )
            .bind(("request_id", request_id))
            .bind(("offer_id", offer_id))
            .bind(("sender_id", sender_id))
            .bind(("receiver_id", receiver_id))
            .bind(("content", content))
            .bind(("created_at", time::now_millis()))
            .await?;

        let created: Option<Message> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create message".to_string()))
    }

    /// Both directions of one pair's conversation on a request, oldest first
    pub async fn find_conversation(
        &self,
        request_id: RecordId,
        user_a: RecordId,
        user_b: RecordId,
    ) -> RepoResult<Vec<Message>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                r#"SELECT * FROM message
                    WHERE request_id = $request
                    AND ((sender_id = $a AND receiver_id = $b)
                        OR (sender_id = $b AND receiver_id = $a))
                    ORDER BY created_at ASC LIMIT {}"#,
                CONVERSATION_LIMIT
            ))
            .bind(("request", request_id))
            .bind(("a", user_a))
            .bind(("b", user_b))
            .await?;
        let messages: Vec<Message> = result.take(0)?;
        Ok(messages)
    }
}
