//! Message API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use surrealdb::RecordId;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::MessageRepository;
use crate::utils::validation::{self, validate_required_text};
use crate::utils::{AppError, AppResult};
use soko_shared::client::MessageCreate;
use soko_shared::models::MessageView;

/// 会话查询参数: 对端用户
#[derive(Debug, Deserialize)]
pub struct ConversationQuery {
    pub other_user_id: String,
}

/// POST /api/messages - 在请求会话里发送消息
///
/// 发送方由令牌决定, 对 request/offer/receiver 不做存在性校验。
pub async fn send(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<MessageCreate>,
) -> AppResult<Json<MessageView>> {
    validate_required_text(&payload.content, "content", validation::MAX_TEXT_LEN)?;

    let request_id: RecordId = payload.request_id.parse().map_err(|_| {
        AppError::Validation(format!("Invalid request_id: {}", payload.request_id))
    })?;
    let receiver_id: RecordId = payload.receiver_id.parse().map_err(|_| {
        AppError::Validation(format!("Invalid receiver_id: {}", payload.receiver_id))
    })?;
    let offer_id = match &payload.offer_id {
        Some(raw) => Some(
            raw.parse::<RecordId>()
                .map_err(|_| AppError::Validation(format!("Invalid offer_id: {}", raw)))?,
        ),
        None => None,
    };

    let repo = MessageRepository::new(state.db.clone());
    let message = repo
        .create(
            user.record_id()?,
            request_id,
            offer_id,
            receiver_id,
            payload.content,
        )
        .await?;

    let view: MessageView = message.into();
    tracing::info!(
        message_id = %view.id,
        request_id = %view.request_id,
        sender_id = %user.id,
        "Message sent"
    );
    Ok(Json(view))
}

/// GET /api/messages/conversation/{request_id}?other_user_id= - 拉取会话
///
/// 返回调用者与对端在该请求下双向的全部消息, 按时间升序。
pub async fn conversation(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(request_id): Path<String>,
    Query(query): Query<ConversationQuery>,
) -> AppResult<Json<Vec<MessageView>>> {
    let request_id: RecordId = request_id
        .parse()
        .map_err(|_| AppError::Validation(format!("Invalid request_id: {}", request_id)))?;
    let other_user_id: RecordId = query.other_user_id.parse().map_err(|_| {
        AppError::Validation(format!("Invalid other_user_id: {}", query.other_user_id))
    })?;

    let repo = MessageRepository::new(state.db.clone());
    let messages = repo
        .find_conversation(request_id, user.record_id()?, other_user_id)
        .await?;
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}
