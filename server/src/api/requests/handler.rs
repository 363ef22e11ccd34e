//! Buy Request API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{RequestFilters, RequestRepository};
use crate::utils::validation::{self, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};
use soko_shared::client::RequestCreate;
use soko_shared::models::RequestView;

/// 开放请求列表的过滤参数
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub min_budget: Option<f64>,
    pub max_budget: Option<f64>,
    pub location: Option<String>,
}

/// POST /api/requests - 创建采购请求 (仅客户)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<RequestCreate>,
) -> AppResult<Json<RequestView>> {
    if !user.is_customer() {
        return Err(AppError::Forbidden(
            "Only customers can create requests".to_string(),
        ));
    }

    validate_required_text(&payload.title, "title", validation::MAX_TITLE_LEN)?;
    validate_required_text(&payload.description, "description", validation::MAX_TEXT_LEN)?;
    validate_optional_text(&payload.location, "location", validation::MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.timeline, "timeline", validation::MAX_SHORT_TEXT_LEN)?;
    for image in &payload.images {
        validate_required_text(image, "image", validation::MAX_URL_LEN)?;
    }
    if payload.budget_min < 0.0 {
        return Err(AppError::Validation(
            "budget_min must not be negative".to_string(),
        ));
    }
    if payload.budget_max < payload.budget_min {
        return Err(AppError::Validation(
            "budget_max must not be below budget_min".to_string(),
        ));
    }
    if payload.quantity < 1 {
        return Err(AppError::Validation(
            "quantity must be at least 1".to_string(),
        ));
    }

    let repo = RequestRepository::new(state.db.clone());
    let request = repo.create(user.record_id()?, payload).await?;

    let view: RequestView = request.into();
    tracing::info!(
        request_id = %view.id,
        customer_id = %user.id,
        "Buy request created"
    );
    Ok(Json(view))
}

/// GET /api/requests - 浏览开放的采购请求 (支持过滤)
///
/// 过滤参数见 [`ListQuery`]，预算按区间重叠匹配。
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<RequestView>>> {
    let repo = RequestRepository::new(state.db.clone());
    let requests = repo
        .find_open(RequestFilters {
            category: query.category,
            min_budget: query.min_budget,
            max_budget: query.max_budget,
            location: query.location,
        })
        .await?;
    Ok(Json(requests.into_iter().map(Into::into).collect()))
}

/// GET /api/requests/my - 当前客户自己的请求列表
pub async fn list_mine(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<RequestView>>> {
    if !user.is_customer() {
        return Err(AppError::Forbidden(
            "Only customers can view their requests".to_string(),
        ));
    }

    let repo = RequestRepository::new(state.db.clone());
    let requests = repo.find_by_customer(user.record_id()?).await?;
    Ok(Json(requests.into_iter().map(Into::into).collect()))
}

/// GET /api/requests/{id} - 查看单个请求
///
/// 任何已认证用户都可以读取，不做属主校验。
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<RequestView>> {
    let repo = RequestRepository::new(state.db.clone());
    let request = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Request not found".to_string()))?;
    Ok(Json(request.into()))
}
