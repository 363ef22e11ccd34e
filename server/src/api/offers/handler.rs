//! Offer API Handlers
//!
//! Listings are enriched at read time: the request owner sees seller
//! details, the seller sees parent request details. Neither join is
//! persisted.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
};
use surrealdb::RecordId;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{OfferRepository, RequestRepository, UserRepository};
use crate::utils::validation::{self, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};
use soko_shared::client::{Ack, OfferCreate};
use soko_shared::models::{OfferView, OfferWithRequest, OfferWithSeller};

/// POST /api/offers - submit an offer on a request (sellers only)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<OfferCreate>,
) -> AppResult<Json<OfferView>> {
    if !user.is_seller() {
        return Err(AppError::Forbidden(
            "Only sellers can create offers".to_string(),
        ));
    }

    validate_required_text(&payload.description, "description", validation::MAX_TEXT_LEN)?;
    validate_required_text(
        &payload.delivery_details,
        "delivery_details",
        validation::MAX_TEXT_LEN,
    )?;
    validate_optional_text(&payload.terms, "terms", validation::MAX_TEXT_LEN)?;
    for image in &payload.images {
        validate_required_text(image, "image", validation::MAX_URL_LEN)?;
    }
    if payload.price <= 0.0 {
        return Err(AppError::Validation("price must be positive".to_string()));
    }

    let request_id: RecordId = payload.request_id.parse().map_err(|_| {
        AppError::Validation(format!("Invalid request_id: {}", payload.request_id))
    })?;

    let request_repo = RequestRepository::new(state.db.clone());
    if request_repo
        .find_by_record(request_id.clone())
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Request not found".to_string()));
    }

    let repo = OfferRepository::new(state.db.clone());
    let offer = repo.create(user.record_id()?, request_id, payload).await?;

    let view: OfferView = offer.into();
    tracing::info!(
        offer_id = %view.id,
        request_id = %view.request_id,
        seller_id = %user.id,
        "Offer created"
    );
    Ok(Json(view))
}

/// GET /api/offers/request/{id} - offers on a request, with seller details
///
/// Sellers may always look; a customer only sees offers on their own
/// request.
pub async fn list_for_request(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<OfferWithSeller>>> {
    let request_repo = RequestRepository::new(state.db.clone());
    let request = request_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Request not found".to_string()))?;

    if user.is_customer() && request.customer_id != user.record_id()? {
        return Err(AppError::Forbidden("Access denied".to_string()));
    }

    let request_record = request
        .id
        .clone()
        .ok_or_else(|| AppError::Internal("Stored request is missing its id".to_string()))?;
    let offer_repo = OfferRepository::new(state.db.clone());
    let offers = offer_repo.find_by_request(request_record).await?;

    // Batch-load the sellers behind these offers
    let seller_ids: Vec<RecordId> = offers.iter().map(|o| o.seller_id.clone()).collect();
    let user_repo = UserRepository::new(state.db.clone());
    let mut sellers = HashMap::new();
    for seller in user_repo.find_by_ids(seller_ids).await? {
        if let Some(seller_id) = seller.id.clone() {
            sellers.insert(seller_id.to_string(), seller);
        }
    }

    let views = offers
        .into_iter()
        .map(|offer| {
            let seller = sellers.get(&offer.seller_id.to_string());
            OfferWithSeller {
                seller_name: seller.map(|s| s.display_name().to_string()),
                seller_location: seller.and_then(|s| s.location.clone()),
                offer: offer.into(),
            }
        })
        .collect();
    Ok(Json(views))
}

/// GET /api/offers/my - the caller's own offers, with request details
pub async fn list_mine(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<OfferWithRequest>>> {
    if !user.is_seller() {
        return Err(AppError::Forbidden(
            "Only sellers can view their offers".to_string(),
        ));
    }

    let offer_repo = OfferRepository::new(state.db.clone());
    let offers = offer_repo.find_by_seller(user.record_id()?).await?;

    let request_ids: Vec<RecordId> = offers.iter().map(|o| o.request_id.clone()).collect();
    let request_repo = RequestRepository::new(state.db.clone());
    let mut requests = HashMap::new();
    for request in request_repo.find_by_ids(request_ids).await? {
        if let Some(request_id) = request.id.clone() {
            requests.insert(request_id.to_string(), request);
        }
    }

    let views = offers
        .into_iter()
        .map(|offer| {
            let request = requests.get(&offer.request_id.to_string());
            OfferWithRequest {
                request_title: request.map(|r| r.title.clone()),
                request_budget: request.map(|r| r.budget_label()),
                offer: offer.into(),
            }
        })
        .collect();
    Ok(Json(views))
}

/// PUT /api/offers/{id}/accept - accept an offer (request owner only)
///
/// Atomically accepts this offer, declines its siblings and closes the
/// request. Re-accepting the winner is a no-op success.
pub async fn accept(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Ack>> {
    let offer_repo = OfferRepository::new(state.db.clone());
    let offer = offer_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Offer not found".to_string()))?;

    let request_repo = RequestRepository::new(state.db.clone());
    let request = request_repo
        .find_by_record(offer.request_id.clone())
        .await?
        .ok_or_else(|| AppError::NotFound("Request not found".to_string()))?;

    if !user.is_customer() || request.customer_id != user.record_id()? {
        return Err(AppError::Forbidden(
            "Only request owner can accept offers".to_string(),
        ));
    }

    let offer_id = offer
        .id
        .clone()
        .ok_or_else(|| AppError::Internal("Stored offer is missing its id".to_string()))?;
    let accepted = offer_repo.accept(offer_id, offer.request_id.clone()).await?;

    tracing::info!(
        offer_id = %id,
        request_id = %accepted.request_id,
        customer_id = %user.id,
        "Offer accepted"
    );
    Ok(Json(Ack {
        message: "Offer accepted successfully".to_string(),
    }))
}
