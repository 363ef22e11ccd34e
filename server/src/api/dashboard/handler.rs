//! Dashboard API Handlers

use axum::{Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{OfferRepository, RequestRepository};
use crate::utils::AppResult;
use soko_shared::models::{
    CustomerStats, DashboardStats, OfferStatus, RequestStatus, SellerStats, UserRole,
};

/// GET /api/dashboard/stats - role-shaped activity counters
///
/// Customers see their request ledger, sellers their offer ledger. The
/// closed role enum keeps the match exhaustive.
pub async fn stats(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<DashboardStats>> {
    let stats = match user.role {
        UserRole::Customer => {
            let requests = RequestRepository::new(state.db.clone());
            let offers = OfferRepository::new(state.db.clone());
            let customer = user.record_id()?;

            let total_requests = requests.count_by_customer(customer.clone(), None).await?;
            let active_requests = requests
                .count_by_customer(customer.clone(), Some(RequestStatus::Open))
                .await?;
            // Offers received: count across the customer's request ids
            let request_ids = requests.ids_by_customer(customer).await?;
            let total_offers_received = offers.count_by_requests(request_ids).await?;

            DashboardStats::Customer(CustomerStats {
                total_requests,
                active_requests,
                total_offers_received,
            })
        }
        UserRole::Seller => {
            let offers = OfferRepository::new(state.db.clone());
            let seller = user.record_id()?;

            let total_offers = offers.count_by_seller(seller.clone(), None).await?;
            let accepted_offers = offers
                .count_by_seller(seller.clone(), Some(OfferStatus::Accepted))
                .await?;
            let pending_offers = offers
                .count_by_seller(seller, Some(OfferStatus::Pending))
                .await?;

            DashboardStats::Seller(SellerStats {
                total_offers,
                accepted_offers,
                pending_offers,
            })
        }
    };
    Ok(Json(stats))
}
