//! Offer Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{BuyRequest, Offer};
use crate::utils::time;
use soko_shared::client::OfferCreate;
use soko_shared::models::{OfferStatus, RequestStatus};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

/// Hard cap on listing sizes
const LIST_LIMIT: usize = 100;

/// Acceptance transaction. `$closed` witnesses the compare-and-set on
/// the request row: the offer and sibling updates only fire when the
/// request went `open -> offer_accepted` in this very transaction, so a
/// late offer on an already closed request can never become `accepted`.
const ACCEPT_TX: &str = r#"BEGIN TRANSACTION;
LET $closed = (UPDATE $request SET status = 'offer_accepted' WHERE status = 'open');
UPDATE $offer SET status = 'accepted' WHERE status = 'pending' AND array::len($closed) > 0;
UPDATE offer SET status = 'declined' WHERE request_id = $request AND id != $offer AND status = 'pending' AND array::len($closed) > 0;
COMMIT TRANSACTION;"#;

#[derive(Clone)]
pub struct OfferRepository {
    base: BaseRepository,
}

impl OfferRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Submit an offer on a request
    ///
    /// One offer per seller per request; the pre-check gives the clean
    /// message, the `offer_request_seller_unique` index backs it up.
    pub async fn create(
        &self,
        seller_id: RecordId,
        request_id: RecordId,
        data: OfferCreate,
    ) -> RepoResult<Offer> {
        // Check duplicate offer
        if self
            .find_by_request_and_seller(request_id.clone(), seller_id.clone())
            .await?
            .is_some()
        {
            return Err(RepoError::Duplicate(
                "You already have an offer for this request".to_string(),
            ));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE offer SET
                    request_id = $request_id,
                    seller_id = $seller_id,
                    price = $price,
                    description = $description,
                    delivery_details = $delivery_details,
                    images = $images,
                    terms = $terms,
                    status = 'pending',
                    created_at = $created_at
                RETURN AFTER"#,
            )
            .bind(("request_id", request_id))
            .bind(("seller_id", seller_id))
            .bind(("price", data.price))
            .bind(("description", data.description))
            .bind(("delivery_details", data.delivery_details))
            .bind(("images", data.images))
            .bind(("terms", data.terms))
            .bind(("created_at", time::now_millis()))
            .await?;

        let created: Option<Offer> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create offer".to_string()))
    }

    /// Find offer by id string ("offer:key")
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Offer>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_record(thing).await
    }

    /// Find offer by native record id
    pub async fn find_by_record(&self, id: RecordId) -> RepoResult<Option<Offer>> {
        let offer: Option<Offer> = self.base.db().select(id).await?;
        Ok(offer)
    }

    /// The one offer a seller holds on a request, if any
    pub async fn find_by_request_and_seller(
        &self,
        request_id: RecordId,
        seller_id: RecordId,
    ) -> RepoResult<Option<Offer>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM offer WHERE request_id = $request AND seller_id = $seller LIMIT 1")
            .bind(("request", request_id))
            .bind(("seller", seller_id))
            .await?;
        let offers: Vec<Offer> = result.take(0)?;
        Ok(offers.into_iter().next())
    }

    /// All offers on a request, newest first
    pub async fn find_by_request(&self, request_id: RecordId) -> RepoResult<Vec<Offer>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM offer WHERE request_id = $request ORDER BY created_at DESC LIMIT {}",
                LIST_LIMIT
            ))
            .bind(("request", request_id))
            .await?;
        let offers: Vec<Offer> = result.take(0)?;
        Ok(offers)
    }

    /// All offers a seller has submitted, newest first
    pub async fn find_by_seller(&self, seller_id: RecordId) -> RepoResult<Vec<Offer>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM offer WHERE seller_id = $seller ORDER BY created_at DESC LIMIT {}",
                LIST_LIMIT
            ))
            .bind(("seller", seller_id))
            .await?;
        let offers: Vec<Offer> = result.take(0)?;
        Ok(offers)
    }

    /// Accept an offer and close its request
    ///
    /// Runs [`ACCEPT_TX`], then judges the outcome from the rows:
    /// `accepted` means the caller won (or had already won, re-accepting
    /// the winner stays a success), anything else means the request was
    /// closed by a different offer. Decided states are terminal, so the
    /// post-commit read cannot flip the verdict.
    pub async fn accept(&self, offer_id: RecordId, request_id: RecordId) -> RepoResult<Offer> {
        let outcome = self
            .base
            .db()
            .query(ACCEPT_TX)
            .bind(("request", request_id.clone()))
            .bind(("offer", offer_id.clone()))
            .await
            .and_then(|response| response.check());

        if let Err(e) = outcome {
            // A commit race under RocksDB optimistic locking aborts the
            // loser; the winner already decided the request, so fall
            // through and judge from the rows like any other run.
            if !e.to_string().contains("read or write conflict") {
                return Err(e.into());
            }
        }

        let offer = self
            .find_by_record(offer_id.clone())
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Offer {} not found", offer_id)))?;

        match offer.status {
            OfferStatus::Accepted => Ok(offer),
            OfferStatus::Declined => Err(RepoError::Duplicate(
                "Request already has an accepted offer".to_string(),
            )),
            OfferStatus::Pending => {
                let request: Option<BuyRequest> = self.base.db().select(request_id).await?;
                match request {
                    // A pending offer on a closed request stays pending
                    Some(r) if r.status != RequestStatus::Open => Err(RepoError::Duplicate(
                        "Request already has an accepted offer".to_string(),
                    )),
                    _ => Err(RepoError::Database(
                        "Acceptance aborted by a concurrent update, please retry".to_string(),
                    )),
                }
            }
        }
    }

    /// Count a seller's offers, optionally narrowed to one status
    pub async fn count_by_seller(
        &self,
        seller_id: RecordId,
        status: Option<OfferStatus>,
    ) -> RepoResult<u64> {
        let mut sql = String::from("SELECT count() FROM offer WHERE seller_id = $seller");
        if let Some(status) = status {
            sql.push_str(match status {
                OfferStatus::Pending => " AND status = 'pending'",
                OfferStatus::Accepted => " AND status = 'accepted'",
                OfferStatus::Declined => " AND status = 'declined'",
            });
        }
        sql.push_str(" GROUP ALL");

        let mut result = self
            .base
            .db()
            .query(sql)
            .bind(("seller", seller_id))
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0) as u64)
    }

    /// Count offers received across a set of requests
    pub async fn count_by_requests(&self, request_ids: Vec<RecordId>) -> RepoResult<u64> {
        if request_ids.is_empty() {
            return Ok(0);
        }
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM offer WHERE request_id IN $ids GROUP ALL")
            .bind(("ids", request_ids))
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0) as u64)
    }
}
