//! Buy Request Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::BuyRequest;
use crate::utils::time;
use soko_shared::client::RequestCreate;
use soko_shared::models::RequestStatus;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

/// Hard cap on listing sizes
const LIST_LIMIT: usize = 100;

/// Filters for the open marketplace listing
///
/// All filters are conjunctive. Budget filters match by range overlap:
/// `min_budget` keeps requests whose ceiling reaches it, `max_budget`
/// keeps requests whose floor stays under it.
#[derive(Debug, Default, Clone)]
pub struct RequestFilters {
    pub category: Option<String>,
    pub min_budget: Option<f64>,
    pub max_budget: Option<f64>,
    pub location: Option<String>,
}

#[derive(Clone)]
pub struct RequestRepository {
    base: BaseRepository,
}

impl RequestRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a request owned by `customer_id`, status starts at `open`
    pub async fn create(&self, customer_id: RecordId, data: RequestCreate) -> RepoResult<BuyRequest> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE request SET
                    customer_id = $customer_id,
                    title = $title,
                    description = $description,
                    budget_min = $budget_min,
                    budget_max = $budget_max,
                    categories = $categories,
                    location = $location,
                    timeline = $timeline,
                    images = $images,
                    quantity = $quantity,
                    status = 'open',
                    created_at = $created_at
                RETURN AFTER"#,
            )
            .bind(("customer_id", customer_id))
            .bind(("title", data.title))
            .bind(("description", data.description))
            .bind(("budget_min", data.budget_min))
            .bind(("budget_max", data.budget_max))
            .bind(("categories", data.categories))
            .bind(("location", data.location))
            .bind(("timeline", data.timeline))
            .bind(("images", data.images))
            .bind(("quantity", data.quantity))
            .bind(("created_at", time::now_millis()))
            .await?;

        let created: Option<BuyRequest> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create request".to_string()))
    }

    /// Open requests matching every supplied filter, newest first
    pub async fn find_open(&self, filters: RequestFilters) -> RepoResult<Vec<BuyRequest>> {
        let mut sql = String::from("SELECT * FROM request WHERE status = 'open'");
        if filters.category.is_some() {
            sql.push_str(" AND categories CONTAINS $category");
        }
        if filters.min_budget.is_some() {
            sql.push_str(" AND budget_max >= $min_budget");
        }
        if filters.max_budget.is_some() {
            sql.push_str(" AND budget_min <= $max_budget");
        }
        if filters.location.is_some() {
            // 位置匹配不区分大小写，location 为空的请求不命中
            sql.push_str(" AND string::lowercase(location ?? '') CONTAINS string::lowercase($location)");
        }
        sql.push_str(&format!(" ORDER BY created_at DESC LIMIT {}", LIST_LIMIT));

        let mut query = self.base.db().query(sql);
        if let Some(category) = filters.category {
            query = query.bind(("category", category));
        }
        if let Some(min_budget) = filters.min_budget {
            query = query.bind(("min_budget", min_budget));
        }
        if let Some(max_budget) = filters.max_budget {
            query = query.bind(("max_budget", max_budget));
        }
        if let Some(location) = filters.location {
            query = query.bind(("location", location));
        }

        let requests: Vec<BuyRequest> = query.await?.take(0)?;
        Ok(requests)
    }

    /// All requests owned by a customer, newest first
    pub async fn find_by_customer(&self, customer_id: RecordId) -> RepoResult<Vec<BuyRequest>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM request WHERE customer_id = $customer ORDER BY created_at DESC LIMIT {}",
                LIST_LIMIT
            ))
            .bind(("customer", customer_id))
            .await?;
        let requests: Vec<BuyRequest> = result.take(0)?;
        Ok(requests)
    }

    /// Find request by id string ("request:key")
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<BuyRequest>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_record(thing).await
    }

    /// Find request by native record id
    pub async fn find_by_record(&self, id: RecordId) -> RepoResult<Option<BuyRequest>> {
        let request: Option<BuyRequest> = self.base.db().select(id).await?;
        Ok(request)
    }

    /// Batch lookup for read-time joins
    pub async fn find_by_ids(&self, ids: Vec<RecordId>) -> RepoResult<Vec<BuyRequest>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM request WHERE id IN $ids")
            .bind(("ids", ids))
            .await?;
        let requests: Vec<BuyRequest> = result.take(0)?;
        Ok(requests)
    }

    /// Ids of every request owned by a customer (dashboard join input)
    pub async fn ids_by_customer(&self, customer_id: RecordId) -> RepoResult<Vec<RecordId>> {
        let mut result = self
            .base
            .db()
            .query("SELECT VALUE id FROM request WHERE customer_id = $customer LIMIT 1000")
            .bind(("customer", customer_id))
            .await?;
        let ids: Vec<RecordId> = result.take(0)?;
        Ok(ids)
    }

    /// Count a customer's requests, optionally narrowed to one status
    pub async fn count_by_customer(
        &self,
        customer_id: RecordId,
        status: Option<RequestStatus>,
    ) -> RepoResult<u64> {
        let mut sql = String::from("SELECT count() FROM request WHERE customer_id = $customer");
        if let Some(status) = status {
            sql.push_str(match status {
                RequestStatus::Open => " AND status = 'open'",
                RequestStatus::OfferAccepted => " AND status = 'offer_accepted'",
                RequestStatus::Completed => " AND status = 'completed'",
                RequestStatus::Cancelled => " AND status = 'cancelled'",
            });
        }
        sql.push_str(" GROUP ALL");

        let mut result = self
            .base
            .db()
            .query(sql)
            .bind(("customer", customer_id))
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0) as u64)
    }
}
