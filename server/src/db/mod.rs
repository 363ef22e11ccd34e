//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) plus startup schema definitions

pub mod models;
pub mod repository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

/// Startup definitions, idempotent on every boot
///
/// Tables stay schemaless; the two unique indexes carry the marketplace
/// invariants (one account per email, one offer per seller per request).
const DEFINE_STATEMENTS: &str = r#"
DEFINE TABLE IF NOT EXISTS user SCHEMALESS;
DEFINE TABLE IF NOT EXISTS request SCHEMALESS;
DEFINE TABLE IF NOT EXISTS offer SCHEMALESS;
DEFINE TABLE IF NOT EXISTS message SCHEMALESS;
DEFINE INDEX IF NOT EXISTS user_email_unique ON TABLE user FIELDS email UNIQUE;
DEFINE INDEX IF NOT EXISTS offer_request_seller_unique ON TABLE offer FIELDS request_id, seller_id UNIQUE;
"#;

/// Database service holding the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `db_path` and apply definitions
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database: {e}")))?;

        db.use_ns("soko")
            .use_db("marketplace")
            .await
            .map_err(|e| AppError::Database(format!("Failed to select namespace: {e}")))?;

        db.query(DEFINE_STATEMENTS)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::Database(format!("Failed to apply definitions: {e}")))?;

        tracing::info!("Database ready (embedded SurrealDB at {db_path})");

        Ok(Self { db })
    }
}
