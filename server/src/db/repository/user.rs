//! User Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::User;
use crate::utils::time;
use soko_shared::client::RegisterRequest;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

/// Trial window granted to every new account
const TRIAL_DAYS: i64 = 30;

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Find user by id string ("user:key")
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_record(thing).await
    }

    /// Find user by native record id
    pub async fn find_by_record(&self, id: RecordId) -> RepoResult<Option<User>> {
        let user: Option<User> = self.base.db().select(id).await?;
        Ok(user)
    }

    /// Batch lookup for read-time joins
    pub async fn find_by_ids(&self, ids: Vec<RecordId>) -> RepoResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE id IN $ids")
            .bind(("ids", ids))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users)
    }

    /// Register a new account
    ///
    /// New accounts start unverified on a 30-day trial. The email
    /// pre-check plus the `user_email_unique` index keep one account per
    /// email.
    pub async fn create(&self, data: RegisterRequest) -> RepoResult<User> {
        // Check duplicate email
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' is already registered",
                data.email
            )));
        }

        // Hash password
        let hash_pass = User::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE user SET
                    email = $email,
                    full_name = $full_name,
                    role = $role,
                    phone = $phone,
                    location = $location,
                    business_name = $business_name,
                    business_description = $business_description,
                    hash_pass = $hash_pass,
                    is_verified = false,
                    subscription_status = 'trial',
                    trial_expires_at = $trial_expires_at,
                    created_at = $created_at
                RETURN AFTER"#,
            )
            .bind(("email", data.email))
            .bind(("full_name", data.full_name))
            .bind(("role", data.role))
            .bind(("phone", data.phone))
            .bind(("location", data.location))
            .bind(("business_name", data.business_name))
            .bind(("business_description", data.business_description))
            .bind(("hash_pass", hash_pass))
            .bind(("trial_expires_at", time::days_from_now_millis(TRIAL_DAYS)))
            .bind(("created_at", time::now_millis()))
            .await?;

        let created: Option<User> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }
}
