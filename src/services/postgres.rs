use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::models::RoommateProfile;

/// Errors that can occur when interacting with the profile store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),
}

const PROFILE_COLUMNS: &str = r#"
    user_id, university, location, cleanliness_level, sleep_schedule,
    personality, social_level, smoking_preference, pets_tolerance,
    budget_min, budget_max, interests, bio
"#;

/// PostgreSQL-backed store for roommate profiles
///
/// Categories are stored as their canonical labels and parsed back
/// leniently, so rows written by older clients with free-text labels
/// still load.
pub struct ProfileStore {
    pool: PgPool,
}

impl ProfileStore {
    /// Create a new store from a connection string and run migrations
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL profile store");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Insert or replace a profile
    pub async fn upsert_profile(&self, profile: &RoommateProfile) -> Result<(), StoreError> {
        let query = r#"
            INSERT INTO roommate_profiles (
                user_id, university, location, cleanliness_level, sleep_schedule,
                personality, social_level, smoking_preference, pets_tolerance,
                budget_min, budget_max, interests, bio, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, NOW())
            ON CONFLICT (user_id)
            DO UPDATE SET
                university = EXCLUDED.university,
                location = EXCLUDED.location,
                cleanliness_level = EXCLUDED.cleanliness_level,
                sleep_schedule = EXCLUDED.sleep_schedule,
                personality = EXCLUDED.personality,
                social_level = EXCLUDED.social_level,
                smoking_preference = EXCLUDED.smoking_preference,
                pets_tolerance = EXCLUDED.pets_tolerance,
                budget_min = EXCLUDED.budget_min,
                budget_max = EXCLUDED.budget_max,
                interests = EXCLUDED.interests,
                bio = EXCLUDED.bio,
                updated_at = EXCLUDED.updated_at
        "#;

        sqlx::query(query)
            .bind(&profile.user_id)
            .bind(profile.university.as_deref())
            .bind(profile.location.as_deref())
            .bind(profile.cleanliness_level.map(i16::from))
            .bind(profile.sleep_schedule.map(|v| v.label()))
            .bind(profile.personality.map(|v| v.label()))
            .bind(profile.social_level.map(|v| v.label()))
            .bind(profile.smoking_preference.map(|v| v.label()))
            .bind(profile.pets_tolerance.map(|v| v.label()))
            .bind(profile.budget_min)
            .bind(profile.budget_max)
            .bind(profile.interests.clone())
            .bind(profile.bio.as_deref())
            .execute(&self.pool)
            .await?;

        tracing::debug!("Upserted roommate profile {}", profile.user_id);

        Ok(())
    }

    /// Fetch a single profile
    pub async fn get_profile(&self, user_id: &str) -> Result<RoommateProfile, StoreError> {
        let query = format!(
            "SELECT {} FROM roommate_profiles WHERE user_id = $1",
            PROFILE_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Profile not found for user {}", user_id)))?;

        Ok(profile_from_row(&row)?)
    }

    /// List the most recently updated profiles, excluding the requesting user
    pub async fn list_candidates(
        &self,
        exclude_user_id: &str,
        limit: usize,
    ) -> Result<Vec<RoommateProfile>, StoreError> {
        let query = format!(
            "SELECT {} FROM roommate_profiles WHERE user_id <> $1 ORDER BY updated_at DESC LIMIT $2",
            PROFILE_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(exclude_user_id)
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;

        let profiles = rows
            .iter()
            .map(profile_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} candidates for {}", profiles.len(), exclude_user_id);

        Ok(profiles)
    }

    /// Delete a profile, returning whether it existed
    pub async fn delete_profile(&self, user_id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM roommate_profiles WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn profile_from_row(row: &PgRow) -> Result<RoommateProfile, sqlx::Error> {
    Ok(RoommateProfile {
        user_id: row.try_get("user_id")?,
        university: row.try_get("university")?,
        location: row.try_get("location")?,
        cleanliness_level: row
            .try_get::<Option<i16>, _>("cleanliness_level")?
            .and_then(|level| u8::try_from(level).ok()),
        sleep_schedule: parse_label(row, "sleep_schedule")?,
        personality: parse_label(row, "personality")?,
        social_level: parse_label(row, "social_level")?,
        smoking_preference: parse_label(row, "smoking_preference")?,
        pets_tolerance: parse_label(row, "pets_tolerance")?,
        budget_min: row.try_get("budget_min")?,
        budget_max: row.try_get("budget_max")?,
        interests: row.try_get("interests")?,
        bio: row.try_get("bio")?,
    })
}

fn parse_label<T: std::str::FromStr>(row: &PgRow, column: &str) -> Result<Option<T>, sqlx::Error> {
    Ok(row
        .try_get::<Option<String>, _>(column)?
        .and_then(|label| label.parse().ok()))
}
