use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use crate::error::{StoreError, StoreResult};
use crate::github::RepoIdentity;
use crate::models::Field;

/// GithubRepository - a GitHub project discovered through search, one row per
/// canonical project URL
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GithubRepository {
    pub id: i32,

    // Identity (derived from the canonical URL)
    pub developer: String,
    pub name: String,
    pub url: String,

    // Search result metadata
    pub about: Option<String>,

    // Enrichment fields, filled in by later analysis stages
    pub created_at: Option<DateTime<Utc>>,
    pub last_commit: Option<DateTime<Utc>>,
    pub num_stars: i32,
    pub num_issues: i32,
    pub num_containers: i32,
    pub docker_images_used: Option<Json<Vec<String>>>,
    pub has_readme: bool,
    pub useful_traffic: bool,
    pub num_packets: i32,

    // Lifecycle timestamps
    pub crawled_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a repository row.
///
/// Every field defaults to [`Field::Unset`], meaning "leave the stored value
/// alone". Nullable columns are `Field<Option<..>>` so that clearing them is
/// an explicit `Set(None)` rather than an absent field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepositoryPatch {
    pub about: Field<Option<String>>,
    pub created_at: Field<Option<DateTime<Utc>>>,
    pub last_commit: Field<Option<DateTime<Utc>>>,
    pub num_stars: Field<i32>,
    pub num_issues: Field<i32>,
    pub num_containers: Field<i32>,
    pub docker_images_used: Field<Option<Json<Vec<String>>>>,
    pub has_readme: Field<bool>,
    pub useful_traffic: Field<bool>,
    pub num_packets: Field<i32>,
}

impl RepositoryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = Field::Set(Some(about.into()));
        self
    }

    /// Explicitly clear the stored about text.
    pub fn clear_about(mut self) -> Self {
        self.about = Field::Set(None);
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Field::Set(Some(at));
        self
    }

    pub fn last_commit(mut self, at: DateTime<Utc>) -> Self {
        self.last_commit = Field::Set(Some(at));
        self
    }

    pub fn num_stars(mut self, n: i32) -> Self {
        self.num_stars = Field::Set(n);
        self
    }

    pub fn num_issues(mut self, n: i32) -> Self {
        self.num_issues = Field::Set(n);
        self
    }

    pub fn num_containers(mut self, n: i32) -> Self {
        self.num_containers = Field::Set(n);
        self
    }

    pub fn num_packets(mut self, n: i32) -> Self {
        self.num_packets = Field::Set(n);
        self
    }

    pub fn docker_images(mut self, images: Vec<String>) -> Self {
        self.docker_images_used = Field::Set(Some(Json(images)));
        self
    }

    pub fn has_readme(mut self, value: bool) -> Self {
        self.has_readme = Field::Set(value);
        self
    }

    pub fn useful_traffic(mut self, value: bool) -> Self {
        self.useful_traffic = Field::Set(value);
        self
    }

    /// Merge this patch into an existing record, field by field. Unset
    /// fields leave the stored values untouched.
    pub fn apply_to(self, record: &mut GithubRepository) {
        self.about.apply_to(&mut record.about);
        self.created_at.apply_to(&mut record.created_at);
        self.last_commit.apply_to(&mut record.last_commit);
        self.num_stars.apply_to(&mut record.num_stars);
        self.num_issues.apply_to(&mut record.num_issues);
        self.num_containers.apply_to(&mut record.num_containers);
        self.docker_images_used.apply_to(&mut record.docker_images_used);
        self.has_readme.apply_to(&mut record.has_readme);
        self.useful_traffic.apply_to(&mut record.useful_traffic);
        self.num_packets.apply_to(&mut record.num_packets);
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl GithubRepository {
    /// Insert or update the repository keyed by its canonical URL.
    ///
    /// Existing rows are merged: `developer` and `name` are refreshed from
    /// the identity, patch fields overwrite column by column, and
    /// `updated_at` advances on every call whether or not anything else
    /// changed. New rows get the declared column defaults for everything the
    /// patch leaves unset.
    ///
    /// Runs on a plain connection so the caller owns transaction scope;
    /// nothing here commits. Timestamps are bound from `Utc::now()` because
    /// `NOW()` is frozen for the duration of a transaction and repeated
    /// upserts inside one run must still advance `updated_at`.
    pub async fn add_or_update(
        conn: &mut PgConnection,
        identity: &RepoIdentity,
        patch: RepositoryPatch,
    ) -> StoreResult<Self> {
        if identity.canonical_url.is_empty() {
            return Err(StoreError::MissingIdentity);
        }

        let existing =
            sqlx::query_as::<_, GithubRepository>("SELECT * FROM github_repositories WHERE url = $1")
                .bind(&identity.canonical_url)
                .fetch_optional(&mut *conn)
                .await?;

        match existing {
            Some(mut record) => {
                record.developer = identity.developer.clone();
                record.name = identity.name.clone();
                patch.apply_to(&mut record);
                record.updated_at = Utc::now();

                let updated = sqlx::query_as::<_, GithubRepository>(
                    r#"
                    UPDATE github_repositories
                    SET
                        developer = $2,
                        name = $3,
                        about = $4,
                        created_at = $5,
                        last_commit = $6,
                        num_stars = $7,
                        num_issues = $8,
                        num_containers = $9,
                        docker_images_used = $10,
                        has_readme = $11,
                        useful_traffic = $12,
                        num_packets = $13,
                        updated_at = $14
                    WHERE url = $1
                    RETURNING *
                    "#,
                )
                .bind(&record.url)
                .bind(&record.developer)
                .bind(&record.name)
                .bind(&record.about)
                .bind(record.created_at)
                .bind(record.last_commit)
                .bind(record.num_stars)
                .bind(record.num_issues)
                .bind(record.num_containers)
                .bind(&record.docker_images_used)
                .bind(record.has_readme)
                .bind(record.useful_traffic)
                .bind(record.num_packets)
                .bind(record.updated_at)
                .fetch_one(&mut *conn)
                .await?;
                Ok(updated)
            }
            None => {
                let now = Utc::now();
                let inserted = sqlx::query_as::<_, GithubRepository>(
                    r#"
                    INSERT INTO github_repositories (
                        developer,
                        name,
                        url,
                        about,
                        created_at,
                        last_commit,
                        num_stars,
                        num_issues,
                        num_containers,
                        docker_images_used,
                        has_readme,
                        useful_traffic,
                        num_packets,
                        crawled_at,
                        updated_at
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
                    RETURNING *
                    "#,
                )
                .bind(&identity.developer)
                .bind(&identity.name)
                .bind(&identity.canonical_url)
                .bind(patch.about.unwrap_or(None))
                .bind(patch.created_at.unwrap_or(None))
                .bind(patch.last_commit.unwrap_or(None))
                .bind(patch.num_stars.unwrap_or(0))
                .bind(patch.num_issues.unwrap_or(0))
                .bind(patch.num_containers.unwrap_or(0))
                .bind(patch.docker_images_used.unwrap_or(None))
                .bind(patch.has_readme.unwrap_or(false))
                .bind(patch.useful_traffic.unwrap_or(false))
                .bind(patch.num_packets.unwrap_or(0))
                .bind(now)
                .bind(now)
                .fetch_one(&mut *conn)
                .await?;
                Ok(inserted)
            }
        }
    }

    /// Find a repository by its canonical URL
    pub async fn find_by_url(url: &str, pool: &PgPool) -> StoreResult<Option<Self>> {
        let repository =
            sqlx::query_as::<_, GithubRepository>("SELECT * FROM github_repositories WHERE url = $1")
                .bind(url)
                .fetch_optional(pool)
                .await?;
        Ok(repository)
    }

    /// All stored repositories, most recently touched first
    pub async fn list_all(pool: &PgPool) -> StoreResult<Vec<Self>> {
        let repositories = sqlx::query_as::<_, GithubRepository>(
            "SELECT * FROM github_repositories ORDER BY updated_at DESC",
        )
        .fetch_all(pool)
        .await?;
        Ok(repositories)
    }

    /// Total number of stored repositories
    pub async fn count(pool: &PgPool) -> StoreResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM github_repositories")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
