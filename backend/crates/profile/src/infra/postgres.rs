//! PostgreSQL Repository Implementation
//!
//! One row per profile; skills, social links, and the experience and
//! education lists live in JSONB columns read and rewritten with the row.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use auth::models::UserId;

use crate::domain::entity::{EducationEntry, ExperienceEntry, Profile, SocialLinks};
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;

/// PostgreSQL-backed profile repository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProfileRepository for PgProfileRepository {
    async fn create(&self, profile: &Profile) -> ProfileResult<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles (
                owner_id,
                company,
                website,
                location,
                bio,
                status,
                github_username,
                skills,
                social,
                experience,
                education,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(profile.owner_id.as_uuid())
        .bind(&profile.company)
        .bind(&profile.website)
        .bind(&profile.location)
        .bind(&profile.bio)
        .bind(&profile.status)
        .bind(&profile.github_username)
        .bind(Json(&profile.skills))
        .bind(Json(&profile.social))
        .bind(Json(&profile.experience))
        .bind(Json(&profile.education))
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> ProfileResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT
                owner_id,
                company,
                website,
                location,
                bio,
                status,
                github_username,
                skills,
                social,
                experience,
                education,
                created_at,
                updated_at
            FROM profiles
            WHERE owner_id = $1
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProfileRow::into_profile))
    }

    async fn list(&self) -> ProfileResult<Vec<Profile>> {
        let rows = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT
                owner_id,
                company,
                website,
                location,
                bio,
                status,
                github_username,
                skills,
                social,
                experience,
                education,
                created_at,
                updated_at
            FROM profiles
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProfileRow::into_profile).collect())
    }

    async fn update(&self, profile: &Profile) -> ProfileResult<()> {
        // Whole-aggregate write: replaces the embedded lists as-is
        sqlx::query(
            r#"
            UPDATE profiles SET
                company = $2,
                website = $3,
                location = $4,
                bio = $5,
                status = $6,
                github_username = $7,
                skills = $8,
                social = $9,
                experience = $10,
                education = $11,
                updated_at = $12
            WHERE owner_id = $1
            "#,
        )
        .bind(profile.owner_id.as_uuid())
        .bind(&profile.company)
        .bind(&profile.website)
        .bind(&profile.location)
        .bind(&profile.bio)
        .bind(&profile.status)
        .bind(&profile.github_username)
        .bind(Json(&profile.skills))
        .bind(Json(&profile.social))
        .bind(Json(&profile.experience))
        .bind(Json(&profile.education))
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, owner_id: &UserId) -> ProfileResult<()> {
        sqlx::query("DELETE FROM profiles WHERE owner_id = $1")
            .bind(owner_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProfileRow {
    owner_id: Uuid,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    bio: Option<String>,
    status: String,
    github_username: Option<String>,
    skills: Json<Vec<String>>,
    social: Json<SocialLinks>,
    experience: Json<Vec<ExperienceEntry>>,
    education: Json<Vec<EducationEntry>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        Profile {
            owner_id: UserId::from_uuid(self.owner_id),
            company: self.company,
            website: self.website,
            location: self.location,
            bio: self.bio,
            status: self.status,
            github_username: self.github_username,
            skills: self.skills.0,
            social: self.social.0,
            experience: self.experience.0,
            education: self.education.0,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
