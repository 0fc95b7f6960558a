//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::middleware::AuthedUser;
use auth::models::UserId;

use crate::application::{
    DeleteAccountUseCase, EducationInput, EducationUseCase, ExperienceInput, ExperienceUseCase,
    ProfileQueries, UpsertProfileUseCase,
};
use crate::domain::entity::EntryId;
use crate::domain::repository::ProfileRepository;
use crate::error::{ProfileError, ProfileResult};
use crate::presentation::dto::{
    AddEducationRequest, AddExperienceRequest, ProfileResponse, UpsertProfileRequest,
};

/// Shared state for profile handlers
#[derive(Clone)]
pub struct ProfileAppState<P, U>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub profiles: Arc<P>,
    pub users: Arc<U>,
}

fn require_field(value: Option<String>, message: &str) -> ProfileResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ProfileError::Validation(message.to_string())),
    }
}

fn parse_date(raw: &str, field: &str) -> ProfileResult<NaiveDate> {
    raw.trim()
        .parse()
        .map_err(|_| ProfileError::Validation(format!("{} must be a date (YYYY-MM-DD)", field)))
}

fn parse_optional_date(raw: Option<String>, field: &str) -> ProfileResult<Option<NaiveDate>> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => Ok(Some(parse_date(&raw, field)?)),
        _ => Ok(None),
    }
}

// ============================================================================
// Upsert
// ============================================================================

/// POST /profile
pub async fn upsert_profile<P, U>(
    State(state): State<ProfileAppState<P, U>>,
    AuthedUser(claim): AuthedUser,
    Json(req): Json<UpsertProfileRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    // Status and skills are the two required inputs; the rest are optional
    if req.status.as_deref().unwrap_or("").trim().is_empty() {
        return Err(ProfileError::Validation(
            "Please supply status".to_string(),
        ));
    }
    if req.skills.as_deref().unwrap_or("").trim().is_empty() {
        return Err(ProfileError::Validation(
            "Please supply at least one skill (comma separated list)".to_string(),
        ));
    }

    let profile = UpsertProfileUseCase::new(state.profiles.clone())
        .execute(claim.subject_id, req.into_fields())
        .await?;

    Ok(Json(ProfileResponse::from_profile(&profile)))
}

// ============================================================================
// Reads
// ============================================================================

/// GET /profile/me
pub async fn my_profile<P, U>(
    State(state): State<ProfileAppState<P, U>>,
    AuthedUser(claim): AuthedUser,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let profile = ProfileQueries::new(state.profiles.clone())
        .get_by_owner(&claim.subject_id)
        .await?;

    Ok(Json(ProfileResponse::from_profile(&profile)))
}

/// GET /profile (public directory, no gate)
pub async fn list_profiles<P, U>(
    State(state): State<ProfileAppState<P, U>>,
) -> ProfileResult<Json<Vec<ProfileResponse>>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let profiles = ProfileQueries::new(state.profiles.clone()).list().await?;

    Ok(Json(ProfileResponse::from_profiles(&profiles)))
}

/// GET /profile/user/{id} (public, no gate)
pub async fn profile_by_owner<P, U>(
    State(state): State<ProfileAppState<P, U>>,
    Path(id): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    // A malformed owner id cannot match a profile
    let owner_id = UserId::parse(&id).map_err(|_| ProfileError::NotFound)?;

    let profile = ProfileQueries::new(state.profiles.clone())
        .get_by_owner(&owner_id)
        .await?;

    Ok(Json(ProfileResponse::from_profile(&profile)))
}

// ============================================================================
// Account deletion
// ============================================================================

/// DELETE /profile; removes the profile and the owning identity
pub async fn delete_account<P, U>(
    State(state): State<ProfileAppState<P, U>>,
    AuthedUser(claim): AuthedUser,
) -> ProfileResult<StatusCode>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    DeleteAccountUseCase::new(state.profiles.clone(), state.users.clone())
        .execute(&claim.subject_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Experience
// ============================================================================

/// PUT /profile/experience
pub async fn add_experience<P, U>(
    State(state): State<ProfileAppState<P, U>>,
    AuthedUser(claim): AuthedUser,
    Json(req): Json<AddExperienceRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let title = require_field(req.title, "Title is required")?;
    let company = require_field(req.company, "Company is required")?;
    let from = parse_date(
        &require_field(req.from, "From date is required")?,
        "From date",
    )?;
    let to = parse_optional_date(req.to, "To date")?;

    let input = ExperienceInput {
        title,
        company,
        location: req.location,
        from,
        to,
        current: req.current,
        description: req.description,
    };

    let profile = ExperienceUseCase::new(state.profiles.clone())
        .add(&claim.subject_id, input)
        .await?;

    Ok(Json(ProfileResponse::from_profile(&profile)))
}

/// DELETE /profile/experience/{id}
pub async fn remove_experience<P, U>(
    State(state): State<ProfileAppState<P, U>>,
    AuthedUser(claim): AuthedUser,
    Path(id): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    // A malformed entry id matches nothing; removal stays a silent no-op
    let profile = match EntryId::parse(&id) {
        Ok(entry_id) => {
            ExperienceUseCase::new(state.profiles.clone())
                .remove(&claim.subject_id, &entry_id)
                .await?
        }
        Err(_) => {
            ProfileQueries::new(state.profiles.clone())
                .get_by_owner(&claim.subject_id)
                .await?
        }
    };

    Ok(Json(ProfileResponse::from_profile(&profile)))
}

// ============================================================================
// Education
// ============================================================================

/// PUT /profile/education
pub async fn add_education<P, U>(
    State(state): State<ProfileAppState<P, U>>,
    AuthedUser(claim): AuthedUser,
    Json(req): Json<AddEducationRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let school = require_field(req.school, "School is required")?;
    let degree = require_field(req.degree, "Degree is required")?;
    let field_of_study = require_field(req.field_of_study, "Field of study is required")?;
    let from = parse_date(
        &require_field(req.from, "From date is required")?,
        "From date",
    )?;
    let to = parse_optional_date(req.to, "To date")?;

    let input = EducationInput {
        school,
        degree,
        field_of_study,
        location: req.location,
        from,
        to,
        current: req.current,
        description: req.description,
    };

    let profile = EducationUseCase::new(state.profiles.clone())
        .add(&claim.subject_id, input)
        .await?;

    Ok(Json(ProfileResponse::from_profile(&profile)))
}

/// DELETE /profile/education/{id}
pub async fn remove_education<P, U>(
    State(state): State<ProfileAppState<P, U>>,
    AuthedUser(claim): AuthedUser,
    Path(id): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let profile = match EntryId::parse(&id) {
        Ok(entry_id) => {
            EducationUseCase::new(state.profiles.clone())
                .remove(&claim.subject_id, &entry_id)
                .await?
        }
        Err(_) => {
            ProfileQueries::new(state.profiles.clone())
                .get_by_owner(&claim.subject_id)
                .await?
        }
    };

    Ok(Json(ProfileResponse::from_profile(&profile)))
}
