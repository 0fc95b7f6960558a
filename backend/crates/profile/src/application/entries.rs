//! Experience / Education Entry Use Cases
//!
//! Both lists behave the same way: entries are prepended (newest first),
//! and removal by an unknown id returns the unchanged profile rather than
//! an error. A profile must exist before entries can be added.

use std::sync::Arc;

use chrono::NaiveDate;

use auth::models::UserId;

use crate::domain::entity::{EducationEntry, EntryId, ExperienceEntry, Profile};
use crate::domain::repository::ProfileRepository;
use crate::error::{ProfileError, ProfileResult};

/// Validated input for a work-history entry
pub struct ExperienceInput {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// Validated input for an education entry
pub struct EducationInput {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// Experience list use case
pub struct ExperienceUseCase<P>
where
    P: ProfileRepository,
{
    profiles: Arc<P>,
}

impl<P> ExperienceUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(profiles: Arc<P>) -> Self {
        Self { profiles }
    }

    pub async fn add(&self, owner_id: &UserId, input: ExperienceInput) -> ProfileResult<Profile> {
        let mut profile = self
            .profiles
            .find_by_owner(owner_id)
            .await?
            .ok_or(ProfileError::NotFound)?;

        profile.add_experience(ExperienceEntry {
            entry_id: EntryId::new(),
            title: input.title,
            company: input.company,
            location: input.location,
            from: input.from,
            to: input.to,
            current: input.current,
            description: input.description,
        });

        self.profiles.update(&profile).await?;

        Ok(profile)
    }

    pub async fn remove(&self, owner_id: &UserId, entry_id: &EntryId) -> ProfileResult<Profile> {
        let mut profile = self
            .profiles
            .find_by_owner(owner_id)
            .await?
            .ok_or(ProfileError::NotFound)?;

        // Unknown ids fall through silently with the profile unchanged
        if profile.remove_experience(entry_id) {
            self.profiles.update(&profile).await?;
        }

        Ok(profile)
    }
}

/// Education list use case
pub struct EducationUseCase<P>
where
    P: ProfileRepository,
{
    profiles: Arc<P>,
}

impl<P> EducationUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(profiles: Arc<P>) -> Self {
        Self { profiles }
    }

    pub async fn add(&self, owner_id: &UserId, input: EducationInput) -> ProfileResult<Profile> {
        let mut profile = self
            .profiles
            .find_by_owner(owner_id)
            .await?
            .ok_or(ProfileError::NotFound)?;

        profile.add_education(EducationEntry {
            entry_id: EntryId::new(),
            school: input.school,
            degree: input.degree,
            field_of_study: input.field_of_study,
            location: input.location,
            from: input.from,
            to: input.to,
            current: input.current,
            description: input.description,
        });

        self.profiles.update(&profile).await?;

        Ok(profile)
    }

    pub async fn remove(&self, owner_id: &UserId, entry_id: &EntryId) -> ProfileResult<Profile> {
        let mut profile = self
            .profiles
            .find_by_owner(owner_id)
            .await?
            .ok_or(ProfileError::NotFound)?;

        if profile.remove_education(entry_id) {
            self.profiles.update(&profile).await?;
        }

        Ok(profile)
    }
}
