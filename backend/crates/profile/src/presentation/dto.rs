//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::{
    EducationEntry, ExperienceEntry, Profile, ProfileFields, SocialLinks,
};

// ============================================================================
// Requests
// ============================================================================

/// Upsert profile request. Everything is optional at the wire level; the
/// handler insists on status and skills, the rest merges partially.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProfileRequest {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub github_username: Option<String>,
    /// Comma-delimited list
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

impl UpsertProfileRequest {
    pub fn into_fields(self) -> ProfileFields {
        ProfileFields {
            company: self.company,
            website: self.website,
            location: self.location,
            bio: self.bio,
            status: self.status,
            github_username: self.github_username,
            skills: self.skills,
            youtube: self.youtube,
            facebook: self.facebook,
            twitter: self.twitter,
            instagram: self.instagram,
            linkedin: self.linkedin,
        }
    }
}

/// Add experience request. Dates arrive as `YYYY-MM-DD` strings and are
/// parsed in the handler so format errors report as 400.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddExperienceRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Add education request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEducationRequest {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialDto {
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

impl SocialDto {
    fn from_social(social: &SocialLinks) -> Self {
        Self {
            youtube: social.youtube.clone(),
            facebook: social.facebook.clone(),
            twitter: social.twitter.clone(),
            instagram: social.instagram.clone(),
            linkedin: social.linkedin.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDto {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: chrono::NaiveDate,
    pub to: Option<chrono::NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl ExperienceDto {
    fn from_entry(entry: &ExperienceEntry) -> Self {
        Self {
            id: entry.entry_id.to_string(),
            title: entry.title.clone(),
            company: entry.company.clone(),
            location: entry.location.clone(),
            from: entry.from,
            to: entry.to,
            current: entry.current,
            description: entry.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationDto {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub location: Option<String>,
    pub from: chrono::NaiveDate,
    pub to: Option<chrono::NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl EducationDto {
    fn from_entry(entry: &EducationEntry) -> Self {
        Self {
            id: entry.entry_id.to_string(),
            school: entry.school.clone(),
            degree: entry.degree.clone(),
            field_of_study: entry.field_of_study.clone(),
            location: entry.location.clone(),
            from: entry.from,
            to: entry.to,
            current: entry.current,
            description: entry.description.clone(),
        }
    }
}

/// Full profile response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialDto,
    pub experience: Vec<ExperienceDto>,
    pub education: Vec<EducationDto>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl ProfileResponse {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            user: profile.owner_id.to_string(),
            company: profile.company.clone(),
            website: profile.website.clone(),
            location: profile.location.clone(),
            bio: profile.bio.clone(),
            status: profile.status.clone(),
            github_username: profile.github_username.clone(),
            skills: profile.skills.clone(),
            social: SocialDto::from_social(&profile.social),
            experience: profile.experience.iter().map(ExperienceDto::from_entry).collect(),
            education: profile.education.iter().map(EducationDto::from_entry).collect(),
            updated_at: profile.updated_at,
        }
    }

    pub fn from_profiles(profiles: &[Profile]) -> Vec<Self> {
        profiles.iter().map(Self::from_profile).collect()
    }
}
