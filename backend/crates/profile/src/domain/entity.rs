//! Profile Aggregate
//!
//! One profile per identity, with its embedded skills, social links, and
//! prepend-ordered experience/education lists. The whole document is
//! fetched and persisted as a unit.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::Id;
use serde::{Deserialize, Serialize};

use auth::models::UserId;

pub struct EntryMarker;
/// Id of an experience/education entry, unique within its parent list
pub type EntryId = Id<EntryMarker>;

/// Social profile links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

/// A work-history entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub entry_id: EntryId,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// An education entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub entry_id: EntryId,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// Partial-field input for an upsert.
///
/// `None` means "leave the stored value alone"; so does an empty string.
/// `skills` is the raw comma-delimited input.
#[derive(Debug, Clone, Default)]
pub struct ProfileFields {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub github_username: Option<String>,
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

/// Profile aggregate
#[derive(Debug, Clone)]
pub struct Profile {
    /// Owning identity; at most one profile per owner
    pub owner_id: UserId,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    pub github_username: Option<String>,
    /// Ordered, as entered
    pub skills: Vec<String>,
    pub social: SocialLinks,
    /// Newest first
    pub experience: Vec<ExperienceEntry>,
    /// Newest first
    pub education: Vec<EducationEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn apply_field(slot: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        let value = value.trim();
        if !value.is_empty() {
            *slot = Some(value.to_string());
        }
    }
}

fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

impl Profile {
    /// Empty profile for an identity, ready for the first `apply`
    pub fn new(owner_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            owner_id,
            company: None,
            website: None,
            location: None,
            bio: None,
            status: String::new(),
            github_username: None,
            skills: Vec::new(),
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge input fields into the profile. Absent and empty fields leave
    /// the stored values untouched; `skills` is split on commas, trimmed,
    /// empty segments dropped.
    pub fn apply(&mut self, fields: ProfileFields) {
        apply_field(&mut self.company, fields.company);
        apply_field(&mut self.website, fields.website);
        apply_field(&mut self.location, fields.location);
        apply_field(&mut self.bio, fields.bio);
        apply_field(&mut self.github_username, fields.github_username);

        if let Some(status) = fields.status {
            let status = status.trim();
            if !status.is_empty() {
                self.status = status.to_string();
            }
        }

        if let Some(skills) = fields.skills {
            let skills = split_skills(&skills);
            if !skills.is_empty() {
                self.skills = skills;
            }
        }

        apply_field(&mut self.social.youtube, fields.youtube);
        apply_field(&mut self.social.facebook, fields.facebook);
        apply_field(&mut self.social.twitter, fields.twitter);
        apply_field(&mut self.social.instagram, fields.instagram);
        apply_field(&mut self.social.linkedin, fields.linkedin);

        self.updated_at = Utc::now();
    }

    /// Prepend a work-history entry (newest-first ordering)
    pub fn add_experience(&mut self, entry: ExperienceEntry) {
        self.experience.insert(0, entry);
        self.updated_at = Utc::now();
    }

    /// Remove an experience entry by id. An absent id is a no-op; the
    /// return value only reports whether anything changed.
    pub fn remove_experience(&mut self, entry_id: &EntryId) -> bool {
        let before = self.experience.len();
        self.experience.retain(|entry| entry.entry_id != *entry_id);
        let removed = self.experience.len() != before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    /// Prepend an education entry (newest-first ordering)
    pub fn add_education(&mut self, entry: EducationEntry) {
        self.education.insert(0, entry);
        self.updated_at = Utc::now();
    }

    /// Remove an education entry by id. An absent id is a no-op.
    pub fn remove_education(&mut self, entry_id: &EntryId) -> bool {
        let before = self.education.len();
        self.education.retain(|entry| entry.entry_id != *entry_id);
        let removed = self.education.len() != before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(status: &str, skills: &str) -> ProfileFields {
        ProfileFields {
            status: Some(status.to_string()),
            skills: Some(skills.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_apply_splits_and_trims_skills() {
        let mut profile = Profile::new(UserId::new());
        profile.apply(fields("Developer", " rust ,, sql,  axum "));

        assert_eq!(profile.status, "Developer");
        assert_eq!(profile.skills, vec!["rust", "sql", "axum"]);
    }

    #[test]
    fn test_apply_leaves_absent_fields_untouched() {
        let mut profile = Profile::new(UserId::new());
        profile.apply(ProfileFields {
            company: Some("Acme".to_string()),
            bio: Some("hello".to_string()),
            ..fields("Developer", "rust")
        });

        // Second write without company/bio
        profile.apply(fields("Senior Developer", "rust,sql"));

        assert_eq!(profile.company.as_deref(), Some("Acme"));
        assert_eq!(profile.bio.as_deref(), Some("hello"));
        assert_eq!(profile.status, "Senior Developer");
        assert_eq!(profile.skills, vec!["rust", "sql"]);
    }

    #[test]
    fn test_apply_ignores_empty_strings() {
        let mut profile = Profile::new(UserId::new());
        profile.apply(ProfileFields {
            company: Some("Acme".to_string()),
            ..fields("Developer", "rust")
        });

        profile.apply(ProfileFields {
            company: Some("   ".to_string()),
            ..Default::default()
        });

        assert_eq!(profile.company.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_experience_prepends() {
        let mut profile = Profile::new(UserId::new());
        let first = ExperienceEntry {
            entry_id: EntryId::new(),
            title: "Junior".to_string(),
            company: "Acme".to_string(),
            location: None,
            from: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
            to: None,
            current: false,
            description: None,
        };
        let second = ExperienceEntry {
            entry_id: EntryId::new(),
            title: "Senior".to_string(),
            company: "Acme".to_string(),
            location: None,
            from: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            to: None,
            current: true,
            description: None,
        };

        profile.add_experience(first.clone());
        profile.add_experience(second.clone());

        assert_eq!(profile.experience[0].entry_id, second.entry_id);
        assert_eq!(profile.experience[1].entry_id, first.entry_id);
    }

    #[test]
    fn test_remove_unknown_entry_is_a_no_op() {
        let mut profile = Profile::new(UserId::new());
        let entry = ExperienceEntry {
            entry_id: EntryId::new(),
            title: "Junior".to_string(),
            company: "Acme".to_string(),
            location: None,
            from: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
            to: None,
            current: false,
            description: None,
        };
        profile.add_experience(entry.clone());

        assert!(!profile.remove_experience(&EntryId::new()));
        assert_eq!(profile.experience.len(), 1);

        assert!(profile.remove_experience(&entry.entry_id));
        assert!(profile.experience.is_empty());
    }
}
