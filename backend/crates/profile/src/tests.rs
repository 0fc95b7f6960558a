//! Unit tests for the profile crate
//!
//! Use cases run against in-memory repositories.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use auth::domain::repository::UserRepository;
use auth::error::AuthResult;
use auth::models::{Email, RawPassword, User, UserId, UserPassword};

use crate::application::{
    DeleteAccountUseCase, EducationInput, EducationUseCase, ExperienceInput, ExperienceUseCase,
    ProfileQueries, UpsertProfileUseCase,
};
use crate::domain::entity::{EntryId, Profile, ProfileFields};
use crate::domain::repository::ProfileRepository;
use crate::error::{ProfileError, ProfileResult};

// ============================================================================
// In-memory repositories
// ============================================================================

#[derive(Clone, Default)]
struct InMemoryUsers {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUsers {
    fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

impl UserRepository for InMemoryUsers {
    async fn create(&self, user: &User) -> AuthResult<()> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == *user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(slot) = users.iter_mut().find(|u| u.user_id == user.user_id) {
            *slot = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> AuthResult<()> {
        self.users.lock().unwrap().retain(|u| u.user_id != *user_id);
        Ok(())
    }
}

#[derive(Clone, Default)]
struct InMemoryProfiles {
    profiles: Arc<Mutex<Vec<Profile>>>,
}

impl InMemoryProfiles {
    fn count(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }
}

impl ProfileRepository for InMemoryProfiles {
    async fn create(&self, profile: &Profile) -> ProfileResult<()> {
        self.profiles.lock().unwrap().push(profile.clone());
        Ok(())
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> ProfileResult<Option<Profile>> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.owner_id == *owner_id)
            .cloned())
    }

    async fn list(&self) -> ProfileResult<Vec<Profile>> {
        Ok(self.profiles.lock().unwrap().clone())
    }

    async fn update(&self, profile: &Profile) -> ProfileResult<()> {
        let mut profiles = self.profiles.lock().unwrap();
        if let Some(slot) = profiles.iter_mut().find(|p| p.owner_id == profile.owner_id) {
            *slot = profile.clone();
        }
        Ok(())
    }

    async fn delete(&self, owner_id: &UserId) -> ProfileResult<()> {
        self.profiles
            .lock()
            .unwrap()
            .retain(|p| p.owner_id != *owner_id);
        Ok(())
    }
}

struct Fixture {
    profiles: Arc<InMemoryProfiles>,
    users: Arc<InMemoryUsers>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            profiles: Arc::new(InMemoryProfiles::default()),
            users: Arc::new(InMemoryUsers::default()),
        }
    }

    async fn add_user(&self, name: &str, email: &str) -> User {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let user = User::new(
            name.to_string(),
            Email::new(email).unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        );
        self.users.create(&user).await.unwrap();
        user
    }

    fn upsert(&self) -> UpsertProfileUseCase<InMemoryProfiles> {
        UpsertProfileUseCase::new(self.profiles.clone())
    }

    fn experience(&self) -> ExperienceUseCase<InMemoryProfiles> {
        ExperienceUseCase::new(self.profiles.clone())
    }

    fn education(&self) -> EducationUseCase<InMemoryProfiles> {
        EducationUseCase::new(self.profiles.clone())
    }

    fn queries(&self) -> ProfileQueries<InMemoryProfiles> {
        ProfileQueries::new(self.profiles.clone())
    }

    async fn seeded_profile(&self, owner_id: UserId) -> Profile {
        self.upsert()
            .execute(
                owner_id,
                ProfileFields {
                    status: Some("Developer".to_string()),
                    skills: Some("rust,sql".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
    }
}

fn experience_input(title: &str) -> ExperienceInput {
    ExperienceInput {
        title: title.to_string(),
        company: "Acme".to_string(),
        location: None,
        from: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        to: None,
        current: true,
        description: None,
    }
}

// ============================================================================
// Upsert tests
// ============================================================================

mod upsert_tests {
    use super::*;

    #[tokio::test]
    async fn test_first_write_creates_profile() {
        let fx = Fixture::new();
        let owner = UserId::new();

        let profile = fx.seeded_profile(owner).await;

        assert_eq!(profile.owner_id, owner);
        assert_eq!(profile.status, "Developer");
        assert_eq!(profile.skills, vec!["rust", "sql"]);
        assert_eq!(fx.profiles.count(), 1);
    }

    #[tokio::test]
    async fn test_second_write_updates_in_place() {
        let fx = Fixture::new();
        let owner = UserId::new();
        fx.seeded_profile(owner).await;

        let updated = fx
            .upsert()
            .execute(
                owner,
                ProfileFields {
                    status: Some("Senior Developer".to_string()),
                    company: Some("Acme".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        // Never a second profile for the same owner
        assert_eq!(fx.profiles.count(), 1);
        assert_eq!(updated.status, "Senior Developer");
        assert_eq!(updated.company.as_deref(), Some("Acme"));
        // Fields absent from the second write survive
        assert_eq!(updated.skills, vec!["rust", "sql"]);
    }
}

// ============================================================================
// Entry tests
// ============================================================================

mod entry_tests {
    use super::*;

    #[tokio::test]
    async fn test_add_experience_requires_profile() {
        let fx = Fixture::new();

        let result = fx
            .experience()
            .add(&UserId::new(), experience_input("Junior"))
            .await;
        assert!(matches!(result, Err(ProfileError::NotFound)));
    }

    #[tokio::test]
    async fn test_experience_is_prepended_and_persisted() {
        let fx = Fixture::new();
        let owner = UserId::new();
        fx.seeded_profile(owner).await;

        fx.experience()
            .add(&owner, experience_input("Junior"))
            .await
            .unwrap();
        let profile = fx
            .experience()
            .add(&owner, experience_input("Senior"))
            .await
            .unwrap();

        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.experience[0].title, "Senior");
        assert_eq!(profile.experience[1].title, "Junior");

        // Persisted, not just returned
        let stored = fx.queries().get_by_owner(&owner).await.unwrap();
        assert_eq!(stored.experience.len(), 2);
    }

    #[tokio::test]
    async fn test_remove_unknown_experience_is_silent() {
        let fx = Fixture::new();
        let owner = UserId::new();
        fx.seeded_profile(owner).await;
        fx.experience()
            .add(&owner, experience_input("Junior"))
            .await
            .unwrap();

        // Unknown id: no error, profile unchanged
        let profile = fx
            .experience()
            .remove(&owner, &EntryId::new())
            .await
            .unwrap();
        assert_eq!(profile.experience.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_existing_experience() {
        let fx = Fixture::new();
        let owner = UserId::new();
        fx.seeded_profile(owner).await;
        let profile = fx
            .experience()
            .add(&owner, experience_input("Junior"))
            .await
            .unwrap();
        let entry_id = profile.experience[0].entry_id;

        let after = fx.experience().remove(&owner, &entry_id).await.unwrap();
        assert!(after.experience.is_empty());
    }

    #[tokio::test]
    async fn test_remove_experience_requires_profile() {
        let fx = Fixture::new();

        let result = fx.experience().remove(&UserId::new(), &EntryId::new()).await;
        assert!(matches!(result, Err(ProfileError::NotFound)));
    }

    #[tokio::test]
    async fn test_education_entries() {
        let fx = Fixture::new();
        let owner = UserId::new();
        fx.seeded_profile(owner).await;

        let input = EducationInput {
            school: "State University".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "Computer Science".to_string(),
            location: None,
            from: NaiveDate::from_ymd_opt(2014, 9, 1).unwrap(),
            to: Some(NaiveDate::from_ymd_opt(2018, 6, 1).unwrap()),
            current: false,
            description: None,
        };

        let profile = fx.education().add(&owner, input).await.unwrap();
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].school, "State University");

        let entry_id = profile.education[0].entry_id;
        let after = fx.education().remove(&owner, &entry_id).await.unwrap();
        assert!(after.education.is_empty());
    }
}

// ============================================================================
// Query / deletion tests
// ============================================================================

mod account_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_by_owner_missing() {
        let fx = Fixture::new();
        let result = fx.queries().get_by_owner(&UserId::new()).await;
        assert!(matches!(result, Err(ProfileError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_is_public_directory() {
        let fx = Fixture::new();
        fx.seeded_profile(UserId::new()).await;
        fx.seeded_profile(UserId::new()).await;

        let listed = fx.queries().list().await.unwrap();
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_account_cascades_to_identity() {
        let fx = Fixture::new();
        let user = fx.add_user("A", "a@x.com").await;
        fx.seeded_profile(user.user_id).await;

        DeleteAccountUseCase::new(fx.profiles.clone(), fx.users.clone())
            .execute(&user.user_id)
            .await
            .unwrap();

        assert_eq!(fx.profiles.count(), 0);
        // The identity goes with the profile
        assert_eq!(fx.users.count(), 0);
    }

    #[tokio::test]
    async fn test_delete_account_without_profile_still_removes_identity() {
        let fx = Fixture::new();
        let user = fx.add_user("A", "a@x.com").await;

        DeleteAccountUseCase::new(fx.profiles.clone(), fx.users.clone())
            .execute(&user.user_id)
            .await
            .unwrap();

        assert_eq!(fx.users.count(), 0);
    }
}
