//! Best-effort profile mutation engine.
//!
//! Each present field is applied independently, in a fixed order; a failing
//! field is recorded in the report and the remaining fields still run. The
//! report is advisory: the HTTP adapter redirects to the profile view
//! whatever it says.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{
    ALLOWED_AVATAR_MEDIA_TYPES, AvatarUpload, FieldFailure, ProfileChanges, ProfileCommand,
    ProfileField, ProfileUpdateReport, UserRepository, UserRepositoryError,
};
use crate::domain::{UserId, text};

/// Profile mutation engine over the user repository.
#[derive(Clone)]
pub struct ProfileServiceImpl {
    users: Arc<dyn UserRepository>,
}

impl ProfileServiceImpl {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    fn record(
        report: &mut ProfileUpdateReport,
        user_id: &UserId,
        field: ProfileField,
        result: Result<(), UserRepositoryError>,
    ) {
        match result {
            Ok(()) => report.applied.push(field),
            Err(err) => {
                warn!(user_id = %user_id, field = field.as_str(), error = %err, "profile field update failed");
                report.failures.push(FieldFailure {
                    field,
                    message: err.to_string(),
                });
            }
        }
    }

    fn avatar_accepted(upload: &AvatarUpload) -> bool {
        ALLOWED_AVATAR_MEDIA_TYPES.contains(&upload.media_type.as_str())
    }
}

#[async_trait]
impl ProfileCommand for ProfileServiceImpl {
    async fn update_profile(
        &self,
        user_id: &UserId,
        changes: ProfileChanges,
    ) -> ProfileUpdateReport {
        let mut report = ProfileUpdateReport::default();

        if let Some(upload) = changes.avatar {
            if Self::avatar_accepted(&upload) {
                let result = self.users.set_avatar(user_id, &upload.stored_filename).await;
                Self::record(&mut report, user_id, ProfileField::Avatar, result);
            } else {
                warn!(
                    user_id = %user_id,
                    media_type = upload.media_type,
                    "avatar upload skipped: media type not allowed"
                );
                report.avatar_rejected = true;
            }
        }

        if let Some(interest) = changes.remove_interest {
            let result = self.users.remove_interest(user_id, &interest).await;
            Self::record(&mut report, user_id, ProfileField::RemoveInterest, result);
        }

        if let Some(skill) = changes.remove_skill {
            let result = self.users.remove_skill(user_id, &skill).await;
            Self::record(&mut report, user_id, ProfileField::RemoveSkill, result);
        }

        if let Some(username) = changes.username {
            let result = self.users.set_username(user_id, &username).await;
            Self::record(&mut report, user_id, ProfileField::Username, result);
        }

        if let Some(raw) = changes.skills {
            let skills = text::split_csv(&raw);
            let result = self.users.replace_skills(user_id, skills).await;
            Self::record(&mut report, user_id, ProfileField::Skills, result);
        }

        if let Some(interests) = changes.interests {
            let interests: Vec<String> = interests
                .into_iter()
                .map(|interest| interest.trim().to_owned())
                .filter(|interest| !interest.is_empty())
                .collect();
            let result = self.users.add_interests(user_id, interests).await;
            Self::record(&mut report, user_id, ProfileField::Interests, result);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockUserRepository;
    use mockall::Sequence;
    use rstest::rstest;

    fn upload(media_type: &str) -> AvatarUpload {
        AvatarUpload {
            original_name: "me.png".to_owned(),
            stored_filename: "f3a1c2.png".to_owned(),
            media_type: media_type.to_owned(),
        }
    }

    fn service(repo: MockUserRepository) -> ProfileServiceImpl {
        ProfileServiceImpl::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn absent_fields_touch_nothing() {
        let repo = MockUserRepository::new();
        let report = service(repo)
            .update_profile(&UserId::random(), ProfileChanges::default())
            .await;
        assert_eq!(report, ProfileUpdateReport::default());
    }

    #[tokio::test]
    async fn fields_apply_in_a_fixed_order() {
        let mut repo = MockUserRepository::new();
        let mut seq = Sequence::new();
        repo.expect_set_avatar()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        repo.expect_remove_interest()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        repo.expect_remove_skill()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        repo.expect_set_username()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        repo.expect_replace_skills()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        repo.expect_add_interests()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let changes = ProfileChanges {
            avatar: Some(upload("image/png")),
            username: Some("new-name".to_owned()),
            skills: Some("rust, sql".to_owned()),
            interests: Some(vec!["hiking".to_owned()]),
            remove_interest: Some("chess".to_owned()),
            remove_skill: Some("cobol".to_owned()),
        };
        let report = service(repo).update_profile(&UserId::random(), changes).await;
        assert_eq!(
            report.applied,
            vec![
                ProfileField::Avatar,
                ProfileField::RemoveInterest,
                ProfileField::RemoveSkill,
                ProfileField::Username,
                ProfileField::Skills,
                ProfileField::Interests,
            ]
        );
        assert!(report.failures.is_empty());
        assert!(!report.avatar_rejected);
    }

    #[rstest]
    #[case("image/jpeg", true)]
    #[case("image/png", true)]
    #[case("image/gif", true)]
    #[case("image/svg+xml", false)]
    #[case("application/octet-stream", false)]
    #[tokio::test]
    async fn avatar_media_type_gate(#[case] media_type: &str, #[case] accepted: bool) {
        let mut repo = MockUserRepository::new();
        repo.expect_set_avatar()
            .times(usize::from(accepted))
            .returning(|_, _| Ok(()));

        let changes = ProfileChanges {
            avatar: Some(upload(media_type)),
            ..ProfileChanges::default()
        };
        let report = service(repo).update_profile(&UserId::random(), changes).await;
        assert_eq!(report.avatar_rejected, !accepted);
        assert_eq!(report.applied.contains(&ProfileField::Avatar), accepted);
    }

    #[tokio::test]
    async fn skills_csv_is_split_and_cleaned_before_the_replace() {
        let mut repo = MockUserRepository::new();
        repo.expect_replace_skills()
            .withf(|_, skills: &Vec<String>| skills == &["rust", "sql"])
            .times(1)
            .returning(|_, _| Ok(()));

        let changes = ProfileChanges {
            skills: Some(" rust , sql ,, ".to_owned()),
            ..ProfileChanges::default()
        };
        service(repo).update_profile(&UserId::random(), changes).await;
    }

    #[tokio::test]
    async fn a_failing_field_does_not_stop_the_rest() {
        let mut repo = MockUserRepository::new();
        repo.expect_set_username().times(1).returning(|_, _| {
            Err(UserRepositoryError::Query {
                message: "update failed".to_owned(),
            })
        });
        repo.expect_replace_skills().times(1).returning(|_, _| Ok(()));

        let changes = ProfileChanges {
            username: Some("new-name".to_owned()),
            skills: Some("rust".to_owned()),
            ..ProfileChanges::default()
        };
        let report = service(repo).update_profile(&UserId::random(), changes).await;
        assert_eq!(report.applied, vec![ProfileField::Skills]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].field, ProfileField::Username);
    }

    #[tokio::test]
    async fn blank_interest_entries_are_dropped() {
        let mut repo = MockUserRepository::new();
        repo.expect_add_interests()
            .withf(|_, interests: &Vec<String>| interests == &["hiking"])
            .times(1)
            .returning(|_, _| Ok(()));

        let changes = ProfileChanges {
            interests: Some(vec!["  hiking  ".to_owned(), "   ".to_owned()]),
            ..ProfileChanges::default()
        };
        service(repo).update_profile(&UserId::random(), changes).await;
    }
}
