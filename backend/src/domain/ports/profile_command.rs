//! Driving port for profile mutation.

use async_trait::async_trait;

use crate::domain::UserId;

/// Media types accepted for avatar uploads.
pub const ALLOWED_AVATAR_MEDIA_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// Descriptor for an already-stored upload, as handed over by the file
/// intake boundary. Only the declared media type is inspected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    pub original_name: String,
    pub stored_filename: String,
    pub media_type: String,
}

/// A batch of optional, independent partial updates to one user record.
///
/// Absent fields are left untouched. `skills` carries the raw
/// comma-separated input; splitting happens inside the engine.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub avatar: Option<AvatarUpload>,
    pub username: Option<String>,
    pub skills: Option<String>,
    pub interests: Option<Vec<String>>,
    pub remove_interest: Option<String>,
    pub remove_skill: Option<String>,
}

/// Identifies one of the independently updatable profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Avatar,
    RemoveInterest,
    RemoveSkill,
    Username,
    Skills,
    Interests,
}

impl ProfileField {
    /// Stable name used in logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Avatar => "avatar",
            Self::RemoveInterest => "remove_interest",
            Self::RemoveSkill => "remove_skill",
            Self::Username => "username",
            Self::Skills => "skills",
            Self::Interests => "interests",
        }
    }
}

/// One swallowed field-update failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub field: ProfileField,
    pub message: String,
}

/// Best-effort report of a profile update.
///
/// Individual field failures do not abort later fields and are not
/// surfaced to the user; the boundary layer may inspect this report but
/// chooses to ignore it (it redirects to the profile view regardless).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdateReport {
    pub applied: Vec<ProfileField>,
    /// The upload was present but its declared media type is not in
    /// [`ALLOWED_AVATAR_MEDIA_TYPES`]; it was silently excluded.
    pub avatar_rejected: bool,
    pub failures: Vec<FieldFailure>,
}

/// Domain use-case port for applying profile changes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileCommand: Send + Sync {
    /// Apply every present change independently, best-effort.
    async fn update_profile(&self, user_id: &UserId, changes: ProfileChanges)
    -> ProfileUpdateReport;
}

/// Fixture implementation that reports every present field as applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProfileCommand;

#[async_trait]
impl ProfileCommand for FixtureProfileCommand {
    async fn update_profile(
        &self,
        _user_id: &UserId,
        changes: ProfileChanges,
    ) -> ProfileUpdateReport {
        let mut report = ProfileUpdateReport::default();
        if changes.avatar.is_some() {
            report.applied.push(ProfileField::Avatar);
        }
        if changes.remove_interest.is_some() {
            report.applied.push(ProfileField::RemoveInterest);
        }
        if changes.remove_skill.is_some() {
            report.applied.push(ProfileField::RemoveSkill);
        }
        if changes.username.is_some() {
            report.applied.push(ProfileField::Username);
        }
        if changes.skills.is_some() {
            report.applied.push(ProfileField::Skills);
        }
        if changes.interests.is_some() {
            report.applied.push(ProfileField::Interests);
        }
        report
    }
}
