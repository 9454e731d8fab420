use serde::Serialize;

use crate::modules::content::{FieldReader, FormInput, FromForm, Resource, ResourceKind, ValidationErrors};

/// Site owner details. Only one row is expected; it is created by the seed
/// command and edited from the admin area.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i32,
    pub full_name: String,
    pub headline: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub full_name: String,
    pub headline: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
    pub is_available: bool,
}

impl FromForm for ProfileDraft {
    fn from_form(input: &FormInput) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(input);

        let draft = Self {
            full_name: fields.required("fullName", "Name is required"),
            headline: fields.optional("headline"),
            email: fields.email("email", "Valid email required"),
            phone: fields.optional("phone"),
            location: fields.optional("location"),
            github_url: fields.optional("githubUrl"),
            linkedin_url: fields.optional("linkedinUrl"),
            bio: fields.optional("bio"),
            avatar_url: fields.optional("avatarUrl"),
            resume_url: fields.optional("resumeUrl"),
            is_available: fields.checkbox("isAvailable"),
        };

        fields.finish()?;
        Ok(draft)
    }
}

impl Resource for Profile {
    type Draft = ProfileDraft;
    type Filter = ();

    const KIND: ResourceKind = ResourceKind::Profile;
    const LABEL: &'static str = "Profile";
    const VIEWS: &'static [&'static str] = &["/admin/profile", "/", "/about"];

    fn id(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_availability_is_false() {
        let form = FormInput::new()
            .with("fullName", "Alex Doe")
            .with("email", "alex@example.com")
            .with("githubUrl", "");

        let draft = ProfileDraft::from_form(&form).unwrap();
        assert!(!draft.is_available);
        assert_eq!(draft.github_url, None);
    }

    #[test]
    fn test_checked_availability() {
        let form = FormInput::new()
            .with("fullName", "Alex Doe")
            .with("email", "alex@example.com")
            .with("isAvailable", "on");

        assert!(ProfileDraft::from_form(&form).unwrap().is_available);
    }

    #[test]
    fn test_invalid_email_and_missing_name() {
        let form = FormInput::new().with("email", "not-an-email");

        let errors = ProfileDraft::from_form(&form).unwrap_err();
        assert_eq!(errors.messages("email"), ["Valid email required"]);
        assert_eq!(errors.messages("fullName"), ["Name is required"]);
    }
}
