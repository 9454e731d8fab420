use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::content::{FieldReader, FormInput, FromForm, Resource, ResourceKind, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub title: String,
    /// Unique across all projects; addresses the public project page
    pub slug: String,
    pub brief: Option<String>,
    pub content: Option<String>,
    pub tech_stack: Vec<String>,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub slug: String,
    pub brief: Option<String>,
    pub content: Option<String>,
    pub tech_stack: Vec<String>,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub featured: bool,
}

impl FromForm for ProjectDraft {
    fn from_form(input: &FormInput) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(input);

        let draft = Self {
            title: fields.required("title", "Title is required"),
            slug: fields.required("slug", "Slug is required"),
            brief: fields.optional("brief"),
            content: fields.optional("content"),
            tech_stack: fields.list("techStack"),
            repo_url: fields.optional("repoUrl"),
            demo_url: fields.optional("demoUrl"),
            thumbnail_url: fields.optional("thumbnailUrl"),
            featured: fields.checkbox("featured"),
        };

        fields.finish()?;
        Ok(draft)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub featured: Option<bool>,
    pub limit: Option<u64>,
}

impl ProjectFilter {
    pub fn featured(limit: u64) -> Self {
        Self {
            featured: Some(true),
            limit: Some(limit),
        }
    }
}

impl Resource for Project {
    type Draft = ProjectDraft;
    type Filter = ProjectFilter;

    const KIND: ResourceKind = ResourceKind::Project;
    const LABEL: &'static str = "Project";
    const VIEWS: &'static [&'static str] = &["/admin/projects", "/projects", "/"];

    fn id(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_tech_stack_and_checkbox() {
        let form = FormInput::new()
            .with("title", "Portfolio")
            .with("slug", "portfolio")
            .with("techStack", "Rust, Actix ,, SQLite")
            .with("featured", "on")
            .with("repoUrl", "  ");

        let draft = ProjectDraft::from_form(&form).unwrap();

        assert_eq!(draft.tech_stack, vec!["Rust", "Actix", "SQLite"]);
        assert!(draft.featured);
        assert_eq!(draft.repo_url, None);
        assert_eq!(draft.brief, None);
    }

    #[test]
    fn test_unchecked_featured_is_false() {
        let form = FormInput::new().with("title", "A").with("slug", "a");

        let draft = ProjectDraft::from_form(&form).unwrap();
        assert!(!draft.featured);
        assert!(draft.tech_stack.is_empty());
    }

    #[test]
    fn test_title_and_slug_required() {
        let errors = ProjectDraft::from_form(&FormInput::new()).unwrap_err();

        assert_eq!(errors.messages("title"), ["Title is required"]);
        assert_eq!(errors.messages("slug"), ["Slug is required"]);
    }
}
