use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::modules::content::{FieldReader, FormInput, FromForm, Resource, ResourceKind, ValidationErrors};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExperienceKind {
    #[default]
    Work,
    Activity,
}

impl ExperienceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceKind::Work => "WORK",
            ExperienceKind::Activity => "ACTIVITY",
        }
    }
}

impl FromStr for ExperienceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WORK" => Ok(ExperienceKind::Work),
            "ACTIVITY" => Ok(ExperienceKind::Activity),
            other => Err(format!("unknown experience type: {other}")),
        }
    }
}

impl fmt::Display for ExperienceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A job or extracurricular activity shown on the about page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: ExperienceKind,
    pub role: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub traits: Vec<String>,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceDraft {
    pub kind: ExperienceKind,
    pub role: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub traits: Vec<String>,
    pub order: i32,
}

impl FromForm for ExperienceDraft {
    fn from_form(input: &FormInput) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(input);

        let draft = Self {
            kind: fields.one_of("type", "Type must be WORK or ACTIVITY"),
            role: fields.required("role", "Role is required"),
            company: fields.required("company", "Company/Organization is required"),
            location: fields.optional("location"),
            start_date: fields.optional("startDate"),
            end_date: fields.optional("endDate"),
            description: fields.optional("description"),
            traits: fields.list("traits"),
            order: fields.integer("order"),
        };

        fields.finish()?;
        Ok(draft)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExperienceFilter {
    pub kind: Option<ExperienceKind>,
}

impl Resource for Experience {
    type Draft = ExperienceDraft;
    type Filter = ExperienceFilter;

    const KIND: ResourceKind = ResourceKind::Experience;
    const LABEL: &'static str = "Experience";
    const VIEWS: &'static [&'static str] = &["/admin/experiences", "/about"];

    fn id(&self) -> i32 {
        self.id
    }
}
