use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::modules::content::{FieldReader, FormInput, FromForm, Resource, ResourceKind, ValidationErrors};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AwardKind {
    #[default]
    Certificate,
    Award,
}

impl AwardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AwardKind::Certificate => "CERTIFICATE",
            AwardKind::Award => "AWARD",
        }
    }
}

impl FromStr for AwardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CERTIFICATE" => Ok(AwardKind::Certificate),
            "AWARD" => Ok(AwardKind::Award),
            other => Err(format!("unknown award type: {other}")),
        }
    }
}

impl fmt::Display for AwardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub id: i32,
    pub title: String,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub kind: AwardKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AwardDraft {
    pub title: String,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
    pub kind: AwardKind,
}

impl FromForm for AwardDraft {
    fn from_form(input: &FormInput) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(input);

        let draft = Self {
            title: fields.required("title", "Title is required"),
            issuer: fields.optional("issuer"),
            date: fields.optional("date"),
            url: fields.optional("url"),
            kind: fields.one_of("type", "Type must be CERTIFICATE or AWARD"),
        };

        fields.finish()?;
        Ok(draft)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AwardFilter {
    pub kind: Option<AwardKind>,
}

impl Resource for Award {
    type Draft = AwardDraft;
    type Filter = AwardFilter;

    const KIND: ResourceKind = ResourceKind::Award;
    const LABEL: &'static str = "Award";
    const VIEWS: &'static [&'static str] = &["/admin/awards", "/about"];

    fn id(&self) -> i32 {
        self.id
    }
}
