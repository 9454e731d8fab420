use serde::Serialize;

use crate::modules::content::application::domain::validation::FromForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Profile,
    Experience,
    Project,
    Education,
    Skill,
    Award,
    Message,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Profile => "profile",
            ResourceKind::Experience => "experience",
            ResourceKind::Project => "project",
            ResourceKind::Education => "education",
            ResourceKind::Skill => "skill",
            ResourceKind::Award => "award",
            ResourceKind::Message => "message",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted portfolio record managed through the generic content service.
///
/// Implementors describe how a raw form becomes a draft (`Draft`), which
/// list filters they accept (`Filter`) and which rendered views go stale
/// when a record of this kind changes (`VIEWS`).
pub trait Resource: Serialize + Clone + Send + Sync + 'static {
    type Draft: FromForm + Clone + std::fmt::Debug + Send + Sync + 'static;
    type Filter: Default + Send + Sync + 'static;

    const KIND: ResourceKind;

    /// Human label used in result messages, e.g. "Skill group".
    const LABEL: &'static str;

    /// View paths whose rendered output depends on this resource.
    const VIEWS: &'static [&'static str];

    fn id(&self) -> i32;
}

/// Published after every successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationEvent {
    pub kind: ResourceKind,
    pub views: &'static [&'static str],
}

impl InvalidationEvent {
    pub fn for_resource<R: Resource>() -> Self {
        Self {
            kind: R::KIND,
            views: R::VIEWS,
        }
    }

    pub fn touches(&self, view: &str) -> bool {
        self.views.iter().any(|v| *v == view)
    }
}
