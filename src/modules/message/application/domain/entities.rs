use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::content::{FieldReader, FormInput, FromForm, Resource, ResourceKind, ValidationErrors};

/// A contact form submission from a site visitor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl FromForm for MessageDraft {
    fn from_form(input: &FormInput) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(input);

        let draft = Self {
            name: fields.required("name", "Name is required"),
            email: fields.email("email", "Valid email required"),
            subject: fields.optional("subject"),
            message: fields.required("message", "Message is required"),
        };

        fields.finish()?;
        Ok(draft)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MessageFilter {
    /// `Some(true)` keeps only messages not yet read
    pub unread: Option<bool>,
}

impl Resource for Message {
    type Draft = MessageDraft;
    type Filter = MessageFilter;

    const KIND: ResourceKind = ResourceKind::Message;
    const LABEL: &'static str = "Message";
    const VIEWS: &'static [&'static str] = &["/admin/messages", "/admin"];

    fn id(&self) -> i32 {
        self.id
    }
}
