use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::content::{FieldReader, FormInput, FromForm, Resource, ResourceKind, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A named group of skills, e.g. "Backend" with Rust, Go and PostgreSQL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i32,
    pub category: String,
    pub items: Vec<SkillItem>,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillDraft {
    pub category: String,
    pub items: Vec<SkillItem>,
    pub display_order: i32,
}

impl FromForm for SkillDraft {
    fn from_form(input: &FormInput) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(input);

        let category = fields.required("category", "Category is required");
        let display_order = fields.integer("displayOrder");

        let items = match fields.raw("items").filter(|raw| !raw.trim().is_empty()) {
            None => {
                fields.reject("items", "Items are required");
                Vec::new()
            }
            Some(raw) => {
                let items = parse_items(raw);
                if items.is_empty() {
                    fields.reject("items", "At least one skill item is required");
                }
                items
            }
        };

        fields.finish()?;
        Ok(Self {
            category,
            items,
            display_order,
        })
    }
}

/// Lenient parse of the `items` JSON field.
///
/// Anything that is not an array yields no items. Entries without a
/// non-blank string `name` are dropped; blank icons are omitted.
pub fn parse_items(raw: &str) -> Vec<SkillItem> {
    let Ok(Value::Array(entries)) = serde_json::from_str::<Value>(raw) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let name = entry.get("name")?.as_str()?.trim();
            if name.is_empty() {
                return None;
            }

            let icon = entry
                .get("icon")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|icon| !icon.is_empty())
                .map(str::to_string);

            Some(SkillItem {
                name: name.to_string(),
                icon,
            })
        })
        .collect()
}

impl Resource for Skill {
    type Draft = SkillDraft;
    type Filter = ();

    const KIND: ResourceKind = ResourceKind::Skill;
    const LABEL: &'static str = "Skill group";
    const VIEWS: &'static [&'static str] = &["/admin/skills", "/about", "/"];

    fn id(&self) -> i32 {
        self.id
    }
}
