use serde::Serialize;

use crate::modules::content::{FieldReader, FormInput, FromForm, Resource, ResourceKind, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: i32,
    pub school: String,
    pub degree: Option<String>,
    pub gpa: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub achievements: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationDraft {
    pub school: String,
    pub degree: Option<String>,
    pub gpa: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub achievements: Option<String>,
}

impl FromForm for EducationDraft {
    fn from_form(input: &FormInput) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(input);

        let draft = Self {
            school: fields.required("school", "School is required"),
            degree: fields.optional("degree"),
            gpa: fields.optional("gpa"),
            start_date: fields.optional("startDate"),
            end_date: fields.optional("endDate"),
            achievements: fields.optional("achievements"),
        };

        fields.finish()?;
        Ok(draft)
    }
}

impl Resource for Education {
    type Draft = EducationDraft;
    type Filter = ();

    const KIND: ResourceKind = ResourceKind::Education;
    const LABEL: &'static str = "Education";
    const VIEWS: &'static [&'static str] = &["/admin/education", "/about"];

    fn id(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_optionals_become_none() {
        let form = FormInput::new()
            .with("school", "State University")
            .with("degree", "BSc Computer Science")
            .with("gpa", "")
            .with("achievements", "   ");

        let draft = EducationDraft::from_form(&form).unwrap();

        assert_eq!(draft.school, "State University");
        assert_eq!(draft.degree.as_deref(), Some("BSc Computer Science"));
        assert_eq!(draft.gpa, None);
        assert_eq!(draft.achievements, None);
        assert_eq!(draft.start_date, None);
    }

    #[test]
    fn test_school_required() {
        let form = FormInput::new().with("school", " ");

        let errors = EducationDraft::from_form(&form).unwrap_err();
        assert_eq!(errors.messages("school"), ["School is required"]);
    }
}
