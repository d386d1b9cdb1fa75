use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldErrors;
use crate::models::common::lenient::deserialize_opt_string;
use crate::utils::validate::FieldValidator;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "subject.ts")]
pub struct SubjectRequest {
    pub subject_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub grade_level: Option<String>,
    pub strand: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSubject {
    pub subject_name: String,
    pub grade_level: String,
    pub strand: Option<String>,
}

impl SubjectRequest {
    pub fn validate(&self) -> Result<NewSubject, FieldErrors> {
        let mut v = FieldValidator::new();
        let subject_name = v.required_text("subject_name", self.subject_name.as_deref(), 255);
        let grade_level = v.required_text("grade_level", self.grade_level.as_deref(), 50);
        let strand = v.optional_text("strand", self.strand.as_deref(), 100);
        v.finish()?;

        Ok(NewSubject {
            subject_name: subject_name.unwrap_or_default(),
            grade_level: grade_level.unwrap_or_default(),
            strand,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_grade_level() {
        let req: SubjectRequest =
            serde_json::from_str(r#"{"subject_name": "Science", "grade_level": 9}"#).unwrap();
        let subject = req.validate().unwrap();
        assert_eq!(subject.grade_level, "9");
        assert!(subject.strand.is_none());
    }
}
