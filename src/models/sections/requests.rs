use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldErrors;
use crate::models::common::lenient::deserialize_opt_string;
use crate::utils::validate::FieldValidator;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "section.ts")]
pub struct SectionRequest {
    pub section_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub grade_level: Option<String>,
    pub strand: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSection {
    pub section_name: String,
    pub grade_level: String,
    pub strand: Option<String>,
}

impl SectionRequest {
    pub fn validate(&self) -> Result<NewSection, FieldErrors> {
        let mut v = FieldValidator::new();
        let section_name = v.required_text("section_name", self.section_name.as_deref(), 255);
        let grade_level = v.required_text("grade_level", self.grade_level.as_deref(), 255);
        let strand = v.optional_text("strand", self.strand.as_deref(), 255);
        v.finish()?;

        Ok(NewSection {
            section_name: section_name.unwrap_or_default(),
            grade_level: grade_level.unwrap_or_default(),
            strand,
        })
    }
}
