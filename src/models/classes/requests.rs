use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldErrors;
use crate::models::common::lenient::{deserialize_opt_i64, deserialize_opt_string};
use crate::utils::validate::FieldValidator;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "class.ts")]
pub struct ClassRequest {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub admin_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub subject_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub section_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub room: Option<String>,
    pub schedule: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewClass {
    pub admin_id: String,
    pub subject_id: i64,
    pub section_id: i64,
    pub room: String,
    pub schedule: String,
    pub time: String,
}

impl ClassRequest {
    pub fn validate(&self) -> Result<NewClass, FieldErrors> {
        let mut v = FieldValidator::new();
        let admin_id = v.required_text("admin_id", self.admin_id.as_deref(), 50);
        let subject_id = v.required_id("subject_id", self.subject_id);
        let section_id = v.required_id("section_id", self.section_id);
        let room = v.required_text("room", self.room.as_deref(), 255);
        let schedule = v.required_text("schedule", self.schedule.as_deref(), 255);
        let time = v.required_text("time", self.time.as_deref(), 255);
        v.finish()?;

        Ok(NewClass {
            admin_id: admin_id.unwrap_or_default(),
            subject_id: subject_id.unwrap_or_default(),
            section_id: section_id.unwrap_or_default(),
            room: room.unwrap_or_default(),
            schedule: schedule.unwrap_or_default(),
            time: time.unwrap_or_default(),
        })
    }
}
