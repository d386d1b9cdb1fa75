use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级分组（section）实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "section.ts")]
pub struct Section {
    pub section_id: i64,
    pub section_name: String,
    pub grade_level: String,
    pub strand: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
