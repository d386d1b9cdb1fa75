use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 成绩实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct Grade {
    pub grade_id: i64,
    #[serde(rename = "LRN")]
    pub lrn: String,
    pub class_id: i64,
    pub grade: f64,
    pub term: String,
    pub semester: Option<String>,
    pub permission: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
