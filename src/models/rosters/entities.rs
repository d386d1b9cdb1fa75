use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 花名册：学生选入课程班
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "roster.ts")]
pub struct Roster {
    pub roster_id: i64,
    #[serde(rename = "LRN")]
    pub lrn: String,
    pub class_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
