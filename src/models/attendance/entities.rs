use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct Attendance {
    pub attendance_id: i64,
    #[serde(rename = "LRN")]
    pub lrn: String,
    pub class_id: i64,
    pub date: String,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
