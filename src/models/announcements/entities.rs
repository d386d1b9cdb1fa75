use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 公告实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "announcement.ts")]
pub struct Announcement {
    pub ancmnt_id: i64,
    pub admin_id: String,
    pub class_id: Option<i64>,
    pub title: String,
    pub announcement: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 公告列表项，附带发布人与班级科目信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "announcement.ts")]
pub struct AnnouncementDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub announcement: Announcement,
    pub admin_name: Option<String>,
    pub subject_name: Option<String>,
    pub grade_level: Option<String>,
}
