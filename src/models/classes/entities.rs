use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程班实体：某教师在某分组讲授某科目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "class.ts")]
pub struct Class {
    pub class_id: i64,
    pub admin_id: String,
    pub subject_id: i64,
    pub section_id: i64,
    pub room: String,
    pub schedule: String,
    pub time: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 课程班列表项
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "class.ts")]
pub struct ClassDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub class: Class,
    pub subject_name: Option<String>,
    pub section_name: Option<String>,
    pub admin_name: Option<String>,
}
