use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::parties::entities::{Party, display_name};

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct Student {
    #[serde(rename = "LRN")]
    pub lrn: String,
    pub fname: String,
    pub mname: Option<String>,
    pub lname: String,
    pub suffix: Option<String>,
    pub bdate: Option<String>,
    pub bplace: Option<String>,
    pub gender: Option<String>,
    pub religion: Option<String>,
    pub address: Option<String>,
    pub contact_no: Option<String>,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub student_pic: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    pub fn display_name(&self) -> String {
        display_name(&self.fname, self.mname.as_deref(), &self.lname)
    }

    pub fn as_party(&self) -> Party {
        Party::student(self.lrn.clone(), self.display_name())
    }
}
