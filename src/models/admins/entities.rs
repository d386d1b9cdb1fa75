use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::parties::entities::{Party, display_name};

// 管理员实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "admin.ts")]
pub struct Admin {
    pub admin_id: String,
    pub fname: String,
    pub mname: Option<String>,
    pub lname: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub password_hash: String,
    pub admin_pic: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Admin {
    pub fn display_name(&self) -> String {
        display_name(&self.fname, self.mname.as_deref(), &self.lname)
    }

    pub fn as_party(&self) -> Party {
        Party::admin(self.admin_id.clone(), self.display_name())
    }
}
