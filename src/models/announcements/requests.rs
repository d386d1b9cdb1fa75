use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldErrors;
use crate::models::common::lenient::{deserialize_opt_i64, deserialize_opt_string};
use crate::utils::validate::FieldValidator;

pub const MAX_ANNOUNCEMENT_LENGTH: usize = 5000;

// 公告创建/更新请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "announcement.ts")]
pub struct AnnouncementRequest {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub admin_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub class_id: Option<i64>,
    pub title: Option<String>,
    pub announcement: Option<String>,
}

/// 存储层使用的公告数据
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnnouncement {
    pub admin_id: String,
    pub class_id: Option<i64>,
    pub title: String,
    pub announcement: String,
}

impl AnnouncementRequest {
    pub fn validate(&self) -> Result<NewAnnouncement, FieldErrors> {
        let mut v = FieldValidator::new();
        let admin_id = v.required_text("admin_id", self.admin_id.as_deref(), 50);
        let class_id = self.class_id.and_then(|id| v.required_id("class_id", Some(id)));
        let title = v.required_text("title", self.title.as_deref(), 255);
        let announcement = v.required_text(
            "announcement",
            self.announcement.as_deref(),
            MAX_ANNOUNCEMENT_LENGTH,
        );
        v.finish()?;

        Ok(NewAnnouncement {
            admin_id: admin_id.unwrap_or_default(),
            class_id,
            title: title.unwrap_or_default(),
            announcement: announcement.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_is_optional() {
        let req: AnnouncementRequest = serde_json::from_str(
            r#"{"admin_id": "ADM-1", "title": "No classes", "announcement": "Holiday on Monday"}"#,
        )
        .unwrap();
        let new = req.validate().unwrap();
        assert_eq!(new.class_id, None);
    }

    #[test]
    fn test_invalid_class_id() {
        let req = AnnouncementRequest {
            admin_id: Some("ADM-1".into()),
            class_id: Some(0),
            title: Some("t".into()),
            announcement: Some("a".into()),
        };
        assert!(req.validate().unwrap_err().has("class_id"));
    }
}
