use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldErrors;
use crate::models::common::lenient::deserialize_opt_string;
use crate::utils::validate::FieldValidator;

// 通知查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct NotificationQuery {
    #[serde(
        rename = "LRN",
        alias = "lrn",
        default,
        deserialize_with = "deserialize_opt_string"
    )]
    pub lrn: Option<String>,
}

impl NotificationQuery {
    pub fn validate(&self) -> Result<String, FieldErrors> {
        let mut v = FieldValidator::new();
        let lrn = v.required_text("LRN", self.lrn.as_deref(), 20);
        v.finish()?;
        Ok(lrn.unwrap_or_default())
    }
}
