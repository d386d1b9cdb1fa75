use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldErrors;
use crate::models::common::PaginationQuery;
use crate::models::common::lenient::{deserialize_opt_i64, deserialize_opt_string};
use crate::utils::validate::FieldValidator;

// 考勤列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(rename = "LRN", alias = "lrn")]
    pub lrn: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub class_id: Option<i64>,
}

// 考勤创建/更新请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceRequest {
    #[serde(
        rename = "LRN",
        alias = "lrn",
        default,
        deserialize_with = "deserialize_opt_string"
    )]
    pub lrn: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub class_id: Option<i64>,
    pub date: Option<String>,
    pub status: Option<String>,
}

/// 存储层使用的考勤数据
#[derive(Debug, Clone, PartialEq)]
pub struct NewAttendance {
    pub lrn: String,
    pub class_id: i64,
    pub date: String,
    pub status: String,
}

impl AttendanceRequest {
    pub fn validate(&self) -> Result<NewAttendance, FieldErrors> {
        let mut v = FieldValidator::new();
        let lrn = v.required_lrn("LRN", self.lrn.as_deref());
        let class_id = v.required_id("class_id", self.class_id);
        let date = v.required_date("date", self.date.as_deref());
        let status = v.required_text("status", self.status.as_deref(), 255);
        v.finish()?;

        Ok(NewAttendance {
            lrn: lrn.unwrap_or_default(),
            class_id: class_id.unwrap_or_default(),
            date: date.unwrap_or_default(),
            status: status.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_is_normalized() {
        let req = AttendanceRequest {
            lrn: Some("100200300400".into()),
            class_id: Some(2),
            date: Some("2025-08-04 07:30:00".into()),
            status: Some("present".into()),
        };
        assert_eq!(req.validate().unwrap().date, "2025-08-04");
    }

    #[test]
    fn test_bad_date() {
        let req = AttendanceRequest {
            lrn: Some("100200300400".into()),
            class_id: Some(2),
            date: Some("04/08/2025".into()),
            status: Some("present".into()),
        };
        assert!(req.validate().unwrap_err().has("date"));
    }
}
