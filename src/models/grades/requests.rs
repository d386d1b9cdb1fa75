use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldErrors;
use crate::models::common::PaginationQuery;
use crate::models::common::lenient::{deserialize_opt_f64, deserialize_opt_i64, deserialize_opt_string};
use crate::utils::validate::FieldValidator;

// 成绩列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct GradeListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(rename = "LRN", alias = "lrn")]
    pub lrn: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub class_id: Option<i64>,
}

/// 按学生/班级筛选的列表查询（成绩、考勤、花名册共用）
#[derive(Debug, Clone, Default)]
pub struct ClassRecordQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub lrn: Option<String>,
    pub class_id: Option<i64>,
}

// 成绩创建/更新请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct GradeRequest {
    #[serde(
        rename = "LRN",
        alias = "lrn",
        default,
        deserialize_with = "deserialize_opt_string"
    )]
    pub lrn: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub class_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub grade: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub term: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub semester: Option<String>,
    pub permission: Option<String>,
}

/// 存储层使用的成绩数据
#[derive(Debug, Clone, PartialEq)]
pub struct NewGrade {
    pub lrn: String,
    pub class_id: i64,
    pub grade: f64,
    pub term: String,
    pub semester: Option<String>,
    pub permission: Option<String>,
}

impl GradeRequest {
    pub fn validate(&self) -> Result<NewGrade, FieldErrors> {
        let mut v = FieldValidator::new();
        let lrn = v.required_lrn("LRN", self.lrn.as_deref());
        let class_id = v.required_id("class_id", self.class_id);
        let grade = v.required_number("grade", self.grade, 0.0);
        let term = v.required_text("term", self.term.as_deref(), 255);
        let semester = v.optional_text("semester", self.semester.as_deref(), 50);
        let permission = v.optional_text("permission", self.permission.as_deref(), 50);
        v.finish()?;

        Ok(NewGrade {
            lrn: lrn.unwrap_or_default(),
            class_id: class_id.unwrap_or_default(),
            grade: grade.unwrap_or_default(),
            term: term.unwrap_or_default(),
            semester,
            permission,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_accepts_string_numbers() {
        let req: GradeRequest = serde_json::from_str(
            r#"{"LRN": "100200300400", "class_id": "4", "grade": "89.5", "term": 1}"#,
        )
        .unwrap();
        let grade = req.validate().unwrap();
        assert_eq!(grade.class_id, 4);
        assert_eq!(grade.grade, 89.5);
        assert_eq!(grade.term, "1");
    }

    #[test]
    fn test_grade_required_fields() {
        let errors = GradeRequest::default().validate().unwrap_err();
        for field in ["LRN", "class_id", "grade", "term"] {
            assert!(errors.has(field));
        }
    }
}
