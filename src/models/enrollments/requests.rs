use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldErrors;
use crate::models::common::PaginationQuery;
use crate::models::common::lenient::{deserialize_opt_f64, deserialize_opt_i64, deserialize_opt_string};
use crate::models::students::requests::{CreateStudentRequest, ValidatedStudent};
use crate::utils::validate::FieldValidator;

pub const SCHOOL_TYPES: &[&str] = &["Public", "Private"];

// 入学列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct EnrollmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub school_year: Option<String>,
    pub grade_level: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EnrollmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub school_year: Option<String>,
    pub grade_level: Option<String>,
}

// 入学信息字段（登记与注册共用）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct EnrollmentFields {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub grade_level: Option<String>,
    pub guardian_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub guardian_no: Option<String>,
    pub last_attended: Option<String>,
    pub public_private: Option<String>,
    pub strand: Option<String>,
    pub school_year: Option<String>,
    pub date_register: Option<String>,
}

// 入学登记请求：同一学生同一学年存在则更新
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct EnrollmentRequest {
    #[serde(
        rename = "LRN",
        alias = "lrn",
        default,
        deserialize_with = "deserialize_opt_string"
    )]
    pub lrn: Option<String>,
    #[serde(flatten)]
    #[ts(flatten)]
    pub fields: EnrollmentFields,
}

// 新生注册请求：学生信息 + 首条入学记录
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct SignUpRequest {
    #[serde(flatten)]
    #[ts(flatten)]
    pub student: CreateStudentRequest,
    #[serde(flatten)]
    #[ts(flatten)]
    pub enrollment: EnrollmentFields,
}

// 入学记录更新请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct UpdateEnrollmentRequest {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub grade_level: Option<String>,
    pub guardian_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub guardian_no: Option<String>,
    pub last_attended: Option<String>,
    pub public_private: Option<String>,
    pub strand: Option<String>,
    pub school_year: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub section_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub old_account: Option<f64>,
}

// 分班请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct AssignSectionRequest {
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub section_id: Option<i64>,
}

/// 校验后的入学字段，school_year 为空时由服务层按配置补全
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedEnrollment {
    pub grade_level: String,
    pub guardian_name: String,
    pub guardian_no: Option<String>,
    pub last_attended: String,
    pub public_private: String,
    pub strand: Option<String>,
    pub school_year: Option<String>,
    pub date_register: Option<String>,
}

impl ValidatedEnrollment {
    pub fn into_new_enrollment(
        self,
        lrn: String,
        default_school_year: String,
        registered_at: chrono::DateTime<chrono::Utc>,
    ) -> NewEnrollment {
        let date_register = self
            .date_register
            .as_deref()
            .and_then(crate::utils::validate::parse_date)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
            .unwrap_or(registered_at);
        NewEnrollment {
            lrn,
            grade_level: self.grade_level,
            guardian_name: self.guardian_name,
            guardian_no: self.guardian_no,
            last_attended: self.last_attended,
            public_private: self.public_private,
            strand: self.strand,
            school_year: self.school_year.unwrap_or(default_school_year),
            date_register,
        }
    }
}

/// 存储层使用的新入学数据
#[derive(Debug, Clone, PartialEq)]
pub struct NewEnrollment {
    pub lrn: String,
    pub grade_level: String,
    pub guardian_name: String,
    pub guardian_no: Option<String>,
    pub last_attended: String,
    pub public_private: String,
    pub strand: Option<String>,
    pub school_year: String,
    pub date_register: chrono::DateTime<chrono::Utc>,
}

/// 存储层使用的入学更新数据
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentChanges {
    pub grade_level: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_no: Option<String>,
    pub last_attended: Option<String>,
    pub public_private: Option<String>,
    pub strand: Option<String>,
    pub school_year: Option<String>,
    pub section_id: Option<i64>,
    pub old_account: Option<f64>,
}

impl EnrollmentFields {
    fn check(&self, v: &mut FieldValidator) -> ValidatedEnrollment {
        let grade_level = v.required_text("grade_level", self.grade_level.as_deref(), 50);
        let guardian_name = v.required_text("guardian_name", self.guardian_name.as_deref(), 255);
        let guardian_no = v.optional_text("guardian_no", self.guardian_no.as_deref(), 20);
        let last_attended = v.required_text("last_attended", self.last_attended.as_deref(), 255);
        let public_private = v.required_text("public_private", self.public_private.as_deref(), 10);
        let public_private = v.one_of("public_private", public_private, SCHOOL_TYPES);
        let strand = v.optional_text("strand", self.strand.as_deref(), 100);
        let school_year = v.optional_text("school_year", self.school_year.as_deref(), 100);
        let date_register = v.optional_date("date_register", self.date_register.as_deref());

        ValidatedEnrollment {
            grade_level: grade_level.unwrap_or_default(),
            guardian_name: guardian_name.unwrap_or_default(),
            guardian_no,
            last_attended: last_attended.unwrap_or_default(),
            public_private: public_private.unwrap_or_default(),
            strand,
            school_year,
            date_register,
        }
    }

    pub fn validate(&self) -> Result<ValidatedEnrollment, FieldErrors> {
        let mut v = FieldValidator::new();
        let enrollment = self.check(&mut v);
        v.finish()?;
        Ok(enrollment)
    }
}

impl EnrollmentRequest {
    pub fn validate(&self) -> Result<(String, ValidatedEnrollment), FieldErrors> {
        let mut v = FieldValidator::new();
        let lrn = v.required_lrn("LRN", self.lrn.as_deref());
        let enrollment = self.fields.check(&mut v);
        v.finish()?;
        Ok((lrn.unwrap_or_default(), enrollment))
    }
}

impl SignUpRequest {
    /// 学生与入学字段一起校验，错误合并返回
    pub fn validate(&self) -> Result<(ValidatedStudent, ValidatedEnrollment), FieldErrors> {
        let student = self.student.validate();
        let enrollment = self.enrollment.validate();
        match (student, enrollment) {
            (Ok(s), Ok(e)) => Ok((s, e)),
            (Err(mut a), Err(b)) => {
                a.merge(b);
                Err(a)
            }
            (Err(a), _) | (_, Err(a)) => Err(a),
        }
    }
}

impl UpdateEnrollmentRequest {
    pub fn validate(&self) -> Result<EnrollmentChanges, FieldErrors> {
        let mut v = FieldValidator::new();
        let changes = EnrollmentChanges {
            grade_level: v.optional_text("grade_level", self.grade_level.as_deref(), 50),
            guardian_name: v.optional_text("guardian_name", self.guardian_name.as_deref(), 255),
            guardian_no: v.optional_text("guardian_no", self.guardian_no.as_deref(), 20),
            last_attended: v.optional_text("last_attended", self.last_attended.as_deref(), 255),
            public_private: {
                let value = v.optional_text("public_private", self.public_private.as_deref(), 10);
                v.one_of("public_private", value, SCHOOL_TYPES)
            },
            strand: v.optional_text("strand", self.strand.as_deref(), 100),
            school_year: v.optional_text("school_year", self.school_year.as_deref(), 100),
            section_id: self.section_id,
            old_account: v.optional_number("old_account", self.old_account, 0.0),
        };
        if let Some(id) = self.section_id {
            v.required_id("section_id", Some(id));
        }
        v.finish()?;
        Ok(changes)
    }
}

impl AssignSectionRequest {
    pub fn validate(&self) -> Result<i64, FieldErrors> {
        let mut v = FieldValidator::new();
        let id = v.required_id("section_id", self.section_id);
        v.finish()?;
        Ok(id.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sign_up_merges_errors() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{"LRN": "123456789012", "fname": "Ana", "email": "bad"}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.has("lname"));
        assert!(errors.has("email"));
        assert!(errors.has("guardian_name"));
        assert!(errors.has("public_private"));
        assert!(!errors.has("LRN"));
    }

    #[test]
    fn test_enrollment_request_with_default_school_year() {
        let req: EnrollmentRequest = serde_json::from_str(
            r#"{
                "LRN": 123456789012,
                "grade_level": 7,
                "guardian_name": "Rosa Cruz",
                "last_attended": "Central Elementary",
                "public_private": "public"
            }"#,
        )
        .unwrap();
        let (lrn, fields) = req.validate().unwrap();
        assert_eq!(lrn, "123456789012");
        assert_eq!(fields.public_private, "Public");

        let now = chrono::Utc.with_ymd_and_hms(2025, 6, 3, 8, 0, 0).unwrap();
        let new = fields.into_new_enrollment(lrn, "2025-2026".into(), now);
        assert_eq!(new.school_year, "2025-2026");
        assert_eq!(new.grade_level, "7");
        assert_eq!(new.date_register, now);
    }

    #[test]
    fn test_explicit_date_register() {
        let fields = ValidatedEnrollment {
            grade_level: "8".into(),
            guardian_name: "G".into(),
            guardian_no: None,
            last_attended: "X".into(),
            public_private: "Private".into(),
            strand: None,
            school_year: Some("2024-2025".into()),
            date_register: Some("2024-07-01".into()),
        };
        let now = chrono::Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let new = fields.into_new_enrollment("1".into(), "2025-2026".into(), now);
        assert_eq!(new.school_year, "2024-2025");
        assert_eq!(
            new.date_register,
            chrono::Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_assign_section_requires_id() {
        assert!(AssignSectionRequest::default().validate().unwrap_err().has("section_id"));
        let req = AssignSectionRequest { section_id: Some(3) };
        assert_eq!(req.validate().unwrap(), 3);
    }
}
