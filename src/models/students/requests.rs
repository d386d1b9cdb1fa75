use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldErrors;
use crate::models::common::PaginationQuery;
use crate::models::common::lenient::deserialize_opt_string;
use crate::utils::validate::FieldValidator;

// 学生列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

// 学生创建请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct CreateStudentRequest {
    #[serde(
        rename = "LRN",
        alias = "lrn",
        default,
        deserialize_with = "deserialize_opt_string"
    )]
    pub lrn: Option<String>,
    pub fname: Option<String>,
    pub mname: Option<String>,
    pub lname: Option<String>,
    pub suffix: Option<String>,
    pub bdate: Option<String>,
    pub bplace: Option<String>,
    pub gender: Option<String>,
    pub religion: Option<String>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub contact_no: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

// 学生更新请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct UpdateStudentRequest {
    pub fname: Option<String>,
    pub mname: Option<String>,
    pub lname: Option<String>,
    pub suffix: Option<String>,
    pub bdate: Option<String>,
    pub bplace: Option<String>,
    pub gender: Option<String>,
    pub religion: Option<String>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub contact_no: Option<String>,
    pub email: Option<String>,
}

// 批量导入请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct BulkStudentRequest {
    pub students: Vec<CreateStudentRequest>,
}

/// 校验后的新学生数据（密码尚未哈希）
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedStudent {
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
    pub password: String,
}

impl ValidatedStudent {
    pub fn into_new_student(self, password_hash: String) -> NewStudent {
        NewStudent {
            lrn: self.lrn,
            fname: self.fname,
            mname: self.mname,
            lname: self.lname,
            suffix: self.suffix,
            bdate: self.bdate,
            bplace: self.bplace,
            gender: self.gender,
            religion: self.religion,
            address: self.address,
            contact_no: self.contact_no,
            email: self.email,
            password_hash,
        }
    }
}

/// 存储层使用的新学生数据
#[derive(Debug, Clone)]
pub struct NewStudent {
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
    pub password_hash: String,
}

/// 存储层使用的学生更新数据，`None` 表示不修改
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentChanges {
    pub fname: Option<String>,
    pub mname: Option<String>,
    pub lname: Option<String>,
    pub suffix: Option<String>,
    pub bdate: Option<String>,
    pub bplace: Option<String>,
    pub gender: Option<String>,
    pub religion: Option<String>,
    pub address: Option<String>,
    pub contact_no: Option<String>,
    pub email: Option<String>,
}

pub const GENDERS: &[&str] = &["Male", "Female"];

impl CreateStudentRequest {
    pub fn validate(&self) -> Result<ValidatedStudent, FieldErrors> {
        let mut v = FieldValidator::new();
        let lrn = v.required_lrn("LRN", self.lrn.as_deref());
        let fname = v.required_text("fname", self.fname.as_deref(), 255);
        let mname = v.optional_text("mname", self.mname.as_deref(), 255);
        let lname = v.required_text("lname", self.lname.as_deref(), 255);
        let suffix = v.optional_text("suffix", self.suffix.as_deref(), 50);
        let bdate = v.optional_date("bdate", self.bdate.as_deref());
        let bplace = v.optional_text("bplace", self.bplace.as_deref(), 255);
        let gender = v.optional_text("gender", self.gender.as_deref(), 50);
        let gender = v.one_of("gender", gender, GENDERS);
        let religion = v.optional_text("religion", self.religion.as_deref(), 255);
        let address = v.optional_text("address", self.address.as_deref(), 255);
        let contact_no = v.optional_text("contact_no", self.contact_no.as_deref(), 20);
        let email = v.required_email("email", self.email.as_deref());
        let password = v.required_password("password", self.password.as_deref());
        v.finish()?;

        Ok(ValidatedStudent {
            lrn: lrn.unwrap_or_default(),
            fname: fname.unwrap_or_default(),
            mname,
            lname: lname.unwrap_or_default(),
            suffix,
            bdate,
            bplace,
            gender,
            religion,
            address,
            contact_no,
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
        })
    }
}

impl UpdateStudentRequest {
    pub fn validate(&self) -> Result<StudentChanges, FieldErrors> {
        let mut v = FieldValidator::new();
        let changes = StudentChanges {
            fname: v.optional_text("fname", self.fname.as_deref(), 255),
            mname: v.optional_text("mname", self.mname.as_deref(), 255),
            lname: v.optional_text("lname", self.lname.as_deref(), 255),
            suffix: v.optional_text("suffix", self.suffix.as_deref(), 50),
            bdate: v.optional_date("bdate", self.bdate.as_deref()),
            bplace: v.optional_text("bplace", self.bplace.as_deref(), 255),
            gender: {
                let gender = v.optional_text("gender", self.gender.as_deref(), 50);
                v.one_of("gender", gender, GENDERS)
            },
            religion: v.optional_text("religion", self.religion.as_deref(), 255),
            address: v.optional_text("address", self.address.as_deref(), 255),
            contact_no: v.optional_text("contact_no", self.contact_no.as_deref(), 20),
            email: v.optional_email("email", self.email.as_deref()),
        };
        v.finish()?;
        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateStudentRequest {
        serde_json::from_str(
            r#"{
                "LRN": 123456789012,
                "fname": "Juan",
                "mname": "Santos",
                "lname": "Dela Cruz",
                "bdate": "2010-04-15",
                "gender": "male",
                "contact_no": 9171234567,
                "email": "juan@example.com",
                "password": "secret123"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_create_request_valid() {
        let student = valid_request().validate().unwrap();
        assert_eq!(student.lrn, "123456789012");
        assert_eq!(student.gender.as_deref(), Some("Male"));
        assert_eq!(student.contact_no.as_deref(), Some("9171234567"));
        assert_eq!(student.mname.as_deref(), Some("Santos"));
    }

    #[test]
    fn test_create_request_collects_all_errors() {
        let errors = CreateStudentRequest::default().validate().unwrap_err();
        for field in ["LRN", "fname", "lname", "email", "password"] {
            assert!(errors.has(field), "missing error for {field}");
        }
        assert!(!errors.has("mname"));
    }

    #[test]
    fn test_update_request_rejects_bad_email() {
        let req = UpdateStudentRequest {
            email: Some("nope".into()),
            address: Some("Quezon City".into()),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.has("email"));
        assert!(!errors.has("address"));
    }
}
