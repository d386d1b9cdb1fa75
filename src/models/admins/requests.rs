use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldErrors;
use crate::models::common::lenient::deserialize_opt_string;
use crate::utils::validate::FieldValidator;

// 创建管理员请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "admin.ts")]
pub struct CreateAdminRequest {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub admin_id: Option<String>,
    pub fname: Option<String>,
    pub mname: Option<String>,
    pub lname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// 校验后的管理员数据（密码尚未哈希）
#[derive(Debug, Clone)]
pub struct ValidatedAdmin {
    pub admin_id: Option<String>,
    pub fname: String,
    pub mname: Option<String>,
    pub lname: String,
    pub email: String,
    pub password: String,
}

/// 存储层使用的新管理员数据
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub admin_id: String,
    pub fname: String,
    pub mname: Option<String>,
    pub lname: String,
    pub email: String,
    pub password_hash: String,
}

impl CreateAdminRequest {
    pub fn validate(&self) -> Result<ValidatedAdmin, FieldErrors> {
        let mut v = FieldValidator::new();
        let admin_id = v.optional_text("admin_id", self.admin_id.as_deref(), 50);
        let fname = v.required_text("fname", self.fname.as_deref(), 255);
        let mname = v.optional_text("mname", self.mname.as_deref(), 255);
        let lname = v.required_text("lname", self.lname.as_deref(), 255);
        let email = v.required_email("email", self.email.as_deref());
        let password = v.required_password("password", self.password.as_deref());
        v.finish()?;

        Ok(ValidatedAdmin {
            admin_id,
            fname: fname.unwrap_or_default(),
            mname,
            lname: lname.unwrap_or_default(),
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_id_is_optional() {
        let req = CreateAdminRequest {
            fname: Some("Maria".into()),
            lname: Some("Reyes".into()),
            email: Some("maria@school.ph".into()),
            password: Some("password1".into()),
            ..Default::default()
        };
        let admin = req.validate().unwrap();
        assert!(admin.admin_id.is_none());
        assert_eq!(admin.email, "maria@school.ph");
    }

    #[test]
    fn test_short_password_rejected() {
        let req = CreateAdminRequest {
            fname: Some("Maria".into()),
            lname: Some("Reyes".into()),
            email: Some("maria@school.ph".into()),
            password: Some("short".into()),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.has("password"));
    }
}
