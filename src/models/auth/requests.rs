use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldErrors;
use crate::models::common::lenient::deserialize_opt_string;
use crate::utils::validate::{FieldValidator, MIN_PASSWORD_LENGTH};

// 登录请求（学生与管理员共用）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct LoginRequest {
    /// 邮箱
    pub email: Option<String>,
    /// 密码
    pub password: Option<String>,
    /// 是否记住我
    #[serde(default)]
    pub remember_me: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut v = FieldValidator::new();
        let email = v.required_email("email", self.email.as_deref());
        let password = v.required_password("password", self.password.as_deref());
        v.finish()?;
        Ok(Credentials {
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
        })
    }
}

// 修改个人资料与密码请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct UpdatePasswordRequest {
    /// 管理员代为修改时指定学生 LRN，学生本人可省略
    #[serde(
        rename = "LRN",
        alias = "lrn",
        default,
        deserialize_with = "deserialize_opt_string"
    )]
    pub lrn: Option<String>,
    #[serde(rename = "oldPassword", alias = "old_password")]
    pub old_password: Option<String>,
    #[serde(rename = "newPassword", alias = "new_password")]
    pub new_password: Option<String>,
    #[serde(
        rename = "newPassword_confirmation",
        alias = "new_password_confirmation"
    )]
    pub new_password_confirmation: Option<String>,
    pub fname: Option<String>,
    pub mname: Option<String>,
    pub lname: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// 校验后的资料修改
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    pub lrn: Option<String>,
    pub old_password: Option<String>,
    pub new_password: Option<String>,
    pub fname: String,
    pub mname: Option<String>,
    pub lname: String,
    pub email: String,
    pub address: String,
}

impl UpdatePasswordRequest {
    pub fn validate(&self) -> Result<ProfileUpdate, FieldErrors> {
        let mut v = FieldValidator::new();
        let lrn = self
            .lrn
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .and_then(|l| v.required_lrn("LRN", Some(l)));
        let fname = v.required_text("fname", self.fname.as_deref(), 255);
        let mname = v.optional_text("mname", self.mname.as_deref(), 255);
        let lname = v.required_text("lname", self.lname.as_deref(), 255);
        let email = v.required_email("email", self.email.as_deref());
        let address = v.required_text("address", self.address.as_deref(), 255);

        let new_password = self.new_password.as_deref().filter(|p| !p.is_empty());
        if let Some(password) = new_password {
            if password.chars().count() < MIN_PASSWORD_LENGTH {
                v.add(
                    "newPassword",
                    format!("The newPassword field must be at least {MIN_PASSWORD_LENGTH} characters."),
                );
            }
            if self.new_password_confirmation.as_deref() != Some(password) {
                v.add("newPassword", "The newPassword field confirmation does not match.");
            }
        }
        v.finish()?;

        Ok(ProfileUpdate {
            lrn,
            old_password: self.old_password.clone().filter(|p| !p.is_empty()),
            new_password: new_password.map(str::to_string),
            fname: fname.unwrap_or_default(),
            mname,
            lname: lname.unwrap_or_default(),
            email: email.unwrap_or_default(),
            address: address.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UpdatePasswordRequest {
        UpdatePasswordRequest {
            fname: Some("Juan".into()),
            lname: Some("Cruz".into()),
            email: Some("juan@example.com".into()),
            address: Some("Manila".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_login_requires_min_password() {
        let req = LoginRequest {
            email: Some("a@b.ph".into()),
            password: Some("1234".into()),
            remember_me: false,
        };
        assert!(req.validate().unwrap_err().has("password"));
    }

    #[test]
    fn test_profile_without_password_change() {
        let update = profile().validate().unwrap();
        assert!(update.new_password.is_none());
        assert!(update.lrn.is_none());
    }

    #[test]
    fn test_password_confirmation_must_match() {
        let mut req = profile();
        req.new_password = Some("newsecret1".into());
        req.new_password_confirmation = Some("different1".into());
        assert!(req.validate().unwrap_err().has("newPassword"));

        req.new_password_confirmation = Some("newsecret1".into());
        let update = req.validate().unwrap();
        assert_eq!(update.new_password.as_deref(), Some("newsecret1"));
    }

    #[test]
    fn test_camel_case_fields() {
        let req: UpdatePasswordRequest = serde_json::from_str(
            r#"{"LRN": 123456789012, "oldPassword": "old-pass1", "fname": "A", "lname": "B",
                "email": "a@b.ph", "address": "X"}"#,
        )
        .unwrap();
        let update = req.validate().unwrap();
        assert_eq!(update.lrn.as_deref(), Some("123456789012"));
        assert_eq!(update.old_password.as_deref(), Some("old-pass1"));
    }
}
