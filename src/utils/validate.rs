//! 请求字段校验
//!
//! `FieldValidator` 逐个字段检查并收集错误，最终得到 `{字段: [错误信息]}`，
//! 由服务层统一转换为 422 响应。

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::FieldErrors;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

static LRN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{1,20}$").expect("Invalid LRN regex"));

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// LRN 只能由 1-20 位数字组成
pub fn is_valid_lrn(lrn: &str) -> bool {
    LRN_RE.is_match(lrn)
}

/// 解析日期，接受 `YYYY-MM-DD` 或 `YYYY-MM-DD HH:MM:SS`，统一返回日期部分
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// 字段校验器
#[derive(Debug, Default)]
pub struct FieldValidator {
    errors: FieldErrors,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    /// 必填文本，去除首尾空白后不能为空
    pub fn required_text(&mut self, field: &str, value: Option<&str>, max: usize) -> Option<String> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => self.check_length(field, v, max),
            None => {
                self.add(field, format!("The {field} field is required."));
                None
            }
        }
    }

    /// 可选文本，空白视为未提供
    pub fn optional_text(&mut self, field: &str, value: Option<&str>, max: usize) -> Option<String> {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .and_then(|v| self.check_length(field, v, max))
    }

    fn check_length(&mut self, field: &str, value: &str, max: usize) -> Option<String> {
        if value.chars().count() > max {
            self.add(
                field,
                format!("The {field} field must not be greater than {max} characters."),
            );
            None
        } else {
            Some(value.to_string())
        }
    }

    pub fn required_lrn(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        let lrn = self.required_text(field, value, 20)?;
        if is_valid_lrn(&lrn) {
            Some(lrn)
        } else {
            self.add(field, format!("The {field} field must contain digits only."));
            None
        }
    }

    pub fn required_email(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        let email = self.required_text(field, value, 255)?;
        self.check_email(field, email)
    }

    pub fn optional_email(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        let email = self.optional_text(field, value, 255)?;
        self.check_email(field, email)
    }

    fn check_email(&mut self, field: &str, email: String) -> Option<String> {
        if validate_email(&email).is_ok() {
            Some(email)
        } else {
            self.add(field, format!("The {field} field must be a valid email address."));
            None
        }
    }

    pub fn required_password(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        // 密码不做 trim
        match value.filter(|v| !v.is_empty()) {
            Some(v) if v.chars().count() < MIN_PASSWORD_LENGTH => {
                self.add(
                    field,
                    format!("The {field} field must be at least {MIN_PASSWORD_LENGTH} characters."),
                );
                None
            }
            Some(v) => Some(v.to_string()),
            None => {
                self.add(field, format!("The {field} field is required."));
                None
            }
        }
    }

    /// 必填日期，返回规范化的 `YYYY-MM-DD`
    pub fn required_date(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        let raw = self.required_text(field, value, 32)?;
        self.check_date(field, &raw)
    }

    pub fn optional_date(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        let raw = self.optional_text(field, value, 32)?;
        self.check_date(field, &raw)
    }

    fn check_date(&mut self, field: &str, raw: &str) -> Option<String> {
        match parse_date(raw) {
            Some(date) => Some(date.format("%Y-%m-%d").to_string()),
            None => {
                self.add(field, format!("The {field} field must be a valid date."));
                None
            }
        }
    }

    pub fn required_number(&mut self, field: &str, value: Option<f64>, min: f64) -> Option<f64> {
        match value {
            Some(v) => self.check_min(field, v, min),
            None => {
                self.add(field, format!("The {field} field is required."));
                None
            }
        }
    }

    pub fn optional_number(&mut self, field: &str, value: Option<f64>, min: f64) -> Option<f64> {
        value.and_then(|v| self.check_min(field, v, min))
    }

    fn check_min(&mut self, field: &str, value: f64, min: f64) -> Option<f64> {
        if value < min {
            self.add(field, format!("The {field} field must be at least {min}."));
            None
        } else {
            Some(value)
        }
    }

    pub fn required_id(&mut self, field: &str, value: Option<i64>) -> Option<i64> {
        match value {
            Some(v) if v > 0 => Some(v),
            Some(_) => {
                self.add(field, format!("The selected {field} is invalid."));
                None
            }
            None => {
                self.add(field, format!("The {field} field is required."));
                None
            }
        }
    }

    /// 取值必须在给定集合中（忽略大小写），返回集合中的规范写法
    pub fn one_of(
        &mut self,
        field: &str,
        value: Option<String>,
        allowed: &[&str],
    ) -> Option<String> {
        let value = value?;
        match allowed.iter().find(|a| a.eq_ignore_ascii_case(&value)) {
            Some(canonical) => Some((*canonical).to_string()),
            None => {
                self.add(field, format!("The selected {field} is invalid."));
                None
            }
        }
    }

    /// 引用检查失败时调用（如 LRN 不存在）
    pub fn invalid_reference(&mut self, field: &str) {
        self.add(field, format!("The selected {field} is invalid."));
    }

    pub fn already_taken(&mut self, field: &str) {
        self.add(field, format!("The {field} has already been taken."));
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims_and_limits() {
        let mut v = FieldValidator::new();
        assert_eq!(
            v.required_text("fname", Some("  Juan "), 255).as_deref(),
            Some("Juan")
        );
        assert!(v.required_text("lname", Some("   "), 255).is_none());
        assert!(v.required_text("room", Some("abcdef"), 5).is_none());

        let errors = v.finish().unwrap_err();
        assert_eq!(
            errors.get("lname").unwrap(),
            &["The lname field is required.".to_string()]
        );
        assert_eq!(
            errors.get("room").unwrap(),
            &["The room field must not be greater than 5 characters.".to_string()]
        );
        assert!(!errors.has("fname"));
    }

    #[test]
    fn test_lrn_digits_only() {
        let mut v = FieldValidator::new();
        assert_eq!(
            v.required_lrn("LRN", Some("123456789012")).as_deref(),
            Some("123456789012")
        );
        assert!(v.required_lrn("LRN", Some("12AB")).is_none());
        assert!(v.finish().is_err());
    }

    #[test]
    fn test_dates_normalized() {
        let mut v = FieldValidator::new();
        assert_eq!(
            v.required_date("date", Some("2024-09-02 08:00:00")).as_deref(),
            Some("2024-09-02")
        );
        assert!(v.required_date("bdate", Some("2024-02-30")).is_none());
        let errors = v.finish().unwrap_err();
        assert_eq!(
            errors.get("bdate").unwrap(),
            &["The bdate field must be a valid date.".to_string()]
        );
    }

    #[test]
    fn test_password_minimum() {
        let mut v = FieldValidator::new();
        assert!(v.required_password("password", Some("short")).is_none());
        assert_eq!(
            v.required_password("password2", Some(" spaced pass ")).as_deref(),
            Some(" spaced pass ")
        );
        let errors = v.finish().unwrap_err();
        assert!(errors.has("password"));
        assert!(!errors.has("password2"));
    }

    #[test]
    fn test_numbers_and_ids() {
        let mut v = FieldValidator::new();
        assert_eq!(v.required_number("amount_paid", Some(0.0), 0.0), Some(0.0));
        assert!(v.required_number("tuition", Some(-1.0), 0.0).is_none());
        assert!(v.required_id("class_id", None).is_none());
        assert!(v.required_id("section_id", Some(0)).is_none());
        let errors = v.finish().unwrap_err();
        assert!(errors.has("tuition"));
        assert!(errors.has("class_id"));
        assert!(errors.has("section_id"));
        assert!(!errors.has("amount_paid"));
    }

    #[test]
    fn test_one_of_canonicalizes() {
        let mut v = FieldValidator::new();
        assert_eq!(
            v.one_of("public_private", Some("PRIVATE".into()), &["public", "private"])
                .as_deref(),
            Some("private")
        );
        assert!(
            v.one_of("public_private", Some("charter".into()), &["public", "private"])
                .is_none()
        );
        assert!(v.finish().is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("juan@school.ph").is_ok());
        assert!(validate_email("not-an-email").is_err());
    }
}
