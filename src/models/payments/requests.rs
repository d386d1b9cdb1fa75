use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldErrors;
use crate::models::common::PaginationQuery;
use crate::utils::validate::FieldValidator;

// 缴费列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "payment.ts")]
pub struct PaymentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(rename = "LRN", alias = "lrn")]
    pub lrn: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PaymentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub lrn: Option<String>,
}

/// multipart 表单中的文本字段
#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
    pub lrn: Option<String>,
    pub amount_paid: Option<String>,
    pub description: Option<String>,
    pub date_of_payment: Option<String>,
    pub has_proof: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPayment {
    pub lrn: String,
    pub amount_paid: f64,
    pub description: String,
    pub date_of_payment: String,
}

/// 存储层使用的新缴费数据
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub lrn: String,
    pub or_number: String,
    pub amount_paid: f64,
    pub proof_payment: String,
    pub description: String,
    pub date_of_payment: String,
}

impl PaymentForm {
    pub fn validate(&self) -> Result<ValidatedPayment, FieldErrors> {
        let mut v = FieldValidator::new();
        let lrn = v.required_lrn("LRN", self.lrn.as_deref());
        let amount = match self.amount_paid.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => match raw.parse::<f64>() {
                Ok(n) if n.is_finite() => v.required_number("amount_paid", Some(n), 0.0),
                _ => {
                    v.add("amount_paid", "The amount_paid field must be a number.");
                    None
                }
            },
            _ => v.required_number("amount_paid", None, 0.0),
        };
        let description = v.required_text("description", self.description.as_deref(), 255);
        let date_of_payment = v.required_date("date_of_payment", self.date_of_payment.as_deref());
        if !self.has_proof {
            v.add("proof_payment", "The proof_payment field is required.");
        }
        v.finish()?;

        Ok(ValidatedPayment {
            lrn: lrn.unwrap_or_default(),
            amount_paid: amount.unwrap_or_default(),
            description: description.unwrap_or_default(),
            date_of_payment: date_of_payment.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PaymentForm {
        PaymentForm {
            lrn: Some("123456789012".into()),
            amount_paid: Some("2500.50".into()),
            description: Some("Downpayment".into()),
            date_of_payment: Some("2025-06-10".into()),
            has_proof: true,
        }
    }

    #[test]
    fn test_valid_form() {
        let p = form().validate().unwrap();
        assert_eq!(p.amount_paid, 2500.5);
        assert_eq!(p.date_of_payment, "2025-06-10");
    }

    #[test]
    fn test_missing_proof_is_rejected() {
        let mut f = form();
        f.has_proof = false;
        let errors = f.validate().unwrap_err();
        assert!(errors.has("proof_payment"));
        assert!(!errors.has("LRN"));
    }

    #[test]
    fn test_negative_or_non_numeric_amount() {
        let mut f = form();
        f.amount_paid = Some("-1".into());
        assert!(f.validate().unwrap_err().has("amount_paid"));
        f.amount_paid = Some("abc".into());
        assert!(f.validate().unwrap_err().has("amount_paid"));
    }
}
