use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldErrors;
use crate::models::common::lenient::{deserialize_opt_f64, deserialize_opt_string};
use crate::utils::validate::FieldValidator;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "tuition_fee.ts")]
pub struct TuitionFeeRequest {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub grade_level: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub tuition: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub general: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub esc: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub subsidy: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub req_downpayment: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTuitionFee {
    pub grade_level: String,
    pub tuition: f64,
    pub general: Option<f64>,
    pub esc: Option<f64>,
    pub subsidy: Option<f64>,
    pub req_downpayment: Option<f64>,
}

impl TuitionFeeRequest {
    pub fn validate(&self) -> Result<NewTuitionFee, FieldErrors> {
        let mut v = FieldValidator::new();
        let grade_level = v.required_text("grade_level", self.grade_level.as_deref(), 50);
        let tuition = v.required_number("tuition", self.tuition, 0.0);
        let general = v.optional_number("general", self.general, 0.0);
        let esc = v.optional_number("esc", self.esc, 0.0);
        let subsidy = v.optional_number("subsidy", self.subsidy, 0.0);
        let req_downpayment = v.optional_number("req_downpayment", self.req_downpayment, 0.0);
        v.finish()?;

        Ok(NewTuitionFee {
            grade_level: grade_level.unwrap_or_default(),
            tuition: tuition.unwrap_or_default(),
            general,
            esc,
            subsidy,
            req_downpayment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuition_required_and_non_negative() {
        let req = TuitionFeeRequest {
            grade_level: Some("7".into()),
            subsidy: Some(-5.0),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.has("tuition"));
        assert!(errors.has("subsidy"));
        assert!(!errors.has("grade_level"));
    }
}
