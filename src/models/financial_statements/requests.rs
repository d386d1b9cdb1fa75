use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldErrors;
use crate::models::common::PaginationQuery;
use crate::models::common::lenient::deserialize_opt_string;
use crate::utils::validate::FieldValidator;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "financial_statement.ts")]
pub struct FinancialStatementListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(rename = "LRN", alias = "lrn")]
    pub lrn: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "financial_statement.ts")]
pub struct FinancialStatementRequest {
    #[serde(
        rename = "LRN",
        alias = "lrn",
        default,
        deserialize_with = "deserialize_opt_string"
    )]
    pub lrn: Option<String>,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFinancialStatement {
    pub lrn: String,
    pub filename: String,
}

impl FinancialStatementRequest {
    pub fn validate(&self) -> Result<NewFinancialStatement, FieldErrors> {
        let mut v = FieldValidator::new();
        let lrn = v.required_lrn("LRN", self.lrn.as_deref());
        let filename = v.required_text("filename", self.filename.as_deref(), 255);
        v.finish()?;
        Ok(NewFinancialStatement {
            lrn: lrn.unwrap_or_default(),
            filename: filename.unwrap_or_default(),
        })
    }
}
