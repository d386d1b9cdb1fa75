use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldErrors;
use crate::models::common::PaginationQuery;
use crate::models::common::lenient::{deserialize_opt_i64, deserialize_opt_string};
use crate::utils::validate::FieldValidator;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "roster.ts")]
pub struct RosterListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(rename = "LRN", alias = "lrn")]
    pub lrn: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub class_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "roster.ts")]
pub struct RosterRequest {
    #[serde(
        rename = "LRN",
        alias = "lrn",
        default,
        deserialize_with = "deserialize_opt_string"
    )]
    pub lrn: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub class_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRoster {
    pub lrn: String,
    pub class_id: i64,
}

impl RosterRequest {
    pub fn validate(&self) -> Result<NewRoster, FieldErrors> {
        let mut v = FieldValidator::new();
        let lrn = v.required_lrn("LRN", self.lrn.as_deref());
        let class_id = v.required_id("class_id", self.class_id);
        v.finish()?;
        Ok(NewRoster {
            lrn: lrn.unwrap_or_default(),
            class_id: class_id.unwrap_or_default(),
        })
    }
}
