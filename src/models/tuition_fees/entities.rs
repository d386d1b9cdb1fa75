use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 各年级学费标准
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "tuition_fee.ts")]
pub struct TuitionFee {
    pub fee_id: i64,
    pub grade_level: String,
    pub tuition: f64,
    pub general: Option<f64>,
    pub esc: Option<f64>,
    pub subsidy: Option<f64>,
    pub req_downpayment: Option<f64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
