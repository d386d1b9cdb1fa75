use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 缴费记录实体，只追加不修改
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "payment.ts")]
pub struct Payment {
    pub payment_id: i64,
    #[serde(rename = "LRN")]
    pub lrn: String,
    #[serde(rename = "OR_number")]
    pub or_number: String,
    pub amount_paid: f64,
    pub proof_payment: String,
    pub description: String,
    pub date_of_payment: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 凭证访问地址，由服务层根据 public_base_url 计算
    #[serde(default)]
    pub proof_url: Option<String>,
}
