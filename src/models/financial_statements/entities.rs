use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 对账单文件记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "financial_statement.ts")]
pub struct FinancialStatement {
    pub soa_id: i64,
    #[serde(rename = "LRN")]
    pub lrn: String,
    pub filename: String,
    pub date_uploaded: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
