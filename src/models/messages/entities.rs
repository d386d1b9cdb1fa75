use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 站内消息实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "message.ts")]
pub struct Message {
    pub message_id: i64,
    pub message_sender: String,
    pub message_receiver: String,
    pub message: String,
    pub message_date: String,
    pub read_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
