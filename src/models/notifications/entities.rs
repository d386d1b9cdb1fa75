use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 通知来源类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "notification.ts")]
pub enum NotificationKind {
    Announcement,
    Message,
    PaymentApproval,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Announcement => write!(f, "announcement"),
            NotificationKind::Message => write!(f, "message"),
            NotificationKind::PaymentApproval => write!(f, "payment_approval"),
        }
    }
}

// 通知条目
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct NotificationItem {
    pub id: i64,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

/// 三个来源各自取出的最近记录，顺序即来源顺序
#[derive(Debug, Clone, Default)]
pub struct NotificationSources {
    pub announcements: Vec<NotificationItem>,
    pub messages: Vec<NotificationItem>,
    pub payment_approvals: Vec<NotificationItem>,
}
