use super::entities::NotificationItem;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct NotificationFeedResponse {
    pub notifications: Vec<NotificationItem>,
}
