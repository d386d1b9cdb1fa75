use super::entities::Message;
use crate::models::parties::entities::Party;
use serde::Serialize;
use ts_rs::TS;

// 会话中的一条消息，me 表示是否由调用方发送
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "message.ts")]
pub struct ConversationMessage {
    #[serde(flatten)]
    #[ts(flatten)]
    pub message: Message,
    pub sender_name: Option<String>,
    pub me: bool,
}

// 收件箱消息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "message.ts")]
pub struct InboxMessage {
    #[serde(flatten)]
    #[ts(flatten)]
    pub message: Message,
    pub sender_name: Option<String>,
}

// 会话对象：找到则为参与方信息，否则为提示消息
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(untagged)]
#[ts(export, export_to = "message.ts")]
pub enum ConversationUser {
    Found(Party),
    NotFound { message: String },
}

impl ConversationUser {
    pub fn not_found() -> Self {
        ConversationUser::NotFound {
            message: "User not found".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "message.ts")]
pub struct ConversationResponse {
    pub user: ConversationUser,
    pub conversation: Vec<ConversationMessage>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "message.ts")]
pub struct InboxResponse {
    pub messages: Vec<InboxMessage>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "message.ts")]
pub struct SentMessageResponse {
    pub message: String,
    pub data: Message,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_not_found_shape() {
        let json = serde_json::to_value(ConversationUser::not_found()).unwrap();
        assert_eq!(json, serde_json::json!({"message": "User not found"}));
    }

    #[test]
    fn test_user_found_shape() {
        let json =
            serde_json::to_value(ConversationUser::Found(Party::admin("ADM-1", "Ana Cruz")))
                .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"account_id": "ADM-1", "account_name": "Ana Cruz", "type": "admin"})
        );
    }
}
