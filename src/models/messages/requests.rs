use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldErrors;
use crate::models::common::lenient::deserialize_opt_string;
use crate::utils::validate::FieldValidator;

pub const MAX_MESSAGE_LENGTH: usize = 5000;

// 会话/收件箱查询参数，uid 为当前调用方编号
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "message.ts")]
pub struct PartyQuery {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub uid: Option<String>,
}

impl PartyQuery {
    pub fn validate(&self) -> Result<String, FieldErrors> {
        let mut v = FieldValidator::new();
        let uid = v.required_text("uid", self.uid.as_deref(), 50);
        v.finish()?;
        Ok(uid.unwrap_or_default())
    }
}

// 发送消息请求（兼容前端拼写 message_reciever）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "message.ts")]
pub struct SendMessageRequest {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub message_sender: Option<String>,
    #[serde(
        default,
        alias = "message_reciever",
        deserialize_with = "deserialize_opt_string"
    )]
    pub message_receiver: Option<String>,
    pub message: Option<String>,
    pub message_date: Option<String>,
}

/// 存储层使用的新消息数据
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub message_sender: String,
    pub message_receiver: String,
    pub message: String,
    pub message_date: String,
}

impl SendMessageRequest {
    /// `require_date` 为 true 时 message_date 必填，否则缺省为 `today`
    pub fn validate(&self, require_date: bool, today: &str) -> Result<NewMessage, FieldErrors> {
        let mut v = FieldValidator::new();
        let sender = v.required_text("message_sender", self.message_sender.as_deref(), 50);
        let receiver = v.required_text("message_receiver", self.message_receiver.as_deref(), 50);
        let message = v.required_text("message", self.message.as_deref(), MAX_MESSAGE_LENGTH);
        let message_date = if require_date {
            v.required_date("message_date", self.message_date.as_deref())
        } else {
            v.optional_date("message_date", self.message_date.as_deref())
        };
        v.finish()?;

        Ok(NewMessage {
            message_sender: sender.unwrap_or_default(),
            message_receiver: receiver.unwrap_or_default(),
            message: message.unwrap_or_default(),
            message_date: message_date.unwrap_or_else(|| today.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misspelled_receiver_alias() {
        let req: SendMessageRequest = serde_json::from_str(
            r#"{"message_sender": "ADM-1", "message_reciever": 1001, "message": "Hello"}"#,
        )
        .unwrap();
        let msg = req.validate(false, "2025-01-10").unwrap();
        assert_eq!(msg.message_receiver, "1001");
        assert_eq!(msg.message_date, "2025-01-10");
    }

    #[test]
    fn test_message_too_long() {
        let req = SendMessageRequest {
            message_sender: Some("1".into()),
            message_receiver: Some("2".into()),
            message: Some("x".repeat(MAX_MESSAGE_LENGTH + 1)),
            message_date: None,
        };
        assert!(req.validate(false, "2025-01-10").unwrap_err().has("message"));
    }

    #[test]
    fn test_compose_requires_date() {
        let req = SendMessageRequest {
            message_sender: Some("1".into()),
            message_receiver: Some("2".into()),
            message: Some("hi".into()),
            message_date: None,
        };
        let errors = req.validate(true, "2025-01-10").unwrap_err();
        assert!(errors.has("message_date"));
    }

    #[test]
    fn test_missing_uid() {
        let q = PartyQuery { uid: Some("  ".into()) };
        assert!(q.validate().unwrap_err().has("uid"));
    }
}
