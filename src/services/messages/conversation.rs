use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;
use std::sync::Arc;

use super::MessageService;
use crate::errors::Result;
use crate::models::{
    ApiResponse,
    messages::{
        entities::Message,
        requests::PartyQuery,
        responses::{ConversationMessage, ConversationResponse, ConversationUser},
    },
    parties::entities::Party,
};
use crate::services::responses::{forbid_other_student, storage_failure, validation_failed};
use crate::storage::Storage;

/// 为会话中的每条消息附上发送方名称，`me` 仅在发送方为调用方时为 true
pub fn project_conversation(
    messages: Vec<Message>,
    caller: &str,
    parties: &HashMap<String, Party>,
) -> Vec<ConversationMessage> {
    messages
        .into_iter()
        .map(|message| ConversationMessage {
            sender_name: parties.get(&message.message_sender).map(|p| p.name.clone()),
            me: message.message_sender == caller,
            message,
        })
        .collect()
}

/// 批量解析发送方
pub(crate) async fn resolve_senders(
    storage: &Arc<dyn Storage>,
    messages: &[Message],
) -> Result<HashMap<String, Party>> {
    let mut ids: Vec<String> = messages.iter().map(|m| m.message_sender.clone()).collect();
    ids.sort();
    ids.dedup();
    storage.find_parties(&ids).await
}

/// 双方的全部消息（新消息在前），以 `caller` 的视角标记
pub(crate) async fn load_conversation(
    storage: &Arc<dyn Storage>,
    other: &str,
    caller: &str,
) -> Result<Vec<ConversationMessage>> {
    let messages = storage.list_conversation(other, caller).await?;
    let parties = resolve_senders(storage, &messages).await?;
    Ok(project_conversation(messages, caller, &parties))
}

pub async fn get_conversation(
    service: &MessageService,
    party_id: String,
    query: PartyQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = match query.validate() {
        Ok(uid) => uid,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    if let Some(resp) = forbid_other_student(request, &uid) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    // 先查学生表再查管理员表，都没有时返回提示与空会话
    let party = match storage.find_party(&party_id).await {
        Ok(party) => party,
        Err(e) => return Ok(storage_failure("Failed to resolve party", e)),
    };
    let Some(party) = party else {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            ConversationResponse {
                user: ConversationUser::not_found(),
                conversation: Vec::new(),
            },
            "Conversation retrieved successfully",
        )));
    };

    match load_conversation(&storage, &party_id, &uid).await {
        Ok(conversation) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ConversationResponse {
                user: ConversationUser::Found(party),
                conversation,
            },
            "Conversation retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Failed to load conversation", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn message(id: i64, sender: &str, receiver: &str) -> Message {
        let at = Utc.timestamp_opt(1_700_000_000 - id, 0).unwrap();
        Message {
            message_id: id,
            message_sender: sender.into(),
            message_receiver: receiver.into(),
            message: format!("hello {id}"),
            message_date: "2024-06-01".into(),
            read_at: None,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_me_only_for_caller() {
        let messages = vec![
            message(3, "123456789012", "ADM-1"),
            message(2, "ADM-1", "123456789012"),
            message(1, "123456789012", "ADM-1"),
        ];
        let projected = project_conversation(messages, "123456789012", &HashMap::new());
        let flags: Vec<bool> = projected.iter().map(|m| m.me).collect();
        assert_eq!(flags, vec![true, false, true]);
        // 保持输入顺序
        let ids: Vec<i64> = projected.iter().map(|m| m.message.message_id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_sender_names_resolved_from_either_table() {
        let mut parties = HashMap::new();
        parties.insert("ADM-1".to_string(), Party::admin("ADM-1", "Ana Reyes"));
        parties.insert(
            "123456789012".to_string(),
            Party::student("123456789012", "Juan S. Dela Cruz"),
        );
        let messages = vec![
            message(2, "ADM-1", "123456789012"),
            message(1, "999", "123456789012"),
            message(0, "123456789012", "ADM-1"),
        ];
        let projected = project_conversation(messages, "ADM-1", &parties);
        assert_eq!(projected[0].sender_name.as_deref(), Some("Ana Reyes"));
        assert!(projected[0].me);
        assert_eq!(projected[1].sender_name, None);
        assert_eq!(
            projected[2].sender_name.as_deref(),
            Some("Juan S. Dela Cruz")
        );
    }

    #[test]
    fn test_projection_serializes_flat() {
        let projected = project_conversation(
            vec![message(7, "ADM-1", "123456789012")],
            "123456789012",
            &HashMap::new(),
        );
        let json = serde_json::to_value(&projected[0]).unwrap();
        assert_eq!(json["message_id"], 7);
        assert_eq!(json["me"], false);
        assert!(json["sender_name"].is_null());
    }
}
