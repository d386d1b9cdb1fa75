use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::{HashMap, HashSet};

use super::MessageService;
use super::conversation::resolve_senders;
use crate::models::{
    ApiResponse,
    messages::{
        entities::Message,
        requests::PartyQuery,
        responses::{InboxMessage, InboxResponse},
    },
    parties::entities::Party,
};
use crate::services::responses::{forbid_other_student, storage_failure, validation_failed};

/// 输入按时间倒序，保留每个发送方的第一条
pub fn latest_per_sender(messages: Vec<Message>) -> Vec<Message> {
    let mut seen = HashSet::new();
    messages
        .into_iter()
        .filter(|m| seen.insert(m.message_sender.clone()))
        .collect()
}

fn with_sender_names(messages: Vec<Message>, parties: &HashMap<String, Party>) -> InboxResponse {
    InboxResponse {
        messages: messages
            .into_iter()
            .map(|message| InboxMessage {
                sender_name: parties.get(&message.message_sender).map(|p| p.name.clone()),
                message,
            })
            .collect(),
    }
}

async fn load_inbox(
    service: &MessageService,
    query: PartyQuery,
    request: &HttpRequest,
    latest_only: bool,
) -> ActixResult<HttpResponse> {
    let uid = match query.validate() {
        Ok(uid) => uid,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    if let Some(resp) = forbid_other_student(request, &uid) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    let mut messages = match storage.list_inbox(&uid, None).await {
        Ok(list) => list,
        Err(e) => return Ok(storage_failure("Failed to load inbox", e)),
    };
    if latest_only {
        messages = latest_per_sender(messages);
    }

    match resolve_senders(&storage, &messages).await {
        Ok(parties) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            with_sender_names(messages, &parties),
            "Messages retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Failed to resolve senders", e)),
    }
}

pub async fn get_inbox(
    service: &MessageService,
    query: PartyQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    load_inbox(service, query, request, false).await
}

pub async fn get_latest_messages(
    service: &MessageService,
    query: PartyQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    load_inbox(service, query, request, true).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn message(id: i64, sender: &str) -> Message {
        let at = Utc.timestamp_opt(1_700_000_000 + id, 0).unwrap();
        Message {
            message_id: id,
            message_sender: sender.into(),
            message_receiver: "123456789012".into(),
            message: "hi".into(),
            message_date: "2024-06-01".into(),
            read_at: None,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_latest_per_sender_keeps_newest() {
        let inbox = vec![
            message(9, "ADM-1"),
            message(8, "ADM-2"),
            message(7, "ADM-1"),
            message(6, "ADM-3"),
            message(5, "ADM-2"),
        ];
        let ids: Vec<i64> = latest_per_sender(inbox)
            .iter()
            .map(|m| m.message_id)
            .collect();
        assert_eq!(ids, vec![9, 8, 6]);
    }

    #[test]
    fn test_unknown_sender_has_no_name() {
        let mut parties = HashMap::new();
        parties.insert("ADM-1".to_string(), Party::admin("ADM-1", "Ana Reyes"));
        let resp = with_sender_names(vec![message(2, "ADM-1"), message(1, "ghost")], &parties);
        assert_eq!(resp.messages[0].sender_name.as_deref(), Some("Ana Reyes"));
        assert!(resp.messages[1].sender_name.is_none());
    }
}
