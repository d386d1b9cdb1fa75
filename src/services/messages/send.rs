use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::MessageService;
use super::conversation::load_conversation;
use crate::models::{
    ApiResponse, FieldErrors,
    messages::{
        requests::SendMessageRequest,
        responses::{ConversationResponse, ConversationUser, SentMessageResponse},
    },
};
use crate::services::responses::{forbid_other_student, storage_failure, validation_failed};

fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

pub async fn send_message(
    service: &MessageService,
    send_request: SendMessageRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let new_message = match send_request.validate(false, &today()) {
        Ok(m) => m,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    // 学生只能以自己的名义发送
    if let Some(resp) = forbid_other_student(request, &new_message.message_sender) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    match storage.create_message(new_message).await {
        Ok(message) => {
            debug!(
                "Message {} sent from {} to {}",
                message.message_id, message.message_sender, message.message_receiver
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SentMessageResponse {
                    message: "Message sent successfully".to_string(),
                    data: message,
                },
                "Message sent successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to send message", e)),
    }
}

pub async fn compose_message(
    service: &MessageService,
    send_request: SendMessageRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let new_message = match send_request.validate(true, &today()) {
        Ok(m) => m,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    if let Some(resp) = forbid_other_student(request, &new_message.message_sender) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    // 双方都必须是已存在的学生或管理员
    let ids = [
        new_message.message_sender.clone(),
        new_message.message_receiver.clone(),
    ];
    let parties = match storage.find_parties(&ids).await {
        Ok(parties) => parties,
        Err(e) => return Ok(storage_failure("Failed to resolve parties", e)),
    };
    let mut errors = FieldErrors::new();
    if !parties.contains_key(&new_message.message_sender) {
        errors.add("message_sender", "The selected message_sender is invalid.");
    }
    let receiver = parties.get(&new_message.message_receiver).cloned();
    if receiver.is_none() {
        errors.add("message_receiver", "The selected message_receiver is invalid.");
    }
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let sender = new_message.message_sender.clone();
    let receiver_id = new_message.message_receiver.clone();
    if let Err(e) = storage.create_message(new_message).await {
        return Ok(storage_failure("Failed to send message", e));
    }

    let user = receiver
        .map(ConversationUser::Found)
        .unwrap_or_else(ConversationUser::not_found);
    match load_conversation(&storage, &receiver_id, &sender).await {
        Ok(conversation) => Ok(HttpResponse::Created().json(ApiResponse::success(
            ConversationResponse { user, conversation },
            "Message sent successfully",
        ))),
        Err(e) => Ok(storage_failure("Failed to load conversation", e)),
    }
}
