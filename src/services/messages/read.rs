use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{not_found, storage_failure};

/// 只在 read_at 为空时写入，重复调用不改变已读时间
pub async fn mark_read(
    service: &MessageService,
    message_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let now = chrono::Utc::now().timestamp();

    match storage.mark_message_read(message_id, now).await {
        Ok(Some(message)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            message,
            "Message marked as read",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::MessageNotFound, "Message not found")),
        Err(e) => Ok(storage_failure("Failed to mark message as read", e)),
    }
}
