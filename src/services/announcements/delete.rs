use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AnnouncementService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{not_found, storage_failure};

pub async fn delete_announcement(
    service: &AnnouncementService,
    ancmnt_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_announcement(ancmnt_id).await {
        Ok(true) => {
            info!("Announcement {} deleted", ancmnt_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Announcement deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::NotFound, "Announcement not found")),
        Err(e) => Ok(storage_failure("Failed to delete announcement", e)),
    }
}
