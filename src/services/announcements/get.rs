use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{not_found, storage_failure};

pub async fn get_announcement(
    service: &AnnouncementService,
    ancmnt_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_announcement_detail(ancmnt_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            detail,
            "Announcement retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::NotFound, "Announcement not found")),
        Err(e) => Ok(storage_failure("Failed to get announcement", e)),
    }
}
