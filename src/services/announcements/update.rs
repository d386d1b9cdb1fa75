use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use super::create::check_references;
use crate::models::announcements::requests::AnnouncementRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{
    not_found, reference_failure, storage_failure, validation_failed,
};

pub async fn update_announcement(
    service: &AnnouncementService,
    ancmnt_id: i64,
    announcement_request: AnnouncementRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let announcement = match announcement_request.validate() {
        Ok(a) => a,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    if let Some(resp) = reference_failure(
        "Failed to check announcement references",
        check_references(&storage, &announcement).await,
    ) {
        return Ok(resp);
    }

    match storage.update_announcement(ancmnt_id, announcement).await {
        Ok(Some(announcement)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            announcement,
            "Announcement updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::NotFound, "Announcement not found")),
        Err(e) => Ok(storage_failure("Failed to update announcement", e)),
    }
}
