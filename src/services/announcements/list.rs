use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::models::ApiResponse;
use crate::models::common::PaginationQuery;
use crate::services::responses::storage_failure;

pub async fn list_announcements(
    service: &AnnouncementService,
    query: PaginationQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_announcements_with_pagination(Some(query.page), Some(query.size))
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Announcements retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Failed to list announcements", e)),
    }
}
