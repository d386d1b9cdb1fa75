use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::ApiResponse;
use crate::models::common::PaginationQuery;
use crate::services::responses::storage_failure;

pub async fn list_classes(
    service: &ClassService,
    query: PaginationQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_classes_with_pagination(Some(query.page), Some(query.size))
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Classes retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Failed to list classes", e)),
    }
}
