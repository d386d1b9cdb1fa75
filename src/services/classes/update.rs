use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use super::create::check_references;
use crate::models::classes::requests::ClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{
    not_found, reference_failure, storage_failure, validation_failed,
};

pub async fn update_class(
    service: &ClassService,
    class_id: i64,
    class_request: ClassRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let class = match class_request.validate() {
        Ok(c) => c,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    if let Some(resp) = reference_failure(
        "Failed to check class references",
        check_references(&storage, &class).await,
    ) {
        return Ok(resp);
    }

    match storage.update_class(class_id, class).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            class,
            "Class updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::NotFound, "Class not found")),
        Err(e) => Ok(storage_failure("Failed to update class", e)),
    }
}
