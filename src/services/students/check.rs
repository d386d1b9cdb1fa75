use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::ApiResponse;
use crate::models::students::responses::StudentExistsResponse;
use crate::services::responses::storage_failure;

pub async fn check_student(
    service: &StudentService,
    lrn: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student(&lrn).await {
        Ok(student) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentExistsResponse {
                exists: student.is_some(),
            },
            "Student checked successfully",
        ))),
        Err(e) => Ok(storage_failure("Failed to check student", e)),
    }
}
