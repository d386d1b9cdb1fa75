use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubjectService;
use crate::models::common::PaginationQuery;
use crate::models::subjects::requests::SubjectRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{not_found, storage_failure, validation_failed};

const NOT_FOUND: &str = "Subject not found";

pub async fn list(
    service: &SubjectService,
    query: PaginationQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_subjects_with_pagination(Some(query.page), Some(query.size))
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Subjects retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Failed to list subjects", e)),
    }
}

pub async fn create(
    service: &SubjectService,
    subject_request: SubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let subject = match subject_request.validate() {
        Ok(s) => s,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    match storage.create_subject(subject).await {
        Ok(subject) => {
            info!(
                "Subject {} ({}) created",
                subject.subject_name, subject.grade_level
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                subject,
                "Subject created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to create subject", e)),
    }
}

pub async fn get(
    service: &SubjectService,
    subject_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_subject(subject_id).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subject,
            "Subject retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::NotFound, NOT_FOUND)),
        Err(e) => Ok(storage_failure("Failed to get subject", e)),
    }
}

pub async fn update(
    service: &SubjectService,
    subject_id: i64,
    subject_request: SubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let subject = match subject_request.validate() {
        Ok(s) => s,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    match storage.update_subject(subject_id, subject).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subject,
            "Subject updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::NotFound, NOT_FOUND)),
        Err(e) => Ok(storage_failure("Failed to update subject", e)),
    }
}

// 仍被课程班引用时由外键约束拒绝，返回 409
pub async fn delete(
    service: &SubjectService,
    subject_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_subject(subject_id).await {
        Ok(true) => {
            info!("Subject {} deleted", subject_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Subject deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::NotFound, NOT_FOUND)),
        Err(e) => Ok(storage_failure("Failed to delete subject", e)),
    }
}
