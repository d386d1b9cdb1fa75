use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SectionService;
use crate::models::common::PaginationQuery;
use crate::models::sections::requests::SectionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{not_found, storage_failure, validation_failed};

const NOT_FOUND: &str = "Section not found";

pub async fn list(
    service: &SectionService,
    query: PaginationQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_sections_with_pagination(Some(query.page), Some(query.size))
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Sections retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Failed to list sections", e)),
    }
}

pub async fn create(
    service: &SectionService,
    section_request: SectionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let section = match section_request.validate() {
        Ok(s) => s,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    match storage.create_section(section).await {
        Ok(section) => {
            info!(
                "Section {} ({}) created",
                section.section_name, section.grade_level
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                section,
                "Section created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to create section", e)),
    }
}

pub async fn get(
    service: &SectionService,
    section_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_section(section_id).await {
        Ok(Some(section)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            section,
            "Section retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::NotFound, NOT_FOUND)),
        Err(e) => Ok(storage_failure("Failed to get section", e)),
    }
}

pub async fn update(
    service: &SectionService,
    section_id: i64,
    section_request: SectionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let section = match section_request.validate() {
        Ok(s) => s,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    match storage.update_section(section_id, section).await {
        Ok(Some(section)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            section,
            "Section updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::NotFound, NOT_FOUND)),
        Err(e) => Ok(storage_failure("Failed to update section", e)),
    }
}

// 仍被课程班或入学记录引用时由外键约束拒绝，返回 409
pub async fn delete(
    service: &SectionService,
    section_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_section(section_id).await {
        Ok(true) => {
            info!("Section {} deleted", section_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Section deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::NotFound, NOT_FOUND)),
        Err(e) => Ok(storage_failure("Failed to delete section", e)),
    }
}
