use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::TuitionFeeService;
use crate::errors::Result;
use crate::models::common::PaginationQuery;
use crate::models::tuition_fees::requests::{NewTuitionFee, TuitionFeeRequest};
use crate::models::{ApiResponse, ErrorCode, FieldErrors};
use crate::services::responses::{
    not_found, reference_failure, storage_failure, validation_failed,
};
use crate::storage::Storage;
use crate::utils::validate::FieldValidator;

const NOT_FOUND: &str = "Tuition fee not found";

/// 每个年级只有一条学费标准，`current` 为正在更新的记录
async fn check_grade_level(
    storage: &Arc<dyn Storage>,
    fee: &NewTuitionFee,
    current: Option<i64>,
) -> Result<FieldErrors> {
    let mut v = FieldValidator::new();
    if let Some(existing) = storage.get_tuition_fee_by_grade(&fee.grade_level).await? {
        if Some(existing.fee_id) != current {
            v.already_taken("grade_level");
        }
    }
    Ok(v.into_errors())
}

pub async fn list(
    service: &TuitionFeeService,
    query: PaginationQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_tuition_fees_with_pagination(Some(query.page), Some(query.size))
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Tuition fees retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Failed to list tuition fees", e)),
    }
}

pub async fn create(
    service: &TuitionFeeService,
    fee_request: TuitionFeeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let fee = match fee_request.validate() {
        Ok(f) => f,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    if let Some(resp) = reference_failure(
        "Failed to check tuition grade level",
        check_grade_level(&storage, &fee, None).await,
    ) {
        return Ok(resp);
    }

    match storage.create_tuition_fee(fee).await {
        Ok(fee) => {
            info!("Tuition fee for grade {} created", fee.grade_level);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                fee,
                "Tuition fee created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to create tuition fee", e)),
    }
}

pub async fn get(
    service: &TuitionFeeService,
    fee_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_tuition_fee(fee_id).await {
        Ok(Some(fee)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            fee,
            "Tuition fee retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::TuitionNotFound, NOT_FOUND)),
        Err(e) => Ok(storage_failure("Failed to get tuition fee", e)),
    }
}

pub async fn update(
    service: &TuitionFeeService,
    fee_id: i64,
    fee_request: TuitionFeeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let fee = match fee_request.validate() {
        Ok(f) => f,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    if let Some(resp) = reference_failure(
        "Failed to check tuition grade level",
        check_grade_level(&storage, &fee, Some(fee_id)).await,
    ) {
        return Ok(resp);
    }

    match storage.update_tuition_fee(fee_id, fee).await {
        Ok(Some(fee)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            fee,
            "Tuition fee updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::TuitionNotFound, NOT_FOUND)),
        Err(e) => Ok(storage_failure("Failed to update tuition fee", e)),
    }
}

pub async fn delete(
    service: &TuitionFeeService,
    fee_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_tuition_fee(fee_id).await {
        Ok(true) => {
            info!("Tuition fee {} deleted", fee_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Tuition fee deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::TuitionNotFound, NOT_FOUND)),
        Err(e) => Ok(storage_failure("Failed to delete tuition fee", e)),
    }
}
