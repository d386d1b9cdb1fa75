use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FinancialStatementService;
use crate::models::financial_statements::requests::{
    FinancialStatementListParams, FinancialStatementRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{
    forbid_other_student, invalid_reference, not_found, own_records_filter, storage_failure,
    validation_failed,
};

const NOT_FOUND: &str = "Financial statement not found";

pub async fn list(
    service: &FinancialStatementService,
    query: FinancialStatementListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let lrn = match own_records_filter(request, query.lrn) {
        Ok(lrn) => lrn,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match storage
        .list_financial_statements_with_pagination(
            lrn,
            Some(query.pagination.page),
            Some(query.pagination.size),
        )
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Financial statements retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Failed to list financial statements", e)),
    }
}

pub async fn create(
    service: &FinancialStatementService,
    statement_request: FinancialStatementRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let statement = match statement_request.validate() {
        Ok(s) => s,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    match storage.get_student(&statement.lrn).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(invalid_reference("LRN")),
        Err(e) => return Ok(storage_failure("Failed to load student", e)),
    }

    let uploaded_at = chrono::Utc::now().timestamp();
    match storage
        .create_financial_statement(statement, uploaded_at)
        .await
    {
        Ok(statement) => {
            info!(
                "Financial statement {} registered for {}",
                statement.filename, statement.lrn
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                statement,
                "Financial statement created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to create financial statement", e)),
    }
}

pub async fn get(
    service: &FinancialStatementService,
    soa_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_financial_statement(soa_id).await {
        Ok(Some(statement)) => match forbid_other_student(request, &statement.lrn) {
            Some(resp) => Ok(resp),
            None => Ok(HttpResponse::Ok().json(ApiResponse::success(
                statement,
                "Financial statement retrieved successfully",
            ))),
        },
        Ok(None) => Ok(not_found(ErrorCode::NotFound, NOT_FOUND)),
        Err(e) => Ok(storage_failure("Failed to get financial statement", e)),
    }
}

pub async fn update(
    service: &FinancialStatementService,
    soa_id: i64,
    statement_request: FinancialStatementRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let statement = match statement_request.validate() {
        Ok(s) => s,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    match storage.get_student(&statement.lrn).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(invalid_reference("LRN")),
        Err(e) => return Ok(storage_failure("Failed to load student", e)),
    }

    match storage.update_financial_statement(soa_id, statement).await {
        Ok(Some(statement)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            statement,
            "Financial statement updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::NotFound, NOT_FOUND)),
        Err(e) => Ok(storage_failure("Failed to update financial statement", e)),
    }
}

pub async fn delete(
    service: &FinancialStatementService,
    soa_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_financial_statement(soa_id).await {
        Ok(true) => {
            info!("Financial statement {} deleted", soa_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Financial statement deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::NotFound, NOT_FOUND)),
        Err(e) => Ok(storage_failure("Failed to delete financial statement", e)),
    }
}
