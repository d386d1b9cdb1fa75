use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::ApiResponse;
use crate::models::grades::requests::{ClassRecordQuery, GradeListParams};
use crate::services::responses::{own_records_filter, storage_failure};

pub async fn list_grades(
    service: &GradeService,
    query: GradeListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let lrn = match own_records_filter(request, query.lrn) {
        Ok(lrn) => lrn,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let list_query = ClassRecordQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        lrn,
        class_id: query.class_id,
    };

    match storage.list_grades_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Grades retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Failed to list grades", e)),
    }
}
