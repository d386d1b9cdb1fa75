use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use super::create::check_references;
use crate::models::attendance::requests::AttendanceRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{
    not_found, reference_failure, storage_failure, validation_failed,
};

pub async fn update_attendance(
    service: &AttendanceService,
    attendance_id: i64,
    attendance_request: AttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let attendance = match attendance_request.validate() {
        Ok(a) => a,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    if let Some(resp) = reference_failure(
        "Failed to check attendance references",
        check_references(&storage, &attendance).await,
    ) {
        return Ok(resp);
    }

    match storage.update_attendance(attendance_id, attendance).await {
        Ok(Some(attendance)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            attendance,
            "Attendance updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::NotFound, "Attendance not found")),
        Err(e) => Ok(storage_failure("Failed to update attendance", e)),
    }
}
