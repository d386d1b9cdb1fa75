use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{forbid_other_student, not_found, storage_failure};

pub async fn get_attendance(
    service: &AttendanceService,
    attendance_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_attendance(attendance_id).await {
        Ok(Some(attendance)) => {
            if let Some(resp) = forbid_other_student(request, &attendance.lrn) {
                return Ok(resp);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                attendance,
                "Attendance retrieved successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::NotFound, "Attendance not found")),
        Err(e) => Ok(storage_failure("Failed to get attendance", e)),
    }
}
