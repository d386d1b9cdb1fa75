use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::AttendanceService;
use crate::errors::Result;
use crate::models::attendance::requests::{AttendanceRequest, NewAttendance};
use crate::models::{ApiResponse, FieldErrors};
use crate::services::responses::{reference_failure, storage_failure, validation_failed};
use crate::storage::Storage;
use crate::utils::validate::FieldValidator;

/// 学生与课程班必须存在
pub(crate) async fn check_references(
    storage: &Arc<dyn Storage>,
    attendance: &NewAttendance,
) -> Result<FieldErrors> {
    let mut v = FieldValidator::new();
    if storage.get_student(&attendance.lrn).await?.is_none() {
        v.invalid_reference("LRN");
    }
    if storage.get_class(attendance.class_id).await?.is_none() {
        v.invalid_reference("class_id");
    }
    Ok(v.into_errors())
}

pub async fn create_attendance(
    service: &AttendanceService,
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

    match storage.create_attendance(attendance).await {
        Ok(attendance) => {
            info!(
                "Attendance on {} recorded for {} in class {}",
                attendance.date, attendance.lrn, attendance.class_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                attendance,
                "Attendance created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to create attendance", e)),
    }
}
