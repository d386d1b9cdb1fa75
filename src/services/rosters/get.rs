use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RosterService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{forbid_other_student, not_found, storage_failure};

pub async fn get_roster(
    service: &RosterService,
    roster_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_roster(roster_id).await {
        Ok(Some(roster)) => match forbid_other_student(request, &roster.lrn) {
            Some(resp) => Ok(resp),
            None => Ok(HttpResponse::Ok().json(ApiResponse::success(
                roster,
                "Roster entry retrieved successfully",
            ))),
        },
        Ok(None) => Ok(not_found(ErrorCode::NotFound, "Roster not found")),
        Err(e) => Ok(storage_failure("Failed to get roster entry", e)),
    }
}
