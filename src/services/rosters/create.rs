use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::RosterService;
use crate::errors::{PortalError, Result};
use crate::models::rosters::requests::{NewRoster, RosterRequest};
use crate::models::{ApiResponse, ErrorCode, FieldErrors};
use crate::services::responses::{reference_failure, storage_failure, validation_failed};
use crate::storage::Storage;
use crate::utils::validate::FieldValidator;

async fn check_references(storage: &Arc<dyn Storage>, roster: &NewRoster) -> Result<FieldErrors> {
    let mut v = FieldValidator::new();
    if storage.get_student(&roster.lrn).await?.is_none() {
        v.invalid_reference("LRN");
    }
    if storage.get_class(roster.class_id).await?.is_none() {
        v.invalid_reference("class_id");
    }
    Ok(v.into_errors())
}

pub async fn create_roster(
    service: &RosterService,
    roster_request: RosterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let roster = match roster_request.validate() {
        Ok(r) => r,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    if let Some(resp) = reference_failure(
        "Failed to check roster references",
        check_references(&storage, &roster).await,
    ) {
        return Ok(resp);
    }

    let (lrn, class_id) = (roster.lrn.clone(), roster.class_id);
    match storage.create_roster(roster).await {
        Ok(roster) => {
            info!("Student {} added to class {}", roster.lrn, roster.class_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                roster,
                "Roster entry created successfully",
            )))
        }
        // 同一学生重复加入同一课程班
        Err(PortalError::Conflict(_)) => {
            info!("Student {} is already in class {}", lrn, class_id);
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                "The student is already on this class roster",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to create roster entry", e)),
    }
}
