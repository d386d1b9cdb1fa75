//! 服务层共用的响应构造

use actix_web::{HttpRequest, HttpResponse};
use tracing::{error, info};

use crate::errors::PortalError;
use crate::middlewares::RequireJWT;
use crate::models::parties::entities::PartyKind;
use crate::models::{ApiResponse, ErrorCode, FieldErrors, ValidationErrorResponse};
use crate::utils::multipart::UploadError;

pub(crate) const VALIDATION_MESSAGE: &str = "The given data was invalid.";

/// 422：字段级错误
pub(crate) fn validation_failed(errors: FieldErrors) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ApiResponse::error(
        ErrorCode::ValidationFailed,
        ValidationErrorResponse { errors },
        VALIDATION_MESSAGE,
    ))
}

/// 422：单个字段的错误
pub(crate) fn field_error(field: &str, message: impl Into<String>) -> HttpResponse {
    validation_failed(FieldErrors::single(field, message))
}

/// 422：引用的记录不存在
pub(crate) fn invalid_reference(field: &str) -> HttpResponse {
    field_error(field, format!("The selected {field} is invalid."))
}

pub(crate) fn not_found(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

/// 存储层错误：唯一约束冲突返回 409，其余记录日志后返回 500
pub(crate) fn storage_failure(context: &str, e: PortalError) -> HttpResponse {
    match e {
        PortalError::Conflict(message) => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(ErrorCode::Conflict, message))
        }
        other => {
            error!("{context}: {other}");
            internal_error()
        }
    }
}

pub(crate) fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        "Internal server error",
    ))
}

/// 上传文件写盘失败
pub(crate) fn file_store_failure() -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::FileUploadFailed,
        "Failed to store uploaded file",
    ))
}

/// 上传失败：客户端问题归为字段错误，写盘失败返回 500
pub(crate) fn upload_failure(field: &str, e: UploadError) -> HttpResponse {
    if e.is_client_error() {
        field_error(field, e.message(field))
    } else {
        error!("Upload of {field} failed: {}", e.message(field));
        file_store_failure()
    }
}

/// 学生只能访问自己的记录，管理员不受限
pub(crate) fn forbid_other_student(request: &HttpRequest, lrn: &str) -> Option<HttpResponse> {
    match RequireJWT::extract_party(request) {
        Some(party) if party.kind == PartyKind::Student && party.id != lrn => {
            info!("Student {} denied access to records of {}", party.id, lrn);
            Some(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "You can only access your own records",
            )))
        }
        _ => None,
    }
}

/// 列表筛选：学生只能查看自己的记录，未指定 LRN 时按本人筛选
pub(crate) fn own_records_filter(
    request: &HttpRequest,
    lrn: Option<String>,
) -> Result<Option<String>, HttpResponse> {
    let lrn = lrn.filter(|s| !s.trim().is_empty());
    match RequireJWT::extract_party(request) {
        Some(party) if party.kind == PartyKind::Student => match lrn {
            Some(lrn) => match forbid_other_student(request, &lrn) {
                Some(resp) => Err(resp),
                None => Ok(Some(lrn)),
            },
            None => Ok(Some(party.id)),
        },
        _ => Ok(lrn),
    }
}

/// 引用检查结果：有缺失时 422，查询失败时 500
pub(crate) fn reference_failure(
    context: &str,
    checked: Result<FieldErrors, PortalError>,
) -> Option<HttpResponse> {
    match checked {
        Ok(errors) if errors.is_empty() => None,
        Ok(errors) => Some(validation_failed(errors)),
        Err(e) => Some(storage_failure(context, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_conflict_maps_to_409() {
        let resp = storage_failure("create roster", PortalError::conflict("duplicate"));
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_database_error_maps_to_500() {
        let resp = storage_failure("list students", PortalError::database_operation("boom"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_other_student_is_forbidden() {
        use crate::models::parties::entities::Party;
        use actix_web::HttpMessage;
        use actix_web::test::TestRequest;

        let req = TestRequest::default().to_http_request();
        req.extensions_mut()
            .insert(Party::student("111111111111", "Juan Cruz"));
        assert!(forbid_other_student(&req, "111111111111").is_none());
        let resp = forbid_other_student(&req, "222222222222").unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let admin = TestRequest::default().to_http_request();
        admin.extensions_mut().insert(Party::admin("ADM-1", "Ana Reyes"));
        assert!(forbid_other_student(&admin, "222222222222").is_none());
    }

    #[test]
    fn test_student_list_filter_defaults_to_self() {
        use crate::models::parties::entities::Party;
        use actix_web::HttpMessage;
        use actix_web::test::TestRequest;

        let req = TestRequest::default().to_http_request();
        req.extensions_mut()
            .insert(Party::student("111111111111", "Juan Cruz"));
        assert_eq!(
            own_records_filter(&req, None).unwrap().as_deref(),
            Some("111111111111")
        );
        assert_eq!(
            own_records_filter(&req, Some(" ".into())).unwrap().as_deref(),
            Some("111111111111")
        );
        let denied = own_records_filter(&req, Some("222222222222".into())).unwrap_err();
        assert_eq!(denied.status(), StatusCode::FORBIDDEN);

        let admin = TestRequest::default().to_http_request();
        admin.extensions_mut().insert(Party::admin("ADM-1", "Ana Reyes"));
        assert_eq!(own_records_filter(&admin, None).unwrap(), None);
    }

    #[test]
    fn test_upload_failure_status() {
        let resp = upload_failure("proof_payment", UploadError::TooLarge);
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let resp = upload_failure("proof_payment", UploadError::Io("disk full".into()));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_reference_failure() {
        assert!(reference_failure("ctx", Ok(FieldErrors::new())).is_none());
        let missing = reference_failure("ctx", Ok(FieldErrors::single("LRN", "x"))).unwrap();
        assert_eq!(missing.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let failed =
            reference_failure("ctx", Err(PortalError::database_operation("down"))).unwrap();
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_is_422() {
        let resp = invalid_reference("class_id");
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
