use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, error};

use super::FileService;
use crate::errors::PortalError;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::internal_error;

/// 临时目录中的文件不对外提供
const STAGING_DIR: &str = "tmp";

/// 把请求路径限制在上传目录内，含 `..`、绝对路径或指向临时目录时返回 None
pub fn resolve_upload_path(upload_dir: &str, relative: &str) -> Option<PathBuf> {
    let relative = Path::new(relative);
    let mut components = relative.components();
    match components.next() {
        Some(Component::Normal(first)) if first != OsStr::new(STAGING_DIR) => {}
        _ => return None,
    }
    if !components.all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(Path::new(upload_dir).join(relative))
}

pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

fn file_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::FileNotFound,
        "File not found",
    ))
}

pub async fn serve_file(
    service: &FileService,
    relative: String,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    let Some(path) = resolve_upload_path(&config.upload.dir, &relative) else {
        debug!("Rejected storage path: {}", relative);
        return Ok(file_not_found());
    };
    if !path.is_file() {
        return Ok(file_not_found());
    }

    match tokio::fs::read(&path).await {
        Ok(buf) => Ok(HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, content_type_for(&path)))
            .insert_header((header::CONTENT_DISPOSITION, "inline"))
            .body(buf)),
        Err(e) => {
            error!("{}", PortalError::file_operation(format!("{}: {e}", path.display())));
            Ok(internal_error())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_stay_inside_upload_dir() {
        assert_eq!(
            resolve_upload_path("uploads", "payments/cruz_1_ABC.png"),
            Some(PathBuf::from("uploads/payments/cruz_1_ABC.png"))
        );
        assert!(resolve_upload_path("uploads", "../secrets.env").is_none());
        assert!(resolve_upload_path("uploads", "profiles/../../etc/passwd").is_none());
        assert!(resolve_upload_path("uploads", "/etc/passwd").is_none());
        assert!(resolve_upload_path("uploads", "").is_none());
    }

    #[test]
    fn test_staging_files_hidden() {
        assert!(resolve_upload_path("uploads", "tmp/abc.part").is_none());
        assert!(resolve_upload_path("uploads", "profiles/tmp.png").is_some());
    }

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type_for(Path::new("a/b.PNG")), "image/png");
        assert_eq!(content_type_for(Path::new("a/b.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("a/b.pdf")), "application/pdf");
        assert_eq!(content_type_for(Path::new("a/b")), "application/octet-stream");
    }
}
