pub mod serve;

pub use serve::{content_type_for, resolve_upload_path};

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::config::AppConfig;

/// 上传文件的只读访问（头像、缴费凭证）
pub struct FileService;

impl FileService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 读取 upload.dir 下的文件
    pub async fn serve_file(
        &self,
        relative: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        serve::serve_file(self, relative, request).await
    }
}
