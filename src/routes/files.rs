use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::services::FileService;

// 懒加载的全局 FileService 实例
static FILE_SERVICE: Lazy<FileService> = Lazy::new(FileService::new_lazy);

pub async fn serve_file(
    request: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    FILE_SERVICE.serve_file(path.into_inner(), &request).await
}

// 配置路由：上传文件公开可读
pub fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/storage/{path:.*}")
            .wrap(middleware::Compress::default())
            .route(web::get().to(serve_file)),
    );
}
