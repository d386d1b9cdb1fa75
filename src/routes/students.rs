use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::parties::entities::PartyKind;
use crate::models::students::requests::{
    BulkStudentRequest, CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::services::{ReportService, StudentService};
use crate::utils::SafePartyId;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(query.into_inner(), &req).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(student_data.into_inner(), &req)
        .await
}

pub async fn bulk_upsert(
    req: HttpRequest,
    bulk_data: web::Json<BulkStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.bulk_upsert(bulk_data.into_inner(), &req).await
}

pub async fn check_student(req: HttpRequest, lrn: SafePartyId) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.check_student(lrn.0, &req).await
}

pub async fn upload_profile(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.upload_profile(payload, &req).await
}

pub async fn get_student(req: HttpRequest, lrn: SafePartyId) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(lrn.0, &req).await
}

pub async fn update_student(
    req: HttpRequest,
    lrn: SafePartyId,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(lrn.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_student(req: HttpRequest, lrn: SafePartyId) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(lrn.0, &req).await
}

pub async fn get_profile_image(req: HttpRequest, lrn: SafePartyId) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_profile_image(lrn.0, &req).await
}

pub async fn tuition_details(req: HttpRequest, lrn: SafePartyId) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.tuition_details(lrn.0, &req).await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_students)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    )
                    .route(
                        web::post()
                            .to(create_student)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    ),
            )
            .service(
                web::resource("/bulk").route(
                    web::post()
                        .to(bulk_upsert)
                        .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                ),
            )
            .route("/check/{lrn}", web::get().to(check_student))
            .route(
                "/upload-profile",
                web::post()
                    .to(upload_profile)
                    .wrap(middlewares::RateLimit::file_upload()),
            )
            .route("/{lrn}/profile-image", web::get().to(get_profile_image))
            .route("/{lrn}/tuition-details", web::get().to(tuition_details))
            .service(
                web::resource("/{lrn}")
                    // 学生只能查看自己的记录
                    .route(web::get().to(get_student))
                    .route(
                        web::put()
                            .to(update_student)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    )
                    .route(
                        web::delete()
                            .to(delete_student)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    ),
            ),
    );
}
