//! 基础数据：分组、科目、课程班、公告与学费标准

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::announcements::requests::AnnouncementRequest;
use crate::models::classes::requests::ClassRequest;
use crate::models::common::PaginationQuery;
use crate::models::parties::entities::PartyKind;
use crate::models::sections::requests::SectionRequest;
use crate::models::subjects::requests::SubjectRequest;
use crate::models::tuition_fees::requests::TuitionFeeRequest;
use crate::services::{
    AnnouncementService, ClassService, SectionService, SubjectService, TuitionFeeService,
};
use crate::utils::SafeIDI64;

static SECTION_SERVICE: Lazy<SectionService> = Lazy::new(SectionService::new_lazy);
static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);
static ANNOUNCEMENT_SERVICE: Lazy<AnnouncementService> =
    Lazy::new(AnnouncementService::new_lazy);
static TUITION_FEE_SERVICE: Lazy<TuitionFeeService> = Lazy::new(TuitionFeeService::new_lazy);

fn admin_only() -> RequireRole {
    RequireRole::new_any(PartyKind::admin_kinds())
}

// 分组
pub async fn list_sections(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.list_sections(query.into_inner(), &req).await
}

pub async fn create_section(
    req: HttpRequest,
    section_data: web::Json<SectionRequest>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE
        .create_section(section_data.into_inner(), &req)
        .await
}

pub async fn get_section(req: HttpRequest, section_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.get_section(section_id.0, &req).await
}

pub async fn update_section(
    req: HttpRequest,
    section_id: SafeIDI64,
    section_data: web::Json<SectionRequest>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE
        .update_section(section_id.0, section_data.into_inner(), &req)
        .await
}

pub async fn delete_section(req: HttpRequest, section_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.delete_section(section_id.0, &req).await
}

// 科目
pub async fn list_subjects(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_subjects(query.into_inner(), &req).await
}

pub async fn create_subject(
    req: HttpRequest,
    subject_data: web::Json<SubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .create_subject(subject_data.into_inner(), &req)
        .await
}

pub async fn get_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.get_subject(subject_id.0, &req).await
}

pub async fn update_subject(
    req: HttpRequest,
    subject_id: SafeIDI64,
    subject_data: web::Json<SubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .update_subject(subject_id.0, subject_data.into_inner(), &req)
        .await
}

pub async fn delete_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.delete_subject(subject_id.0, &req).await
}

// 课程班
pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(query.into_inner(), &req).await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<ClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.create_class(class_data.into_inner(), &req).await
}

pub async fn get_class(req: HttpRequest, class_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(class_id.0, &req).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: SafeIDI64,
    class_data: web::Json<ClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(class_id.0, class_data.into_inner(), &req)
        .await
}

pub async fn delete_class(req: HttpRequest, class_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(class_id.0, &req).await
}

// 公告
pub async fn list_announcements(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .list_announcements(query.into_inner(), &req)
        .await
}

pub async fn create_announcement(
    req: HttpRequest,
    announcement_data: web::Json<AnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .create_announcement(announcement_data.into_inner(), &req)
        .await
}

pub async fn get_announcement(
    req: HttpRequest,
    ancmnt_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE.get_announcement(ancmnt_id.0, &req).await
}

pub async fn update_announcement(
    req: HttpRequest,
    ancmnt_id: SafeIDI64,
    announcement_data: web::Json<AnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .update_announcement(ancmnt_id.0, announcement_data.into_inner(), &req)
        .await
}

pub async fn delete_announcement(
    req: HttpRequest,
    ancmnt_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .delete_announcement(ancmnt_id.0, &req)
        .await
}

// 学费标准
pub async fn list_tuition_fees(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    TUITION_FEE_SERVICE
        .list_tuition_fees(query.into_inner(), &req)
        .await
}

pub async fn create_tuition_fee(
    req: HttpRequest,
    fee_data: web::Json<TuitionFeeRequest>,
) -> ActixResult<HttpResponse> {
    TUITION_FEE_SERVICE
        .create_tuition_fee(fee_data.into_inner(), &req)
        .await
}

pub async fn get_tuition_fee(req: HttpRequest, fee_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TUITION_FEE_SERVICE.get_tuition_fee(fee_id.0, &req).await
}

pub async fn update_tuition_fee(
    req: HttpRequest,
    fee_id: SafeIDI64,
    fee_data: web::Json<TuitionFeeRequest>,
) -> ActixResult<HttpResponse> {
    TUITION_FEE_SERVICE
        .update_tuition_fee(fee_id.0, fee_data.into_inner(), &req)
        .await
}

pub async fn delete_tuition_fee(req: HttpRequest, fee_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TUITION_FEE_SERVICE.delete_tuition_fee(fee_id.0, &req).await
}

// 配置路由：登录即可查询，写操作仅管理员
pub fn configure_catalog_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/section")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_sections))
                    .route(web::post().to(create_section).wrap(admin_only())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_section))
                    .route(web::put().to(update_section).wrap(admin_only()))
                    .route(web::delete().to(delete_section).wrap(admin_only())),
            ),
    )
    .service(
        web::scope("/api/v1/subjects")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_subjects))
                    .route(web::post().to(create_subject).wrap(admin_only())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_subject))
                    .route(web::put().to(update_subject).wrap(admin_only()))
                    .route(web::delete().to(delete_subject).wrap(admin_only())),
            ),
    )
    .service(
        web::scope("/api/v1/class")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_classes))
                    .route(web::post().to(create_class).wrap(admin_only())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_class))
                    .route(web::put().to(update_class).wrap(admin_only()))
                    .route(web::delete().to(delete_class).wrap(admin_only())),
            ),
    )
    .service(
        web::scope("/api/v1/announcement")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_announcements))
                    .route(web::post().to(create_announcement).wrap(admin_only())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_announcement))
                    .route(web::put().to(update_announcement).wrap(admin_only()))
                    .route(web::delete().to(delete_announcement).wrap(admin_only())),
            ),
    )
    .service(
        web::scope("/api/v1/tuition_fees")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_tuition_fees))
                    .route(web::post().to(create_tuition_fee).wrap(admin_only())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_tuition_fee))
                    .route(web::put().to(update_tuition_fee).wrap(admin_only()))
                    .route(web::delete().to(delete_tuition_fee).wrap(admin_only())),
            ),
    );
}
