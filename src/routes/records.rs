//! 学生记录：成绩、考勤、花名册与对账单文档

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{AttendanceListParams, AttendanceRequest};
use crate::models::financial_statements::requests::{
    FinancialStatementListParams, FinancialStatementRequest,
};
use crate::models::grades::requests::{GradeListParams, GradeRequest};
use crate::models::parties::entities::PartyKind;
use crate::models::rosters::requests::{RosterListParams, RosterRequest};
use crate::services::{AttendanceService, FinancialStatementService, GradeService, RosterService};
use crate::utils::SafeIDI64;

static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);
static ROSTER_SERVICE: Lazy<RosterService> = Lazy::new(RosterService::new_lazy);
static STATEMENT_SERVICE: Lazy<FinancialStatementService> =
    Lazy::new(FinancialStatementService::new_lazy);

// 成绩
pub async fn list_grades(
    req: HttpRequest,
    query: web::Query<GradeListParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(query.into_inner(), &req).await
}

pub async fn create_grade(
    req: HttpRequest,
    grade_data: web::Json<GradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.create_grade(grade_data.into_inner(), &req).await
}

pub async fn get_grade(req: HttpRequest, grade_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.get_grade(grade_id.0, &req).await
}

pub async fn update_grade(
    req: HttpRequest,
    grade_id: SafeIDI64,
    grade_data: web::Json<GradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .update_grade(grade_id.0, grade_data.into_inner(), &req)
        .await
}

pub async fn delete_grade(req: HttpRequest, grade_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.delete_grade(grade_id.0, &req).await
}

// 考勤
pub async fn list_attendance(
    req: HttpRequest,
    query: web::Query<AttendanceListParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(query.into_inner(), &req)
        .await
}

pub async fn create_attendance(
    req: HttpRequest,
    attendance_data: web::Json<AttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .create_attendance(attendance_data.into_inner(), &req)
        .await
}

pub async fn get_attendance(
    req: HttpRequest,
    attendance_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.get_attendance(attendance_id.0, &req).await
}

pub async fn update_attendance(
    req: HttpRequest,
    attendance_id: SafeIDI64,
    attendance_data: web::Json<AttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .update_attendance(attendance_id.0, attendance_data.into_inner(), &req)
        .await
}

pub async fn delete_attendance(
    req: HttpRequest,
    attendance_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .delete_attendance(attendance_id.0, &req)
        .await
}

// 花名册
pub async fn list_rosters(
    req: HttpRequest,
    query: web::Query<RosterListParams>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE.list_rosters(query.into_inner(), &req).await
}

pub async fn create_roster(
    req: HttpRequest,
    roster_data: web::Json<RosterRequest>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE
        .create_roster(roster_data.into_inner(), &req)
        .await
}

pub async fn get_roster(req: HttpRequest, roster_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE.get_roster(roster_id.0, &req).await
}

pub async fn delete_roster(req: HttpRequest, roster_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE.delete_roster(roster_id.0, &req).await
}

// 对账单文档
pub async fn list_statements(
    req: HttpRequest,
    query: web::Query<FinancialStatementListParams>,
) -> ActixResult<HttpResponse> {
    STATEMENT_SERVICE
        .list_statements(query.into_inner(), &req)
        .await
}

pub async fn create_statement(
    req: HttpRequest,
    statement_data: web::Json<FinancialStatementRequest>,
) -> ActixResult<HttpResponse> {
    STATEMENT_SERVICE
        .create_statement(statement_data.into_inner(), &req)
        .await
}

pub async fn get_statement(req: HttpRequest, soa_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STATEMENT_SERVICE.get_statement(soa_id.0, &req).await
}

pub async fn update_statement(
    req: HttpRequest,
    soa_id: SafeIDI64,
    statement_data: web::Json<FinancialStatementRequest>,
) -> ActixResult<HttpResponse> {
    STATEMENT_SERVICE
        .update_statement(soa_id.0, statement_data.into_inner(), &req)
        .await
}

pub async fn delete_statement(req: HttpRequest, soa_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STATEMENT_SERVICE.delete_statement(soa_id.0, &req).await
}

// 配置路由：查询对登录用户开放（学生仅限本人），写操作仅管理员
pub fn configure_record_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_grades))
                    .route(
                        web::post()
                            .to(create_grade)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_grade))
                    .route(
                        web::put()
                            .to(update_grade)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    )
                    .route(
                        web::delete()
                            .to(delete_grade)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    ),
            ),
    )
    .service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_attendance))
                    .route(
                        web::post()
                            .to(create_attendance)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_attendance))
                    .route(
                        web::put()
                            .to(update_attendance)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    )
                    .route(
                        web::delete()
                            .to(delete_attendance)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    ),
            ),
    )
    .service(
        web::scope("/api/v1/rosters")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_rosters))
                    .route(
                        web::post()
                            .to(create_roster)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_roster))
                    .route(
                        web::delete()
                            .to(delete_roster)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    ),
            ),
    )
    .service(
        web::scope("/api/v1/financial_statement")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_statements))
                    .route(
                        web::post()
                            .to(create_statement)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_statement))
                    .route(
                        web::put()
                            .to(update_statement)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    )
                    .route(
                        web::delete()
                            .to(delete_statement)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    ),
            ),
    );
}
