//! 报表：考勤、成绩单、对账单、缴费状态与课表

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::ReportService;
use crate::utils::SafePartyId;

static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

pub async fn attendance_report(req: HttpRequest, lrn: SafePartyId) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.attendance_report(lrn.0, &req).await
}

pub async fn student_report(req: HttpRequest, lrn: SafePartyId) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.student_report(lrn.0, &req).await
}

pub async fn statement_of_account(
    req: HttpRequest,
    lrn: SafePartyId,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.statement_of_account(lrn.0, &req).await
}

pub async fn financial_summary(req: HttpRequest, lrn: SafePartyId) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.financial_summary(lrn.0, &req).await
}

pub async fn class_schedule(req: HttpRequest, lrn: SafePartyId) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.class_schedule(lrn.0, &req).await
}

// 路径沿用前端已有的命名
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    let reports = [
        ("/api/v1/attendance-report/{lrn}", web::get().to(attendance_report)),
        ("/api/v1/student-report/{lrn}", web::get().to(student_report)),
        ("/api/v1/displaySOA/{lrn}", web::get().to(statement_of_account)),
        (
            "/api/v1/financial-statement/{lrn}",
            web::get().to(financial_summary),
        ),
        ("/api/v1/classes/{lrn}", web::get().to(class_schedule)),
    ];
    for (path, route) in reports {
        cfg.service(
            web::resource(path)
                .wrap(middlewares::RequireJWT)
                .route(route),
        );
    }
}
