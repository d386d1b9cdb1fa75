//! 学生报表：考勤、成绩单、对账单、学费明细与课表
//!
//! 所有查询只读，按 LRN 定位；学生身份只能查询自己的报表。

pub mod attendance;
pub mod schedule;
pub mod statement;
pub mod student_report;
pub mod tuition;

pub use attendance::weekdays_only;
pub use statement::balance;
pub use student_report::build_student_report;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::Storage;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    pub async fn attendance_report(
        &self,
        lrn: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        attendance::attendance_report(self, lrn, request).await
    }

    pub async fn student_report(
        &self,
        lrn: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student_report::student_report(self, lrn, request).await
    }

    pub async fn statement_of_account(
        &self,
        lrn: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        statement::statement_of_account(self, lrn, request).await
    }

    pub async fn financial_summary(
        &self,
        lrn: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        statement::financial_summary(self, lrn, request).await
    }

    pub async fn tuition_details(
        &self,
        lrn: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        tuition::tuition_details(self, lrn, request).await
    }

    pub async fn class_schedule(
        &self,
        lrn: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        schedule::class_schedule(self, lrn, request).await
    }
}
