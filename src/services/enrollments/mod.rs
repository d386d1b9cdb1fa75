pub mod approve;
pub mod assign_section;
pub mod delete;
pub mod get;
pub mod list;
pub mod sign_up;
pub mod update;
pub mod upsert;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::enrollments::requests::{
    AssignSectionRequest, EnrollmentListParams, EnrollmentRequest, SignUpRequest,
    UpdateEnrollmentRequest,
};
use crate::storage::{EnrollmentStamp, Storage};

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
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

    /// 当前学年，只在请求边界读取时钟
    pub(crate) fn current_school_year(&self) -> String {
        self.get_config()
            .school
            .school_year_for(chrono::Utc::now().date_naive())
    }

    pub async fn list_enrollments(
        &self,
        query: EnrollmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_enrollments(self, query, request).await
    }

    // 登记入学（同一学年已存在则更新）
    pub async fn upsert_enrollment(
        &self,
        enrollment_request: EnrollmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        upsert::upsert_enrollment(self, enrollment_request, request).await
    }

    // 新生注册
    pub async fn sign_up(
        &self,
        sign_up_request: SignUpRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        sign_up::sign_up(self, sign_up_request, request).await
    }

    pub async fn get_enrollment(
        &self,
        lrn: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_enrollment(self, lrn, request).await
    }

    pub async fn update_enrollment(
        &self,
        lrn: String,
        update_request: UpdateEnrollmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_enrollment(self, lrn, update_request, request).await
    }

    pub async fn delete_enrollment(
        &self,
        lrn: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_enrollment(self, lrn, request).await
    }

    // 审核注册
    pub async fn approve_registration(
        &self,
        lrn: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        approve::approve(self, lrn, EnrollmentStamp::Registration, request).await
    }

    // 确认缴费
    pub async fn approve_payment(
        &self,
        lrn: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        approve::approve(self, lrn, EnrollmentStamp::Payment, request).await
    }

    // 分班
    pub async fn assign_section(
        &self,
        lrn: String,
        assign_request: AssignSectionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign_section::assign_section(self, lrn, assign_request, request).await
    }
}
