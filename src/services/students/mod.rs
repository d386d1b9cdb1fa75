pub mod bulk;
pub mod check;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod profile_image;
pub mod update;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::students::requests::{
    BulkStudentRequest, CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    pub async fn list_students(
        &self,
        query: StudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, query, request).await
    }

    pub async fn create_student(
        &self,
        create_request: CreateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, create_request, request).await
    }

    pub async fn get_student(&self, lrn: String, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_student(self, lrn, request).await
    }

    pub async fn update_student(
        &self,
        lrn: String,
        update_request: UpdateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, lrn, update_request, request).await
    }

    pub async fn delete_student(
        &self,
        lrn: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, lrn, request).await
    }

    // 批量导入
    pub async fn bulk_upsert(
        &self,
        bulk_request: BulkStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        bulk::bulk_upsert(self, bulk_request, request).await
    }

    // LRN 是否已存在
    pub async fn check_student(
        &self,
        lrn: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        check::check_student(self, lrn, request).await
    }

    // 上传头像
    pub async fn upload_profile(
        &self,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        profile_image::upload_profile(self, payload, request).await
    }

    // 头像地址
    pub async fn get_profile_image(
        &self,
        lrn: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        profile_image::get_profile_image(self, lrn, request).await
    }
}
