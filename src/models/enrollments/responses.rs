use super::entities::Enrollment;
use crate::models::common::PaginatedResponse;
use crate::models::students::entities::Student;
use serde::Serialize;
use ts_rs::TS;

pub type EnrollmentListResponse = PaginatedResponse<Enrollment>;

// 注册成功响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct SignUpResponse {
    pub student: Student,
    pub enrollment: Enrollment,
}
