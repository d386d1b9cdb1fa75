use super::entities::Student;
use crate::models::common::PaginatedResponse;
use serde::Serialize;
use ts_rs::TS;

// 学生响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentResponse {
    pub student: Student,
}

// 学生列表响应
pub type StudentListResponse = PaginatedResponse<Student>;

// 批量导入结果
#[derive(Debug, Default, Serialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct BulkUpsertResponse {
    pub created: u64,
    pub updated: u64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct ProfileImageResponse {
    pub image_url: String,
}
