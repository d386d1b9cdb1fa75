use crate::models::admins::entities::Admin;
use crate::models::parties::entities::Party;
use crate::models::students::entities::Student;
use serde::Serialize;
use ts_rs::TS;

// 学生登录响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct StudentLoginResponse {
    pub student: Student,
    pub token: String,
    pub id: String,
    pub expires_in: i64,
}

// 管理员登录响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct AdminLoginResponse {
    pub admin: Admin,
    pub token: String,
    pub id: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct PartyInfoResponse {
    pub user: Party,
}
