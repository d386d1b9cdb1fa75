use super::entities::Admin;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "admin.ts")]
pub struct AdminResponse {
    pub admin: Admin,
}
