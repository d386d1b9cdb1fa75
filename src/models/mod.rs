pub mod admins;
pub mod announcements;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod common;
pub mod enrollments;
pub mod financial_statements;
pub mod grades;
pub mod messages;
pub mod notifications;
pub mod parties;
pub mod payments;
pub mod reports;
pub mod rosters;
pub mod sections;
pub mod students;
pub mod subjects;
pub mod tuition_fees;

pub use common::{
    ApiResponse, ErrorCode, FieldErrors, PaginatedResponse, PaginationInfo, PaginationQuery,
    ValidationErrorResponse,
};

// 服务启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
