use super::entities::Attendance;
use crate::models::common::PaginatedResponse;

pub type AttendanceListResponse = PaginatedResponse<Attendance>;
