use super::entities::Grade;
use crate::models::common::PaginatedResponse;

pub type GradeListResponse = PaginatedResponse<Grade>;
