use super::entities::ClassDetail;
use crate::models::common::PaginatedResponse;

pub type ClassListResponse = PaginatedResponse<ClassDetail>;
