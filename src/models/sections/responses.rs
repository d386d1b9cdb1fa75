use super::entities::Section;
use crate::models::common::PaginatedResponse;

pub type SectionListResponse = PaginatedResponse<Section>;
