use super::entities::AnnouncementDetail;
use crate::models::common::PaginatedResponse;

pub type AnnouncementListResponse = PaginatedResponse<AnnouncementDetail>;
