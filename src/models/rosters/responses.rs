use super::entities::Roster;
use crate::models::common::PaginatedResponse;

pub type RosterListResponse = PaginatedResponse<Roster>;
