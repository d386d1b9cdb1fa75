use super::entities::TuitionFee;
use crate::models::common::PaginatedResponse;

pub type TuitionFeeListResponse = PaginatedResponse<TuitionFee>;
