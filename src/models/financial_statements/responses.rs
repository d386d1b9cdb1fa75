use super::entities::FinancialStatement;
use crate::models::common::PaginatedResponse;

pub type FinancialStatementListResponse = PaginatedResponse<FinancialStatement>;
