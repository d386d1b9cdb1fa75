use super::entities::Payment;
use crate::models::common::PaginatedResponse;
use crate::models::enrollments::entities::EnrollmentStatus;
use serde::Serialize;
use ts_rs::TS;

pub type PaymentListResponse = PaginatedResponse<Payment>;

// 最近一次缴费及审核状态
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "payment.ts")]
pub struct LatestPaymentResponse {
    pub date_of_payment: String,
    pub amount_paid: f64,
    pub proof_payment: Option<String>,
    pub payment_approval: Option<chrono::DateTime<chrono::Utc>>,
    pub enrollment_status: Option<EnrollmentStatus>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "payment.ts")]
pub struct PaymentHistoryResponse {
    pub payments: Vec<Payment>,
}
