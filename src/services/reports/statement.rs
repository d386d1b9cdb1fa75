use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::models::payments::entities::Payment;
use crate::models::reports::responses::{
    EnrollmentStatusView, FinancialStatementSummary, StatementOfAccount,
};
use crate::models::tuition_fees::entities::TuitionFee;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::payments::with_proof_url;
use crate::services::responses::{forbid_other_student, not_found, storage_failure};

/// 返回 (已缴总额, 剩余应缴)，没有学费标准时学费按 0 计
pub fn balance(tuition: Option<&TuitionFee>, payments: &[Payment]) -> (f64, f64) {
    let total_paid: f64 = payments.iter().map(|p| p.amount_paid).sum();
    let tuition = tuition.map(|t| t.tuition).unwrap_or(0.0);
    (total_paid, tuition - total_paid)
}

pub async fn statement_of_account(
    service: &ReportService,
    lrn: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(resp) = forbid_other_student(request, &lrn) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 学生或入学记录缺失都视为学生不存在
    let student = match storage.get_student(&lrn).await {
        Ok(Some(s)) => s,
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => return Ok(storage_failure("Failed to load student", e)),
    };
    let enrollment = match storage.get_latest_enrollment(&lrn).await {
        Ok(Some(e)) => e,
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => return Ok(storage_failure("Failed to load enrollment", e)),
    };

    let tuition = match storage.get_tuition_fee_by_grade(&enrollment.grade_level).await {
        Ok(t) => t,
        Err(e) => return Ok(storage_failure("Failed to load tuition fee", e)),
    };
    let payments = match storage.list_student_payments(&lrn).await {
        Ok(list) => list,
        Err(e) => return Ok(storage_failure("Failed to load payments", e)),
    };
    let documents = match storage.list_student_financial_statements(&lrn).await {
        Ok(list) => list,
        Err(e) => return Ok(storage_failure("Failed to load financial statements", e)),
    };

    let (total_paid, remaining_balance) = balance(tuition.as_ref(), &payments);
    let payments = payments
        .into_iter()
        .map(|p| with_proof_url(p, &config.upload))
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StatementOfAccount {
            student,
            enrollment,
            tuition,
            payments,
            documents,
            total_paid,
            remaining_balance,
        },
        "Statement of account retrieved successfully",
    )))
}

pub async fn financial_summary(
    service: &ReportService,
    lrn: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(resp) = forbid_other_student(request, &lrn) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);
    let config = service.get_config();

    let payments = match storage.list_student_payments(&lrn).await {
        Ok(list) => list,
        Err(e) => return Ok(storage_failure("Failed to load payments", e)),
    };
    let documents = match storage.list_student_financial_statements(&lrn).await {
        Ok(list) => list,
        Err(e) => return Ok(storage_failure("Failed to load financial statements", e)),
    };
    let enrollment = match storage.get_latest_enrollment(&lrn).await {
        Ok(e) => e,
        Err(e) => return Ok(storage_failure("Failed to load enrollment", e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        FinancialStatementSummary {
            payments: payments
                .into_iter()
                .map(|p| with_proof_url(p, &config.upload))
                .collect(),
            documents,
            enrollment_status: enrollment.map(|e| EnrollmentStatusView {
                payment_approval: e.payment_approval,
                status: e.status(),
            }),
        },
        "Financial statement retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn payment(amount: f64) -> Payment {
        Payment {
            payment_id: 1,
            lrn: "123456789012".into(),
            or_number: "ABCDEFGHIJ".into(),
            amount_paid: amount,
            proof_payment: "payments/x.png".into(),
            description: "Tuition".into(),
            date_of_payment: "2024-06-10".into(),
            created_at: Utc::now(),
            proof_url: None,
        }
    }

    fn fee(tuition: f64) -> TuitionFee {
        TuitionFee {
            fee_id: 1,
            grade_level: "7".into(),
            tuition,
            general: None,
            esc: None,
            subsidy: None,
            req_downpayment: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_balance_subtracts_all_payments() {
        let tuition = fee(20000.0);
        let (paid, remaining) = balance(Some(&tuition), &[payment(5000.0), payment(2500.5)]);
        assert_eq!(paid, 7500.5);
        assert_eq!(remaining, 12499.5);
    }

    #[test]
    fn test_missing_tuition_counts_as_zero() {
        let (paid, remaining) = balance(None, &[payment(1000.0)]);
        assert_eq!(paid, 1000.0);
        assert_eq!(remaining, -1000.0);
    }

    #[test]
    fn test_no_payments() {
        assert_eq!(balance(Some(&fee(300.0)), &[]), (0.0, 300.0));
    }
}
