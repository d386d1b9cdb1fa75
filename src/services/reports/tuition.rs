use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::config::SchoolConfig;
use crate::models::enrollments::entities::Enrollment;
use crate::models::reports::responses::TuitionDetails;
use crate::models::tuition_fees::entities::TuitionFee;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{forbid_other_student, not_found, storage_failure};

/// ESC 补助按入学记录的公私立类型取配置值
pub(crate) fn tuition_details_for(
    enrollment: &Enrollment,
    fee: TuitionFee,
    school: &SchoolConfig,
) -> TuitionDetails {
    TuitionDetails {
        grade_level: enrollment.grade_level.clone(),
        tuition: fee.tuition,
        general: fee.general,
        esc: school.esc_for(&enrollment.public_private),
        subsidy: fee.subsidy,
        req_downpayment: fee.req_downpayment,
        old_account: enrollment.old_account,
    }
}

pub async fn tuition_details(
    service: &ReportService,
    lrn: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(resp) = forbid_other_student(request, &lrn) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);
    let config = service.get_config();

    let enrollment = match storage.get_latest_enrollment(&lrn).await {
        Ok(Some(e)) => e,
        Ok(None) => {
            return Ok(not_found(
                ErrorCode::EnrollmentNotFound,
                "Enrollment not found",
            ));
        }
        Err(e) => return Ok(storage_failure("Failed to load enrollment", e)),
    };

    match storage.get_tuition_fee_by_grade(&enrollment.grade_level).await {
        Ok(Some(fee)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            tuition_details_for(&enrollment, fee, &config.school),
            "Tuition details retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(
            ErrorCode::TuitionNotFound,
            "Tuition details not found",
        )),
        Err(e) => Ok(storage_failure("Failed to load tuition fee", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn school() -> SchoolConfig {
        SchoolConfig {
            current_school_year: None,
            school_year_start_month: 6,
            esc_private: 14000.0,
            esc_public: 17500.0,
        }
    }

    fn enrollment(public_private: &str) -> Enrollment {
        Enrollment {
            enrol_id: 1,
            lrn: "123456789012".into(),
            grade_level: "10".into(),
            guardian_name: "Ana".into(),
            guardian_no: None,
            last_attended: "Elem".into(),
            public_private: public_private.into(),
            strand: None,
            school_year: "2024-2025".into(),
            date_register: None,
            regapproval_date: None,
            payment_approval: None,
            section_id: None,
            old_account: Some(1500.0),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn fee() -> TuitionFee {
        TuitionFee {
            fee_id: 3,
            grade_level: "10".into(),
            tuition: 25000.0,
            general: Some(3000.0),
            esc: None,
            subsidy: Some(500.0),
            req_downpayment: Some(2000.0),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_private_enrollment_gets_private_esc() {
        let details = tuition_details_for(&enrollment("Private"), fee(), &school());
        assert_eq!(details.esc, 14000.0);
        assert_eq!(details.tuition, 25000.0);
        assert_eq!(details.old_account, Some(1500.0));
        assert_eq!(details.grade_level, "10");
    }

    #[test]
    fn test_public_enrollment_gets_public_esc() {
        let details = tuition_details_for(&enrollment("Public"), fee(), &school());
        assert_eq!(details.esc, 17500.0);
        assert_eq!(details.req_downpayment, Some(2000.0));
    }
}
