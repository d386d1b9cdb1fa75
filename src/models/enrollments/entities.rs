use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 入学登记实体，每个学年一条
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct Enrollment {
    pub enrol_id: i64,
    #[serde(rename = "LRN")]
    pub lrn: String,
    pub grade_level: String,
    pub guardian_name: String,
    pub guardian_no: Option<String>,
    pub last_attended: String,
    pub public_private: String,
    pub strand: Option<String>,
    pub school_year: String,
    pub date_register: Option<chrono::DateTime<chrono::Utc>>,
    pub regapproval_date: Option<chrono::DateTime<chrono::Utc>>,
    pub payment_approval: Option<chrono::DateTime<chrono::Utc>>,
    pub section_id: Option<i64>,
    pub old_account: Option<f64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 入学状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "enrollment.ts")]
pub enum EnrollmentStatus {
    Pending,             // 待审核
    RegistrationApproved, // 注册已通过
    PaymentApproved,      // 缴费已确认
}

impl Enrollment {
    pub fn status(&self) -> EnrollmentStatus {
        if self.payment_approval.is_some() {
            EnrollmentStatus::PaymentApproved
        } else if self.regapproval_date.is_some() {
            EnrollmentStatus::RegistrationApproved
        } else {
            EnrollmentStatus::Pending
        }
    }
}
