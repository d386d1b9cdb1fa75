use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;

use super::entities::{AttendanceRecord, ClassScheduleRow};
use crate::models::enrollments::entities::{Enrollment, EnrollmentStatus};
use crate::models::financial_statements::entities::FinancialStatement;
use crate::models::payments::entities::Payment;
use crate::models::students::entities::Student;
use crate::models::tuition_fees::entities::TuitionFee;

// 考勤报表
#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export, export_to = "report.ts")]
pub struct AttendanceReport {
    pub attendance_records: Vec<AttendanceRecord>,
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[ts(export, export_to = "report.ts")]
pub struct GradeCell {
    pub grade: Option<f64>,
    pub section: Option<String>,
}

// 成绩单：科目 -> 学期 -> 成绩
#[derive(Debug, Clone, Default, Serialize, PartialEq, TS)]
#[serde(transparent)]
#[ts(export, export_to = "report.ts")]
pub struct StudentReport(pub BTreeMap<String, BTreeMap<String, GradeCell>>);

// 对账单
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "report.ts")]
pub struct StatementOfAccount {
    pub student: Student,
    pub enrollment: Enrollment,
    pub tuition: Option<TuitionFee>,
    pub payments: Vec<Payment>,
    pub documents: Vec<FinancialStatement>,
    pub total_paid: f64,
    pub remaining_balance: f64,
}

// 学费明细
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[ts(export, export_to = "report.ts")]
pub struct TuitionDetails {
    pub grade_level: String,
    pub tuition: f64,
    pub general: Option<f64>,
    pub esc: f64,
    pub subsidy: Option<f64>,
    pub req_downpayment: Option<f64>,
    pub old_account: Option<f64>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "report.ts")]
pub struct EnrollmentStatusView {
    pub payment_approval: Option<chrono::DateTime<chrono::Utc>>,
    pub status: EnrollmentStatus,
}

// 财务概览
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "report.ts")]
pub struct FinancialStatementSummary {
    pub payments: Vec<Payment>,
    pub documents: Vec<FinancialStatement>,
    pub enrollment_status: Option<EnrollmentStatusView>,
}

// 学生课表
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "report.ts")]
pub struct StudentClasses {
    pub enrollment: Enrollment,
    pub classes: Vec<ClassScheduleRow>,
}
