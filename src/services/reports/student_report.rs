use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::models::reports::{
    entities::StudentReportRow,
    responses::{GradeCell, StudentReport},
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{forbid_other_student, not_found, storage_failure};

/// 按 科目 -> 学期 归并，缺失的科目名或学期记为空字符串，后出现的行覆盖先出现的
pub fn build_student_report(rows: Vec<StudentReportRow>) -> StudentReport {
    let mut report = StudentReport::default();
    for row in rows {
        report
            .0
            .entry(row.subject_name.unwrap_or_default())
            .or_default()
            .insert(
                row.term.unwrap_or_default(),
                GradeCell {
                    grade: row.grade,
                    section: row.section_name,
                },
            );
    }
    report
}

pub async fn student_report(
    service: &ReportService,
    lrn: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(resp) = forbid_other_student(request, &lrn) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);

    let class_ids = match storage.list_roster_class_ids(&lrn).await {
        Ok(ids) => ids,
        Err(e) => return Ok(storage_failure("Failed to load roster", e)),
    };
    if class_ids.is_empty() {
        return Ok(not_found(
            ErrorCode::NotFound,
            "No records found for the given LRN.",
        ));
    }

    match storage.list_student_report_rows(&lrn, &class_ids).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            build_student_report(rows),
            "Student report retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Failed to load student report", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(subject: Option<&str>, term: Option<&str>, grade: Option<f64>) -> StudentReportRow {
        StudentReportRow {
            subject_name: subject.map(str::to_string),
            term: term.map(str::to_string),
            grade,
            section_name: Some("Rizal".into()),
        }
    }

    #[test]
    fn test_grouped_by_subject_and_term() {
        let report = build_student_report(vec![
            row(Some("English"), Some("1st"), Some(88.0)),
            row(Some("Math"), Some("1st"), Some(90.0)),
            row(Some("Math"), Some("2nd"), Some(92.5)),
        ]);
        assert_eq!(report.0.len(), 2);
        assert_eq!(report.0["Math"]["2nd"].grade, Some(92.5));
        assert_eq!(report.0["English"]["1st"].section.as_deref(), Some("Rizal"));
    }

    #[test]
    fn test_class_without_grades_keeps_empty_term() {
        let report = build_student_report(vec![row(Some("Science"), None, None)]);
        let cell = &report.0["Science"][""];
        assert!(cell.grade.is_none());

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["Science"][""]["grade"].is_null());
        assert_eq!(json["Science"][""]["section"], "Rizal");
    }

    #[test]
    fn test_later_row_overwrites() {
        let report = build_student_report(vec![
            row(Some("Math"), Some("1st"), Some(80.0)),
            row(Some("Math"), Some("1st"), Some(85.0)),
        ]);
        assert_eq!(report.0["Math"]["1st"].grade, Some(85.0));
    }
}
