use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{Datelike, Weekday};

use super::ReportService;
use crate::models::ApiResponse;
use crate::models::reports::{entities::AttendanceRecord, responses::AttendanceReport};
use crate::services::responses::{forbid_other_student, storage_failure};
use crate::utils::validate::parse_date;

/// 只保留周一到周五的记录，无法解析的日期一并丢弃
pub fn weekdays_only(records: Vec<AttendanceRecord>) -> Vec<AttendanceRecord> {
    records
        .into_iter()
        .filter(|r| {
            parse_date(&r.date)
                .map(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
                .unwrap_or(false)
        })
        .collect()
}

pub async fn attendance_report(
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
    // 花名册为空时返回空报表
    if class_ids.is_empty() {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceReport::default(),
            "Attendance report retrieved successfully",
        )));
    }

    let records = match storage.list_attendance_records(&lrn, &class_ids).await {
        Ok(records) => records,
        Err(e) => return Ok(storage_failure("Failed to load attendance", e)),
    };
    let subjects = match storage.list_subject_names(&class_ids).await {
        Ok(subjects) => subjects,
        Err(e) => return Ok(storage_failure("Failed to load subjects", e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AttendanceReport {
            attendance_records: weekdays_only(records),
            subjects,
        },
        "Attendance report retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str) -> AttendanceRecord {
        AttendanceRecord {
            date: date.into(),
            status: "present".into(),
            lrn: "123456789012".into(),
            subject_name: Some("Math".into()),
        }
    }

    #[test]
    fn test_weekend_records_dropped() {
        // 2024-06-07 周五，06-08 周六，06-09 周日，06-10 周一
        let kept = weekdays_only(vec![
            record("2024-06-07"),
            record("2024-06-08"),
            record("2024-06-09"),
            record("2024-06-10 08:00:00"),
        ]);
        let dates: Vec<&str> = kept.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-06-07", "2024-06-10 08:00:00"]);
    }

    #[test]
    fn test_unparseable_dates_dropped() {
        assert!(weekdays_only(vec![record("yesterday")]).is_empty());
    }

    #[test]
    fn test_empty_report_shape() {
        let json = serde_json::to_value(AttendanceReport::default()).unwrap();
        assert_eq!(json["attendance_records"], serde_json::json!([]));
        assert_eq!(json["subjects"], serde_json::json!([]));
    }
}
