use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤报表行
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "report.ts")]
pub struct AttendanceRecord {
    pub date: String,
    pub status: String,
    #[serde(rename = "LRN")]
    pub lrn: String,
    pub subject_name: Option<String>,
}

/// 成绩单查询结果行：课程班左连接科目、分组与该生成绩
#[derive(Debug, Clone, PartialEq)]
pub struct StudentReportRow {
    pub subject_name: Option<String>,
    pub term: Option<String>,
    pub grade: Option<f64>,
    pub section_name: Option<String>,
}

// 课表行
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "report.ts")]
pub struct ClassScheduleRow {
    pub class_id: i64,
    pub room: String,
    pub subject_name: Option<String>,
    pub admin_fname: Option<String>,
    pub admin_lname: Option<String>,
    pub time: String,
    pub schedule: String,
}
