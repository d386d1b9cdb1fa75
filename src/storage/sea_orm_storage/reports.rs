//! 报表查询
//!
//! 以花名册为入口，批量加载课程班、科目、分组与教师，在内存中拼装。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::admins::{Column as AdminColumn, Entity as Admins};
use crate::entity::attendance::{Column as AttendanceColumn, Entity as AttendanceEntity};
use crate::entity::classes::{Column as ClassColumn, Entity as Classes, Model as ClassModel};
use crate::entity::grades::{Column as GradeColumn, Entity as Grades};
use crate::entity::rosters::{Column as RosterColumn, Entity as Rosters};
use crate::entity::sections::{Column as SectionColumn, Entity as Sections};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::errors::{PortalError, Result};
use crate::models::reports::entities::{AttendanceRecord, ClassScheduleRow, StudentReportRow};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    pub async fn list_roster_class_ids_impl(&self, lrn: &str) -> Result<Vec<i64>> {
        let rosters = Rosters::find()
            .filter(RosterColumn::Lrn.eq(lrn))
            .order_by_asc(RosterColumn::ClassId)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询花名册失败: {e}")))?;

        Ok(rosters.into_iter().map(|r| r.class_id).collect())
    }

    async fn load_classes(&self, class_ids: &[i64]) -> Result<Vec<ClassModel>> {
        if class_ids.is_empty() {
            return Ok(Vec::new());
        }

        Classes::find()
            .filter(ClassColumn::ClassId.is_in(class_ids.iter().copied()))
            .order_by_asc(ClassColumn::ClassId)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("批量查询课程班失败: {e}")))
    }

    async fn load_subject_names(&self, subject_ids: Vec<i64>) -> Result<HashMap<i64, String>> {
        if subject_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let subjects = Subjects::find()
            .filter(SubjectColumn::SubjectId.is_in(subject_ids))
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("批量查询科目失败: {e}")))?;

        Ok(subjects
            .into_iter()
            .map(|s| (s.subject_id, s.subject_name))
            .collect())
    }

    /// 课程班编号 -> 科目名
    async fn class_subject_names(&self, classes: &[ClassModel]) -> Result<HashMap<i64, String>> {
        let subject_names = self
            .load_subject_names(classes.iter().map(|c| c.subject_id).collect())
            .await?;

        Ok(classes
            .iter()
            .filter_map(|c| {
                subject_names
                    .get(&c.subject_id)
                    .map(|name| (c.class_id, name.clone()))
            })
            .collect())
    }

    pub async fn list_attendance_records_impl(
        &self,
        lrn: &str,
        class_ids: &[i64],
    ) -> Result<Vec<AttendanceRecord>> {
        if class_ids.is_empty() {
            return Ok(Vec::new());
        }

        let records = AttendanceEntity::find()
            .filter(AttendanceColumn::Lrn.eq(lrn))
            .filter(AttendanceColumn::ClassId.is_in(class_ids.iter().copied()))
            .order_by_asc(AttendanceColumn::Date)
            .order_by_asc(AttendanceColumn::AttendanceId)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询考勤记录失败: {e}")))?;

        let classes = self.load_classes(class_ids).await?;
        let subject_names = self.class_subject_names(&classes).await?;

        Ok(records
            .into_iter()
            .map(|r| AttendanceRecord {
                subject_name: subject_names.get(&r.class_id).cloned(),
                date: r.date,
                status: r.status,
                lrn: r.lrn,
            })
            .collect())
    }

    pub async fn list_subject_names_impl(&self, class_ids: &[i64]) -> Result<Vec<String>> {
        let classes = self.load_classes(class_ids).await?;
        let subject_names = self
            .load_subject_names(classes.iter().map(|c| c.subject_id).collect())
            .await?;

        let mut names: Vec<String> = subject_names.into_values().collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    /// 每个课程班与该生成绩左连接：没有成绩的课程班也产出一行
    pub async fn list_student_report_rows_impl(
        &self,
        lrn: &str,
        class_ids: &[i64],
    ) -> Result<Vec<StudentReportRow>> {
        let classes = self.load_classes(class_ids).await?;
        if classes.is_empty() {
            return Ok(Vec::new());
        }

        let subject_names = self
            .load_subject_names(classes.iter().map(|c| c.subject_id).collect())
            .await?;

        let section_ids: Vec<i64> = classes.iter().map(|c| c.section_id).collect();
        let section_names: HashMap<i64, String> = Sections::find()
            .filter(SectionColumn::SectionId.is_in(section_ids))
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("批量查询分组失败: {e}")))?
            .into_iter()
            .map(|s| (s.section_id, s.section_name))
            .collect();

        let grades = Grades::find()
            .filter(GradeColumn::Lrn.eq(lrn))
            .filter(GradeColumn::ClassId.is_in(classes.iter().map(|c| c.class_id)))
            .order_by_asc(GradeColumn::Term)
            .order_by_asc(GradeColumn::GradeId)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询成绩失败: {e}")))?;

        let mut grades_by_class: HashMap<i64, Vec<_>> = HashMap::new();
        for grade in grades {
            grades_by_class.entry(grade.class_id).or_default().push(grade);
        }

        let mut rows = Vec::new();
        for class in &classes {
            let subject_name = subject_names.get(&class.subject_id).cloned();
            let section_name = section_names.get(&class.section_id).cloned();
            match grades_by_class.remove(&class.class_id) {
                Some(grades) => rows.extend(grades.into_iter().map(|g| StudentReportRow {
                    subject_name: subject_name.clone(),
                    term: Some(g.term),
                    grade: Some(g.grade),
                    section_name: section_name.clone(),
                })),
                None => rows.push(StudentReportRow {
                    subject_name,
                    term: None,
                    grade: None,
                    section_name,
                }),
            }
        }

        rows.sort_by(|a, b| {
            a.subject_name
                .cmp(&b.subject_name)
                .then_with(|| a.term.cmp(&b.term))
        });
        Ok(rows)
    }

    pub async fn list_class_schedule_impl(&self, lrn: &str) -> Result<Vec<ClassScheduleRow>> {
        let class_ids = self.list_roster_class_ids_impl(lrn).await?;
        let classes = self.load_classes(&class_ids).await?;
        if classes.is_empty() {
            return Ok(Vec::new());
        }

        let subject_names = self
            .load_subject_names(classes.iter().map(|c| c.subject_id).collect())
            .await?;

        let admin_ids: Vec<String> = classes.iter().map(|c| c.admin_id.clone()).collect();
        let admins: HashMap<String, (String, String)> = Admins::find()
            .filter(AdminColumn::AdminId.is_in(admin_ids))
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("批量查询管理员失败: {e}")))?
            .into_iter()
            .map(|a| (a.admin_id, (a.fname, a.lname)))
            .collect();

        Ok(classes
            .into_iter()
            .map(|c| {
                let admin = admins.get(&c.admin_id);
                ClassScheduleRow {
                    class_id: c.class_id,
                    room: c.room,
                    subject_name: subject_names.get(&c.subject_id).cloned(),
                    admin_fname: admin.map(|(fname, _)| fname.clone()),
                    admin_lname: admin.map(|(_, lname)| lname.clone()),
                    time: c.time,
                    schedule: c.schedule,
                }
            })
            .collect())
    }
}
