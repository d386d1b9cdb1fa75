//! 入学登记实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub enrol_id: i64,
    pub lrn: String,
    pub grade_level: String,
    pub guardian_name: String,
    pub guardian_no: Option<String>,
    pub last_attended: String,
    pub public_private: String,
    pub strand: Option<String>,
    pub school_year: String,
    pub date_register: Option<i64>,
    pub regapproval_date: Option<i64>,
    pub payment_approval: Option<i64>,
    pub section_id: Option<i64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub old_account: Option<f64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::Lrn",
        to = "super::students::Column::Lrn"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_enrollment(self) -> crate::models::enrollments::entities::Enrollment {
        use crate::models::enrollments::entities::Enrollment;
        use chrono::{DateTime, Utc};

        let ts = |v: Option<i64>| v.and_then(|t| DateTime::<Utc>::from_timestamp(t, 0));
        Enrollment {
            enrol_id: self.enrol_id,
            lrn: self.lrn,
            grade_level: self.grade_level,
            guardian_name: self.guardian_name,
            guardian_no: self.guardian_no,
            last_attended: self.last_attended,
            public_private: self.public_private,
            strand: self.strand,
            school_year: self.school_year,
            date_register: ts(self.date_register),
            regapproval_date: ts(self.regapproval_date),
            payment_approval: ts(self.payment_approval),
            section_id: self.section_id,
            old_account: self.old_account,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
