//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub lrn: String,
    pub fname: String,
    pub mname: Option<String>,
    pub lname: String,
    pub suffix: Option<String>,
    pub bdate: Option<String>,
    pub bplace: Option<String>,
    pub gender: Option<String>,
    pub religion: Option<String>,
    pub address: Option<String>,
    pub contact_no: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub student_pic: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
    #[sea_orm(has_many = "super::rosters::Entity")]
    Rosters,
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl Related<super::rosters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rosters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::Student;
        use chrono::{DateTime, Utc};

        Student {
            lrn: self.lrn,
            fname: self.fname,
            mname: self.mname,
            lname: self.lname,
            suffix: self.suffix,
            bdate: self.bdate,
            bplace: self.bplace,
            gender: self.gender,
            religion: self.religion,
            address: self.address,
            contact_no: self.contact_no,
            email: self.email,
            password_hash: self.password_hash,
            student_pic: self.student_pic,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
