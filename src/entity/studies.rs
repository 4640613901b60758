//! 学籍实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "studies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub subgroup_id: Option<i64>,
    pub valid_from: Date,
    pub valid_to: Date,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::student_groups::Entity",
        from = "Column::SubgroupId",
        to = "super::student_groups::Column::Id"
    )]
    Subgroup,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::student_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subgroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_study(self) -> crate::models::studies::entities::Study {
        use chrono::{DateTime, Utc};

        crate::models::studies::entities::Study {
            id: self.id,
            student_id: self.student_id,
            class_id: self.class_id,
            subgroup_id: self.subgroup_id,
            valid_from: self.valid_from,
            valid_to: self.valid_to,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
