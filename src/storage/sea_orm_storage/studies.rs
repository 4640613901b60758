//! 学籍存储操作

use super::SeaOrmStorage;
use crate::entity::classes;
use crate::entity::studies::{ActiveModel, Column, Entity as Studies};
use crate::errors::{Result, TimetableError};
use crate::models::studies::{entities::Study, requests::CreateStudyRequest};
use crate::scheduling::interval::DateInterval;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};

impl SeaOrmStorage {
    /// 创建学籍区间
    ///
    /// 学籍区间须落在班级自身有效期内；班级学籍之间不得重叠
    /// （一名学生同一时期只属于一个班级）；分组学籍须嵌套于
    /// 同班级的班级学籍内，且同班级的分组学籍之间不得重叠。
    pub async fn create_study_impl(&self, req: CreateStudyRequest) -> Result<Study> {
        let txn = self.db.begin().await?;

        let class = classes::Entity::find_by_id(req.class_id)
            .one(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询班级失败: {e}")))?
            .ok_or_else(|| {
                TimetableError::not_found(format!("Class {} does not exist", req.class_id))
            })?;

        let class_validity = DateInterval::new(class.valid_from, class.valid_to);
        let study_interval = DateInterval::new(req.valid_from, req.valid_to);
        if !class_validity.contains(&study_interval) {
            return Err(TimetableError::validation(format!(
                "Membership {} .. {} exceeds the validity of class {} ({} .. {})",
                req.valid_from, req.valid_to, class.name, class.valid_from, class.valid_to
            )));
        }

        match req.subgroup_id {
            None => {
                // 班级学籍：与该学生任何班级学籍互斥
                let overlapping = Studies::find()
                    .filter(Column::StudentId.eq(req.student_id))
                    .filter(Column::SubgroupId.is_null())
                    .filter(Column::ValidFrom.lte(req.valid_to))
                    .filter(Column::ValidTo.gte(req.valid_from))
                    .one(&txn)
                    .await
                    .map_err(|e| {
                        TimetableError::database_operation(format!("查询学籍失败: {e}"))
                    })?;
                if let Some(other) = overlapping {
                    return Err(TimetableError::study_overlap(format!(
                        "Student {} already belongs to class {} during {} .. {}",
                        req.student_id, other.class_id, other.valid_from, other.valid_to
                    )));
                }
            }
            Some(_) => {
                // 分组学籍：须嵌套于同班级的班级学籍内
                let enclosing = Studies::find()
                    .filter(Column::StudentId.eq(req.student_id))
                    .filter(Column::ClassId.eq(req.class_id))
                    .filter(Column::SubgroupId.is_null())
                    .filter(Column::ValidFrom.lte(req.valid_from))
                    .filter(Column::ValidTo.gte(req.valid_to))
                    .one(&txn)
                    .await
                    .map_err(|e| {
                        TimetableError::database_operation(format!("查询学籍失败: {e}"))
                    })?;
                if enclosing.is_none() {
                    return Err(TimetableError::study_overlap(format!(
                        "Subgroup membership {} .. {} is not nested in a class membership of student {} in class {}",
                        req.valid_from, req.valid_to, req.student_id, req.class_id
                    )));
                }

                // 同班级的分组学籍之间不得重叠
                let overlapping = Studies::find()
                    .filter(Column::StudentId.eq(req.student_id))
                    .filter(Column::ClassId.eq(req.class_id))
                    .filter(Column::SubgroupId.is_not_null())
                    .filter(Column::ValidFrom.lte(req.valid_to))
                    .filter(Column::ValidTo.gte(req.valid_from))
                    .one(&txn)
                    .await
                    .map_err(|e| {
                        TimetableError::database_operation(format!("查询学籍失败: {e}"))
                    })?;
                if let Some(other) = overlapping {
                    return Err(TimetableError::study_overlap(format!(
                        "Student {} already belongs to subgroup {:?} during {} .. {}",
                        req.student_id, other.subgroup_id, other.valid_from, other.valid_to
                    )));
                }
            }
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            student_id: Set(req.student_id),
            class_id: Set(req.class_id),
            subgroup_id: Set(req.subgroup_id),
            valid_from: Set(req.valid_from),
            valid_to: Set(req.valid_to),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let result = model
            .insert(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("创建学籍失败: {e}")))?;

        txn.commit().await?;

        Ok(result.into_study())
    }
}
