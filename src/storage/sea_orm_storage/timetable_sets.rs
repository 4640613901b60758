//! 课表版本存储操作

use super::SeaOrmStorage;
use crate::entity::timetable_sets::{ActiveModel, Column, Entity as TimetableSets};
use crate::errors::{Result, TimetableError};
use crate::models::{
    PaginationInfo,
    timetables::{
        entities::TimetableSet,
        requests::{CreateTimetableSetRequest, TimetableSetListQuery},
        responses::TimetableSetListResponse,
    },
};
use crate::scheduling::interval::DateInterval;
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建课表版本
    ///
    /// 有效期（两端闭区间）不得与任何既有版本重叠，保证任一日期
    /// 的"当前课表"唯一。重叠检查与写入在同一事务内完成。
    pub async fn create_timetable_set_impl(
        &self,
        req: CreateTimetableSetRequest,
    ) -> Result<TimetableSet> {
        let txn = self.db.begin().await?;

        // 版本数量很小，全部取出后按区间语义判重叠
        let validity = DateInterval::new(req.valid_from, req.valid_to);
        let existing = TimetableSets::find().all(&txn).await.map_err(|e| {
            TimetableError::database_operation(format!("查询课表版本重叠失败: {e}"))
        })?;
        let overlapping = existing
            .into_iter()
            .find(|s| validity.overlaps(&DateInterval::new(s.valid_from, s.valid_to)));

        if let Some(other) = overlapping {
            return Err(TimetableError::set_overlap(format!(
                "Validity {} .. {} overlaps timetable set '{}' ({} .. {})",
                req.valid_from, req.valid_to, other.name, other.valid_from, other.valid_to
            )));
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            name: Set(req.name),
            valid_from: Set(req.valid_from),
            valid_to: Set(req.valid_to),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("创建课表版本失败: {e}")))?;

        txn.commit().await?;

        Ok(result.into_timetable_set())
    }

    /// 分页列出课表版本
    pub async fn list_timetable_sets_with_pagination_impl(
        &self,
        query: TimetableSetListQuery,
    ) -> Result<TimetableSetListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = TimetableSets::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        // 生效早的版本在前
        select = select.order_by_asc(Column::ValidFrom);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            TimetableError::database_operation(format!("查询课表版本总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            TimetableError::database_operation(format!("查询课表版本页数失败: {e}"))
        })?;

        let sets = paginator.fetch_page(page - 1).await.map_err(|e| {
            TimetableError::database_operation(format!("查询课表版本列表失败: {e}"))
        })?;

        Ok(TimetableSetListResponse {
            items: sets.into_iter().map(|m| m.into_timetable_set()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
