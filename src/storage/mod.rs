use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::{
    grid::entities::{ResolvedLesson, ViewMode},
    lessons::{
        entities::{Attendance, LessonRecord},
        requests::{FinishLessonRequest, MaterializeLessonsRequest, RecordAttendanceRequest},
    },
    studies::{entities::Study, requests::CreateStudyRequest},
    substitutions::requests::{
        AppendSubstitutionRequest, AssignSubstitutionRequest, ResetSubstitutionRequest,
    },
    timetables::{
        entities::{TimetableEntry, TimetableSet},
        requests::{CreateTimetableEntryRequest, CreateTimetableSetRequest, TimetableSetListQuery},
        responses::TimetableSetListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 课表版本管理方法
    // 创建课表版本（有效期不得与既有版本重叠）
    async fn create_timetable_set(&self, req: CreateTimetableSetRequest) -> Result<TimetableSet>;
    // 分页列出课表版本
    async fn list_timetable_sets_with_pagination(
        &self,
        query: TimetableSetListQuery,
    ) -> Result<TimetableSetListResponse>;

    /// 固定课表管理方法
    // 创建固定课表条目并挂到指定版本（事务内执行占用校验）
    async fn create_timetable_entry(
        &self,
        req: CreateTimetableEntryRequest,
    ) -> Result<TimetableEntry>;

    /// 代课管理方法
    // 追加代课：复用或创建代课条目，并为该日期建立课次记录（幂等）
    async fn append_substitution(&self, req: AppendSubstitutionRequest) -> Result<LessonRecord>;
    // 在既有代课课次上标记类型（并课/取消）
    async fn assign_substitution(&self, req: AssignSubstitutionRequest) -> Result<LessonRecord>;
    // 撤销课位在某日期的代课覆盖，返回恢复生效的固定条目
    async fn reset_substitution(
        &self,
        req: ResetSubstitutionRequest,
    ) -> Result<Option<TimetableEntry>>;

    /// 班级日志管理方法
    // 填写课次（单向：填写后不可再改）
    async fn finish_lesson(&self, lesson_id: i64, req: FinishLessonRequest)
    -> Result<LessonRecord>;
    // 提交课次考勤（整体替换该课次既有考勤）
    async fn record_attendance(
        &self,
        lesson_id: i64,
        req: RecordAttendanceRequest,
    ) -> Result<Vec<Attendance>>;
    // 为日期区间物化缺失的课次记录，返回新建数量
    async fn materialize_lessons(&self, req: MaterializeLessonsRequest) -> Result<i64>;

    /// 学籍管理方法
    // 创建学籍区间
    async fn create_study(&self, req: CreateStudyRequest) -> Result<Study>;

    /// 课表网格查询方法
    // 稳定视图：当前生效课表版本的固定条目（无日期维度）
    async fn stable_grid(&self, view: ViewMode, id: i64) -> Result<Vec<ResolvedLesson>>;
    // 日期视图：固定课表与当日代课合成后的课次
    async fn dated_grid(
        &self,
        view: ViewMode,
        id: i64,
        date: NaiveDate,
    ) -> Result<Vec<ResolvedLesson>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
