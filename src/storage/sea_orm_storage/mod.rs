//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 所有排课写操作（版本、条目、代课、课次、学籍）在单个事务内
//! 完成"取占用快照 -> 纯校验 -> 写入"，配合迁移中的唯一索引
//! 构成两道防线。

mod attendances;
mod grids;
mod lessons;
mod studies;
mod substitutions;
mod summaries;
mod timetable_entries;
mod timetable_sets;

use crate::config::AppConfig;
use crate::errors::{Result, TimetableError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::new_with_url(&config.database.url, config.database.pool_size, config.database.timeout)
            .await
    }

    /// 按指定 URL 创建存储实例（集成测试直接驱动内存 SQLite）
    pub async fn new_with_url(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| TimetableError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// 暴露底层连接（集成测试种子基础数据用）
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TimetableError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| TimetableError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| TimetableError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TimetableError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 课表版本模块
    async fn create_timetable_set(&self, req: CreateTimetableSetRequest) -> Result<TimetableSet> {
        self.create_timetable_set_impl(req).await
    }

    async fn list_timetable_sets_with_pagination(
        &self,
        query: TimetableSetListQuery,
    ) -> Result<TimetableSetListResponse> {
        self.list_timetable_sets_with_pagination_impl(query).await
    }

    // 固定课表模块
    async fn create_timetable_entry(
        &self,
        req: CreateTimetableEntryRequest,
    ) -> Result<TimetableEntry> {
        self.create_timetable_entry_impl(req).await
    }

    // 代课模块
    async fn append_substitution(&self, req: AppendSubstitutionRequest) -> Result<LessonRecord> {
        self.append_substitution_impl(req).await
    }

    async fn assign_substitution(&self, req: AssignSubstitutionRequest) -> Result<LessonRecord> {
        self.assign_substitution_impl(req).await
    }

    async fn reset_substitution(
        &self,
        req: ResetSubstitutionRequest,
    ) -> Result<Option<TimetableEntry>> {
        self.reset_substitution_impl(req).await
    }

    // 班级日志模块
    async fn finish_lesson(
        &self,
        lesson_id: i64,
        req: FinishLessonRequest,
    ) -> Result<LessonRecord> {
        self.finish_lesson_impl(lesson_id, req).await
    }

    async fn record_attendance(
        &self,
        lesson_id: i64,
        req: RecordAttendanceRequest,
    ) -> Result<Vec<Attendance>> {
        self.record_attendance_impl(lesson_id, req).await
    }

    async fn materialize_lessons(&self, req: MaterializeLessonsRequest) -> Result<i64> {
        self.materialize_lessons_impl(req).await
    }

    // 学籍模块
    async fn create_study(&self, req: CreateStudyRequest) -> Result<Study> {
        self.create_study_impl(req).await
    }

    // 网格模块
    async fn stable_grid(&self, view: ViewMode, id: i64) -> Result<Vec<ResolvedLesson>> {
        self.stable_grid_impl(view, id).await
    }

    async fn dated_grid(
        &self,
        view: ViewMode,
        id: i64,
        date: NaiveDate,
    ) -> Result<Vec<ResolvedLesson>> {
        self.dated_grid_impl(view, id, date).await
    }
}
