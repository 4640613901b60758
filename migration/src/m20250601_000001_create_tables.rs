use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classes::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Classes::ValidFrom).date().not_null())
                    .col(ColumnDef::new(Classes::ValidTo).date().not_null())
                    .col(ColumnDef::new(Classes::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Classes::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建班级分组表
        manager
            .create_table(
                Table::create()
                    .table(StudentGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentGroups::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentGroups::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentGroups::Name).string().not_null())
                    .col(
                        ColumnDef::new(StudentGroups::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentGroups::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentGroups::Table, StudentGroups::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学科表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Subjects::Abbreviation).string().not_null())
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教室表
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rooms::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Rooms::Capacity).integer().null())
                    .col(ColumnDef::new(Rooms::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Rooms::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教职工表
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::Name).string().not_null())
                    .col(ColumnDef::new(Employees::Abbreviation).string().not_null())
                    .col(ColumnDef::new(Employees::Email).string().null().unique_key())
                    .col(ColumnDef::new(Employees::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Employees::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学籍表
        manager
            .create_table(
                Table::create()
                    .table(Studies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Studies::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Studies::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Studies::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Studies::SubgroupId).big_integer().null())
                    .col(ColumnDef::new(Studies::ValidFrom).date().not_null())
                    .col(ColumnDef::new(Studies::ValidTo).date().not_null())
                    .col(ColumnDef::new(Studies::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Studies::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Studies::Table, Studies::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Studies::Table, Studies::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Studies::Table, Studies::SubgroupId)
                            .to(StudentGroups::Table, StudentGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课表版本表
        manager
            .create_table(
                Table::create()
                    .table(TimetableSets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimetableSets::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TimetableSets::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(TimetableSets::ValidFrom).date().not_null())
                    .col(ColumnDef::new(TimetableSets::ValidTo).date().not_null())
                    .col(
                        ColumnDef::new(TimetableSets::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableSets::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建固定课表条目表
        manager
            .create_table(
                Table::create()
                    .table(TimetableEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimetableEntries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::DayInWeek)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::HourInDay)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::SubgroupId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::RoomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TimetableEntries::Table, TimetableEntries::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TimetableEntries::Table, TimetableEntries::SubgroupId)
                            .to(StudentGroups::Table, StudentGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TimetableEntries::Table, TimetableEntries::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TimetableEntries::Table, TimetableEntries::TeacherId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TimetableEntries::Table, TimetableEntries::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课表版本-条目关联表
        manager
            .create_table(
                Table::create()
                    .table(TimetableSetEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimetableSetEntries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TimetableSetEntries::SetId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableSetEntries::EntryId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TimetableSetEntries::Table, TimetableSetEntries::SetId)
                            .to(TimetableSets::Table, TimetableSets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TimetableSetEntries::Table, TimetableSetEntries::EntryId)
                            .to(TimetableEntries::Table, TimetableEntries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建代课条目表
        manager
            .create_table(
                Table::create()
                    .table(SubstitutionEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubstitutionEntries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubstitutionEntries::DayInWeek)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubstitutionEntries::HourInDay)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubstitutionEntries::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubstitutionEntries::SubgroupId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SubstitutionEntries::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubstitutionEntries::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubstitutionEntries::RoomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubstitutionEntries::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SubstitutionEntries::Table, SubstitutionEntries::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SubstitutionEntries::Table, SubstitutionEntries::SubgroupId)
                            .to(StudentGroups::Table, StudentGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SubstitutionEntries::Table, SubstitutionEntries::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SubstitutionEntries::Table, SubstitutionEntries::TeacherId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SubstitutionEntries::Table, SubstitutionEntries::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班级日志记录表
        manager
            .create_table(
                Table::create()
                    .table(LessonRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LessonRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LessonRecords::Date).date().not_null())
                    .col(
                        ColumnDef::new(LessonRecords::TimetableEntryId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(LessonRecords::SubstitutionEntryId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(LessonRecords::SubstitutionType)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(LessonRecords::Topic).text().null())
                    .col(ColumnDef::new(LessonRecords::Note).text().null())
                    .col(ColumnDef::new(LessonRecords::FillDate).big_integer().null())
                    .col(
                        ColumnDef::new(LessonRecords::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LessonRecords::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(LessonRecords::Table, LessonRecords::TimetableEntryId)
                            .to(TimetableEntries::Table, TimetableEntries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(LessonRecords::Table, LessonRecords::SubstitutionEntryId)
                            .to(SubstitutionEntries::Table, SubstitutionEntries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考勤表
        manager
            .create_table(
                Table::create()
                    .table(Attendances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendances::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Attendances::LessonRecordId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attendances::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Attendances::State).string().not_null())
                    .col(ColumnDef::new(Attendances::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendances::Table, Attendances::LessonRecordId)
                            .to(LessonRecords::Table, LessonRecords::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendances::Table, Attendances::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 固定课表条目：按课位检索占用
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_timetable_entries_slot")
                    .table(TimetableEntries::Table)
                    .col(TimetableEntries::DayInWeek)
                    .col(TimetableEntries::HourInDay)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_timetable_set_entries_set_id")
                    .table(TimetableSetEntries::Table)
                    .col(TimetableSetEntries::SetId)
                    .to_owned(),
            )
            .await?;

        // 同一条目不得重复挂到同一版本
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_timetable_set_entries_set_entry")
                    .table(TimetableSetEntries::Table)
                    .col(TimetableSetEntries::SetId)
                    .col(TimetableSetEntries::EntryId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 代课条目：按课位检索占用
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_substitution_entries_slot")
                    .table(SubstitutionEntries::Table)
                    .col(SubstitutionEntries::DayInWeek)
                    .col(SubstitutionEntries::HourInDay)
                    .to_owned(),
            )
            .await?;

        // 班级日志：按日期检索；同一来源条目同日期至多一条记录
        // （应用层校验之外的存储层第二道防线）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lesson_records_date")
                    .table(LessonRecords::Table)
                    .col(LessonRecords::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_lesson_records_permanent_date")
                    .table(LessonRecords::Table)
                    .col(LessonRecords::TimetableEntryId)
                    .col(LessonRecords::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_lesson_records_substitution_date")
                    .table(LessonRecords::Table)
                    .col(LessonRecords::SubstitutionEntryId)
                    .col(LessonRecords::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 考勤：同一课次每个学生至多一行
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_attendances_lesson_student")
                    .table(Attendances::Table)
                    .col(Attendances::LessonRecordId)
                    .col(Attendances::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 学籍：按学生检索
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_studies_student_id")
                    .table(Studies::Table)
                    .col(Studies::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Attendances::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LessonRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SubstitutionEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TimetableSetEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TimetableEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TimetableSets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Studies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    Name,
    ValidFrom,
    ValidTo,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentGroups {
    #[sea_orm(iden = "student_groups")]
    Table,
    Id,
    ClassId,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    Name,
    Abbreviation,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Rooms {
    #[sea_orm(iden = "rooms")]
    Table,
    Id,
    Name,
    Capacity,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Employees {
    #[sea_orm(iden = "employees")]
    Table,
    Id,
    Name,
    Abbreviation,
    Email,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Studies {
    #[sea_orm(iden = "studies")]
    Table,
    Id,
    StudentId,
    ClassId,
    SubgroupId,
    ValidFrom,
    ValidTo,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TimetableSets {
    #[sea_orm(iden = "timetable_sets")]
    Table,
    Id,
    Name,
    ValidFrom,
    ValidTo,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TimetableEntries {
    #[sea_orm(iden = "timetable_entries")]
    Table,
    Id,
    DayInWeek,
    HourInDay,
    ClassId,
    SubgroupId,
    SubjectId,
    TeacherId,
    RoomId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TimetableSetEntries {
    #[sea_orm(iden = "timetable_set_entries")]
    Table,
    Id,
    SetId,
    EntryId,
}

#[derive(DeriveIden)]
enum SubstitutionEntries {
    #[sea_orm(iden = "substitution_entries")]
    Table,
    Id,
    DayInWeek,
    HourInDay,
    ClassId,
    SubgroupId,
    SubjectId,
    TeacherId,
    RoomId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum LessonRecords {
    #[sea_orm(iden = "lesson_records")]
    Table,
    Id,
    Date,
    TimetableEntryId,
    SubstitutionEntryId,
    SubstitutionType,
    Topic,
    Note,
    FillDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Attendances {
    #[sea_orm(iden = "attendances")]
    Table,
    Id,
    LessonRecordId,
    StudentId,
    State,
    CreatedAt,
}
