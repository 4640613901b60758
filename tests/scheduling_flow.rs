//! 排课核心流程集成测试
//!
//! 直接以内存 SQLite 驱动存储层，覆盖版本重叠、占用冲突、
//! 代课追加/标记/撤销、课次填写、考勤与学籍规则。

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set};

use rust_timetable_next::entity;
use rust_timetable_next::models::grid::entities::ViewMode;
use rust_timetable_next::models::lessons::entities::{AttendanceState, LessonSource, SubstitutionType};
use rust_timetable_next::models::lessons::requests::{
    AttendanceItem, FinishLessonRequest, MaterializeLessonsRequest, RecordAttendanceRequest,
};
use rust_timetable_next::models::studies::requests::CreateStudyRequest;
use rust_timetable_next::models::substitutions::requests::{
    AppendSubstitutionRequest, AssignSubstitutionRequest, ResetSubstitutionRequest,
};
use rust_timetable_next::models::grid::entities::SlotCell;
use rust_timetable_next::models::timetables::requests::{
    CreateTimetableEntryRequest, CreateTimetableSetRequest, TimetableSetListQuery,
};
use rust_timetable_next::scheduling::grid::build_grid;
use rust_timetable_next::storage::Storage;
use rust_timetable_next::storage::sea_orm_storage::SeaOrmStorage;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// 新建内存库并写入基础数据：两个班级、两个分组、两门学科、
/// 两间教室、两名教师、两名学生。
async fn seeded_storage() -> SeaOrmStorage {
    // 内存 SQLite 必须保持单连接，否则每个连接各有一个空库
    let storage = SeaOrmStorage::new_with_url(":memory:", 1, 5)
        .await
        .unwrap();
    let db = storage.connection();

    for (id, name) in [(1, "1A"), (2, "1B")] {
        entity::classes::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            valid_from: Set(d(2025, 9, 1)),
            valid_to: Set(d(2026, 6, 30)),
            created_at: Set(0),
            updated_at: Set(0),
        }
        .insert(db)
        .await
        .unwrap();
    }
    for (id, name) in [(1, "1A-G1"), (2, "1A-G2")] {
        entity::student_groups::ActiveModel {
            id: Set(id),
            class_id: Set(1),
            name: Set(name.to_string()),
            created_at: Set(0),
            updated_at: Set(0),
        }
        .insert(db)
        .await
        .unwrap();
    }
    for (id, name, abbr) in [(1, "Mathematics", "M"), (2, "Physics", "P")] {
        entity::subjects::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            abbreviation: Set(abbr.to_string()),
            created_at: Set(0),
            updated_at: Set(0),
        }
        .insert(db)
        .await
        .unwrap();
    }
    for (id, name) in [(1, "R101"), (2, "R102")] {
        entity::rooms::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            capacity: Set(Some(30)),
            created_at: Set(0),
            updated_at: Set(0),
        }
        .insert(db)
        .await
        .unwrap();
    }
    for (id, name, abbr) in [(1, "Alice Novak", "AN"), (2, "Bob Maly", "BM")] {
        entity::employees::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            abbreviation: Set(abbr.to_string()),
            email: Set(None),
            created_at: Set(0),
            updated_at: Set(0),
        }
        .insert(db)
        .await
        .unwrap();
    }
    for (id, name) in [(1, "Carol"), (2, "Dan")] {
        entity::students::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            created_at: Set(0),
            updated_at: Set(0),
        }
        .insert(db)
        .await
        .unwrap();
    }

    storage
}

fn set_request(name: &str, from: NaiveDate, to: NaiveDate) -> CreateTimetableSetRequest {
    CreateTimetableSetRequest {
        name: name.to_string(),
        valid_from: from,
        valid_to: to,
    }
}

fn entry_request(
    set_id: i64,
    day: i32,
    hour: i32,
    class_id: i64,
    subgroup_id: Option<i64>,
    teacher_id: i64,
    room_id: i64,
) -> CreateTimetableEntryRequest {
    CreateTimetableEntryRequest {
        timetable_set_id: set_id,
        day_in_week: day,
        hour_in_day: hour,
        class_id,
        subgroup_id,
        subject_id: 1,
        teacher_id,
        room_id,
    }
}

fn append_request(
    date: NaiveDate,
    hour: i32,
    class_id: i64,
    teacher_id: i64,
    room_id: i64,
) -> AppendSubstitutionRequest {
    AppendSubstitutionRequest {
        date,
        hour_in_day: hour,
        class_id,
        subgroup_id: None,
        subject_id: 2,
        teacher_id,
        room_id,
        substitution_type: None,
        note: None,
    }
}

#[tokio::test]
async fn test_set_overlap_rejected() {
    let storage = seeded_storage().await;

    storage
        .create_timetable_set(set_request("2025 autumn", d(2025, 9, 1), d(2026, 1, 31)))
        .await
        .unwrap();

    // 区间两端闭合，共享端点也算重叠
    let err = storage
        .create_timetable_set(set_request("touching", d(2026, 1, 31), d(2026, 6, 30)))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E105");

    storage
        .create_timetable_set(set_request("2026 spring", d(2026, 2, 1), d(2026, 6, 30)))
        .await
        .unwrap();

    let list = storage
        .list_timetable_sets_with_pagination(TimetableSetListQuery {
            page: Some(1),
            size: Some(10),
            search: None,
        })
        .await
        .unwrap();
    assert_eq!(list.pagination.total, 2);
    assert_eq!(list.items[0].name, "2025 autumn");

    let filtered = storage
        .list_timetable_sets_with_pagination(TimetableSetListQuery {
            page: Some(1),
            size: Some(10),
            search: Some("spring".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(filtered.pagination.total, 1);
}

#[tokio::test]
async fn test_entry_conflicts_in_validator_order() {
    let storage = seeded_storage().await;
    let set = storage
        .create_timetable_set(set_request("base", d(2025, 9, 1), d(2026, 6, 30)))
        .await
        .unwrap();

    storage
        .create_timetable_entry(entry_request(set.id, 0, 1, 1, None, 1, 1))
        .await
        .unwrap();

    // 同教师占用两处
    let err = storage
        .create_timetable_entry(entry_request(set.id, 0, 1, 2, None, 1, 2))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E101");

    // 同教室占用两次
    let err = storage
        .create_timetable_entry(entry_request(set.id, 0, 1, 2, None, 2, 1))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E102");

    // 整班课与整班课撞位
    let err = storage
        .create_timetable_entry(entry_request(set.id, 0, 1, 1, None, 2, 2))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E103");

    // 分组课：同分组撞位，不同分组并行
    storage
        .create_timetable_entry(entry_request(set.id, 0, 2, 1, Some(1), 1, 1))
        .await
        .unwrap();
    let err = storage
        .create_timetable_entry(entry_request(set.id, 0, 2, 1, Some(1), 2, 2))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E104");
    storage
        .create_timetable_entry(entry_request(set.id, 0, 2, 1, Some(2), 2, 2))
        .await
        .unwrap();

    // 整班课压在分组课上
    storage
        .create_timetable_entry(entry_request(set.id, 0, 3, 1, Some(1), 1, 1))
        .await
        .unwrap();
    let err = storage
        .create_timetable_entry(entry_request(set.id, 0, 3, 1, None, 2, 2))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E103");

    // 其他星期/节次互不影响
    storage
        .create_timetable_entry(entry_request(set.id, 1, 1, 2, None, 1, 1))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_append_substitution_is_idempotent() {
    let storage = seeded_storage().await;
    let monday = d(2025, 9, 8);

    let first = storage
        .append_substitution(append_request(monday, 5, 1, 2, 2))
        .await
        .unwrap();
    assert!(first.source.is_substitution());
    assert_eq!(first.substitution_type, Some(SubstitutionType::Appended));

    // 完全相同的追加复用同一条课次记录
    let second = storage
        .append_substitution(append_request(monday, 5, 1, 2, 2))
        .await
        .unwrap();
    assert_eq!(second.id, first.id);

    // 另一日期复用代课条目，但产生新课次
    let next_monday = storage
        .append_substitution(append_request(d(2025, 9, 15), 5, 1, 2, 2))
        .await
        .unwrap();
    assert_ne!(next_monday.id, first.id);
    assert_eq!(next_monday.source, first.source);

    // 当日占用校验：同教师另一个班也要代课
    let err = storage
        .append_substitution(append_request(monday, 5, 2, 2, 1))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E101");
}

#[tokio::test]
async fn test_assign_substitution_state_rules() {
    let storage = seeded_storage().await;
    let monday = d(2025, 9, 8);

    let record = storage
        .append_substitution(append_request(monday, 5, 1, 2, 2))
        .await
        .unwrap();

    let merged = storage
        .assign_substitution(AssignSubstitutionRequest {
            lesson_id: record.id,
            substitution_type: SubstitutionType::Merged,
            note: Some("joined with 1B".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(merged.substitution_type, Some(SubstitutionType::Merged));

    let err = storage
        .assign_substitution(AssignSubstitutionRequest {
            lesson_id: 9999,
            substitution_type: SubstitutionType::Dropped,
            note: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E005");

    // 固定课表来源的课次不允许 assign
    let set = storage
        .create_timetable_set(set_request("base", d(2025, 9, 1), d(2026, 6, 30)))
        .await
        .unwrap();
    storage
        .create_timetable_entry(entry_request(set.id, 0, 1, 1, None, 1, 1))
        .await
        .unwrap();
    storage
        .materialize_lessons(MaterializeLessonsRequest {
            from: monday,
            to: monday,
        })
        .await
        .unwrap();
    let permanent = entity::lesson_records::Entity::find()
        .filter(entity::lesson_records::Column::TimetableEntryId.is_not_null())
        .one(storage.connection())
        .await
        .unwrap()
        .unwrap();
    let err = storage
        .assign_substitution(AssignSubstitutionRequest {
            lesson_id: permanent.id,
            substitution_type: SubstitutionType::Dropped,
            note: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E204");
}

#[tokio::test]
async fn test_finish_lesson_is_one_way() {
    let storage = seeded_storage().await;
    let record = storage
        .append_substitution(append_request(d(2025, 9, 8), 5, 1, 2, 2))
        .await
        .unwrap();
    assert!(!record.is_filled());

    let filled = storage
        .finish_lesson(
            record.id,
            FinishLessonRequest {
                topic: "Kinematics".to_string(),
                note: None,
            },
        )
        .await
        .unwrap();
    assert!(filled.is_filled());
    assert_eq!(filled.topic.as_deref(), Some("Kinematics"));

    let err = storage
        .finish_lesson(
            record.id,
            FinishLessonRequest {
                topic: "Again".to_string(),
                note: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E203");
}

#[tokio::test]
async fn test_reset_substitution_restores_permanent() {
    let storage = seeded_storage().await;
    let monday = d(2025, 9, 8);
    let set = storage
        .create_timetable_set(set_request("base", d(2025, 9, 1), d(2026, 6, 30)))
        .await
        .unwrap();
    let entry = storage
        .create_timetable_entry(entry_request(set.id, 0, 1, 1, None, 1, 1))
        .await
        .unwrap();

    storage
        .append_substitution(append_request(monday, 1, 1, 2, 2))
        .await
        .unwrap();

    let restored = storage
        .reset_substitution(ResetSubstitutionRequest {
            class_id: 1,
            subgroup_id: None,
            hour_in_day: 1,
            date: monday,
        })
        .await
        .unwrap();
    assert_eq!(restored.map(|e| e.id), Some(entry.id));

    // 已无覆盖可撤销
    let err = storage
        .reset_substitution(ResetSubstitutionRequest {
            class_id: 1,
            subgroup_id: None,
            hour_in_day: 1,
            date: monday,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E005");

    // 没有固定课位兜底的课位撤销后为空
    storage
        .append_substitution(append_request(monday, 7, 1, 2, 2))
        .await
        .unwrap();
    let restored = storage
        .reset_substitution(ResetSubstitutionRequest {
            class_id: 1,
            subgroup_id: None,
            hour_in_day: 7,
            date: monday,
        })
        .await
        .unwrap();
    assert!(restored.is_none());
}

#[tokio::test]
async fn test_dated_grid_substitution_displaces_permanent() {
    let storage = seeded_storage().await;
    let monday = d(2025, 9, 8);
    // 稳定视图按"今天"选版本，区间放宽到跑测试的任何日期
    let set = storage
        .create_timetable_set(set_request("base", d(2020, 1, 1), d(2099, 12, 31)))
        .await
        .unwrap();
    storage
        .create_timetable_entry(entry_request(set.id, 0, 1, 1, None, 1, 1))
        .await
        .unwrap();

    // 稳定视图只含固定课表
    let stable = storage.stable_grid(ViewMode::Class, 1).await.unwrap();
    assert_eq!(stable.len(), 1);
    assert_eq!(stable[0].teacher.id, 1);
    assert!(stable[0].substitution_type.is_none());

    storage
        .append_substitution(append_request(monday, 1, 1, 2, 2))
        .await
        .unwrap();

    // 班级视图：代课顶掉同课位的固定课
    let dated = storage
        .dated_grid(ViewMode::Class, 1, monday)
        .await
        .unwrap();
    assert_eq!(dated.len(), 1);
    assert_eq!(dated[0].teacher.id, 2);
    assert_eq!(dated[0].substitution_type, Some(SubstitutionType::Appended));

    // 教师视图：被顶掉的教师当天该课位为空，代课教师可见
    let teacher1 = storage
        .dated_grid(ViewMode::Teacher, 1, monday)
        .await
        .unwrap();
    assert!(teacher1.is_empty());
    let teacher2 = storage
        .dated_grid(ViewMode::Teacher, 2, monday)
        .await
        .unwrap();
    assert_eq!(teacher2.len(), 1);
    assert_eq!(teacher2[0].class.id, 1);

    // 无代课的日期仍返回固定课
    let plain = storage
        .dated_grid(ViewMode::Class, 1, d(2025, 9, 15))
        .await
        .unwrap();
    assert_eq!(plain.len(), 1);
    assert_eq!(plain[0].teacher.id, 1);
}

#[tokio::test]
async fn test_materialize_lessons_is_idempotent() {
    let storage = seeded_storage().await;
    let set = storage
        .create_timetable_set(set_request("base", d(2025, 9, 1), d(2026, 6, 30)))
        .await
        .unwrap();
    storage
        .create_timetable_entry(entry_request(set.id, 0, 1, 1, None, 1, 1))
        .await
        .unwrap();

    // 区间内恰有两个周一
    let created = storage
        .materialize_lessons(MaterializeLessonsRequest {
            from: d(2025, 9, 1),
            to: d(2025, 9, 14),
        })
        .await
        .unwrap();
    assert_eq!(created, 2);

    let again = storage
        .materialize_lessons(MaterializeLessonsRequest {
            from: d(2025, 9, 1),
            to: d(2025, 9, 14),
        })
        .await
        .unwrap();
    assert_eq!(again, 0);

    let records = entity::lesson_records::Entity::find()
        .all(storage.connection())
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
    for record in records {
        let source = LessonSource::from_columns(
            record.timetable_entry_id,
            record.substitution_entry_id,
        )
        .unwrap();
        assert!(!source.is_substitution());
    }
}

#[tokio::test]
async fn test_study_interval_rules() {
    let storage = seeded_storage().await;

    let study = CreateStudyRequest {
        student_id: 1,
        class_id: 1,
        subgroup_id: None,
        valid_from: d(2025, 9, 1),
        valid_to: d(2026, 6, 30),
    };

    // 学籍区间不得超出班级自身有效期
    let err = storage
        .create_study(CreateStudyRequest {
            valid_to: d(2030, 6, 30),
            ..study.clone()
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E004");

    // 班级必须存在
    let err = storage
        .create_study(CreateStudyRequest {
            class_id: 99,
            ..study.clone()
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E005");

    // 班级学籍不必占满班级有效期
    let class_study = CreateStudyRequest {
        valid_to: d(2026, 3, 31),
        ..study.clone()
    };
    storage.create_study(class_study.clone()).await.unwrap();

    // 班级学籍不得重叠（换班也不行）
    let err = storage
        .create_study(CreateStudyRequest {
            class_id: 2,
            valid_from: d(2026, 1, 1),
            valid_to: d(2026, 6, 30),
            ..study.clone()
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E106");

    // 分组学籍必须嵌套于同班级的班级学籍之内
    storage
        .create_study(CreateStudyRequest {
            subgroup_id: Some(1),
            valid_from: d(2025, 10, 1),
            valid_to: d(2025, 12, 31),
            ..study.clone()
        })
        .await
        .unwrap();
    let err = storage
        .create_study(CreateStudyRequest {
            subgroup_id: Some(2),
            valid_from: d(2026, 3, 1),
            valid_to: d(2026, 5, 31),
            ..study.clone()
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E106");

    // 同班级的分组学籍之间也不得重叠
    let err = storage
        .create_study(CreateStudyRequest {
            subgroup_id: Some(2),
            valid_from: d(2025, 11, 1),
            valid_to: d(2026, 1, 31),
            ..study.clone()
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E106");

    // 区间外的后续分组学籍可以创建
    storage
        .create_study(CreateStudyRequest {
            subgroup_id: Some(2),
            valid_from: d(2026, 1, 1),
            valid_to: d(2026, 3, 31),
            ..study
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_attendance_requires_enrollment_and_replaces() {
    let storage = seeded_storage().await;
    let monday = d(2025, 9, 8);

    storage
        .create_study(CreateStudyRequest {
            student_id: 1,
            class_id: 1,
            subgroup_id: None,
            valid_from: d(2025, 9, 1),
            valid_to: d(2026, 6, 30),
        })
        .await
        .unwrap();

    let record = storage
        .append_substitution(append_request(monday, 5, 1, 2, 2))
        .await
        .unwrap();

    // 未注册学籍的学生不可考勤
    let err = storage
        .record_attendance(
            record.id,
            RecordAttendanceRequest {
                attendances: vec![AttendanceItem {
                    student_id: 2,
                    state: AttendanceState::Present,
                }],
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E107");

    let first = storage
        .record_attendance(
            record.id,
            RecordAttendanceRequest {
                attendances: vec![AttendanceItem {
                    student_id: 1,
                    state: AttendanceState::Absent,
                }],
            },
        )
        .await
        .unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].state, AttendanceState::Absent);

    // 再次提交整体替换既有考勤
    let second = storage
        .record_attendance(
            record.id,
            RecordAttendanceRequest {
                attendances: vec![AttendanceItem {
                    student_id: 1,
                    state: AttendanceState::Late,
                }],
            },
        )
        .await
        .unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].state, AttendanceState::Late);

    let rows = entity::attendances::Entity::find()
        .all(storage.connection())
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);

    // 填写后的课次不再接受考勤
    storage
        .finish_lesson(
            record.id,
            FinishLessonRequest {
                topic: "Optics".to_string(),
                note: None,
            },
        )
        .await
        .unwrap();
    let err = storage
        .record_attendance(
            record.id,
            RecordAttendanceRequest {
                attendances: vec![AttendanceItem {
                    student_id: 1,
                    state: AttendanceState::Present,
                }],
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E203");
}

#[tokio::test]
async fn test_entry_reference_relations_resolve() {
    let storage = seeded_storage().await;
    let set = storage
        .create_timetable_set(set_request("base", d(2025, 9, 1), d(2026, 6, 30)))
        .await
        .unwrap();
    let entry = storage
        .create_timetable_entry(entry_request(set.id, 0, 1, 1, Some(1), 1, 2))
        .await
        .unwrap();

    let db = storage.connection();
    let model = entity::timetable_entries::Entity::find_by_id(entry.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();

    // 课位条目到各引用维度的关联均可反查
    let teacher = model
        .find_related(entity::employees::Entity)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(teacher.abbreviation, "AN");

    let room = model
        .find_related(entity::rooms::Entity)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(room.name, "R102");

    let subject = model
        .find_related(entity::subjects::Entity)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(subject.abbreviation, "M");

    let subgroup = model
        .find_related(entity::student_groups::Entity)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(subgroup.name, "1A-G1");
}

#[tokio::test]
async fn test_dated_grid_masks_dropped_lesson() {
    let storage = seeded_storage().await;
    let monday = d(2025, 9, 8);
    let set = storage
        .create_timetable_set(set_request("base", d(2025, 9, 1), d(2026, 6, 30)))
        .await
        .unwrap();
    storage
        .create_timetable_entry(entry_request(set.id, 0, 1, 1, None, 1, 1))
        .await
        .unwrap();

    let record = storage
        .append_substitution(append_request(monday, 1, 1, 2, 2))
        .await
        .unwrap();
    storage
        .assign_substitution(AssignSubstitutionRequest {
            lesson_id: record.id,
            substitution_type: SubstitutionType::Dropped,
            note: None,
        })
        .await
        .unwrap();

    let resolved = storage
        .dated_grid(ViewMode::Class, 1, monday)
        .await
        .unwrap();
    let grid = build_grid(resolved, ViewMode::Class);

    // 取消课只保留课次 ID、班级/分组与类型，其余字段一律脱敏
    let cell = &grid[&0][&1];
    let SlotCell::One(slot) = cell else {
        panic!("expected a single lesson in the slot, got {cell:?}");
    };
    assert_eq!(slot.lesson_id, record.id);
    assert_eq!(slot.substitution_type, Some(SubstitutionType::Dropped));
    assert!(slot.subject.is_none());
    assert!(slot.teacher.is_none());
    assert!(slot.room.is_none());
}

#[tokio::test]
async fn test_corrupt_substitution_type_is_reported() {
    let storage = seeded_storage().await;
    let monday = d(2025, 9, 8);

    let record = storage
        .append_substitution(append_request(monday, 5, 1, 2, 2))
        .await
        .unwrap();

    // 模拟损坏的类型值
    let db = storage.connection();
    let model = entity::lesson_records::Entity::find_by_id(record.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    let mut active: entity::lesson_records::ActiveModel = model.into();
    active.substitution_type = Set(Some("vanished".to_string()));
    active.update(db).await.unwrap();

    // 读取侧拒绝降级渲染，直接报数据损坏
    let err = storage
        .dated_grid(ViewMode::Class, 1, monday)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E003");
    assert!(err.message().contains("vanished"));

    let err = storage
        .assign_substitution(AssignSubstitutionRequest {
            lesson_id: record.id,
            substitution_type: SubstitutionType::Merged,
            note: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E003");
}
