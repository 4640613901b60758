// 业务错误码
//
// 0 表示成功；1xxx 为通用错误；2xxx 按业务域划分：
// 21xx 课表版本（Timetable Set）、22xx 固定课表条目、23xx 代课、
// 24xx 班级日志（Lesson Record）、25xx 学籍（Study）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    InvalidParameter = 1001,
    ResourceNotFound = 1004,
    InternalServerError = 1500,

    TimetableSetNotFound = 2101,
    TimetableSetOverlap = 2102,
    TimetableSetCreationFailed = 2103,

    EntryCreationFailed = 2201,
    TeacherConflict = 2202,
    RoomConflict = 2203,
    ClassConflict = 2204,
    SubgroupConflict = 2205,

    SubstitutionNotFound = 2301,
    SubstitutionAssignFailed = 2302,

    LessonNotFound = 2401,
    LessonAlreadyFilled = 2402,
    LessonSourceCorrupted = 2403,

    StudyOverlap = 2501,
    StudentNotEnrolled = 2502,
}
