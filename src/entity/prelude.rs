pub use super::attendances::Entity as Attendances;
pub use super::classes::Entity as Classes;
pub use super::employees::Entity as Employees;
pub use super::lesson_records::Entity as LessonRecords;
pub use super::rooms::Entity as Rooms;
pub use super::student_groups::Entity as StudentGroups;
pub use super::students::Entity as Students;
pub use super::studies::Entity as Studies;
pub use super::subjects::Entity as Subjects;
pub use super::substitution_entries::Entity as SubstitutionEntries;
pub use super::timetable_entries::Entity as TimetableEntries;
pub use super::timetable_set_entries::Entity as TimetableSetEntries;
pub use super::timetable_sets::Entity as TimetableSets;
