pub mod lessons;
pub mod studies;
pub mod substitutions;
pub mod timetables;

pub use lessons::LessonService;
pub use studies::StudyService;
pub use substitutions::SubstitutionService;
pub use timetables::TimetableService;
