pub mod lessons;

pub mod studies;

pub mod substitutions;

pub mod timetables;

pub use lessons::configure_lessons_routes;
pub use studies::configure_studies_routes;
pub use substitutions::configure_substitutions_routes;
pub use timetables::configure_timetables_routes;
