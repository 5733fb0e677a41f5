pub mod status;
pub mod student;

pub use status::{StatusKind, StatusMessage};
pub use student::{CreatedStudent, NewStudent, Student, StudentForm};
