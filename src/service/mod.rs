pub mod student_list_client;

pub use student_list_client::{LoadOutcome, StudentListClient};
