//! HTTP access to the roster service.
//!
//! `StudentBackend` is the seam the controller talks through; `StudentsApi`
//! is the reqwest implementation used by the binary.

pub mod students_api;

pub use students_api::StudentsApi;

use crate::error::RosterError;
use crate::types::{CreatedStudent, NewStudent, Student};
use std::future::Future;

pub trait StudentBackend: Send + Sync {
    /// `GET /api/students`, optionally filtered server-side by grade.
    fn list_students(
        &self,
        grade: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Student>, RosterError>> + Send;

    /// `GET /api/students/<id>`.
    fn get_student(&self, id: i64) -> impl Future<Output = Result<Student, RosterError>> + Send;

    /// `POST /api/students`.
    fn create_student(
        &self,
        body: &NewStudent,
    ) -> impl Future<Output = Result<CreatedStudent, RosterError>> + Send;
}
