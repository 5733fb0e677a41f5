use crate::api::StudentBackend;
use crate::error::RosterError;
use crate::types::{StatusKind, StatusMessage, Student, StudentForm};
use crate::view::{Document, Region};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, warn};

/// What a table load did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response was applied; carries the number of rows now shown.
    Rendered(usize),
    /// A newer load was issued before this response arrived; nothing changed.
    Superseded,
}

/// Controller tying the roster backend to the document.
///
/// Every table load takes a ticket before its request goes out and applies
/// its response only while that ticket is still the newest one, so
/// overlapping loads can never leave an older result on screen.
pub struct StudentListClient<B> {
    backend: B,
    document: Mutex<Document>,
    load_seq: AtomicU64,
    default_grade: String,
}

impl<B: StudentBackend> StudentListClient<B> {
    pub fn new(backend: B, default_grade: impl Into<String>) -> Self {
        Self {
            backend,
            document: Mutex::new(Document::new()),
            load_seq: AtomicU64::new(0),
            default_grade: default_grade.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Copy of the current document.
    pub fn snapshot(&self) -> Document {
        self.doc().clone()
    }

    /// Replace the add-form inputs, as a user typing into them would.
    pub fn fill_form(&self, form: StudentForm) {
        self.doc().set_form(form);
    }

    /// Fetch every student and show them.
    pub async fn load_all(&self) -> Result<LoadOutcome, RosterError> {
        self.load_list(None).await
    }

    /// Fetch students of one grade; `None` uses the configured default grade.
    pub async fn load_filtered(&self, grade: Option<&str>) -> Result<LoadOutcome, RosterError> {
        let grade = grade.unwrap_or(&self.default_grade).to_string();
        self.load_list(Some(&grade)).await
    }

    /// Fetch a single student by id and show it as the only row.
    pub async fn load_one(&self, id: i64) -> Result<LoadOutcome, RosterError> {
        let ticket = self.next_ticket();
        let result = self.backend.get_student(id).await;

        let mut doc = self.doc();
        if !self.is_current(ticket) {
            debug!(ticket, id, ok = result.is_ok(), "discarding superseded student response");
            return Ok(LoadOutcome::Superseded);
        }
        match result {
            Ok(student) => {
                doc.replace_rows(std::slice::from_ref(&student));
                doc.set_status(
                    Region::List,
                    StatusMessage::success(format!("Loaded student {id}")),
                );
                Ok(LoadOutcome::Rendered(1))
            }
            Err(e) => {
                error!(id, error = %e, "failed to load student");
                doc.set_status(
                    Region::List,
                    StatusMessage::error(format!("Error loading student: {e}")),
                );
                Err(e)
            }
        }
    }

    /// Replace the table with `students` and report the count.
    pub fn render(&self, students: &[Student]) -> usize {
        render_into(&mut self.doc(), students)
    }

    /// Validate the add form, create the student, then reload the table.
    ///
    /// Returns the server-assigned id. The follow-up reload reports its own
    /// outcome in the list region and does not affect this result.
    pub async fn submit(&self) -> Result<i64, RosterError> {
        let form = self.doc().form().clone();
        let body = match form.to_new_student() {
            Ok(body) => body,
            Err(e) => {
                warn!("add form submitted with empty fields");
                self.show_add_status(e.to_string(), StatusKind::Error);
                return Err(e);
            }
        };

        match self.backend.create_student(&body).await {
            Ok(created) => {
                info!(id = created.id, name = %body.name, "student added");
                {
                    let mut doc = self.doc();
                    doc.set_status(
                        Region::Add,
                        StatusMessage::success(format!("Student added! ID: {}", created.id)),
                    );
                    doc.clear_form();
                }
                if let Err(e) = self.load_all().await {
                    debug!(error = %e, "reload after add failed");
                }
                Ok(created.id)
            }
            Err(e) => {
                error!(error = %e, "failed to add student");
                self.show_add_status(format!("Error adding student: {e}"), StatusKind::Error);
                Err(e)
            }
        }
    }

    pub fn show_status(&self, text: impl Into<String>, kind: StatusKind) {
        self.set_region(Region::List, text, kind);
    }

    pub fn show_add_status(&self, text: impl Into<String>, kind: StatusKind) {
        self.set_region(Region::Add, text, kind);
    }

    async fn load_list(&self, grade: Option<&str>) -> Result<LoadOutcome, RosterError> {
        let ticket = self.next_ticket();
        let result = self.backend.list_students(grade).await;

        // The ticket check and the write happen under one lock.
        let mut doc = self.doc();
        if !self.is_current(ticket) {
            debug!(ticket, ?grade, ok = result.is_ok(), "discarding superseded list response");
            return Ok(LoadOutcome::Superseded);
        }
        match result {
            Ok(students) => Ok(LoadOutcome::Rendered(render_into(&mut doc, &students))),
            Err(e) => {
                error!(?grade, error = %e, "failed to load students");
                doc.set_status(
                    Region::List,
                    StatusMessage::error(format!("Error loading students: {e}")),
                );
                Err(e)
            }
        }
    }

    fn set_region(&self, region: Region, text: impl Into<String>, kind: StatusKind) {
        let status = StatusMessage {
            text: text.into(),
            kind,
        };
        self.doc().set_status(region, status);
    }

    fn next_ticket(&self) -> u64 {
        self.load_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.load_seq.load(Ordering::SeqCst) == ticket
    }

    fn doc(&self) -> MutexGuard<'_, Document> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn render_into(doc: &mut Document, students: &[Student]) -> usize {
    doc.replace_rows(students);
    let count = doc.rows().len();
    doc.set_status(
        Region::List,
        StatusMessage::success(format!("Loaded {count} students")),
    );
    count
}
