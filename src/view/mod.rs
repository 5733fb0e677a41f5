//! Headless stand-in for the page the client drives.
//!
//! `Document` holds exactly the elements the controller addresses: the
//! student table body, the two status regions and the four add-form inputs.
//! Cell and status text is stored as plain text; only the renderers decide
//! how it is emitted.

pub mod html;
pub mod text;

use crate::types::{StatusMessage, Student, StudentForm};
use std::fmt;

/// Element identifiers of the page contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    TableBody,
    Message,
    AddMessage,
    Name,
    Age,
    Grade,
    Email,
}

impl ElementId {
    pub const INPUTS: [ElementId; 4] = [
        ElementId::Name,
        ElementId::Age,
        ElementId::Grade,
        ElementId::Email,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementId::TableBody => "tableBody",
            ElementId::Message => "message",
            ElementId::AddMessage => "addMessage",
            ElementId::Name => "name",
            ElementId::Age => "age",
            ElementId::Grade => "grade",
            ElementId::Email => "email",
        }
    }
}

/// The two independently addressed status regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Outcome of table loads (`message`).
    List,
    /// Outcome of add-form submissions (`addMessage`).
    Add,
}

impl Region {
    pub fn element(self) -> ElementId {
        match self {
            Region::List => ElementId::Message,
            Region::Add => ElementId::AddMessage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: [String; 5],
}

impl From<&Student> for TableRow {
    fn from(student: &Student) -> Self {
        Self {
            cells: student.cells(),
        }
    }
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cells.join(" | "))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    table_body: Vec<TableRow>,
    message: Option<StatusMessage>,
    add_message: Option<StatusMessage>,
    form: StudentForm,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.table_body
    }

    pub fn clear_rows(&mut self) {
        self.table_body.clear();
    }

    pub fn append_row(&mut self, student: &Student) {
        self.table_body.push(TableRow::from(student));
    }

    /// Replace the table contents, preserving input order.
    pub fn replace_rows(&mut self, students: &[Student]) {
        self.clear_rows();
        for student in students {
            self.append_row(student);
        }
    }

    pub fn status(&self, region: Region) -> Option<&StatusMessage> {
        match region {
            Region::List => self.message.as_ref(),
            Region::Add => self.add_message.as_ref(),
        }
    }

    pub fn set_status(&mut self, region: Region, status: StatusMessage) {
        match region {
            Region::List => self.message = Some(status),
            Region::Add => self.add_message = Some(status),
        }
    }

    pub fn form(&self) -> &StudentForm {
        &self.form
    }

    pub fn set_form(&mut self, form: StudentForm) {
        self.form = form;
    }

    pub fn clear_form(&mut self) {
        self.form.clear();
    }

    /// Current value of a form input; `None` for non-input elements.
    pub fn input_value(&self, id: ElementId) -> Option<&str> {
        let value = match id {
            ElementId::Name => &self.form.name,
            ElementId::Age => &self.form.age,
            ElementId::Grade => &self.form.grade,
            ElementId::Email => &self.form.email,
            _ => return None,
        };
        Some(value.as_str())
    }
}
