use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// One enrolled person as returned by the roster service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    /// Nullable on the wire: the service stores whatever age the client sent.
    pub age: Option<i64>,
    pub grade: String,
    pub email: String,
}

impl Student {
    /// Cell texts in table column order: id, name, age, grade, email.
    pub fn cells(&self) -> [String; 5] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.age.map(|a| a.to_string()).unwrap_or_default(),
            self.grade.clone(),
            self.email.clone(),
        ]
    }
}

/// POST body for creating a student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub age: Option<i64>,
    pub grade: String,
    pub email: String,
}

/// Creation response; only `id` is guaranteed.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreatedStudent {
    pub id: i64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Raw text of the four add-form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub age: String,
    pub grade: String,
    pub email: String,
}

impl StudentForm {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        grade: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            grade: grade.into(),
            email: email.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.age, &self.grade, &self.email]
            .iter()
            .all(|field| !field.is_empty())
    }

    /// Build the request body. Only emptiness is checked; the age is parsed
    /// leniently and becomes `null` when no leading integer is present.
    pub fn to_new_student(&self) -> Result<NewStudent, RosterError> {
        if !self.is_complete() {
            return Err(RosterError::IncompleteForm);
        }
        Ok(NewStudent {
            name: self.name.clone(),
            age: parse_leading_int(&self.age),
            grade: self.grade.clone(),
            email: self.email.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Leading-integer parse: skips leading whitespace, accepts one sign and an
/// optional `0x`/`0X` hex prefix, then reads digits and ignores whatever
/// follows them. A digit run outside the `i64` range yields `None` rather
/// than an imprecise float.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits_end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let value = i64::from_str_radix(&rest[..digits_end], radix).ok()?;
    Some(if negative { -value } else { value })
}
