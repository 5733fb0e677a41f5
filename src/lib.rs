pub mod api;
pub mod config;
pub mod error;
pub mod service;
pub mod types;
pub mod view;

pub use api::{StudentBackend, StudentsApi};
pub use error::RosterError;
pub use service::StudentListClient;
