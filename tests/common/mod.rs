#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use serde_json::{Value, json};
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};
use student_roster::types::Student;
use tokio::net::TcpListener;
use url::Url;

/// One request as seen by the mock service.
#[derive(Debug, Clone, PartialEq)]
pub struct Seen {
    pub method: &'static str,
    pub path: String,
    pub query: HashMap<String, String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct MockState {
    pub students: Mutex<Vec<Student>>,
    pub seen: Mutex<Vec<Seen>>,
}

impl MockState {
    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    fn record(&self, seen: Seen) {
        self.seen.lock().unwrap().push(seen);
    }
}

pub struct MockServer {
    pub addr: SocketAddr,
    pub state: Arc<MockState>,
}

impl MockServer {
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}/", self.addr)).unwrap()
    }
}

pub fn student(id: i64, name: &str, age: i64, grade: &str, email: &str) -> Student {
    Student {
        id,
        name: name.to_string(),
        age: Some(age),
        grade: grade.to_string(),
        email: email.to_string(),
    }
}

/// Serve `router` on an ephemeral local port.
pub async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock listener");
    let addr = listener.local_addr().expect("listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server failed");
    });
    addr
}

/// A roster service backed by an in-memory list.
pub async fn spawn_roster(students: Vec<Student>) -> MockServer {
    let state = Arc::new(MockState {
        students: Mutex::new(students),
        seen: Mutex::default(),
    });
    let router = Router::new()
        .route("/api/students", get(list_students).post(add_student))
        .route("/api/students/{id}", get(get_student))
        .with_state(state.clone());
    MockServer {
        addr: serve(router).await,
        state,
    }
}

/// A service whose list endpoint answers with non-JSON and whose create
/// endpoint always fails.
pub async fn spawn_broken() -> SocketAddr {
    let router = Router::new().route(
        "/api/students",
        get(|| async { "<html>maintenance</html>" })
            .post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    serve(router).await
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

async fn list_students(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Vec<Student>> {
    let grade = query.get("grade").cloned();
    state.record(Seen {
        method: "GET",
        path: "/api/students".into(),
        query,
        content_type: None,
        body: None,
    });
    let students = state.students.lock().unwrap();
    Json(
        students
            .iter()
            .filter(|s| grade.as_ref().is_none_or(|g| &s.grade == g))
            .cloned()
            .collect(),
    )
}

async fn get_student(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    state.record(Seen {
        method: "GET",
        path: format!("/api/students/{id}"),
        query: HashMap::new(),
        content_type: None,
        body: None,
    });
    let students = state.students.lock().unwrap();
    match students.iter().find(|s| s.id == id) {
        Some(s) => (StatusCode::OK, Json(json!(s))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Student not found"})),
        ),
    }
}

async fn add_student(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    state.record(Seen {
        method: "POST",
        path: "/api/students".into(),
        query: HashMap::new(),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: Some(body.clone()),
    });

    for field in ["name", "age", "grade", "email"] {
        if body.get(field).is_none() {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": format!("Missing required field: {field}")})),
            );
        }
    }

    let mut students = state.students.lock().unwrap();
    let id = students.iter().map(|s| s.id).max().unwrap_or(0) + 1;
    students.push(Student {
        id,
        name: body["name"].as_str().unwrap_or_default().to_string(),
        age: body["age"].as_i64(),
        grade: body["grade"].as_str().unwrap_or_default().to_string(),
        email: body["email"].as_str().unwrap_or_default().to_string(),
    });
    (
        StatusCode::CREATED,
        Json(json!({"message": "Student added successfully", "id": id})),
    )
}
