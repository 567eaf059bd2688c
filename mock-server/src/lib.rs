use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use tracing::info;

pub const PER_PAGE: usize = 6;
pub const LOGIN_TOKEN: &str = "QpwL5tke4Pnpja7X4";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

/// Read-only user directory plus the counter for ids handed out on create.
/// Nothing a client sends is stored, so deletes are idempotent.
#[derive(Clone)]
pub struct Directory {
    users: Arc<Vec<User>>,
    next_id: Arc<AtomicU64>,
}

impl Directory {
    pub fn seeded() -> Self {
        const PEOPLE: [(&str, &str); 12] = [
            ("George", "Bluth"),
            ("Janet", "Weaver"),
            ("Emma", "Wong"),
            ("Eve", "Holt"),
            ("Charles", "Morris"),
            ("Tracey", "Ramos"),
            ("Michael", "Lawson"),
            ("Lindsay", "Ferguson"),
            ("Tobias", "Funke"),
            ("Byron", "Fields"),
            ("George", "Edwards"),
            ("Rachel", "Howell"),
        ];
        let users = PEOPLE
            .iter()
            .zip(1u64..)
            .map(|((first, last), id)| User {
                id,
                email: format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
                first_name: first.to_string(),
                last_name: last.to_string(),
                avatar: format!("https://reqres.in/img/faces/{id}-image.jpg"),
            })
            .collect();
        Self {
            users: Arc::new(users),
            next_id: Arc::new(AtomicU64::new(100)),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    fn find(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    fn contains_email(&self, email: &str) -> bool {
        self.users.iter().any(|user| user.email == email)
    }

    fn assign_id(&self) -> String {
        self.next_id.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

#[derive(Deserialize)]
pub struct PageParams {
    pub page: Option<usize>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct LoginBody {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

pub fn app() -> Router {
    Router::new()
        .nest("/api", api())
        .with_state(Directory::seeded())
}

fn api() -> Router<Directory> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/login", post(login))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn support() -> Value {
    json!({
        "url": "https://reqres.in/#support-heading",
        "text": "To keep ReqRes free, contributions towards server costs are appreciated!"
    })
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

async fn list_users(
    State(directory): State<Directory>,
    Query(params): Query<PageParams>,
) -> Json<Value> {
    let page = params.page.unwrap_or(1).max(1);
    let total = directory.users().len();
    let data: Vec<&User> = directory
        .users()
        .iter()
        .skip(page.saturating_sub(1).saturating_mul(PER_PAGE))
        .take(PER_PAGE)
        .collect();
    info!(page, returned = data.len(), "list users");
    Json(json!({
        "page": page,
        "per_page": PER_PAGE,
        "total": total,
        "total_pages": total.div_ceil(PER_PAGE),
        "data": data,
        "support": support(),
    }))
}

async fn get_user(
    State(directory): State<Directory>,
    Path(id): Path<u64>,
) -> (StatusCode, Json<Value>) {
    match directory.find(id) {
        Some(user) => (
            StatusCode::OK,
            Json(json!({ "data": user, "support": support() })),
        ),
        None => (StatusCode::NOT_FOUND, Json(json!({}))),
    }
}

/// Echoes the payload with a fresh string id and `createdAt`.
async fn create_user(
    State(directory): State<Directory>,
    Json(mut body): Json<Map<String, Value>>,
) -> (StatusCode, Json<Map<String, Value>>) {
    let id = directory.assign_id();
    info!(%id, "create user");
    body.insert("id".to_string(), Value::String(id));
    body.insert("createdAt".to_string(), Value::String(now()));
    (StatusCode::CREATED, Json(body))
}

async fn update_user(
    Path(id): Path<u64>,
    Json(mut body): Json<Map<String, Value>>,
) -> Json<Map<String, Value>> {
    info!(id, "update user");
    body.insert("updatedAt".to_string(), Value::String(now()));
    Json(body)
}

async fn delete_user(Path(id): Path<u64>) -> StatusCode {
    info!(id, "delete user");
    StatusCode::NO_CONTENT
}

async fn login(
    State(directory): State<Directory>,
    Json(body): Json<LoginBody>,
) -> (StatusCode, Json<Value>) {
    let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
    let Some(login) = present(body.email).or_else(|| present(body.username)) else {
        return login_error("Missing email or username");
    };
    if present(body.password).is_none() {
        return login_error("Missing password");
    }
    if !directory.contains_email(&login) {
        return login_error("user not found");
    }
    info!(%login, "login");
    (StatusCode::OK, Json(json!({ "token": LOGIN_TOKEN })))
}

fn login_error(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}
