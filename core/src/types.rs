//! Domain DTOs for the reqres user API.
//!
//! # Design
//! These types mirror the remote API's JSON but are defined independently
//! from the mock-server crate. The scenario tests catch any schema drift
//! between the two.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directory entry as listed by `GET /users`, also used as the create
/// payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

/// Identifier assigned by the server on create. reqres answers with a
/// string; other deployments use integers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum UserId {
    Int(i64),
    Text(String),
}

impl UserId {
    pub fn is_empty(&self) -> bool {
        matches!(self, UserId::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Int(id) => write!(f, "{id}"),
            UserId::Text(id) => f.write_str(id),
        }
    }
}

/// Body of a `201 Created` answer to `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserCreateResponse {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Partial update payload for `PUT /users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
}

/// Body of the `200 OK` answer to `PUT /users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserUpdateResponse {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginToken {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginError {
    pub error: String,
}

/// Outcome of `POST /login`. The variant follows the HTTP status:
/// 200 carries a token, 400 carries an error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginResponse {
    Token(LoginToken),
    Error(LoginError),
}
