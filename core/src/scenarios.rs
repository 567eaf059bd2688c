//! The API test cases. Each one builds its fixture, calls one endpoint
//! through an `ApiSession` and checks the typed answer.
//!
//! Status and content-type expectations are enforced by the session's parse
//! step; the scenario adds the field-level checks.

use tracing::info;

use crate::assertions::{check_create_echo, check_update_echo, expect_eq, expect_present};
use crate::error::{ApiError, ApiResult};
use crate::fixtures;
use crate::session::ApiSession;
use crate::types::LoginResponse;

pub type Scenario = fn(&ApiSession) -> ApiResult<()>;

const SCENARIOS: &[(&str, Scenario)] = &[
    ("list_users", list_users),
    ("get_user", get_user),
    ("get_missing_user", get_missing_user),
    ("create_user", create_user),
    ("update_user", update_user),
    ("delete_user", delete_user),
    ("delete_user_twice", delete_user_twice),
    ("login_success", login_success),
    ("login_missing_password", login_missing_password),
];

/// Every scenario with the name the runner reports it under.
pub fn all() -> &'static [(&'static str, Scenario)] {
    SCENARIOS
}

/// Page 1 lists the fixture first names in order. Sensitive to server
/// ordering.
pub fn list_users(session: &ApiSession) -> ApiResult<()> {
    let users = session.list_users(Some(1))?;
    for user in &users {
        info!(first_name = %user.first_name, "listed user");
    }
    let names: Vec<&str> = users.iter().map(|user| user.first_name.as_str()).collect();
    expect_eq("data[].first_name", &fixtures::EXPECTED_FIRST_NAMES[..], names.as_slice())
}

pub fn get_user(session: &ApiSession) -> ApiResult<()> {
    let user = session.get_user(fixtures::EXISTING_USER_ID)?;
    expect_eq("data.id", &fixtures::EXISTING_USER_ID, &user.id)?;
    expect_eq(
        "data.first_name",
        fixtures::EXISTING_USER_FIRST_NAME,
        user.first_name.as_str(),
    )
}

pub fn get_missing_user(session: &ApiSession) -> ApiResult<()> {
    match session.get_user(fixtures::MISSING_USER_ID) {
        Err(ApiError::NotFound) => Ok(()),
        Err(err) => Err(err),
        Ok(user) => Err(ApiError::Assertion {
            field: "status".to_string(),
            expected: "404".to_string(),
            actual: format!("200 with {user:?}"),
        }),
    }
}

/// The server assigns its own id, so only its presence is checked.
pub fn create_user(session: &ApiSession) -> ApiResult<()> {
    let user = fixtures::new_user();
    let created = session.create_user(&user)?;
    check_create_echo(&user, &created)?;
    expect_present("id", &created.id.to_string())
}

pub fn update_user(session: &ApiSession) -> ApiResult<()> {
    let update = fixtures::name_update();
    let updated = session.update_user(fixtures::UPDATE_USER_ID, &update)?;
    check_update_echo(&update, &updated)
}

pub fn delete_user(session: &ApiSession) -> ApiResult<()> {
    session.delete_user(fixtures::DELETE_USER_ID)
}

/// Deleting the same id again still answers 204.
pub fn delete_user_twice(session: &ApiSession) -> ApiResult<()> {
    session.delete_user(fixtures::DELETE_USER_ID)?;
    session.delete_user(fixtures::DELETE_USER_ID)
}

pub fn login_success(session: &ApiSession) -> ApiResult<()> {
    match session.login(&fixtures::valid_login())? {
        LoginResponse::Token(token) => expect_present("token", &token.token),
        LoginResponse::Error(err) => Err(ApiError::Assertion {
            field: "token".to_string(),
            expected: "a non-empty value".to_string(),
            actual: format!("error {:?}", err.error),
        }),
    }
}

pub fn login_missing_password(session: &ApiSession) -> ApiResult<()> {
    match session.login(&fixtures::login_without_password())? {
        LoginResponse::Error(err) => expect_present("error", &err.error),
        LoginResponse::Token(token) => Err(ApiError::Assertion {
            field: "error".to_string(),
            expected: "a non-empty value".to_string(),
            actual: format!("token {:?}", token.token),
        }),
    }
}
