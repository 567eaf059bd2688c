//! Field-level checks that fail with `ApiError::Assertion`.

use std::fmt::Debug;

use crate::error::{ApiError, ApiResult};
use crate::types::{User, UserCreateResponse, UserUpdate, UserUpdateResponse};

/// Fail unless `actual == expected`, naming `field` in the error.
pub fn expect_eq<T: PartialEq + Debug + ?Sized>(field: &str, expected: &T, actual: &T) -> ApiResult<()> {
    if expected == actual {
        return Ok(());
    }
    Err(ApiError::Assertion {
        field: field.to_string(),
        expected: format!("{expected:?}"),
        actual: format!("{actual:?}"),
    })
}

/// Fail when `value` is blank.
pub fn expect_present(field: &str, value: &str) -> ApiResult<()> {
    if !value.trim().is_empty() {
        return Ok(());
    }
    Err(ApiError::Assertion {
        field: field.to_string(),
        expected: "a non-empty value".to_string(),
        actual: format!("{value:?}"),
    })
}

/// The create answer must echo every request field except `id`, which the
/// server assigns.
pub fn check_create_echo(request: &User, response: &UserCreateResponse) -> ApiResult<()> {
    expect_eq("email", request.email.as_str(), response.email.as_str())?;
    expect_eq("first_name", request.first_name.as_str(), response.first_name.as_str())?;
    expect_eq("last_name", request.last_name.as_str(), response.last_name.as_str())?;
    expect_eq("avatar", request.avatar.as_str(), response.avatar.as_str())
}

pub fn check_update_echo(request: &UserUpdate, response: &UserUpdateResponse) -> ApiResult<()> {
    expect_eq("first_name", request.first_name.as_str(), response.first_name.as_str())?;
    expect_eq("last_name", request.last_name.as_str(), response.last_name.as_str())
}
