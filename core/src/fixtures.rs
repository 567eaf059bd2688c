//! Literal inputs and expectations used by the scenarios.
//!
//! Every scenario owns its fixture id so no scenario depends on another
//! having run first.

use crate::types::{LoginRequest, User, UserUpdate};

/// First names of page 1 of `GET /users`, in server order.
pub const EXPECTED_FIRST_NAMES: [&str; 6] = ["George", "Janet", "Emma", "Eve", "Charles", "Tracey"];

pub const UPDATE_USER_ID: i64 = 123;
pub const DELETE_USER_ID: i64 = 123;

/// An existing directory entry and the id that has none.
pub const EXISTING_USER_ID: i64 = 2;
pub const EXISTING_USER_FIRST_NAME: &str = "Janet";
pub const MISSING_USER_ID: i64 = 23;

pub fn new_user() -> User {
    User {
        id: 12,
        email: "bob@gmail.com".to_string(),
        first_name: "BoB".to_string(),
        last_name: "Blam".to_string(),
        avatar: "https://avatars.com/bob".to_string(),
    }
}

pub fn name_update() -> UserUpdate {
    UserUpdate {
        first_name: "NEW_FIRST_NAME".to_string(),
        last_name: "NEW_LAST_NAME".to_string(),
    }
}

pub fn valid_login() -> LoginRequest {
    LoginRequest {
        email: "eve.holt@reqres.in".to_string(),
        password: "cityslicka".to_string(),
    }
}

/// Registered-looking email with no password.
pub fn login_without_password() -> LoginRequest {
    LoginRequest {
        email: "peter@klaven".to_string(),
        password: String::new(),
    }
}
