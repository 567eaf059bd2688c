//! Error types for the reqres client and test scenarios.
//!
//! # Design
//! Transport failures, protocol mismatches (status, content type, shape) and
//! field-level assertion failures are separate variants so a failing
//! scenario says which layer broke without rerunning it.

use thiserror::Error;

use crate::http::HttpMethod;

/// Errors returned by the transport, the parse methods and the scenarios.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response: connection failure or timeout.
    #[error("transport error on {method} {url}: {message}")]
    Transport {
        method: HttpMethod,
        url: String,
        message: String,
    },

    /// The server answered 404 to a lookup of a single user.
    #[error("resource not found")]
    NotFound,

    /// The server answered with a status other than the expected one.
    #[error("expected HTTP {expected}, got HTTP {actual}: {body}")]
    UnexpectedStatus {
        expected: u16,
        actual: u16,
        body: String,
    },

    /// The response did not declare the expected media type.
    #[error("expected content type {expected}, got {actual}")]
    UnexpectedContentType { expected: String, actual: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A response field did not hold the expected value. `expected` and
    /// `actual` hold debug renderings.
    #[error("assertion failed on `{field}`: expected {expected}, observed {actual}")]
    Assertion {
        field: String,
        expected: String,
        actual: String,
    },

    /// An environment override could not be interpreted.
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
