//! Synchronous test suite for the reqres user-management demo API.
//!
//! # Overview
//! `ReqresClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network; `HttpTransport` executes them with
//! ureq. `ApiSession` pairs the two for one `ApiConfig`, and `scenarios`
//! holds one test case per API operation.
//!
//! # Design
//! - The client is stateless; it holds only the base URL and default headers.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and parsing is tested against literal responses.
//! - Configuration is an explicit value handed to the session factory; there
//!   is no process-wide client state.
//! - DTOs are defined independently from the mock-server crate; the scenario
//!   tests catch schema drift.

pub mod assertions;
pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod http;
pub mod json;
pub mod logging;
pub mod scenarios;
pub mod session;
pub mod transport;
pub mod types;

pub use client::ReqresClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::ApiSession;
pub use transport::HttpTransport;
pub use types::{
    LoginError, LoginRequest, LoginResponse, LoginToken, User, UserCreateResponse, UserId,
    UserUpdate, UserUpdateResponse,
};
