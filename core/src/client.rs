//! Stateless HTTP request builder and response parser for the reqres API.
//!
//! # Design
//! `ReqresClient` holds the base URL and a set of default headers and
//! carries no mutable state between calls. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. `HttpTransport` performs the round-trip
//! in between.

use serde::Serialize;

use crate::assertions::expect_eq;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::json::{parse_at, parse_body};
use crate::types::{
    LoginError, LoginRequest, LoginResponse, LoginToken, User, UserCreateResponse, UserUpdate,
    UserUpdateResponse,
};

/// Synchronous, stateless client for the reqres user API.
#[derive(Debug, Clone)]
pub struct ReqresClient {
    base_url: String,
    default_headers: Vec<(String, String)>,
}

impl ReqresClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_headers: Vec::new(),
        }
    }

    /// Add a header sent with every request built by this client.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.default_headers
            .push((name.to_ascii_lowercase(), value.to_string()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`, which may omit its leading slash.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn build_list_users(&self, page: Option<u32>) -> HttpRequest {
        let url = match page {
            Some(page) => format!("{}?page={page}", self.url("users")),
            None => self.url("users"),
        };
        self.request(HttpMethod::Get, url)
    }

    pub fn build_get_user(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, self.url(&format!("users/{id}")))
    }

    pub fn build_create_user(&self, input: &User) -> ApiResult<HttpRequest> {
        self.json_request(HttpMethod::Post, self.url("users"), input)
    }

    pub fn build_update_user(&self, id: i64, input: &UserUpdate) -> ApiResult<HttpRequest> {
        self.json_request(HttpMethod::Put, self.url(&format!("users/{id}")), input)
    }

    pub fn build_delete_user(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, self.url(&format!("users/{id}")))
    }

    pub fn build_login(&self, input: &LoginRequest) -> ApiResult<HttpRequest> {
        self.json_request(HttpMethod::Post, self.url("login"), input)
    }

    /// Request for an arbitrary `path` with an optional JSON `body`.
    pub fn build<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&T>,
    ) -> ApiResult<HttpRequest> {
        match body {
            Some(body) => self.json_request(method, self.url(path), body),
            None => Ok(self.request(method, self.url(path))),
        }
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> ApiResult<Vec<User>> {
        check_json(&response, 200)?;
        parse_at(&response.body, "data")
    }

    /// A 404 here means the id is absent and maps to `NotFound`.
    pub fn parse_get_user(&self, response: HttpResponse) -> ApiResult<User> {
        if response.status == 404 {
            return Err(ApiError::NotFound);
        }
        check_json(&response, 200)?;
        parse_at(&response.body, "data")
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> ApiResult<UserCreateResponse> {
        check_json(&response, 201)?;
        parse_body(&response.body)
    }

    pub fn parse_update_user(&self, response: HttpResponse) -> ApiResult<UserUpdateResponse> {
        check_json(&response, 200)?;
        parse_body(&response.body)
    }

    pub fn parse_delete_user(&self, response: HttpResponse) -> ApiResult<()> {
        check_status(&response, 204)?;
        expect_eq("body", "", response.body.as_str())
    }

    /// 200 yields a token, 400 yields the server's error message.
    pub fn parse_login(&self, response: HttpResponse) -> ApiResult<LoginResponse> {
        match response.status {
            200 => {
                check_content_type(&response)?;
                parse_body::<LoginToken>(&response.body).map(LoginResponse::Token)
            }
            400 => {
                check_content_type(&response)?;
                parse_body::<LoginError>(&response.body).map(LoginResponse::Error)
            }
            _ => Err(status_error(&response, 200)),
        }
    }

    fn request(&self, method: HttpMethod, url: String) -> HttpRequest {
        let mut request = HttpRequest::new(method, url);
        request.headers.extend(self.default_headers.iter().cloned());
        request
    }

    fn json_request<T: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        url: String,
        input: &T,
    ) -> ApiResult<HttpRequest> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut request = HttpRequest::json(method, url, body);
        request.headers.extend(self.default_headers.iter().cloned());
        Ok(request)
    }
}

fn check_status(response: &HttpResponse, expected: u16) -> ApiResult<()> {
    if response.status == expected {
        return Ok(());
    }
    Err(status_error(response, expected))
}

fn status_error(response: &HttpResponse, expected: u16) -> ApiError {
    ApiError::UnexpectedStatus {
        expected,
        actual: response.status,
        body: response.body.clone(),
    }
}

fn check_content_type(response: &HttpResponse) -> ApiResult<()> {
    if response.is_json() {
        return Ok(());
    }
    Err(ApiError::UnexpectedContentType {
        expected: "application/json".to_string(),
        actual: response.content_type().unwrap_or("<none>").to_string(),
    })
}

fn check_json(response: &HttpResponse, expected: u16) -> ApiResult<()> {
    check_status(response, expected)?;
    check_content_type(response)
}
