//! Blocking HTTP execution of `HttpRequest` values using ureq.
//!
//! # Design
//! Status codes are returned as data: ureq's status-as-error behavior is
//! disabled so the parse methods decide what a 4xx/5xx means. Only failures
//! that produce no response at all (connect, TLS, timeout) become
//! `ApiError::Transport`. Each request is attempted exactly once.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};
use ureq::Agent;

use crate::error::{ApiError, ApiResult};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

const REDACTED_HEADERS: &[&str] = &["x-api-key", "authorization"];

#[derive(Clone)]
pub struct HttpTransport {
    agent: Agent,
    timeout: Duration,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send `method url` with an optional JSON `body` and extra `headers`.
    pub fn send<T: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&T>,
        headers: &[(String, String)],
    ) -> ApiResult<HttpResponse> {
        let mut request = match body {
            Some(body) => {
                let json =
                    serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
                HttpRequest::json(method, url, json)
            }
            None => HttpRequest::new(method, url),
        };
        for (name, value) in headers {
            request = request.set_header(name, value);
        }
        self.execute(&request)
    }

    /// Perform the round-trip for `request`.
    pub fn execute(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
        log_request(request);

        let transport_error = |message: String| ApiError::Transport {
            method: request.method,
            url: request.url.clone(),
            message,
        };

        let mut response = self.dispatch(request).map_err(|e| transport_error(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| transport_error(e.to_string()))?;

        debug!(method = %request.method, url = %request.url, status, "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    fn dispatch(&self, request: &HttpRequest) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
        let url = request.url.as_str();
        let headers = &request.headers;
        match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(url), headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(url), headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(url), headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(url), headers).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(url), headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => with_headers(self.agent.put(url), headers).send_empty(),
        }
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn loggable_headers(request: &HttpRequest) -> Vec<(&str, &str)> {
    request
        .headers
        .iter()
        .map(|(name, value)| {
            if REDACTED_HEADERS.contains(&name.as_str()) {
                (name.as_str(), "<redacted>")
            } else {
                (name.as_str(), value.as_str())
            }
        })
        .collect()
}

fn log_request(request: &HttpRequest) {
    info!(
        method = %request.method,
        url = %request.url,
        headers = ?loggable_headers(request),
        body = request.body.as_deref().unwrap_or(""),
        "sending request"
    );
}
