//! A client and transport bound to one `ApiConfig`.

use serde::Serialize;

use crate::client::ReqresClient;
use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::HttpTransport;
use crate::types::{
    LoginRequest, LoginResponse, User, UserCreateResponse, UserUpdate, UserUpdateResponse,
};

/// Runs build, execute and parse for each API operation.
#[derive(Debug, Clone)]
pub struct ApiSession {
    client: ReqresClient,
    transport: HttpTransport,
}

impl ApiSession {
    pub fn new(config: &ApiConfig) -> Self {
        let mut client = ReqresClient::new(&config.base_url);
        if let Some(api_key) = &config.api_key {
            client = client.with_header("x-api-key", api_key);
        }
        Self {
            client,
            transport: HttpTransport::new(config.timeout),
        }
    }

    pub fn client(&self) -> &ReqresClient {
        &self.client
    }

    /// Raw round-trip for `path` relative to the base URL. `headers`
    /// override defaults with the same name. Status and content type are
    /// left for the caller to check.
    pub fn send<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&T>,
        headers: &[(String, String)],
    ) -> ApiResult<HttpResponse> {
        let request = self.request(method, path, body, headers)?;
        self.transport.execute(&request)
    }

    fn request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&T>,
        headers: &[(String, String)],
    ) -> ApiResult<HttpRequest> {
        let mut request = self.client.build(method, path, body)?;
        for (name, value) in headers {
            request = request.set_header(name, value);
        }
        Ok(request)
    }

    pub fn list_users(&self, page: Option<u32>) -> ApiResult<Vec<User>> {
        let response = self.transport.execute(&self.client.build_list_users(page))?;
        self.client.parse_list_users(response)
    }

    pub fn get_user(&self, id: i64) -> ApiResult<User> {
        let response = self.transport.execute(&self.client.build_get_user(id))?;
        self.client.parse_get_user(response)
    }

    pub fn create_user(&self, user: &User) -> ApiResult<UserCreateResponse> {
        let response = self.transport.execute(&self.client.build_create_user(user)?)?;
        self.client.parse_create_user(response)
    }

    pub fn update_user(&self, id: i64, update: &UserUpdate) -> ApiResult<UserUpdateResponse> {
        let response = self
            .transport
            .execute(&self.client.build_update_user(id, update)?)?;
        self.client.parse_update_user(response)
    }

    pub fn delete_user(&self, id: i64) -> ApiResult<()> {
        let response = self.transport.execute(&self.client.build_delete_user(id))?;
        self.client.parse_delete_user(response)
    }

    pub fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse> {
        let response = self.transport.execute(&self.client.build_login(credentials)?)?;
        self.client.parse_login(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_becomes_default_header() {
        let config = ApiConfig::default()
            .with_base_url("http://127.0.0.1:3000/api/")
            .with_api_key("reqres-free-v1");
        let session = config.session();
        let req = session.client().build_list_users(None);
        assert_eq!(req.url, "http://127.0.0.1:3000/api/users");
        assert_eq!(
            req.headers,
            vec![("x-api-key".to_string(), "reqres-free-v1".to_string())]
        );
    }

    #[test]
    fn send_headers_replace_defaults() {
        let session = ApiConfig::default().with_api_key("default-key").session();
        let headers = vec![
            ("X-Api-Key".to_string(), "caller-key".to_string()),
            ("Content-Type".to_string(), "application/json; charset=utf-8".to_string()),
        ];
        let req = session
            .request(HttpMethod::Post, "/login", Some(&"{}"), &headers)
            .unwrap();

        assert_eq!(
            req.headers,
            vec![
                ("x-api-key".to_string(), "caller-key".to_string()),
                (
                    "content-type".to_string(),
                    "application/json; charset=utf-8".to_string()
                ),
            ]
        );
    }

    #[test]
    fn no_api_key_no_header() {
        let session = ApiSession::new(&ApiConfig::default());
        assert!(session.client().build_delete_user(1).headers.is_empty());
        assert_eq!(session.client().base_url(), "https://reqres.in/api");
    }
}
