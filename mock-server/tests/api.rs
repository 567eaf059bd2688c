use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use reqres_mock::{app, User, LOGIN_TOKEN};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

fn first_names(page: &Value) -> Vec<String> {
    serde_json::from_value::<Vec<User>>(page["data"].clone())
        .unwrap()
        .into_iter()
        .map(|u| u.first_name)
        .collect()
}

// --- list ---

#[tokio::test]
async fn list_users_first_page() {
    let resp = app().oneshot(empty_request("GET", "/api/users")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[http::header::CONTENT_TYPE],
        "application/json"
    );
    let page: Value = body_json(resp).await;
    assert_eq!(page["page"], 1);
    assert_eq!(page["per_page"], 6);
    assert_eq!(page["total"], 12);
    assert_eq!(page["total_pages"], 2);
    assert_eq!(
        first_names(&page),
        ["George", "Janet", "Emma", "Eve", "Charles", "Tracey"]
    );
}

#[tokio::test]
async fn list_users_second_page() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/users?page=2"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: Value = body_json(resp).await;
    assert_eq!(
        first_names(&page),
        ["Michael", "Lindsay", "Tobias", "Byron", "George", "Rachel"]
    );
}

#[tokio::test]
async fn list_users_past_last_page_is_empty() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/users?page=3"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: Value = body_json(resp).await;
    assert!(first_names(&page).is_empty());
}

#[tokio::test]
async fn list_users_huge_page_is_empty() {
    let uri = format!("/api/users?page={}", usize::MAX);
    let resp = app().oneshot(empty_request("GET", &uri)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: Value = body_json(resp).await;
    assert!(first_names(&page).is_empty());
    assert_eq!(page["total"], 12);
}

// --- get ---

#[tokio::test]
async fn get_user_found() {
    let resp = app().oneshot(empty_request("GET", "/api/users/2")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    let user: User = serde_json::from_value(body["data"].clone()).unwrap();
    assert_eq!(user.first_name, "Janet");
    assert_eq!(user.email, "janet.weaver@reqres.in");
}

#[tokio::test]
async fn get_user_not_found() {
    let resp = app().oneshot(empty_request("GET", "/api/users/23")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({}));
}

#[tokio::test]
async fn get_user_bad_id_returns_400() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/users/not-a-number"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- create ---

#[tokio::test]
async fn create_user_echoes_body_with_new_id() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/users",
            r#"{"id":12,"email":"bob@gmail.com","first_name":"BoB","last_name":"Blam","avatar":"https://avatars.com/bob"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = body_json(resp).await;
    assert_eq!(body["email"], "bob@gmail.com");
    assert_eq!(body["first_name"], "BoB");
    assert_eq!(body["avatar"], "https://avatars.com/bob");
    assert!(body["id"].is_string());
    assert_ne!(body["id"], "12");
    let created_at = body["createdAt"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn create_user_rejects_non_object() {
    let resp = app()
        .oneshot(json_request("POST", "/api/users", "[1, 2]"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- update ---

#[tokio::test]
async fn update_user_echoes_names() {
    let resp = app()
        .oneshot(json_request(
            "PUT",
            "/api/users/123",
            r#"{"first_name":"NEW_FIRST_NAME","last_name":"NEW_LAST_NAME"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["first_name"], "NEW_FIRST_NAME");
    assert_eq!(body["last_name"], "NEW_LAST_NAME");
    assert!(body["updatedAt"].is_string());
}

// --- delete ---

#[tokio::test]
async fn delete_user_is_idempotent() {
    use tower::Service;

    let mut app = app().into_service();

    for _ in 0..2 {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(empty_request("DELETE", "/api/users/123"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let body = body_bytes(resp).await;
        assert!(body.is_empty());
    }
}

// --- login ---

#[tokio::test]
async fn login_success_returns_token() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/login",
            r#"{"email":"eve.holt@reqres.in","password":"cityslicka"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["token"], LOGIN_TOKEN);
}

#[tokio::test]
async fn login_missing_password() {
    let resp = app()
        .oneshot(json_request("POST", "/api/login", r#"{"email":"peter@klaven"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["error"], "Missing password");
}

#[tokio::test]
async fn login_missing_email() {
    let resp = app()
        .oneshot(json_request("POST", "/api/login", r#"{"password":"x"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["error"], "Missing email or username");
}

#[tokio::test]
async fn login_unknown_user() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/login",
            r#"{"email":"nobody@example.com","password":"x"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["error"], "user not found");
}
