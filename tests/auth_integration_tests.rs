//! End-to-end tests for the session authentication flow
//!
//! Drives the full router the way a client would: login sets the cookie,
//! the cookie admits the protected route, logout clears it.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use cookiegate::auth::jwt::Claims;
use cookiegate::config::{AuthConfig, Config, CorsConfig, ObservabilityConfig, ServerConfig};

const TEST_SECRET: &str = "test-secret-key-minimum-32-characters!!";

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3010,
        },
        auth: AuthConfig {
            secret: TEST_SECRET.to_string(),
            token_lifetime_seconds: 3600,
            leeway_seconds: 30,
            admin_username: "admin".to_string(),
            admin_password: "password".to_string(),
        },
        cors: CorsConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

fn test_app() -> Router {
    cookiegate::create_app(test_config()).expect("router should build")
}

fn login_request(username: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "username": username, "password": password }).to_string(),
        ))
        .unwrap()
}

fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie.to_string());
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).expect("response body should be JSON")
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

fn sign_claims(claims: &Claims, secret: &str) -> String {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// Scenario: login with the admin pair, then fetch the protected data with
/// the returned cookie
#[tokio::test]
async fn test_login_then_protected_succeeds() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(login_request("admin", "password"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login should set the session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(
        !set_cookie.contains("Max-Age"),
        "session cookie must not carry an explicit expiry"
    );

    let body = body_json(response).await;
    assert_eq!(body, json!({ "message": "Login successful" }));

    // Re-submit the token the way a browser would
    let cookie_pair = set_cookie.split(';').next().unwrap().to_string();
    let response = app
        .oneshot(get_request("/protected", Some(&cookie_pair)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "The secret data is: 42" })
    );
}

/// Scenario: protected route without any prior login
#[tokio::test]
async fn test_protected_without_login_is_unauthorized() {
    let app = test_app();

    let response = app.oneshot(get_request("/protected", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "message": "Unauthorized" }));
}

/// Scenario: wrong password leaves the client without a cookie and the
/// protected route still rejects
#[tokio::test]
async fn test_login_with_wrong_password_sets_no_cookie() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(login_request("admin", "wrong"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(
        response.headers().get(header::SET_COOKIE).is_none(),
        "failed login must not set a cookie"
    );
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Invalid credentials" })
    );

    let response = app.oneshot(get_request("/protected", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Scenario: logout clears the cookie; a client honoring the directive is
/// locked out again
#[tokio::test]
async fn test_login_logout_then_protected_is_unauthorized() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(login_request("admin", "password"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("logout should clear the session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("Max-Age=0"));

    assert_eq!(
        body_json(response).await,
        json!({ "message": "Logout successful" })
    );

    // The browser cookie store is now empty
    let response = app.oneshot(get_request("/protected", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout is safe to call repeatedly, with or without a session
#[tokio::test]
async fn test_logout_without_session_succeeds() {
    let app = test_app();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Logout successful" })
        );
    }
}

#[tokio::test]
async fn test_protected_rejects_wrongly_signed_token() {
    let app = test_app();

    let now = unix_now();
    let claims = Claims {
        sub: "admin".to_string(),
        iat: now,
        exp: now + 3600,
    };
    let token = sign_claims(&claims, "a-different-secret-also-32-chars-long!");

    let response = app
        .oneshot(get_request("/protected", Some(&format!("token={token}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Invalid token" })
    );
}

#[tokio::test]
async fn test_protected_rejects_expired_token() {
    let app = test_app();

    let now = unix_now();
    let claims = Claims {
        sub: "admin".to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = sign_claims(&claims, TEST_SECRET);

    let response = app
        .oneshot(get_request("/protected", Some(&format!("token={token}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Invalid token" })
    );
}

#[tokio::test]
async fn test_root_returns_hello_world() {
    let app = test_app();

    let response = app.oneshot(get_request("/", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "Hello World" }));
}

#[tokio::test]
async fn test_health_and_ready_endpoints() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(get_request("/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));

    let response = app.oneshot(get_request("/ready", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ready" }));
}

#[tokio::test]
async fn test_client_shell_and_assets_are_served() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(get_request("/app", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get_request("/static/app.js", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(
        content_type.contains("javascript"),
        "unexpected content type: {content_type}"
    );
}

/// Cross-origin calls are limited to the configured client origin, with
/// credentials allowed
#[tokio::test]
async fn test_cors_allows_configured_client_origin() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("allowed origin should be echoed")
            .to_str()
            .unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .expect("credentials must be permitted cross-origin")
            .to_str()
            .unwrap(),
        "true"
    );
}
