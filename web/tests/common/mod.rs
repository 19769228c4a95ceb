use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use storage::Database;
use tower::ServiceExt;
use web::{AppState, build_router, middleware::auth::AuthState};

#[allow(dead_code)]
pub const TEST_ADMIN_USER: &str = "admin";
#[allow(dead_code)]
pub const TEST_ADMIN_PASSWORD: &str = "integration-test-password";

/// Build the full router against the database named by `TEST_DATABASE_URL`.
/// Returns `None` (so the caller can skip) when the variable is unset.
#[allow(dead_code)]
pub async fn test_app() -> Option<(Router, Database)> {
    let Ok(database_url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("skipping: TEST_DATABASE_URL is not set");
        return None;
    };

    let db = Database::new(&database_url)
        .await
        .expect("Failed to connect to test database");
    db.run_migrations().await.expect("Failed to run migrations");

    let auth = AuthState::new(
        "integration-test-secret",
        24,
        TEST_ADMIN_USER.to_string(),
        TEST_ADMIN_PASSWORD.to_string(),
    );

    let app = build_router(AppState {
        db: db.clone(),
        auth,
    });

    Some((app, db))
}

/// Send one JSON request through the router and decode the response body.
#[allow(dead_code)]
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

static SEQ: AtomicU64 = AtomicU64::new(0);

fn unique_suffix() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as u64;
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    nanos.wrapping_mul(31).wrapping_add(seq)
}

/// A fresh 10-digit mobile number no other test run will have used.
#[allow(dead_code)]
pub fn unique_phone() -> String {
    format!("9{:09}", unique_suffix() % 1_000_000_000)
}

/// A fresh event name, seeded into the events table.
#[allow(dead_code)]
pub async fn create_event(db: &Database, base: &str) -> String {
    let name = format!("{base} {}", unique_suffix() % 1_000_000);
    sqlx::query("INSERT INTO events (event_name) VALUES ($1) ON CONFLICT (event_name) DO NOTHING")
        .bind(&name)
        .execute(db.pool())
        .await
        .expect("Failed to seed event");
    name
}

/// Register a player through the API and return their id.
#[allow(dead_code)]
pub async fn register_player(app: &Router, name: &str, phone: &str, dob: &str) -> i32 {
    let (status, body) = send_json(
        app,
        "POST",
        "/api/players",
        None,
        Some(json!({
            "name": name,
            "whatsapp_number": phone,
            "date_of_birth": dob,
            "city": "Pune",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "player creation failed: {body}");
    body["id"].as_i64().expect("created player id") as i32
}

/// Log in as the test admin and return the bearer token.
#[allow(dead_code)]
pub async fn admin_token(app: &Router) -> String {
    let (status, body) = send_json(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({
            "username": TEST_ADMIN_USER,
            "password": TEST_ADMIN_PASSWORD,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "admin login failed: {body}");
    body["access_token"]
        .as_str()
        .expect("access token")
        .to_string()
}

/// Fetch a player's dashboard rows.
#[allow(dead_code)]
pub async fn dashboard_events(app: &Router, player_id: i32) -> Vec<Value> {
    let (status, body) = send_json(
        app,
        "GET",
        &format!("/api/players/dashboard/{player_id}"),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK, "dashboard fetch failed: {body}");
    body["events"].as_array().cloned().unwrap_or_default()
}
