mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{register_player, send_json, test_app, unique_phone};

#[tokio::test]
async fn register_then_login_round_trip() {
    let Some((app, _db)) = test_app().await else {
        return;
    };

    let phone = unique_phone();
    register_player(&app, "Asha Rao", &phone, "1990-01-01").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/auth/user-login",
        None,
        Some(json!({
            "whatsapp": phone,
            "date_of_birth": "1990-01-01",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["player"]["name"], json!("Asha Rao"));
    // fresh player has no registrations yet
    assert_eq!(body["user"]["events"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn login_normalizes_the_phone_number() {
    let Some((app, _db)) = test_app().await else {
        return;
    };

    // register with a formatted number, log in with the bare digits
    let digits = unique_phone();
    let formatted = format!("+91 {} {}", &digits[..5], &digits[5..]);
    register_player(&app, "Vikram Shah", &formatted, "1985-06-15").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/auth/user-login",
        None,
        Some(json!({
            "whatsapp": digits,
            "date_of_birth": "1985-06-15",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    assert_eq!(
        body["user"]["player"]["whatsapp_number"],
        json!(format!("+91{digits}"))
    );
}

#[tokio::test]
async fn login_with_wrong_dob_is_rejected() {
    let Some((app, _db)) = test_app().await else {
        return;
    };

    let phone = unique_phone();
    register_player(&app, "Meera Iyer", &phone, "1992-03-04").await;

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/auth/user-login",
        None,
        Some(json!({
            "whatsapp": phone,
            "date_of_birth": "1993-03-04",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn duplicate_whatsapp_numbers_are_rejected() {
    let Some((app, _db)) = test_app().await else {
        return;
    };

    let phone = unique_phone();
    register_player(&app, "First Player", &phone, "1990-01-01").await;

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/players",
        None,
        Some(json!({
            "name": "Second Player",
            "whatsapp_number": phone,
            "date_of_birth": "1991-02-02",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn update_rejects_another_players_number() {
    let Some((app, _db)) = test_app().await else {
        return;
    };

    let phone_a = unique_phone();
    let phone_b = unique_phone();
    register_player(&app, "Player A", &phone_a, "1990-01-01").await;
    let id_b = register_player(&app, "Player B", &phone_b, "1991-02-02").await;

    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/api/players/{id_b}"),
        None,
        Some(json!({
            "name": "Player B",
            "whatsapp_number": phone_a,
            "date_of_birth": "1991-02-02",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);

    // updating with their own number is fine
    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/api/players/{id_b}"),
        None,
        Some(json!({
            "name": "Player B Renamed",
            "whatsapp_number": phone_b,
            "date_of_birth": "1991-02-02",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_registrations_are_rejected() {
    let Some((app, _db)) = test_app().await else {
        return;
    };

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/players",
        None,
        Some(json!({
            "name": "",
            "whatsapp_number": "12345",
            "date_of_birth": "1990-01-01",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dashboard_for_unknown_player_is_404() {
    let Some((app, _db)) = test_app().await else {
        return;
    };

    let (status, _) = send_json(&app, "GET", "/api/players/dashboard/999999999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let Some((app, _db)) = test_app().await else {
        return;
    };

    let (status, _) = send_json(&app, "GET", "/api/players", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_json(&app, "GET", "/api/admin/registrations", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_json(
        &app,
        "GET",
        "/api/admin/statistics",
        Some("not-a-real-token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_login_unlocks_protected_routes() {
    let Some((app, _db)) = test_app().await else {
        return;
    };

    let token = common::admin_token(&app).await;

    let (status, body) = send_json(&app, "GET", "/api/players", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK, "listing players failed: {body}");
    assert!(body.is_array());

    let (status, body) =
        send_json(&app, "GET", "/api/admin/registrations", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK, "listing registrations failed: {body}");
}

#[tokio::test]
async fn bad_admin_credentials_are_rejected() {
    let Some((app, _db)) = test_app().await else {
        return;
    };

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({
            "username": common::TEST_ADMIN_USER,
            "password": "wrong-password",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
