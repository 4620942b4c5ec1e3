//! Tests for user HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{json, Value};

use crate::inbound::http::test_utils::test_app;

#[actix_web::test]
async fn listing_returns_every_seeded_user_in_the_envelope() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::get().uri("/api/users").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(response).await;
    let users = body["users"].as_array().expect("users array");
    assert_eq!(users.len(), 4);
    for user in users {
        assert!(user.get("username").is_some());
        assert!(user.get("name").is_some());
        assert!(user.get("avatar_url").is_some());
    }
}

#[actix_web::test]
async fn fetching_a_user_by_username_returns_the_row() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::get()
        .uri("/api/users/lurker")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["user"]["username"], json!("lurker"));
    assert_eq!(body["user"]["name"], json!("do_nothing"));
}

#[actix_web::test]
async fn fetching_a_missing_user_names_the_username() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::get()
        .uri("/api/users/ghost")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({ "message": "no user with username of ghost found" })
    );
}
