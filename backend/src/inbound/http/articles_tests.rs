//! Tests for article HTTP handlers: the full request → validation → port →
//! envelope round trip over the seeded fixture store.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{json, Value};

use crate::domain::fixture::FixtureNewsStore;
use crate::domain::ports::{MockArticlesRepository, RepositoryError};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{test_app, test_app_with};

async fn get_json(app: &impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
>, uri: &str, expected: StatusCode) -> Value {
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), expected, "GET {uri}");
    actix_test::read_body_json(response).await
}

#[actix_web::test]
async fn list_defaults_to_newest_first_without_bodies() {
    let app = actix_test::init_service(test_app()).await;
    let body = get_json(&app, "/api/articles", StatusCode::OK).await;

    assert_eq!(body["total_count"], json!(5));
    let articles = body["articles"].as_array().expect("articles array");
    assert_eq!(articles.len(), 5);
    let ids: Vec<i64> = articles
        .iter()
        .map(|a| a["article_id"].as_i64().expect("id"))
        .collect();
    assert_eq!(ids, vec![3, 2, 5, 4, 1]);
    for article in articles {
        assert!(article.get("body").is_none(), "list view must omit body");
        assert!(article.get("comment_count").is_some());
    }
}

#[actix_web::test]
async fn list_windows_are_sliced_from_the_same_set_as_the_total() {
    let app = actix_test::init_service(test_app()).await;

    let body = get_json(&app, "/api/articles?limit=2&p=2", StatusCode::OK).await;
    assert_eq!(body["total_count"], json!(5));
    let ids: Vec<i64> = body["articles"]
        .as_array()
        .expect("articles array")
        .iter()
        .map(|a| a["article_id"].as_i64().expect("id"))
        .collect();
    assert_eq!(ids, vec![5, 4]);
}

#[actix_web::test]
async fn page_past_the_end_is_empty_with_unchanged_total() {
    let app = actix_test::init_service(test_app()).await;
    let body = get_json(&app, "/api/articles?p=9", StatusCode::OK).await;
    assert_eq!(body["articles"], json!([]));
    assert_eq!(body["total_count"], json!(5));
}

#[actix_web::test]
async fn topic_filter_restricts_the_set_and_its_total() {
    let app = actix_test::init_service(test_app()).await;
    let body = get_json(&app, "/api/articles?topic=cats", StatusCode::OK).await;
    assert_eq!(body["total_count"], json!(1));
    assert_eq!(body["articles"][0]["article_id"], json!(4));
}

#[actix_web::test]
async fn existing_topic_with_no_articles_is_an_empty_list() {
    let app = actix_test::init_service(test_app()).await;
    let body = get_json(&app, "/api/articles?topic=paper", StatusCode::OK).await;
    assert_eq!(body["articles"], json!([]));
    assert_eq!(body["total_count"], json!(0));
}

#[actix_web::test]
async fn unknown_topic_is_a_404_naming_the_topic() {
    let app = actix_test::init_service(test_app()).await;
    let body = get_json(&app, "/api/articles?topic=gardening", StatusCode::NOT_FOUND).await;
    assert_eq!(
        body,
        json!({ "message": "no topic with slug gardening found" })
    );
}

#[actix_web::test]
async fn author_filter_without_matches_is_just_empty() {
    let app = actix_test::init_service(test_app()).await;
    let body = get_json(&app, "/api/articles?author=nobody", StatusCode::OK).await;
    assert_eq!(body["articles"], json!([]));
    assert_eq!(body["total_count"], json!(0));
}

#[actix_web::test]
async fn sorting_by_comment_count_ascending_works() {
    let app = actix_test::init_service(test_app()).await;
    let body = get_json(
        &app,
        "/api/articles?sort_by=comment_count&order=asc",
        StatusCode::OK,
    )
    .await;
    let counts: Vec<i64> = body["articles"]
        .as_array()
        .expect("articles array")
        .iter()
        .map(|a| a["comment_count"].as_i64().expect("count"))
        .collect();
    assert_eq!(counts, vec![0, 0, 0, 2, 11]);
}

#[actix_web::test]
async fn bad_list_parameters_are_rejected_with_specific_messages() {
    let app = actix_test::init_service(test_app()).await;
    for (uri, message) in [
        ("/api/articles?sort_by=ratings", "invalid sort_by query"),
        ("/api/articles?order=sideways", "invalid order query"),
        (
            "/api/articles?limit=banana",
            "bad request: limit must be an integer",
        ),
        ("/api/articles?p=2.5", "bad request: p must be an integer"),
        (
            "/api/articles?limit=-1",
            "bad request: limit must not be negative",
        ),
        ("/api/articles?p=0", "bad request: p must be positive"),
    ] {
        let body = get_json(&app, uri, StatusCode::BAD_REQUEST).await;
        assert_eq!(body, json!({ "message": message }), "{uri}");
    }
}

#[actix_web::test]
async fn detail_returns_the_body_and_a_fresh_comment_count() {
    let app = actix_test::init_service(test_app()).await;
    let body = get_json(&app, "/api/articles/1", StatusCode::OK).await;
    let article = &body["article"];
    assert_eq!(article["article_id"], json!(1));
    assert_eq!(article["body"], json!("I find this existence challenging"));
    assert_eq!(article["comment_count"], json!(11));
    assert_eq!(article["votes"], json!(100));
}

#[actix_web::test]
async fn detail_of_a_missing_article_is_resource_not_found() {
    let app = actix_test::init_service(test_app()).await;
    let body = get_json(&app, "/api/articles/999", StatusCode::NOT_FOUND).await;
    assert_eq!(body, json!({ "message": "resource not found" }));
}

#[actix_web::test]
async fn non_integer_article_ids_get_the_integer_wording() {
    let app = actix_test::init_service(test_app()).await;
    for uri in ["/api/articles/banana", "/api/articles/1.5"] {
        let body = get_json(&app, uri, StatusCode::BAD_REQUEST).await;
        assert_eq!(
            body,
            json!({ "message": "bad request: article id must be an integer" }),
            "{uri}"
        );
    }
}

#[actix_web::test]
async fn vote_patches_compose_back_to_the_original_tally() {
    let app = actix_test::init_service(test_app()).await;

    let up = actix_test::TestRequest::patch()
        .uri("/api/articles/1")
        .set_json(json!({ "inc_votes": 5 }))
        .to_request();
    let up_body: Value =
        actix_test::read_body_json(actix_test::call_service(&app, up).await).await;
    assert_eq!(up_body["updatedArticle"]["votes"], json!(105));

    let down = actix_test::TestRequest::patch()
        .uri("/api/articles/1")
        .set_json(json!({ "inc_votes": -5 }))
        .to_request();
    let down_body: Value =
        actix_test::read_body_json(actix_test::call_service(&app, down).await).await;
    assert_eq!(down_body["updatedArticle"]["votes"], json!(100));
}

#[actix_web::test]
async fn vote_patch_without_inc_votes_is_rejected() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::patch()
        .uri("/api/articles/1")
        .set_json(json!({ "rating": 5 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({ "message": "patch request must be accompanied with an object with inc_votes key" })
    );
}

#[actix_web::test]
async fn vote_patch_with_a_non_integer_delta_is_a_bad_request() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::patch()
        .uri("/api/articles/1")
        .set_json(json!({ "inc_votes": "cat" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "message": "bad request" }));
}

#[actix_web::test]
async fn vote_patch_on_a_missing_article_is_not_found() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::patch()
        .uri("/api/articles/999")
        .set_json(json!({ "inc_votes": 1 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn posting_an_article_applies_the_default_image_url() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/articles")
        .set_json(json!({
            "author": "rogersop",
            "title": "On paper",
            "body": "It folds.",
            "topic": "paper"
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    let article = &body["newArticle"];
    assert_eq!(
        article["article_img_url"],
        json!("https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700")
    );
    assert_eq!(article["comment_count"], json!(0));
    assert_eq!(article["votes"], json!(0));

    // Round-trip: the stored row serves the same default.
    let article_id = article["article_id"].as_i64().expect("id");
    let fetched = get_json(&app, &format!("/api/articles/{article_id}"), StatusCode::OK).await;
    assert_eq!(
        fetched["article"]["article_img_url"],
        article["article_img_url"]
    );
}

#[actix_web::test]
async fn posting_an_article_keeps_an_explicit_image_url() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/articles")
        .set_json(json!({
            "author": "rogersop",
            "title": "On paper, again",
            "body": "It still folds.",
            "topic": "paper",
            "article_img_url": "https://example.net/fold.jpg"
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body["newArticle"]["article_img_url"],
        json!("https://example.net/fold.jpg")
    );
}

#[actix_web::test]
async fn posting_an_article_with_missing_fields_names_the_shape() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/articles")
        .set_json(json!({ "author": "rogersop", "title": "No body" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({ "message": "post request must be accompanied by an article object with valid author, title, body and topic keys" })
    );
}

#[actix_web::test]
async fn posting_an_article_with_unknown_references_is_a_bad_request() {
    let app = actix_test::init_service(test_app()).await;
    for payload in [
        json!({ "author": "rogersop", "title": "t", "body": "b", "topic": "gardening" }),
        json!({ "author": "nobody", "title": "t", "body": "b", "topic": "paper" }),
    ] {
        let request = actix_test::TestRequest::post()
            .uri("/api/articles")
            .set_json(payload)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({ "message": "bad request" }));
    }
}

#[actix_web::test]
async fn deleting_an_article_removes_it_and_its_comments() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::delete()
        .uri("/api/articles/1")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let gone = get_json(&app, "/api/articles/1", StatusCode::NOT_FOUND).await;
    assert_eq!(gone, json!({ "message": "resource not found" }));
    // The comment listing for the cascaded article is gone too.
    let comments = get_json(&app, "/api/articles/1/comments", StatusCode::NOT_FOUND).await;
    assert_eq!(comments, json!({ "message": "resource not found" }));
}

#[actix_web::test]
async fn delete_cascade_is_visible_at_the_store() {
    let store = Arc::new(FixtureNewsStore::seeded());
    let app =
        actix_test::init_service(test_app_with(HttpState::from_store(store.clone()))).await;

    let request = actix_test::TestRequest::delete()
        .uri("/api/articles/1")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(store.comment_rows(1), 0);
}

#[actix_web::test]
async fn deleting_a_missing_article_is_not_found() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::delete()
        .uri("/api/articles/999")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn comment_listing_windows_match_the_documented_scenario() {
    let app = actix_test::init_service(test_app()).await;
    let body = get_json(
        &app,
        "/api/articles/1/comments?limit=8&p=2",
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["total_comments"], json!(11));
    assert_eq!(
        body["comments"].as_array().expect("comments array").len(),
        3
    );
}

#[actix_web::test]
async fn comment_listing_is_newest_first_with_avatars() {
    let app = actix_test::init_service(test_app()).await;
    let body = get_json(&app, "/api/articles/1/comments", StatusCode::OK).await;
    let comments = body["comments"].as_array().expect("comments array");
    assert_eq!(comments.len(), 10, "default window size");
    assert_eq!(body["total_comments"], json!(11));
    assert_eq!(comments[0]["comment_id"], json!(5));
    assert!(comments[0]["avatar_url"].as_str().expect("avatar").starts_with("https://"));
}

#[actix_web::test]
async fn comment_listing_for_a_commentless_article_is_empty() {
    let app = actix_test::init_service(test_app()).await;
    let body = get_json(&app, "/api/articles/2/comments", StatusCode::OK).await;
    assert_eq!(body, json!({ "comments": [], "total_comments": 0 }));
}

#[actix_web::test]
async fn comment_listing_for_a_missing_article_is_not_found() {
    let app = actix_test::init_service(test_app()).await;
    let body = get_json(&app, "/api/articles/999/comments", StatusCode::NOT_FOUND).await;
    assert_eq!(body, json!({ "message": "resource not found" }));
}

#[actix_web::test]
async fn posting_a_comment_returns_the_created_row() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/articles/2/comments")
        .set_json(json!({ "username": "lurker", "body": "quietly approves" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    let posted = &body["postedComment"];
    assert_eq!(posted["author"], json!("lurker"));
    assert_eq!(posted["body"], json!("quietly approves"));
    assert_eq!(posted["article_id"], json!(2));
    assert_eq!(posted["votes"], json!(0));

    let listing = get_json(&app, "/api/articles/2/comments", StatusCode::OK).await;
    assert_eq!(listing["total_comments"], json!(1));
}

#[actix_web::test]
async fn posting_a_comment_with_missing_fields_names_the_shape() {
    let app = actix_test::init_service(test_app()).await;
    for payload in [
        json!({ "username": "lurker" }),
        json!({ "body": "no author" }),
        json!({ "username": "", "body": "blank author" }),
    ] {
        let request = actix_test::TestRequest::post()
            .uri("/api/articles/2/comments")
            .set_json(payload)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            json!({ "message": "post request must be accompanied by a comment object with valid username and body keys" })
        );
    }
}

#[actix_web::test]
async fn posting_a_comment_with_unknown_references_is_a_bad_request() {
    let app = actix_test::init_service(test_app()).await;
    for (uri, payload) in [
        (
            "/api/articles/999/comments",
            json!({ "username": "lurker", "body": "ghost thread" }),
        ),
        (
            "/api/articles/2/comments",
            json!({ "username": "nobody", "body": "ghost author" }),
        ),
    ] {
        let request = actix_test::TestRequest::post()
            .uri(uri)
            .set_json(payload)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({ "message": "bad request" }));
    }
}

#[actix_web::test]
async fn storage_failures_surface_as_redacted_server_errors() {
    let mut articles = MockArticlesRepository::new();
    articles.expect_list().returning(|_, _| {
        Err(RepositoryError::query(
            "relation \"articles\" does not exist",
        ))
    });

    let fixture = Arc::new(FixtureNewsStore::seeded());
    let state = HttpState {
        topics: fixture.clone(),
        articles: Arc::new(articles),
        comments: fixture.clone(),
        users: fixture,
    };
    let app = actix_test::init_service(test_app_with(state)).await;

    let body = get_json(&app, "/api/articles", StatusCode::INTERNAL_SERVER_ERROR).await;
    assert_eq!(body, json!({ "message": "server error" }));
}

#[actix_web::test]
async fn unmatched_routes_are_an_invalid_path() {
    let app = actix_test::init_service(test_app()).await;
    let body = get_json(&app, "/api/banana", StatusCode::NOT_FOUND).await;
    assert_eq!(body, json!({ "message": "invalid path" }));
}
