use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use celebs_booking::OPERATOR_TOKEN_HEADER;
use celebs_booking::domain::types::Category;
use celebs_booking::models::config::ServerConfig;
use celebs_booking::notifier::{EnquiryNotifier, LogNotifier};
use celebs_booking::repository::{CelebrityWriter, DieselRepository};
use celebs_booking::routes;
use serde_json::{Value, json};

mod common;

use common::{TestDb, new_celebrity};

const TOKEN: &str = "back-office-secret";

fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".into(),
        port: 0,
        database_url: String::new(),
        assets_dir: "./assets".into(),
        operator_token: TOKEN.into(),
        smtp: None,
    }
}

fn seeded_repo(test_db: &TestDb) -> DieselRepository {
    let repo = DieselRepository::new(test_db.pool());
    let mut priya = new_celebrity("Priya Sharma", Category::Singers);
    priya.is_featured = true;
    repo.create_celebrity(&priya).unwrap();
    repo.create_celebrity(&new_celebrity("Rajesh Kumar", Category::Actors))
        .unwrap();
    repo
}

macro_rules! init_app {
    ($repo:expr) => {{
        let notifier: Arc<dyn EnquiryNotifier> = Arc::new(LogNotifier);
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo))
                .app_data(web::Data::new(server_config()))
                .app_data(web::Data::from(notifier))
                .configure(routes::configure),
        )
        .await
    }};
}

#[actix_web::test]
async fn listing_applies_filters_and_reports_empty_results() {
    let test_db = TestDb::new();
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/celebrities?category=Singers")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["empty"], json!(false));
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["name"], json!("Priya Sharma"));

    let req = test::TestRequest::get()
        .uri("/api/celebrities?search=nobody&category=all")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["empty"], json!(true));
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn unknown_category_filter_is_rejected() {
    let test_db = TestDb::new();
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/celebrities?category=Jugglers")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn like_and_unlike_never_go_below_zero() {
    let test_db = TestDb::new();
    let app = init_app!(seeded_repo(&test_db));

    let like = test::TestRequest::post()
        .uri("/api/celebrities/1/like")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, like).await;
    assert_eq!(body["likes"], json!(1));

    for _ in 0..2 {
        let unlike = test::TestRequest::post()
            .uri("/api/celebrities/1/unlike")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, unlike).await;
        assert_eq!(body["likes"], json!(0));
    }
}

#[actix_web::test]
async fn missing_profile_is_not_found() {
    let test_db = TestDb::new();
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/celebrities/slug/nobody")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/celebrities/42/view")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn categories_are_listed_in_fixed_order() {
    let test_db = TestDb::new();
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 8);
    assert_eq!(categories[0]["name"], json!("Singers"));
    assert_eq!(categories[0]["count"], json!(1));
    assert_eq!(categories[7]["slug"], json!("motivational-speakers"));
}

#[actix_web::test]
async fn invalid_enquiry_reports_every_field() {
    let test_db = TestDb::new();
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::post()
        .uri("/api/enquiries")
        .set_json(json!({
            "celebrityId": 1,
            "userName": "A",
            "email": "not-an-email",
            "contact": "12345",
            "purpose": "short",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Invalid enquiry data"));
    assert_eq!(body["details"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn enquiry_is_stored_and_visible_to_operator() {
    let test_db = TestDb::new();
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::post()
        .uri("/api/enquiries")
        .set_json(json!({
            "celebrityId": 2,
            "userName": "Anita Rao",
            "email": "anita@example.com",
            "contact": "+91 98765 43210",
            "purpose": "Corporate annual day appearance",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["celebrityName"], json!("Rajesh Kumar"));

    let req = test::TestRequest::get().uri("/api/enquiries").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/enquiries")
        .insert_header((OPERATOR_TOKEN_HEADER, TOKEN))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], json!(1));
    assert_eq!(body["items"][0]["userName"], json!("Anita Rao"));
}

#[actix_web::test]
async fn enquiry_page_past_the_end_is_empty() {
    let test_db = TestDb::new();
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri(&format!("/api/enquiries?page={}", usize::MAX))
        .insert_header((OPERATOR_TOKEN_HEADER, TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["total"], json!(0));
}
