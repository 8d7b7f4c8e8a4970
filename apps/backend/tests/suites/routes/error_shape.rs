use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;

use crate::support::app_builder::create_test_app;
use crate::support::build_test_state;

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = create_test_app(build_test_state().await)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/rounds")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"matches": [ "#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem_details(
        resp,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
        Some("Invalid JSON"),
    )
    .await;
    assert_eq!(problem.title, "Bad Request");
    assert_eq!(problem.type_, "https://padel.club/errors/BAD_REQUEST");
}

#[actix_web::test]
async fn test_wrong_field_types_are_bad_request() {
    let app = create_test_app(build_test_state().await)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/practiceTeams")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"players": "p1,p2,p3,p4"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST", Some("wrong types")).await;
}

#[actix_web::test]
async fn test_validation_error_shape() {
    let app = create_test_app(build_test_state().await)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/rounds")
        .set_json(serde_json::json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem =
        assert_problem_details(resp, StatusCode::BAD_REQUEST, "INVALID_MATCHES", None).await;
    assert_eq!(problem.title, "Invalid Matches");
    assert_eq!(problem.status, 400);
}

#[actix_web::test]
async fn test_unknown_route_is_plain_404() {
    let app = create_test_app(build_test_state().await)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/api/courts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_oversized_body_is_payload_too_large() {
    let (state, store) = crate::support::state_with_data(serde_json::Value::Null).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let name = "x".repeat(40 * 1024);
    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(serde_json::json!({ "name": name }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem_details(
        resp,
        StatusCode::PAYLOAD_TOO_LARGE,
        "PAYLOAD_TOO_LARGE",
        Some("exceeds"),
    )
    .await;
    assert_eq!(problem.status, 413);
    assert_eq!(store.snapshot(), serde_json::Value::Null);
}
