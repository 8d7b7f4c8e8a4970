use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use serde_json::{json, Value};

use crate::common::json_ok;
use crate::support::app_builder::create_test_app;
use crate::support::state_with_data;

#[actix_web::test]
async fn test_add_and_list_practice_team() {
    let (state, _) = state_with_data(Value::Null).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/practiceTeams")
        .set_json(json!({
            "startTime": "2025-04-02T18:00:00.000",
            "endTime": "2025-04-02T19:30:00.000",
            "players": ["p1", "p2", "p3", "p4"]
        }))
        .to_request();
    let body = json_ok(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["message"], "Practice team added");
    let id = body["practiceTeamId"].as_str().unwrap().to_string();

    let req = test::TestRequest::get().uri("/api/practiceTeams").to_request();
    let teams = json_ok(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(
        teams,
        json!([{
            "id": id,
            "startTime": "2025-04-02T18:00:00.000",
            "endTime": "2025-04-02T19:30:00.000",
            "players": ["p1", "p2", "p3", "p4"]
        }])
    );
}

#[actix_web::test]
async fn test_practice_team_needs_four_distinct_players() {
    let (state, store) = state_with_data(Value::Null).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    for players in [
        json!(["p1", "p2", "p3"]),
        json!(["p1", "p2", "p2", "p4"]),
        json!(["p1", "", "p3", "p4"]),
        Value::Null,
    ] {
        let req = test::TestRequest::post()
            .uri("/api/practiceTeams")
            .set_json(json!({"startTime": "s", "endTime": "e", "players": players}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(resp, StatusCode::BAD_REQUEST, "INVALID_PRACTICE_TEAM", None)
            .await;
    }

    assert_eq!(store.snapshot(), Value::Null);
}

#[actix_web::test]
async fn test_list_tolerates_odd_stored_teams() {
    let (state, _) = state_with_data(json!({
        "practiceTeams": {
            "t1": {"startTime": "s", "players": ["a", 5, "c"]},
            "t2": {"endTime": "e"}
        }
    }))
    .await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/practiceTeams").to_request();
    let teams = json_ok(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(
        teams,
        json!([
            {"id": "t1", "startTime": "s", "endTime": null, "players": ["a", "c"]},
            {"id": "t2", "startTime": null, "endTime": "e", "players": []}
        ])
    );
}
