#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert `status` and return the JSON body.
pub async fn json_ok(resp: ServiceResponse<BoxBody>, expected: StatusCode) -> Value {
    assert_eq!(resp.status(), expected, "unexpected HTTP status");
    test::read_body_json(resp).await
}

/// Two fully populated matches in the shape the web client posts.
pub fn two_matches() -> Value {
    serde_json::json!([
        {
            "team1": {"player1": "p1", "player2": "p2"},
            "team2": {"player1": "p3", "player2": "p4"},
            "sidesFixed": true
        },
        {
            "team1": {"player1": "p5", "player2": "p6"},
            "team2": {"player1": "p7", "player2": "p8"}
        }
    ])
}
