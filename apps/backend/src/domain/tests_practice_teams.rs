use serde_json::json;

use crate::domain::practice_teams::{
    shape_practice_team, unshape_practice_team, unshape_practice_teams,
};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::protocol::CreatePracticeTeamRequest;

fn request(players: &[&str]) -> CreatePracticeTeamRequest {
    CreatePracticeTeamRequest {
        start_time: Some("2025-04-02T18:00:00".into()),
        end_time: Some("2025-04-02T19:30:00".into()),
        players: Some(players.iter().map(|p| p.to_string()).collect()),
    }
}

fn assert_invalid(req: &CreatePracticeTeamRequest) {
    match shape_practice_team(req) {
        Err(DomainError::Validation(ValidationKind::InvalidPracticeTeam, _)) => {}
        other => panic!("expected InvalidPracticeTeam, got {other:?}"),
    }
}

#[test]
fn shapes_four_distinct_players() {
    let doc = shape_practice_team(&request(&["p1", " p2 ", "p3", "p4"])).unwrap();
    assert_eq!(
        doc,
        json!({
            "startTime": "2025-04-02T18:00:00",
            "endTime": "2025-04-02T19:30:00",
            "players": ["p1", "p2", "p3", "p4"]
        })
    );
}

#[test]
fn rejects_wrong_player_count() {
    assert_invalid(&request(&["p1", "p2", "p3"]));
    assert_invalid(&request(&["p1", "p2", "p3", "p4", "p5"]));
    assert_invalid(&CreatePracticeTeamRequest::default());
}

#[test]
fn rejects_blank_and_duplicate_players() {
    assert_invalid(&request(&["p1", "", "p3", "p4"]));
    assert_invalid(&request(&["p1", "p2", "p1", "p4"]));
    assert_invalid(&request(&["p1", "p2 ", " p2", "p4"]));
}

#[test]
fn unshape_reads_object_players_by_index() {
    let team = unshape_practice_team(
        "t1",
        &json!({"startTime": "s", "players": {"1": "b", "0": "a", "3": "d", "2": "c"}}),
    );
    assert_eq!(team.players, ["a", "b", "c", "d"]);
    assert_eq!(team.start_time.as_deref(), Some("s"));
    assert_eq!(team.end_time, None);
}

#[test]
fn unshape_practice_teams_skips_non_objects() {
    let teams = unshape_practice_teams(Some(&json!({
        "t1": {"players": ["a", "b", "c", "d"]},
        "t2": 7
    })));
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, "t1");
    assert!(unshape_practice_teams(None).is_empty());
}
