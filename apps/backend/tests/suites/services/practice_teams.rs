use padel_backend::errors::ErrorCode;
use padel_backend::protocol::CreatePracticeTeamRequest;
use padel_backend::services::practice_teams::PracticeTeamService;
use padel_backend::store::MemoryStore;
use serde_json::json;

use crate::support::failing_store::FailingStore;

fn request(players: &[&str]) -> CreatePracticeTeamRequest {
    CreatePracticeTeamRequest {
        start_time: Some("2025-04-02T18:00:00.000".into()),
        end_time: Some(String::new()),
        players: Some(players.iter().map(|p| p.to_string()).collect()),
    }
}

#[tokio::test]
async fn add_and_list() {
    let store = MemoryStore::new();
    let service = PracticeTeamService::new();
    let id = service
        .add_practice_team(&store, &request(&["a", "b", "c", "d"]))
        .await
        .unwrap();

    let teams = service.list_practice_teams(&store).await.unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, id);
    assert_eq!(teams[0].players, ["a", "b", "c", "d"]);
    // empty end time is not stored
    assert_eq!(teams[0].end_time, None);
    assert_eq!(
        store.snapshot()["practiceTeams"][&id],
        json!({"startTime": "2025-04-02T18:00:00.000", "players": ["a", "b", "c", "d"]})
    );
}

#[tokio::test]
async fn invalid_team_writes_nothing() {
    let store = MemoryStore::new();
    let err = PracticeTeamService::new()
        .add_practice_team(&store, &request(&["a", "b", "c", "c"]))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidPracticeTeam);
    assert_eq!(store.snapshot(), json!(null));
}

#[tokio::test]
async fn unreachable_store_on_add() {
    let err = PracticeTeamService::new()
        .add_practice_team(&FailingStore::Unreachable, &request(&["a", "b", "c", "d"]))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::StoreUnavailable);
    assert_eq!(err.detail(), "Failed to add practice team");
}
