use padel_backend::errors::ErrorCode;
use padel_backend::protocol::CreatePlayerRequest;
use padel_backend::services::players::PlayerService;
use padel_backend::store::MemoryStore;
use serde_json::json;

use crate::support::failing_store::FailingStore;

fn request(name: &str) -> CreatePlayerRequest {
    CreatePlayerRequest {
        name: Some(name.to_string()),
    }
}

#[tokio::test]
async fn add_list_delete_round_trip() {
    let store = MemoryStore::new();
    let service = PlayerService::new();

    let anne = service.add_player(&store, &request("Anne")).await.unwrap();
    let bo = service.add_player(&store, &request(" Bo ")).await.unwrap();
    assert_ne!(anne, bo);

    let mut names: Vec<String> = service
        .list_players(&store)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    names.sort();
    assert_eq!(names, ["Anne", "Bo"]);

    service.delete_player(&store, &anne).await.unwrap();
    let players = service.list_players(&store).await.unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].id, bo);
}

#[tokio::test]
async fn same_name_twice_creates_two_players() {
    // The server does not enforce unique names
    let store = MemoryStore::new();
    let service = PlayerService::new();
    service.add_player(&store, &request("Mads")).await.unwrap();
    service.add_player(&store, &request("Mads")).await.unwrap();
    assert_eq!(service.list_players(&store).await.unwrap().len(), 2);
}

#[tokio::test]
async fn blank_name_writes_nothing() {
    let store = MemoryStore::new();
    let err = PlayerService::new()
        .add_player(&store, &CreatePlayerRequest { name: None })
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidPlayer);
    assert_eq!(store.snapshot(), json!(null));
}

#[tokio::test]
async fn store_failure_hides_the_cause() {
    let err = PlayerService::new()
        .list_players(&FailingStore::Denied)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::StoreError);
    assert_eq!(err.detail(), "Failed to fetch players");
}
