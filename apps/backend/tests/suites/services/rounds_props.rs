//! Property test: whatever number of complete matches is posted comes back
//! in the same order after a trip through the store.

use padel_backend::protocol::{CreateRoundRequest, NewMatch, NewTeam};
use padel_backend::services::rounds::RoundService;
use padel_backend::store::MemoryStore;
use proptest::prelude::*;

fn new_match() -> impl Strategy<Value = NewMatch> {
    let id = "[a-z][a-z0-9]{0,7}";
    (id, id, id, id, any::<bool>()).prop_map(|(a, b, c, d, sides_fixed)| {
        NewMatch::new(NewTeam::new(a, b), NewTeam::new(c, d), sides_fixed)
    })
}

fn run<F: std::future::Future>(f: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(f)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_posted_matches_round_trip(matches in prop::collection::vec(new_match(), 1..=12)) {
        let store = MemoryStore::new();
        let service = RoundService::new();
        let request = CreateRoundRequest {
            matches: Some(serde_json::to_value(&matches).unwrap()),
            start_time: Some("2025-03-01T10:00:00.000".into()),
            end_time: None,
        };

        let rounds = run(async {
            service.create_round(&store, &request).await.unwrap();
            service.list_rounds(&store).await.unwrap()
        });

        prop_assert_eq!(rounds.len(), 1);
        let got = &rounds[0].matches;
        prop_assert_eq!(got.len(), matches.len());
        for (sent, back) in matches.iter().zip(got) {
            let team1 = sent.team1.as_ref().unwrap();
            prop_assert_eq!(back.team1.player1.clone(), team1.player1.clone().flatten());
            prop_assert_eq!(back.team1.player2.clone(), team1.player2.clone().flatten());
            prop_assert_eq!(back.sides_fixed, sent.sides_fixed.unwrap_or(false));
        }
    }
}
