//! Property tests for the round shaper: whatever is submitted comes back in
//! submission order, with the same teams, through a store that enumerates
//! keys in sorted order.

use proptest::prelude::*;
use serde_json::{Map, Value};

use crate::domain::round_shaper::{shape_round, unshape_round};
use crate::domain::{test_gens, test_prelude};
use crate::protocol::{CreateRoundRequest, NewTeam};

fn stored_form(doc: Map<String, Value>) -> Value {
    // serde_json's default map is a BTreeMap, so this also scrambles
    // `match10` ahead of `match2` like a lexicographic store would
    let sorted: std::collections::BTreeMap<String, Value> = doc.into_iter().collect();
    serde_json::to_value(sorted).unwrap()
}

fn slot_str(slot: &Option<Option<String>>) -> Option<String> {
    slot.clone().flatten()
}

fn team_ids(team: &NewTeam) -> (Option<String>, Option<String>) {
    (slot_str(&team.player1), slot_str(&team.player2))
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_round_trip_preserves_count_and_order(matches in test_gens::matches(1, 12)) {
        let request = CreateRoundRequest {
            matches: Some(serde_json::to_value(&matches).unwrap()),
            start_time: Some("2025-03-01T10:00:00".into()),
            end_time: None,
        };
        let doc = shape_round(&request).unwrap();
        let unshaped = unshape_round("r", &stored_form(doc));

        prop_assert_eq!(unshaped.dropped, 0);
        prop_assert_eq!(unshaped.round.matches.len(), matches.len());

        for (i, (sent, got)) in matches.iter().zip(&unshaped.round.matches).enumerate() {
            prop_assert_eq!(&got.id, &format!("match{}", i + 1));
            let (a, b) = team_ids(sent.team1.as_ref().unwrap());
            prop_assert_eq!(&got.team1.player1, &a);
            prop_assert_eq!(&got.team1.player2, &b);
            let (c, d) = team_ids(sent.team2.as_ref().unwrap());
            prop_assert_eq!(&got.team2.player1, &c);
            prop_assert_eq!(&got.team2.player2, &d);
            prop_assert_eq!(got.sides_fixed, sent.sides_fixed.unwrap_or(false));
        }
    }

    #[test]
    fn prop_shaped_round_has_one_key_per_match(matches in test_gens::matches(1, 12)) {
        let request = CreateRoundRequest {
            matches: Some(serde_json::to_value(&matches).unwrap()),
            ..CreateRoundRequest::default()
        };
        let doc = shape_round(&request).unwrap();
        // two time keys plus one per match
        prop_assert_eq!(doc.len(), matches.len() + 2);
    }

    #[test]
    fn prop_partial_teams_keep_their_filled_slots(
        team1 in test_gens::any_team(),
        team2 in test_gens::any_team(),
    ) {
        let request = CreateRoundRequest {
            matches: Some(serde_json::json!([{ "team1": team1, "team2": team2 }])),
            ..CreateRoundRequest::default()
        };
        let named = |team: &NewTeam| slot_str(&team.player1).or(slot_str(&team.player2)).is_some();
        let shaped = shape_round(&request);
        if !(named(&team1) && named(&team2)) {
            prop_assert!(shaped.is_err());
            return Ok(());
        }
        let doc = shaped.unwrap();
        let stored =
            |team: &str, slot: &str| doc["match1"][team][slot].as_str().map(str::to_string);
        prop_assert_eq!(stored("team1", "player1"), slot_str(&team1.player1));
        prop_assert_eq!(stored("team2", "player2"), slot_str(&team2.player2));
    }
}
