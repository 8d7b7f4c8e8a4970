// Proptest generators for submitted rounds.

use proptest::prelude::*;

use crate::protocol::{NewMatch, NewTeam};

/// Player id shaped like a store key.
pub fn player_id() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,20}"
}

/// Slot value: present id, explicit null, or absent.
pub fn slot() -> impl Strategy<Value = Option<Option<String>>> {
    prop_oneof![
        6 => player_id().prop_map(|id| Some(Some(id))),
        1 => Just(Some(None)),
        1 => Just(None),
    ]
}

/// Team with both slots filled.
pub fn full_team() -> impl Strategy<Value = NewTeam> {
    (player_id(), player_id()).prop_map(|(a, b)| NewTeam::new(a, b))
}

pub fn any_team() -> impl Strategy<Value = NewTeam> {
    (slot(), slot()).prop_map(|(player1, player2)| NewTeam { player1, player2 })
}

pub fn full_match() -> impl Strategy<Value = NewMatch> {
    (full_team(), full_team(), any::<bool>())
        .prop_map(|(t1, t2, sides_fixed)| NewMatch::new(t1, t2, sides_fixed))
}

/// Between `min` and `max` fully populated matches.
pub fn matches(min: usize, max: usize) -> impl Strategy<Value = Vec<NewMatch>> {
    prop::collection::vec(full_match(), min..=max)
}
