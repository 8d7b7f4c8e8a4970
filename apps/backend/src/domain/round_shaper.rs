//! Conversion between submitted rounds and their stored form.
//!
//! A round is stored as one flat document:
//!
//! ```text
//! /rounds/{roundId}
//!     startTime: "2025-01-01T10:00:00"
//!     endTime:   "2025-01-01T11:00:00"
//!     match1:    { team1: {player1, player2}, team2: {...}, sidesFixed, order: 0 }
//!     match2:    { ..., order: 1 }
//! ```
//!
//! Matches are siblings of the two time keys, so on read every other key is
//! a match candidate. Key enumeration order is not a reliable order (a
//! sorted map yields `match10` before `match2`), so each match also carries
//! its submitted position in `order`.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::models::{Match, Round, Team};
use super::non_empty_str;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::protocol::{CreateRoundRequest, NewMatch, NewTeam, UpdateMatchTeamsRequest};

pub const START_TIME: &str = "startTime";
pub const END_TIME: &str = "endTime";
pub const ORDER: &str = "order";
const MATCH_PREFIX: &str = "match";

/// Round read back from the store plus how many malformed match entries
/// were left out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct UnshapedRound {
    pub round: Round,
    pub dropped: usize,
}

/// Build the document stored for a new round.
///
/// Rejects a missing, non-list or empty `matches`, and any entry that is not
/// a match object with two teams that each name at least one player.
pub fn shape_round(request: &CreateRoundRequest) -> Result<Map<String, Value>, DomainError> {
    let matches = match &request.matches {
        None | Some(Value::Null) => {
            return Err(invalid_matches("Invalid input data. Ensure matches are provided."))
        }
        Some(Value::Array(items)) if items.is_empty() => {
            return Err(invalid_matches("matches must contain at least one match"))
        }
        Some(Value::Array(items)) => items,
        Some(_) => return Err(invalid_matches("matches must be a list")),
    };

    let mut doc = Map::new();
    doc.insert(START_TIME.to_string(), time_value(request.start_time.as_deref()));
    doc.insert(END_TIME.to_string(), time_value(request.end_time.as_deref()));

    for (index, raw) in matches.iter().enumerate() {
        let number = index + 1;
        let submitted = NewMatch::deserialize(raw)
            .map_err(|e| invalid_matches(format!("match {number} is malformed: {e}")))?;

        let (Some(team1), Some(team2)) = (&submitted.team1, &submitted.team2) else {
            return Err(invalid_matches(format!(
                "match {number} needs both team1 and team2"
            )));
        };
        for (name, team) in [("team1", team1), ("team2", team2)] {
            if !has_player(team) {
                return Err(invalid_matches(format!(
                    "match {number} {name} has no players"
                )));
            }
        }

        let mut stored = Map::new();
        stored.insert("team1".to_string(), team_value(team1));
        stored.insert("team2".to_string(), team_value(team2));
        stored.insert(
            "sidesFixed".to_string(),
            Value::Bool(submitted.sides_fixed.unwrap_or(false)),
        );
        stored.insert(ORDER.to_string(), Value::from(index));

        doc.insert(match_key(number), Value::Object(stored));
    }

    Ok(doc)
}

/// `match1`, `match2`, ... for 1-based positions.
pub fn match_key(number: usize) -> String {
    format!("{MATCH_PREFIX}{number}")
}

/// Partial update for `/rounds/{round_id}/{match_id}`: just `team1` and
/// `team2`, so `sidesFixed` and `order` keep their stored values.
pub fn shape_match_teams(
    round_id: &str,
    match_id: &str,
    request: &UpdateMatchTeamsRequest,
) -> Result<Map<String, Value>, DomainError> {
    if round_id.trim().is_empty() || match_id.trim().is_empty() {
        return Err(DomainError::validation(
            ValidationKind::MissingParameters,
            "Missing required parameters or body data",
        ));
    }
    let (Some(team1), Some(team2)) = (&request.team1, &request.team2) else {
        return Err(DomainError::validation(
            ValidationKind::MissingTeams,
            "Both team1 and team2 are required",
        ));
    };
    if !has_player(team1) || !has_player(team2) {
        return Err(DomainError::validation(
            ValidationKind::MissingTeams,
            "Each team needs at least one player",
        ));
    }

    let mut teams = Map::new();
    teams.insert("team1".to_string(), team_value(team1));
    teams.insert("team2".to_string(), team_value(team2));
    Ok(teams)
}

/// True when at least one slot holds a non-blank player id.
///
/// A team without one would be stored as an empty object, which the store
/// drops, taking the match with it on the next read.
fn has_player(team: &NewTeam) -> bool {
    [&team.player1, &team.player2]
        .into_iter()
        .any(|slot| matches!(slot, Some(Some(id)) if !id.trim().is_empty()))
}

/// Stored form of a team. Absent slots are left out entirely; explicit
/// nulls are kept.
pub fn team_value(team: &NewTeam) -> Value {
    let mut stored = Map::new();
    for (slot, value) in [("player1", &team.player1), ("player2", &team.player2)] {
        match value {
            None => {}
            Some(None) => {
                stored.insert(slot.to_string(), Value::Null);
            }
            Some(Some(id)) => {
                stored.insert(slot.to_string(), Value::String(id.clone()));
            }
        }
    }
    Value::Object(stored)
}

fn time_value(raw: Option<&str>) -> Value {
    raw.filter(|s| !s.is_empty())
        .map_or(Value::Null, |s| Value::String(s.to_string()))
}

fn invalid_matches(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::InvalidMatches, detail)
}

/// Rebuild a round from its stored document.
///
/// Candidates without object-valued `team1` and `team2` are skipped and
/// counted in `dropped`. A stored value that is not an object at all gives
/// a round without times or matches.
pub fn unshape_round(id: &str, raw: &Value) -> UnshapedRound {
    let Some(doc) = raw.as_object() else {
        return UnshapedRound {
            round: Round {
                id: id.to_string(),
                start_time: None,
                end_time: None,
                matches: Vec::new(),
            },
            dropped: 0,
        };
    };

    let mut candidates: Vec<(&String, &Value)> = doc
        .iter()
        .filter(|(key, _)| key.as_str() != START_TIME && key.as_str() != END_TIME)
        .collect();
    let total = candidates.len();
    candidates.sort_by_cached_key(|(key, value)| sort_key(key, value));

    let matches: Vec<Match> = candidates
        .into_iter()
        .filter_map(|(key, value)| unshape_match(key, value))
        .collect();

    UnshapedRound {
        dropped: total - matches.len(),
        round: Round {
            id: id.to_string(),
            start_time: non_empty_str(doc.get(START_TIME)),
            end_time: non_empty_str(doc.get(END_TIME)),
            matches,
        },
    }
}

/// Rebuild every round under `/rounds`; `None` (nothing stored) gives an
/// empty list.
pub fn unshape_rounds(raw: Option<&Value>) -> Vec<UnshapedRound> {
    raw.and_then(Value::as_object)
        .map(|rounds| {
            rounds
                .iter()
                .map(|(id, value)| unshape_round(id, value))
                .collect()
        })
        .unwrap_or_default()
}

/// Explicit `order` first, then the number in `matchN`, then the raw key.
fn sort_key(key: &str, value: &Value) -> (u64, u64, String) {
    let order = value.get(ORDER).and_then(Value::as_u64).unwrap_or(u64::MAX);
    let number = key
        .strip_prefix(MATCH_PREFIX)
        .and_then(|n| n.parse::<u64>().ok())
        .unwrap_or(u64::MAX);
    (order, number, key.to_string())
}

fn unshape_match(key: &str, value: &Value) -> Option<Match> {
    let stored = value.as_object()?;
    let team1 = unshape_team(stored.get("team1")?)?;
    let team2 = unshape_team(stored.get("team2")?)?;
    Some(Match {
        id: key.to_string(),
        team1,
        team2,
        sides_fixed: stored
            .get("sidesFixed")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}

fn unshape_team(value: &Value) -> Option<Team> {
    let stored = value.as_object()?;
    Some(Team {
        player1: non_empty_str(stored.get("player1")),
        player2: non_empty_str(stored.get("player2")),
    })
}
