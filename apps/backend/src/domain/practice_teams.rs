//! Practice team sign-ups: four players booked for a private session.

use std::collections::HashSet;

use serde_json::{json, Value};

use super::models::PracticeTeam;
use super::non_empty_str;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::protocol::CreatePracticeTeamRequest;

pub const TEAM_SIZE: usize = 4;

/// Validate a sign-up and build its stored document.
///
/// Exactly four distinct, non-blank player ids are required.
pub fn shape_practice_team(request: &CreatePracticeTeamRequest) -> Result<Value, DomainError> {
    let players = request
        .players
        .as_deref()
        .ok_or_else(|| invalid("players must be provided"))?;

    if players.len() != TEAM_SIZE {
        return Err(invalid(format!(
            "a practice team needs exactly {TEAM_SIZE} players, got {}",
            players.len()
        )));
    }

    let mut seen = HashSet::with_capacity(TEAM_SIZE);
    let mut ids = Vec::with_capacity(TEAM_SIZE);
    for (index, raw) in players.iter().enumerate() {
        let id = raw.trim();
        if id.is_empty() {
            return Err(invalid(format!("player {} is not chosen", index + 1)));
        }
        if !seen.insert(id) {
            return Err(invalid(format!("player '{id}' is listed twice")));
        }
        ids.push(id.to_string());
    }

    Ok(json!({
        "startTime": request.start_time.as_deref().filter(|s| !s.is_empty()),
        "endTime": request.end_time.as_deref().filter(|s| !s.is_empty()),
        "players": ids,
    }))
}

fn invalid(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::InvalidPracticeTeam, detail)
}

/// Rebuild one practice team. `players` may come back as an object keyed
/// by index when the store saw a sparse array; non-string ids are skipped.
pub fn unshape_practice_team(id: &str, raw: &Value) -> PracticeTeam {
    let players = match raw.get("players") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        Some(Value::Object(by_index)) => {
            let mut indexed: Vec<(u64, &str)> = by_index
                .iter()
                .filter_map(|(k, v)| Some((k.parse::<u64>().ok()?, v.as_str()?)))
                .collect();
            indexed.sort_by_key(|(i, _)| *i);
            indexed.into_iter().map(|(_, v)| v.to_string()).collect()
        }
        _ => Vec::new(),
    };

    PracticeTeam {
        id: id.to_string(),
        start_time: non_empty_str(raw.get("startTime")),
        end_time: non_empty_str(raw.get("endTime")),
        players,
    }
}

pub fn unshape_practice_teams(raw: Option<&Value>) -> Vec<PracticeTeam> {
    raw.and_then(Value::as_object)
        .map(|teams| {
            teams
                .iter()
                .filter(|(_, v)| v.is_object())
                .map(|(id, v)| unshape_practice_team(id, v))
                .collect()
        })
        .unwrap_or_default()
}
