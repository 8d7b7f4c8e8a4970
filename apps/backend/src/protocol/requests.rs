use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::rust::double_option;

/// One side of a submitted match.
///
/// Each slot distinguishes three states:
/// - `None`: field absent, nothing is written for it
/// - `Some(None)`: explicit `null`, stored as null
/// - `Some(Some(id))`: player id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTeam {
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub player1: Option<Option<String>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub player2: Option<Option<String>>,
}

impl NewTeam {
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            player1: Some(Some(player1.into())),
            player2: Some(Some(player2.into())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team1: Option<NewTeam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team2: Option<NewTeam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sides_fixed: Option<bool>,
}

impl NewMatch {
    pub fn new(team1: NewTeam, team2: NewTeam, sides_fixed: bool) -> Self {
        Self {
            team1: Some(team1),
            team2: Some(team2),
            sides_fixed: Some(sides_fixed),
        }
    }
}

/// POST /rounds
///
/// `matches` stays untyped here: "missing", "not a list" and "malformed
/// entry" are all validation outcomes of the round shaper rather than JSON
/// parse failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoundRequest {
    #[serde(default)]
    pub matches: Option<Value>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// PATCH /rounds/{roundId}/{matchId}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMatchTeamsRequest {
    #[serde(default)]
    pub team1: Option<NewTeam>,
    #[serde(default)]
    pub team2: Option<NewTeam>,
}

/// POST /players. Any `id` in the body is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlayerRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// POST /practiceTeams
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePracticeTeamRequest {
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub players: Option<Vec<String>>,
}
