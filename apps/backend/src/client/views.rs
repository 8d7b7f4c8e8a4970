//! Presentation rules from the club screens, kept out of the HTTP client so
//! they can be tested without a server.

use std::collections::HashSet;

use time::macros::format_description;
use time::Date;
use unicode_normalization::UnicodeNormalization;

use super::ClientError;
use crate::domain::practice_teams::TEAM_SIZE;
use crate::domain::{Player, PracticeTeam, Round};
use crate::protocol::CreatePracticeTeamRequest;

pub const UNKNOWN_PLAYER: &str = "Unknown player";

/// Comparison form of a name: NFC, trimmed, lowercased.
pub fn name_key(name: &str) -> String {
    name.trim().nfc().collect::<String>().to_lowercase()
}

/// Alphabetical by name, ignoring case and Unicode composition.
pub fn sort_players_by_name(players: &mut [Player]) {
    players.sort_by_cached_key(|p| (name_key(&p.name), p.id.clone()));
}

pub fn find_by_name<'a>(players: &'a [Player], name: &str) -> Option<&'a Player> {
    let wanted = name_key(name);
    players.iter().find(|p| name_key(&p.name) == wanted)
}

/// Whether some player already carries `name`.
pub fn name_taken(players: &[Player], name: &str) -> bool {
    find_by_name(players, name).is_some()
}

/// Display name for `id`, or [`UNKNOWN_PLAYER`] when the player is gone.
pub fn player_name<'a>(players: &'a [Player], id: Option<&str>) -> &'a str {
    id.and_then(|id| players.iter().find(|p| p.id == id))
        .map_or(UNKNOWN_PLAYER, |p| p.name.as_str())
}

/// Calendar day of an ISO-like timestamp (`2025-04-02T18:00:00.000`).
pub fn day_of(timestamp: &str) -> Option<Date> {
    let prefix = timestamp.get(..10)?;
    Date::parse(prefix, format_description!("[year]-[month]-[day]")).ok()
}

/// Rounds starting `today` or later, earliest first. Rounds without a
/// readable start time are left out.
pub fn upcoming_rounds(rounds: Vec<Round>, today: Date) -> Vec<Round> {
    let mut upcoming: Vec<Round> = rounds
        .into_iter()
        .filter(|r| {
            r.start_time
                .as_deref()
                .and_then(day_of)
                .is_some_and(|day| day >= today)
        })
        .collect();
    upcoming.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    upcoming
}

/// Practice teams of one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    /// `None` collects teams without a readable start time.
    pub day: Option<Date>,
    pub teams: Vec<PracticeTeam>,
}

/// Sort by start time and group by calendar day. Unscheduled teams come
/// last.
pub fn group_practice_teams_by_day(mut teams: Vec<PracticeTeam>) -> Vec<DayGroup> {
    teams.sort_by_cached_key(|t| {
        let unscheduled = t.start_time.as_deref().and_then(day_of).is_none();
        (unscheduled, t.start_time.clone())
    });

    let mut groups: Vec<DayGroup> = Vec::new();
    for team in teams {
        let day = team.start_time.as_deref().and_then(day_of);
        match groups.last_mut() {
            Some(group) if group.day == day => group.teams.push(team),
            _ => groups.push(DayGroup {
                day,
                teams: vec![team],
            }),
        }
    }
    groups
}

/// Practice team being put together: four player slots filled one by one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PracticeTeamDraft {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    slots: [Option<String>; TEAM_SIZE],
}

impl PracticeTeamDraft {
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: Some(start_time.into()),
            end_time: Some(end_time.into()),
            slots: Default::default(),
        }
    }

    /// Put `player_id` into slot `index` (0-based). Out-of-range indexes are
    /// ignored.
    pub fn choose(&mut self, index: usize, player_id: impl Into<String>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(player_id.into()).filter(|id: &String| !id.trim().is_empty());
        }
    }

    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Request body for the draft. Fails unless all four slots hold
    /// different players.
    pub fn into_new(self) -> Result<CreatePracticeTeamRequest, ClientError> {
        let mut players = Vec::with_capacity(TEAM_SIZE);
        let mut seen = HashSet::new();
        for (index, slot) in self.slots.into_iter().enumerate() {
            let id = slot.ok_or_else(|| {
                ClientError::Incomplete(format!("player {} is not chosen", index + 1))
            })?;
            if !seen.insert(id.clone()) {
                return Err(ClientError::Incomplete(format!("player '{id}' is chosen twice")));
            }
            players.push(id);
        }
        Ok(CreatePracticeTeamRequest {
            start_time: self.start_time,
            end_time: self.end_time,
            players: Some(players),
        })
    }
}
