//! HTTP client for the club API, used by tools and the integration tests.
//!
//! Mirrors what the web screens do: same endpoints, same default 5 s
//! timeout. Error responses are decoded from their problem-details body
//! into [`ClientError::Api`].

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::{Player, PracticeTeam, Round};
use crate::protocol::{
    CreatePlayerRequest, CreatePracticeTeamRequest, CreateRoundRequest, MessageResponse, NewMatch,
    NewTeam, PlayerCreated, PracticeTeamCreated, RoundCreated, UpdateMatchTeamsRequest,
};

pub mod views;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx answer from the API.
    #[error("API error {status} {code}: {detail}")]
    Api {
        status: u16,
        code: String,
        detail: String,
    },

    /// A draft was turned into a request before it was complete.
    #[error("incomplete input: {0}")]
    Incomplete(String),
}

impl ClientError {
    /// `code` of an API error, `None` for every other variant.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Error body as the API renders it. Older deployments answered with a
/// bare `{message}`, so both are accepted.
#[derive(Deserialize)]
struct ErrorBody {
    code: Option<String>,
    detail: Option<String>,
    message: Option<String>,
}

/// What [`ApiClient::add_player_unique`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddPlayerOutcome {
    Added { player_id: String },
    /// Nothing was sent: the name was empty after trimming.
    Blank,
    /// Nothing was sent: a player with this name already exists.
    Duplicate { existing_id: String },
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// `base_url` is the API root, e.g. `http://localhost:3001/api`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(format!(
                "{base_url} cannot be a base"
            )));
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// Base URL plus `segments`, each percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.http.request(method, self.endpoint(segments))
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let response = builder.send().await?;
        debug!(
            status = response.status().as_u16(),
            url = %response.url().path(),
            "client.response"
        );
        decode(response).await
    }

    pub async fn get_players(&self) -> Result<Vec<Player>, ClientError> {
        self.send(self.request(Method::GET, &["players"])).await
    }

    pub async fn add_player(&self, name: &str) -> Result<PlayerCreated, ClientError> {
        let body = CreatePlayerRequest {
            name: Some(name.to_string()),
        };
        self.send(self.request(Method::POST, &["players"]).json(&body))
            .await
    }

    /// Add `name` unless it is blank or already taken (see
    /// [`views::name_taken`]). The check races with other clients, so
    /// duplicates are still possible; the server does not enforce it.
    pub async fn add_player_unique(&self, name: &str) -> Result<AddPlayerOutcome, ClientError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(AddPlayerOutcome::Blank);
        }

        let players = self.get_players().await?;
        if let Some(existing) = views::find_by_name(&players, name) {
            return Ok(AddPlayerOutcome::Duplicate {
                existing_id: existing.id.clone(),
            });
        }

        let created = self.add_player(name).await?;
        Ok(AddPlayerOutcome::Added {
            player_id: created.player_id,
        })
    }

    pub async fn delete_player(&self, id: &str) -> Result<MessageResponse, ClientError> {
        self.send(self.request(Method::DELETE, &["players", id]))
            .await
    }

    pub async fn get_rounds(&self) -> Result<Vec<Round>, ClientError> {
        self.send(self.request(Method::GET, &["rounds"])).await
    }

    pub async fn create_round(
        &self,
        matches: &[NewMatch],
        start_time: Option<&str>,
        end_time: Option<&str>,
    ) -> Result<RoundCreated, ClientError> {
        let matches = serde_json::to_value(matches)
            .map_err(|e| ClientError::Incomplete(format!("matches: {e}")))?;
        let body = CreateRoundRequest {
            matches: Some(matches),
            start_time: start_time.map(str::to_string),
            end_time: end_time.map(str::to_string),
        };
        self.send(self.request(Method::POST, &["rounds"]).json(&body))
            .await
    }

    pub async fn update_match_teams(
        &self,
        round_id: &str,
        match_id: &str,
        team1: NewTeam,
        team2: NewTeam,
    ) -> Result<MessageResponse, ClientError> {
        let body = UpdateMatchTeamsRequest {
            team1: Some(team1),
            team2: Some(team2),
        };
        self.send(
            self.request(Method::PATCH, &["rounds", round_id, match_id])
                .json(&body),
        )
        .await
    }

    pub async fn get_practice_teams(&self) -> Result<Vec<PracticeTeam>, ClientError> {
        self.send(self.request(Method::GET, &["practiceTeams"]))
            .await
    }

    pub async fn create_practice_team(
        &self,
        team: &CreatePracticeTeamRequest,
    ) -> Result<PracticeTeamCreated, ClientError> {
        self.send(self.request(Method::POST, &["practiceTeams"]).json(team))
            .await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let (code, detail) = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => (
            body.code.unwrap_or_else(|| "UNKNOWN".to_string()),
            body.detail.or(body.message).unwrap_or_default(),
        ),
        Err(_) => ("UNKNOWN".to_string(), text),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        code,
        detail,
    })
}
