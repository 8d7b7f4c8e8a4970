//! Request and response bodies shared by the HTTP handlers and `client`.

pub mod requests;
pub mod responses;

pub use requests::{
    CreatePlayerRequest, CreatePracticeTeamRequest, CreateRoundRequest, NewMatch, NewTeam,
    UpdateMatchTeamsRequest,
};
pub use responses::{MessageResponse, PlayerCreated, PracticeTeamCreated, RoundCreated};
