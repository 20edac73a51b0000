use serde::{Serialize, Deserialize};

/// Team registered in the tournament
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Player with a running goal tally.
///
/// `team` is free text and is not checked against the teams collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "posicao")]
    pub position: String,
    #[serde(rename = "time")]
    pub team: String,
    #[serde(rename = "gols")]
    pub goals: u32,
}

/// One entry of a match goal log
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Goal {
    #[serde(rename = "jogador")]
    pub player_name: String,
    #[serde(rename = "time")]
    pub team_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Match {
    pub id: i64,
    #[serde(rename = "time_1")]
    pub team_1: String,
    #[serde(rename = "time_2")]
    pub team_2: String,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "resultado")]
    pub result: Option<String>,
    #[serde(rename = "gols")]
    pub goals: Vec<Goal>,
}

// Request bodies

#[derive(Debug, Deserialize)]
pub struct NewTeam {
    #[serde(rename = "nome")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct NewPlayer {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "posicao")]
    pub position: String,
    #[serde(rename = "time")]
    pub team: String,
    #[serde(rename = "gols", default)]
    pub goals: u32,
}

#[derive(Debug, Deserialize)]
pub struct NewMatch {
    #[serde(rename = "time_1")]
    pub team_1: String,
    #[serde(rename = "time_2")]
    pub team_2: String,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "resultado", default)]
    pub result: Option<String>,
}

/// Full replacement of a match's mutable fields; every field is required.
#[derive(Debug, Deserialize)]
pub struct MatchUpdate {
    #[serde(rename = "time_1")]
    pub team_1: String,
    #[serde(rename = "time_2")]
    pub team_2: String,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "resultado")]
    pub result: String,
}

/// Goal registration input. Unsigned, so negative counts never reach the store.
#[derive(Debug, Deserialize)]
pub struct GoalsInput {
    #[serde(rename = "jogador_id")]
    pub player_id: i64,
    #[serde(rename = "quantidade_gols")]
    pub quantity: u32,
}

// Response envelopes

#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    #[serde(rename = "mensagem")]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<Team>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchesResponse {
    pub matches: Vec<Match>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayersResponse {
    #[serde(rename = "jogadores")]
    pub players: Vec<Player>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamDeleted {
    #[serde(rename = "mensagem")]
    pub message: String,
    #[serde(rename = "time")]
    pub team: Team,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchDeleted {
    #[serde(rename = "mensagem")]
    pub message: String,
    #[serde(rename = "partida")]
    pub game: Match,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerDeleted {
    #[serde(rename = "mensagem")]
    pub message: String,
    #[serde(rename = "jogador")]
    pub player: Player,
}

/// Result of a goal registration: confirmation plus both updated records
#[derive(Debug, Serialize, Deserialize)]
pub struct GoalsRegistered {
    #[serde(rename = "mensagem")]
    pub message: String,
    #[serde(rename = "partida")]
    pub game: Match,
    #[serde(rename = "jogador")]
    pub player: Player,
}
