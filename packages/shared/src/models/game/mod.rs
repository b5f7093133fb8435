pub mod requests;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle marker for a game record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    WaitingForPlayer,
    InProgress,
    Finished,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::WaitingForPlayer => "WAITING_FOR_PLAYER",
            GameStatus::InProgress => "IN_PROGRESS",
            GameStatus::Finished => "FINISHED",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side a player takes on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PiecesColor {
    Light,
    Dark,
}

/// A draughts match record. Serialized field names are shared between the
/// HTTP payloads and the stored documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub creation_date: DateTime<Utc>,
    pub player1_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player1_nickname: Option<String>,
    pub player1_pieces_color: PiecesColor,
    pub status: GameStatus,
}

impl Game {
    /// Opens a new game waiting for a second player.
    pub fn new(player1_id: &str, player1_pieces_color: PiecesColor) -> Self {
        Game {
            id: Uuid::new_v4().to_string(),
            creation_date: Utc::now(),
            player1_id: player1_id.to_string(),
            player1_nickname: None,
            player1_pieces_color,
            status: GameStatus::WaitingForPlayer,
        }
    }

    pub fn with_nickname(mut self, nickname: Option<String>) -> Self {
        self.player1_nickname = nickname;
        self
    }
}

/// Placeholder id handed to a player who only gave a nickname.
pub fn generate_guest_player_id() -> String {
    format!("guest-{}", Uuid::new_v4())
}
