use crate::board::{Board, Code, Side};
use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque session token issued by the server.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        GameId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGameRequest {
    pub rows: u32,
    pub cols: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGameResponse {
    pub board: Board,
    pub game_id: GameId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRequest {
    pub col: usize,
}

/// Raw body of a `/play` reply. Every field is optional on the wire; use
/// [`PlayResponse::into_reply`] to get a checked value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PlayResponse {
    #[serde(default)]
    pub board: Option<Board>,
    #[serde(default)]
    pub turn: Option<Side>,
    #[serde(default)]
    pub winner: Option<Code>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PlayResponse {
    /// The application error carried by the body, if any. Empty messages do
    /// not count.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }

    pub fn into_reply(self) -> Result<PlayReply, ModelError> {
        if let Some(message) = self.error_message() {
            return Ok(PlayReply::Rejected(message.to_owned()));
        }
        let board = self.board.ok_or(ModelError::MissingField("board"))?;
        let turn = self.turn.ok_or(ModelError::MissingField("turn"))?;
        let outcome = Outcome::from_code(self.winner.as_ref())?;
        Ok(PlayReply::Moved {
            board,
            turn,
            outcome,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayReply {
    Rejected(String),
    Moved {
        board: Board,
        turn: Side,
        outcome: Outcome,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won(Side),
}

impl Outcome {
    const IN_PROGRESS_CODE: i64 = 2;

    /// An absent winner reads as "in progress", same as the `2` sentinel.
    pub fn from_code(code: Option<&Code>) -> Result<Self, ModelError> {
        let Some(code) = code else {
            return Ok(Outcome::InProgress);
        };
        match code.as_int() {
            Some(Self::IN_PROGRESS_CODE) => Ok(Outcome::InProgress),
            Some(value) => Side::try_from(value)
                .map(Outcome::Won)
                .map_err(|_| ModelError::UnknownWinner(code.to_string())),
            None => Err(ModelError::UnknownWinner(code.to_string())),
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::InProgress => None,
            Outcome::Won(side) => Some(side),
        }
    }
}
