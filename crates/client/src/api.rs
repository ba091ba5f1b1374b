use crate::config::ClientConfig;
use crate::error::ClientError;
use common::model::{GameId, NewGameRequest, NewGameResponse, PlayRequest, PlayResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;
use web_sys::RequestCredentials;

/// HTTP client for the game server. Sessions are keyed on a cookie, so every
/// request carries credentials.
#[derive(Clone, Debug, PartialEq)]
pub struct GameApi {
    base: Url,
}

/// Status and raw body of a finished exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Reply {
    status: u16,
    body: String,
}

impl Reply {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl GameApi {
    pub fn new(config: &ClientConfig) -> Self {
        GameApi {
            base: config.api_base.clone(),
        }
    }

    pub fn new_game_url(&self) -> Result<Url, ClientError> {
        self.endpoint(&["new_game"])
    }

    pub fn play_url(&self, game_id: &GameId) -> Result<Url, ClientError> {
        self.endpoint(&["play", game_id.as_str()])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn new_game(&self, request: NewGameRequest) -> Result<NewGameResponse, ClientError> {
        let url = self.new_game_url()?;
        log::debug!("requesting a {}x{} game from {url}", request.rows, request.cols);
        let reply = post(&url, &request).await?;
        decode_new_game(&reply)
    }

    pub async fn play(&self, game_id: &GameId, col: usize) -> Result<PlayResponse, ClientError> {
        let url = self.play_url(game_id)?;
        log::debug!("playing column {col} in game {game_id}");
        let reply = post(&url, &PlayRequest { col }).await?;
        decode_play(&reply)
    }
}

async fn post<T: Serialize>(url: &Url, body: &T) -> Result<Reply, ClientError> {
    let response = Request::post(url.as_str())
        .credentials(RequestCredentials::Include)
        .json(body)?
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;
    Ok(Reply { status, body })
}

fn decode_success<T: DeserializeOwned>(reply: &Reply) -> Result<T, ClientError> {
    if !reply.is_success() {
        return match serde_json::from_str::<ErrorBody>(&reply.body) {
            Ok(ErrorBody { error }) if !error.is_empty() => Err(ClientError::Rejected(error)),
            _ => Err(ClientError::Status(reply.status)),
        };
    }
    Ok(serde_json::from_str(&reply.body)?)
}

fn decode_new_game(reply: &Reply) -> Result<NewGameResponse, ClientError> {
    decode_success(reply)
}

/// Only a 2xx body can carry an application error for the view to show. A
/// 4xx with an `error` body (bad column, rate limit) is a failed request.
fn decode_play(reply: &Reply) -> Result<PlayResponse, ClientError> {
    decode_success(reply)
}
