use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use serde::de::{value::StrDeserializer, IntoDeserializer};
use serde::{Deserialize, Deserializer};
use tracing::{debug, error};

use crate::{error::ApiError, state::AppState};
use shared::models::game::requests::CreateGameRequest;
use shared::models::game::{Game, GameStatus};
use shared::services::errors::game_service_errors::GameServiceError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/games", get(list_games).post(create_game))
        .route("/api/games/", get(list_games).post(create_game))
        .route("/api/games/{game_id}", get(get_game))
}

#[derive(Debug, Deserialize)]
pub struct ListGamesQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<GameStatus>,
}

/// `?status=` with no value means no filter.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<GameStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            let value: StrDeserializer<'_, D::Error> = value.into_deserializer();
            GameStatus::deserialize(value).map(Some)
        }
    }
}

fn log_service_error(context: &str, e: &GameServiceError) {
    match e {
        GameServiceError::RepositoryError(_) => error!("{}: {}", context, e),
        _ => debug!("{}: {}", context, e),
    }
}

async fn create_game(
    State(state): State<AppState>,
    payload: Result<Json<CreateGameRequest>, JsonRejection>,
) -> Result<Json<Game>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected create game body: {}", rejection.body_text());
        ApiError::InvalidPayload(rejection.body_text())
    })?;

    state
        .game_service
        .create_game(&request)
        .await
        .map(Json)
        .map_err(|e| {
            log_service_error("Failed to create game", &e);
            ApiError::from(e)
        })
}

async fn list_games(
    State(state): State<AppState>,
    query: Result<Query<ListGamesQuery>, QueryRejection>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))?;

    let games = state
        .game_service
        .list_games(query.status)
        .await
        .map_err(|e| {
            log_service_error("Failed to list games", &e);
            ApiError::from(e)
        })?;

    debug!(
        "Listed {} games with status filter {:?}",
        games.len(),
        query.status
    );
    Ok(Json(games))
}

async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<Game>, ApiError> {
    state
        .game_service
        .get_game(&game_id)
        .await
        .map(Json)
        .map_err(|e| {
            log_service_error(&format!("Failed to get game {}", game_id), &e);
            ApiError::from(e)
        })
}
