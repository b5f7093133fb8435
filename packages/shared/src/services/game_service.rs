use std::sync::Arc;

use tracing::{debug, info};

use crate::models::game::requests::{CreateGameRequest, ValidationErrors};
use crate::models::game::{generate_guest_player_id, Game, GameStatus};
use crate::repositories::game_repository::GameRepository;
use crate::services::errors::game_service_errors::GameServiceError;

#[derive(Clone)]
pub struct GameService {
    repository: Arc<dyn GameRepository + Send + Sync>,
}

impl GameService {
    pub fn new(repository: Arc<dyn GameRepository + Send + Sync>) -> Self {
        GameService { repository }
    }

    /// Validates the request, fills in a guest player id when only a
    /// nickname was given, and stores the new game.
    pub async fn create_game(&self, request: &CreateGameRequest) -> Result<Game, GameServiceError> {
        request.validate()?;
        let pieces_color = request
            .pieces_color
            .ok_or_else(|| ValidationErrors::single("piecesColor", "piecesColor is required"))?;

        let player_id = match request.player_id() {
            Some(player_id) => player_id.to_string(),
            None => {
                let generated = generate_guest_player_id();
                debug!(
                    "Generated player id {} for nickname {:?}",
                    generated,
                    request.nickname()
                );
                generated
            }
        };

        let game = Game::new(&player_id, pieces_color)
            .with_nickname(request.nickname().map(str::to_string));

        self.repository.create_game(&game).await?;

        info!(game_id = %game.id, player_id = %game.player1_id, "Game created");
        Ok(game)
    }

    /// Lists games with the given status, or every game when no status is given.
    pub async fn list_games(
        &self,
        status: Option<GameStatus>,
    ) -> Result<Vec<Game>, GameServiceError> {
        let games = match status {
            Some(status) => self.repository.find_games_by_status(status).await?,
            None => self.repository.find_all_games().await?,
        };
        Ok(games)
    }

    pub async fn get_game(&self, game_id: &str) -> Result<Game, GameServiceError> {
        if game_id.trim().is_empty() {
            return Err(ValidationErrors::single("id", "game id cannot be empty").into());
        }
        self.repository
            .get_game(game_id)
            .await?
            .ok_or(GameServiceError::GameNotFound)
    }
}
