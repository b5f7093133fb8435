use crate::models::game::{Game, GameStatus};
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::repositories::game_repository::GameRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local store backing tests and local runs.
#[derive(Clone, Default)]
pub struct InMemoryGameRepository {
    games: Arc<RwLock<HashMap<String, Game>>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.games.read().await.is_empty()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError> {
        let mut games = self.games.write().await;
        if games.contains_key(&game.id) {
            return Err(GameRepositoryError::AlreadyExists);
        }
        games.insert(game.id.clone(), game.clone());
        Ok(())
    }

    async fn get_game(&self, game_id: &str) -> Result<Option<Game>, GameRepositoryError> {
        let games = self.games.read().await;
        Ok(games.get(game_id).cloned())
    }

    async fn find_games_by_status(
        &self,
        status: GameStatus,
    ) -> Result<Vec<Game>, GameRepositoryError> {
        let games = self.games.read().await;
        Ok(games
            .values()
            .filter(|game| game.status == status)
            .cloned()
            .collect())
    }

    async fn find_all_games(&self) -> Result<Vec<Game>, GameRepositoryError> {
        let games = self.games.read().await;
        Ok(games.values().cloned().collect())
    }
}
