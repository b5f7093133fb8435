use thiserror::Error;

use crate::models::game::requests::ValidationErrors;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;

#[derive(Debug, Error)]
pub enum GameServiceError {
    #[error("Validation error: {0}")]
    ValidationError(ValidationErrors),
    #[error("Game not found")]
    GameNotFound,
    #[error("Repository error: {0}")]
    RepositoryError(#[from] GameRepositoryError),
}

impl From<ValidationErrors> for GameServiceError {
    fn from(errors: ValidationErrors) -> Self {
        GameServiceError::ValidationError(errors)
    }
}
