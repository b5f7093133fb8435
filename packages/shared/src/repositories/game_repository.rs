use crate::models::game::{Game, GameStatus};
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, from_items, to_attribute_value, to_item};
use std::collections::HashMap;

#[cfg(test)]
use mockall::automock;

pub const DEFAULT_STATUS_INDEX: &str = "GSI_GameByStatus";

type Item = HashMap<String, AttributeValue>;

pub struct DynamoDbGameRepository {
    pub client: Client,
    pub table_name: String,
    pub status_index: String,
}

impl DynamoDbGameRepository {
    pub fn new(client: Client, table_name: &str, status_index: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            status_index: status_index.to_string(),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Stores a new game. Fails with `AlreadyExists` rather than overwrite an id.
    async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError>;

    async fn get_game(&self, game_id: &str) -> Result<Option<Game>, GameRepositoryError>;

    async fn find_games_by_status(
        &self,
        status: GameStatus,
    ) -> Result<Vec<Game>, GameRepositoryError>;

    async fn find_all_games(&self) -> Result<Vec<Game>, GameRepositoryError>;
}

fn games_from_items(items: Option<Vec<Item>>) -> Result<Vec<Game>, GameRepositoryError> {
    match items {
        Some(items) => {
            from_items(items).map_err(|e| GameRepositoryError::Serialization(e.to_string()))
        }
        None => Ok(Vec::new()),
    }
}

#[async_trait]
impl GameRepository for DynamoDbGameRepository {
    async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError> {
        let item = to_item(game).map_err(|e| GameRepositoryError::Serialization(e.to_string()))?;

        let result = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                let conflict = e
                    .as_service_error()
                    .map_or(false, |se| se.is_conditional_check_failed_exception());
                if conflict {
                    Err(GameRepositoryError::AlreadyExists)
                } else {
                    Err(GameRepositoryError::DynamoDb(
                        DisplayErrorContext(&e).to_string(),
                    ))
                }
            }
        }
    }

    async fn get_game(&self, game_id: &str) -> Result<Option<Game>, GameRepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(
                "id",
                to_attribute_value(game_id)
                    .map_err(|e| GameRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(DisplayErrorContext(&e).to_string()))?;

        if let Some(item) = output.item {
            let game: Game =
                from_item(item).map_err(|e| GameRepositoryError::Serialization(e.to_string()))?;
            Ok(Some(game))
        } else {
            Ok(None)
        }
    }

    async fn find_games_by_status(
        &self,
        status: GameStatus,
    ) -> Result<Vec<Game>, GameRepositoryError> {
        let status_value: AttributeValue = to_attribute_value(status)
            .map_err(|e| GameRepositoryError::Serialization(e.to_string()))?;

        let mut games = Vec::new();
        let mut start_key: Option<Item> = None;
        loop {
            // "status" is a DynamoDB reserved word
            let output = self
                .client
                .query()
                .table_name(&self.table_name)
                .index_name(&self.status_index)
                .key_condition_expression("#status = :status")
                .expression_attribute_names("#status", "status")
                .expression_attribute_values(":status", status_value.clone())
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| GameRepositoryError::DynamoDb(DisplayErrorContext(&e).to_string()))?;

            games.extend(games_from_items(output.items)?);

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(games)
    }

    async fn find_all_games(&self) -> Result<Vec<Game>, GameRepositoryError> {
        let mut games = Vec::new();
        let mut start_key: Option<Item> = None;
        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| GameRepositoryError::DynamoDb(DisplayErrorContext(&e).to_string()))?;

            games.extend(games_from_items(output.items)?);

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::game::PiecesColor;

    #[test]
    fn test_game_item_layout() {
        let game = Game::new("88", PiecesColor::Dark);

        let item: Item = to_item(&game).unwrap();

        assert_eq!(item.get("id"), Some(&AttributeValue::S(game.id.clone())));
        assert_eq!(
            item.get("status"),
            Some(&AttributeValue::S("WAITING_FOR_PLAYER".to_string()))
        );
        assert_eq!(
            item.get("player1PiecesColor"),
            Some(&AttributeValue::S("DARK".to_string()))
        );
        assert!(item.contains_key("creationDate"));
        assert!(!item.contains_key("player1Nickname"));
    }

    #[test]
    fn test_games_from_items() {
        let first = Game::new("11", PiecesColor::Dark);
        let second = Game::new("12", PiecesColor::Light).with_nickname(Some("nick".into()));
        let items: Vec<Item> = vec![to_item(&first).unwrap(), to_item(&second).unwrap()];

        let games = games_from_items(Some(items)).unwrap();
        assert_eq!(games, vec![first, second]);

        assert!(games_from_items(None).unwrap().is_empty());
    }

    #[test]
    fn test_games_from_malformed_items() {
        let mut item: Item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::S("abc".to_string()));

        let result = games_from_items(Some(vec![item]));
        assert!(matches!(result, Err(GameRepositoryError::Serialization(_))));
    }
}
