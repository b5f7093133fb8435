//! Repository and API tests against a real DynamoDB endpoint.
//!
//! Ignored by default. Start DynamoDB Local and run with:
//! `DYNAMODB_ENDPOINT=http://localhost:8000 cargo test -p draughts-api-tests -- --ignored`
//!
//! Each test gathers what it observed, drops its table, and only then asserts,
//! so a failing run leaves no table behind.

use std::sync::Arc;

use api::{create_app, state::AppState};
use aws_sdk_dynamodb::Client;
use axum::http::StatusCode;
use draughts_api_tests::{
    create_games_table, delete_games_table, dynamodb_client_from_env, get_json, post_json,
    unique_table_name,
};
use serde_json::json;
use shared::models::game::{Game, GameStatus, PiecesColor};
use shared::repositories::errors::game_repository_errors::GameRepositoryError;
use shared::repositories::game_repository::{
    DynamoDbGameRepository, GameRepository, DEFAULT_STATUS_INDEX,
};
use shared::services::game_service::GameService;

struct TestTable {
    client: Client,
    table_name: String,
}

impl TestTable {
    async fn create() -> Self {
        let client = dynamodb_client_from_env().expect("DYNAMODB_ENDPOINT must be set");
        let table_name = unique_table_name();
        create_games_table(&client, &table_name, DEFAULT_STATUS_INDEX)
            .await
            .expect("failed to create games table");
        TestTable { client, table_name }
    }

    fn repository(&self) -> DynamoDbGameRepository {
        DynamoDbGameRepository::new(self.client.clone(), &self.table_name, DEFAULT_STATUS_INDEX)
    }

    async fn drop_table(self) {
        delete_games_table(&self.client, &self.table_name)
            .await
            .expect("failed to delete games table");
    }
}

#[tokio::test]
#[ignore]
async fn test_create_and_get_game() {
    let table = TestTable::create().await;
    let repository = table.repository();

    let game = Game::new("88", PiecesColor::Dark).with_nickname(Some("player950".into()));
    let created = repository.create_game(&game).await;
    let stored = repository.get_game(&game.id).await;
    let missing = repository.get_game("missing").await;
    table.drop_table().await;

    created.unwrap();
    assert_eq!(stored.unwrap(), Some(game));
    assert_eq!(missing.unwrap(), None);
}

#[tokio::test]
#[ignore]
async fn test_create_never_overwrites_an_id() {
    let table = TestTable::create().await;
    let repository = table.repository();

    let game = Game::new("88", PiecesColor::Dark);
    let first = repository.create_game(&game).await;
    let mut copy = game.clone();
    copy.player1_id = "99".to_string();
    let second = repository.create_game(&copy).await;
    let stored = repository.get_game(&game.id).await;
    table.drop_table().await;

    first.unwrap();
    assert!(matches!(second, Err(GameRepositoryError::AlreadyExists)));
    assert_eq!(stored.unwrap().unwrap().player1_id, "88");
}

#[tokio::test]
#[ignore]
async fn test_find_games_by_status_and_all() {
    let table = TestTable::create().await;
    let repository = table.repository();

    let waiting1 = Game::new("11", PiecesColor::Dark);
    let waiting2 = Game::new("11", PiecesColor::Dark);
    let mut finished = Game::new("12", PiecesColor::Light);
    finished.status = GameStatus::Finished;
    let mut inserts = Vec::new();
    for game in [&waiting1, &waiting2, &finished] {
        inserts.push(repository.create_game(game).await);
    }
    let waiting = repository
        .find_games_by_status(GameStatus::WaitingForPlayer)
        .await;
    let all = repository.find_all_games().await;
    table.drop_table().await;

    assert!(inserts.iter().all(|r| r.is_ok()));
    let mut waiting: Vec<String> = waiting.unwrap().into_iter().map(|g| g.id).collect();
    waiting.sort();
    let mut expected = vec![waiting1.id.clone(), waiting2.id.clone()];
    expected.sort();
    assert_eq!(waiting, expected);
    assert_eq!(all.unwrap().len(), 3);
}

#[tokio::test]
#[ignore]
async fn test_api_against_dynamodb() {
    let table = TestTable::create().await;
    let app = create_app(AppState {
        game_service: Arc::new(GameService::new(Arc::new(table.repository()))),
    });

    let (create_status, created) = post_json(
        app.clone(),
        "/api/games/",
        &json!({"playerId": null, "piecesColor": "DARK", "nickname": "player950"}),
    )
    .await;
    let (list_status, listed) = get_json(app, "/api/games?status=WAITING_FOR_PLAYER").await;
    table.drop_table().await;

    assert_eq!(create_status, StatusCode::OK);
    assert!(created["player1Id"].is_string());
    assert_eq!(list_status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], created["id"]);
}
