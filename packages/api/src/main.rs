use lambda_http::{run, Error};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::config::ApiConfig;
use api::{configure_lambda_runtime, create_app};
use api::state::AppState;
use shared::repositories::game_repository::DynamoDbGameRepository;
use shared::services::game_service::GameService;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        builder.json().without_time().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = ApiConfig::from_env()?;

    // Set up services
    let client = config.dynamodb_client().await;
    let game_repository = Arc::new(DynamoDbGameRepository::new(
        client,
        &config.games_table,
        &config.status_index,
    ));
    let game_service = Arc::new(GameService::new(game_repository));

    let app = create_app(AppState { game_service });

    match config.bind_address {
        Some(address) => {
            let listener = tokio::net::TcpListener::bind(address).await?;
            info!(
                "Serving games table {} on http://{}",
                config.games_table, address
            );
            axum::serve(listener, app).await?;
            Ok(())
        }
        None => {
            configure_lambda_runtime();
            info!("Starting Lambda runtime for games table {}", config.games_table);
            run(app).await
        }
    }
}
