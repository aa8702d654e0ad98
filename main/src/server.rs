use std::sync::Arc;

use api_router::{api_routes_v1, api_state::ApiState};
use axum::Router;
use common::{
    storage::{db::SurrealDbClient, types::system_settings::SystemSettings},
    utils::config::{get_config, AppConfig},
};
use knowledge_cache::{ContentTextExtractor, HttpFetcher, InMemoryCacheStore, KnowledgeCache};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tutor_pipeline::{OpenAiTutorModel, TutorFlow};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    // Get config
    let config = get_config()?;

    let db = Arc::new(
        SurrealDbClient::new(
            &config.surrealdb_address,
            &config.surrealdb_username,
            &config.surrealdb_password,
            &config.surrealdb_namespace,
            &config.surrealdb_database,
        )
        .await?,
    );

    // Ensure db is initialized
    db.ensure_initialized().await?;

    let app = build_app(&config, db).await?;

    info!("Starting server listening on 0.0.0.0:{}", config.http_port);
    let serve_address = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(serve_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Wires the knowledge cache, tutor flow and API routes around an initialized database.
async fn build_app(config: &AppConfig, db: Arc<SurrealDbClient>) -> anyhow::Result<Router> {
    let openai_client = Arc::new(async_openai::Client::with_config(
        async_openai::config::OpenAIConfig::new()
            .with_api_key(&config.openai_api_key)
            .with_api_base(&config.openai_base_url),
    ));

    // One cache per process, shared by every request.
    let knowledge_cache = KnowledgeCache::new(
        Arc::new(HttpFetcher::new(reqwest::Client::new())),
        Arc::new(ContentTextExtractor),
        Arc::new(InMemoryCacheStore::new()),
    );

    // Settings are re-read per question; this only confirms they exist.
    let settings = SystemSettings::get_current(&db).await?;
    info!(
        tutor_model = %settings.tutor_model,
        document_char_limit = config.tutor_document_char_limit,
        "Tutor configured"
    );

    let tutor = TutorFlow::new(
        db.clone(),
        knowledge_cache,
        Arc::new(OpenAiTutorModel::new(openai_client, db.clone())),
        db.clone(),
    )
    .with_max_document_chars(config.tutor_document_char_limit);

    let api_state = ApiState::new(db, config, tutor);

    Ok(Router::new()
        .nest("/api/v1", api_routes_v1(&api_state))
        .with_state(api_state))
}
