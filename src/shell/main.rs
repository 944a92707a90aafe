use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use profile_requests::modules::requests::adapters::outbound::linked_records_in_memory::InMemoryLinkedRecords;
use profile_requests::shared::infrastructure::session::in_memory::InMemorySessions;
use profile_requests::shell::config::AppConfig;
use profile_requests::shell::http::router;
use profile_requests::shell::state::AppState;
use profile_requests::shell::workers::spawn_expiry_sweeper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let links = Arc::new(InMemoryLinkedRecords::new());
    let sessions = Arc::new(InMemorySessions::new());
    let state = AppState::in_memory(&config, links, sessions);

    let _sweeper = spawn_expiry_sweeper(state.clone(), config.expiry_sweep_interval);

    let app = router(state).layer(TraceLayer::new_for_http());

    tracing::info!("listening on http://{}, GraphQL at /gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
