use micro_steps::{
    AppState, FileBackend, HabitStore, HttpInsightGenerator, default_seed_habits,
    resolve_data_path, router,
};
use std::{env, net::SocketAddr, sync::Arc};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path();
    if let Some(parent) = data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let backend = Arc::new(FileBackend::new(data_path));
    let store = Arc::new(HabitStore::new(backend, default_seed_habits()));
    store.initialize().await;

    let insights = Arc::new(HttpInsightGenerator::from_env());
    let app = router(AppState::new(store, insights));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
