use film_tickets::{
    config::Config,
    controller::ViewController,
    load_films,
    remote::{HttpWriter, LogWriter, RemoteWriter},
    router, AppState,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    let client = reqwest::Client::builder()
        .user_agent("film_tickets/0.1")
        .build()?;

    let writer: Arc<dyn RemoteWriter> = match &config.write_endpoint {
        Some(base) => Arc::new(HttpWriter::new(client.clone(), base.clone())),
        None => {
            warn!("no write endpoint configured, writes are only logged");
            Arc::new(LogWriter)
        }
    };

    let mut controller = ViewController::new(writer);
    match load_films(&client, &config.read_endpoint).await {
        Ok(films) => controller.load(films),
        Err(err) => error!("error fetching films: {err}"),
    }

    let app = router(AppState::new(controller));

    info!("listening on http://{}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
