use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use labour_dashboard_backend::{
    app,
    config::Config,
    db::connection::{create_pool, DbPool},
    repositories::labour_repository::PgLabourRepository,
    state::AppState,
};

fn mask_database_url(url: &str) -> String {
    match url.split_once('@') {
        Some((_, host)) => format!("***@{}", host),
        None => url.to_string(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "labour_dashboard_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        database_url = %mask_database_url(&config.database_url),
        time_zone = %config.time_zone,
        port = config.port,
        "Loaded configuration from environment/.env"
    );

    let pool: DbPool = create_pool(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(pool.as_ref()).await?;

    let repository = Arc::new(PgLabourRepository::new(pool));
    let app = app(AppState::new(repository, config.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::mask_database_url;

    #[test]
    fn mask_database_url_hides_credentials() {
        assert_eq!(
            mask_database_url("postgres://user:secret@db:5432/labour"),
            "***@db:5432/labour"
        );
        assert_eq!(
            mask_database_url("postgres://localhost/labour"),
            "postgres://localhost/labour"
        );
    }
}
