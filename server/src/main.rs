use crud_server::{config::Config, telemetry, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    telemetry::init_tracing(&config.environment);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, environment = %config.environment, "Serveur démarré sur le port {}", config.port);
    crud_server::run(listener, AppState::seeded(config.environment)).await
}
