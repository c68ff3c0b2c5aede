use portfolio_chat::configuration::get_configuration;
use portfolio_chat::startup::run;
use portfolio_chat::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("portfolio-chat".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(
        remote_mode = ?settings.remote.mode,
        storage = ?settings.storage.backend,
        "Configuration loaded"
    );

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).expect(&format!("failed to bind to {}", settings.app_port));

    run(listener, settings).await?.await
}
