use anyhow::Context;
use groomer_comments::configuration::get_config;
use groomer_comments::startup::Application;
use groomer_comments::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber(
        "groomer-comments".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber)?;

    let configuration = get_config().context("Failed to read configuration")?;
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Comment service started");

    application.run_until_stopped().await
}
