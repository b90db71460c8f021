use std::net::TcpListener;

use anyhow::Context;
use quote_api::configuration::get_configuration;
use quote_api::crm_client::CrmClient;
use quote_api::email_client::EmailClient;
use quote_api::startup::run;
use quote_api::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("quote-api".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().context("Failed to read configuration")?;

    let sender = config
        .email_client
        .sender()
        .map_err(anyhow::Error::msg)
        .context("Invalid sender address in configuration")?;
    let notification_recipient = config
        .email_client
        .notification_recipient()
        .map_err(anyhow::Error::msg)
        .context("Invalid notification address in configuration")?;
    let email_client = EmailClient::new(
        config.email_client.base_url.clone(),
        sender,
        config.email_client.authorization_token.clone(),
        config.email_client.timeout(),
    );
    let crm_client = CrmClient::new(
        config.crm.webhook_url.clone(),
        config.crm.api_key.clone(),
        config.crm.form_id.clone(),
        config.crm.timeout(),
    );

    let address = format!(
        "{address}:{port}",
        address = config.application.host,
        port = config.application.port
    );
    let listener =
        TcpListener::bind(&address).with_context(|| format!("Failed to bind {}", address))?;
    run(listener, email_client, crm_client, notification_recipient)?.await?;
    Ok(())
}
