use once_cell::sync::Lazy;
use quote_api::configuration::{get_configuration, Settings};
use quote_api::crm_client::CrmClient;
use quote_api::email_client::EmailClient;
use quote_api::startup::run;
use quote_api::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    /// Stands in for the email provider.
    pub email_server: MockServer,
    /// Stands in for the CRM's inbound webhook.
    pub crm_server: MockServer,
}

impl TestApp {
    pub async fn post_quote(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/api/quote", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to submit quote request")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Boots the application against two mock servers, letting the caller mutate
/// the settings first (e.g. to unset the CRM webhook URL).
pub async fn spawn_app_with(customise: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;
    let crm_server = MockServer::start().await;

    let mut config = get_configuration().expect("Failed to read configuration");
    config.email_client.base_url = email_server.uri();
    config.email_client.timeout_milliseconds = 200;
    config.crm.webhook_url = Some(crm_server.uri());
    config.crm.timeout_milliseconds = 200;
    customise(&mut config);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let sender = config
        .email_client
        .sender()
        .expect("Invalid sender address in configuration");
    let notification_recipient = config
        .email_client
        .notification_recipient()
        .expect("Invalid notification address in configuration");
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

    let server = run(listener, email_client, crm_client, notification_recipient)
        .expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        email_server,
        crm_server,
    }
}
