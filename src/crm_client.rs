use crate::domain::QuoteRequest;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};

/// Where the submission form lives, forwarded so the CRM can attribute leads.
const SOURCE_URL: &str = "https://northstarconcrete.com/quote";

/// Client for the CRM's inbound webhook.
///
/// The webhook URL and API key are both optional: without a URL the push is
/// skipped, without a key the request goes out unauthenticated.
pub struct CrmClient {
    http_client: Client,
    webhook_url: Option<String>,
    api_key: Option<Secret<String>>,
    form_id: String,
}

#[derive(thiserror::Error, Debug)]
pub enum CrmPushError {
    #[error("CRM webhook URL is not configured")]
    NotConfigured,
    #[error("Failed to deliver the submission to the CRM webhook")]
    Request(#[from] reqwest::Error),
}

impl CrmClient {
    pub fn new(
        webhook_url: Option<String>,
        api_key: Option<Secret<String>>,
        form_id: String,
        timeout: std::time::Duration,
    ) -> Self {
        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            http_client,
            webhook_url,
            api_key,
            form_id,
        }
    }

    /// Forwards a validated submission to the CRM.
    ///
    /// Returns the upstream status code and leaves the caller to decide what
    /// counts as delivered. An unconfigured webhook is an expected, non-fatal
    /// outcome, reported as `NotConfigured` without any network call.
    pub async fn push(
        &self,
        quote: &QuoteRequest,
        submitted_at: DateTime<Utc>,
    ) -> Result<StatusCode, CrmPushError> {
        let webhook_url = self
            .webhook_url
            .as_ref()
            .ok_or(CrmPushError::NotConfigured)?;

        let payload = CrmPayload {
            form_id: &self.form_id,
            source: "website",
            name: quote.name.as_ref(),
            phone: quote.phone.as_ref(),
            email: quote.email.as_ref(),
            service: &quote.service,
            address: quote.address.as_deref().unwrap_or(""),
            zip_code: quote.zipcode.as_deref().unwrap_or(""),
            timeline: quote.timeline.as_deref().unwrap_or(""),
            budget: quote.budget.as_deref().unwrap_or(""),
            message: quote.message.as_deref().unwrap_or(""),
            submitted_at: submitted_at.to_rfc3339(),
            source_url: SOURCE_URL,
        };

        let mut request = self.http_client.post(webhook_url).json(&payload);
        if let Some(api_key) = &self.api_key {
            request = request.header("X-API-Key", api_key.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        // The body is only useful for diagnosing rejections.
        let body = response.text().await?;
        tracing::debug!(
            status = status.as_u16(),
            body = %body,
            "CRM webhook responded"
        );
        Ok(status)
    }
}

/// Flat payload the CRM expects; `zipcode` travels as `zip_code` and absent
/// optionals travel as empty strings.
#[derive(serde::Serialize)]
struct CrmPayload<'a> {
    form_id: &'a str,
    source: &'static str,
    name: &'a str,
    phone: &'a str,
    email: &'a str,
    service: &'a str,
    address: &'a str,
    zip_code: &'a str,
    timeline: &'a str,
    budget: &'a str,
    message: &'a str,
    submitted_at: String,
    source_url: &'static str,
}
