use std::fmt::Formatter;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use chrono::{DateTime, Utc};

use crate::crm_client::{CrmClient, CrmPushError};
use crate::domain::{EmailAddress, QuoteRequest};
use crate::email_client::EmailClient;
use crate::email_templates::{
    confirmation_html, confirmation_subject, confirmation_text, notification_html,
    notification_subject, notification_text,
};
use crate::startup::NotificationRecipient;

#[derive(serde::Serialize)]
struct ValidationFailureResponse {
    success: bool,
    errors: Vec<String>,
}

#[derive(serde::Serialize)]
struct QuoteAcceptedResponse {
    success: bool,
    message: &'static str,
    details: DeliveryDetails,
}

/// Outcome of each of the three independent sends. The request succeeds
/// even when some or all of them are false.
#[derive(serde::Serialize)]
struct DeliveryDetails {
    email_sent: bool,
    crm_pushed: bool,
    confirmation_sent: bool,
}

#[derive(thiserror::Error)]
pub enum QuoteError {
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for QuoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for QuoteError {
    fn status_code(&self) -> StatusCode {
        match self {
            QuoteError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // The full cause chain stays in the logs; the caller only sees a
        // generic message.
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "message": "Something went wrong. Please try again or call us directly."
        }))
    }
}

#[tracing::instrument(
    name = "Handling a quote request",
    skip(body, email_client, crm_client, notification_recipient),
    fields(
        name = tracing::field::Empty,
        email = tracing::field::Empty,
        service = tracing::field::Empty
    )
)]
pub async fn submit_quote(
    body: web::Json<serde_json::Value>,
    email_client: web::Data<EmailClient>,
    crm_client: web::Data<CrmClient>,
    notification_recipient: web::Data<NotificationRecipient>,
) -> Result<HttpResponse, QuoteError> {
    let quote = match QuoteRequest::parse(&body.0) {
        Ok(quote) => quote,
        Err(errors) => {
            tracing::info!(errors = ?errors, "Rejecting an invalid submission");
            return Ok(HttpResponse::BadRequest().json(ValidationFailureResponse {
                success: false,
                errors,
            }));
        }
    };
    tracing::Span::current()
        .record("name", &tracing::field::display(&quote.name))
        .record("email", &tracing::field::display(&quote.email))
        .record("service", &tracing::field::display(&quote.service));

    let submitted_at = Utc::now();

    // The three sends are independent. Each catches its own failure, so a
    // dead email provider never stops the CRM push and vice versa.
    let email_sent =
        send_notification_email(&email_client, &notification_recipient.0, &quote, submitted_at)
            .await;
    let crm_pushed = push_to_crm(&crm_client, &quote, submitted_at).await;
    let confirmation_sent = send_confirmation_email(&email_client, &quote).await;

    tracing::info!(
        submitted_at = %submitted_at.to_rfc3339(),
        name = %quote.name,
        email = %quote.email,
        service = %quote.service,
        "Quote request processed"
    );

    Ok(HttpResponse::Ok().json(QuoteAcceptedResponse {
        success: true,
        message: "Quote request submitted successfully",
        details: DeliveryDetails {
            email_sent,
            crm_pushed,
            confirmation_sent,
        },
    }))
}

#[tracing::instrument(name = "Sending the new-lead notification email", skip_all)]
async fn send_notification_email(
    email_client: &EmailClient,
    recipient: &EmailAddress,
    quote: &QuoteRequest,
    submitted_at: DateTime<Utc>,
) -> bool {
    let subject = notification_subject(quote);
    let html = notification_html(quote, submitted_at);
    let text = notification_text(quote, submitted_at);
    match email_client
        .send_email(recipient, &subject, &html, &text)
        .await
    {
        Ok(message_id) => {
            tracing::info!(message_id = ?message_id, "Notification email sent");
            true
        }
        Err(error) => {
            tracing::warn!(
                error.cause_chain = ?error,
                "Failed to send the notification email"
            );
            false
        }
    }
}

#[tracing::instrument(name = "Pushing the submission to the CRM", skip_all)]
async fn push_to_crm(
    crm_client: &CrmClient,
    quote: &QuoteRequest,
    submitted_at: DateTime<Utc>,
) -> bool {
    match crm_client.push(quote, submitted_at).await {
        Ok(status) if status.is_success() => {
            tracing::info!(status = status.as_u16(), "Submission pushed to the CRM");
            true
        }
        Ok(status) => {
            tracing::warn!(
                status = status.as_u16(),
                "The CRM webhook rejected the submission"
            );
            false
        }
        Err(CrmPushError::NotConfigured) => {
            tracing::info!("No CRM webhook URL configured, skipping the push");
            false
        }
        Err(error) => {
            tracing::warn!(
                error.cause_chain = ?error,
                "Failed to reach the CRM webhook"
            );
            false
        }
    }
}

#[tracing::instrument(name = "Sending the confirmation email", skip_all)]
async fn send_confirmation_email(email_client: &EmailClient, quote: &QuoteRequest) -> bool {
    let subject = confirmation_subject();
    let html = confirmation_html(quote.name.as_ref(), &quote.service);
    let text = confirmation_text(quote.name.as_ref(), &quote.service);
    match email_client
        .send_email(&quote.email, &subject, &html, &text)
        .await
    {
        Ok(message_id) => {
            tracing::info!(message_id = ?message_id, "Confirmation email sent");
            true
        }
        Err(error) => {
            tracing::warn!(
                error.cause_chain = ?error,
                "Failed to send the confirmation email"
            );
            false
        }
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
