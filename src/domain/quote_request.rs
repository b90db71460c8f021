use crate::domain::{ContactName, EmailAddress, PhoneNumber};
use serde_json::Value;

/// A validated quote-request submission. Ephemeral: built from one HTTP
/// request, handed to the three senders, then dropped.
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    pub name: ContactName,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
    pub service: String,
    pub address: Option<String>,
    pub zipcode: Option<String>,
    pub timeline: Option<String>,
    pub budget: Option<String>,
    pub message: Option<String>,
}

impl QuoteRequest {
    /// Validates a raw JSON submission.
    ///
    /// The input is kept weakly typed so that an absent field and a
    /// non-string field fail the same way. Either every required field
    /// passes its check, or the full list of failures comes back, one
    /// message per failing rule, in a fixed order: name, phone, email,
    /// service.
    pub fn parse(body: &Value) -> Result<QuoteRequest, Vec<String>> {
        let mut errors = Vec::new();

        let name = match required_text(body, "name").map(ContactName::parse) {
            Some(Ok(name)) => Some(name),
            Some(Err(reason)) => {
                errors.push(reason);
                None
            }
            None => {
                errors.push("name is required".to_string());
                None
            }
        };

        let phone = match required_text(body, "phone").map(PhoneNumber::parse) {
            Some(Ok(phone)) => Some(phone),
            Some(Err(reason)) => {
                errors.push(reason);
                None
            }
            None => {
                errors.push("valid phone is required".to_string());
                None
            }
        };

        let email = match required_text(body, "email").map(EmailAddress::parse) {
            Some(Ok(email)) => Some(email),
            Some(Err(reason)) => {
                errors.push(reason);
                None
            }
            None => {
                errors.push("valid email is required".to_string());
                None
            }
        };

        let service = match required_text(body, "service") {
            Some(service) if !service.is_empty() => Some(service),
            _ => {
                errors.push("service is required".to_string());
                None
            }
        };

        match (name, phone, email, service) {
            (Some(name), Some(phone), Some(email), Some(service)) => Ok(QuoteRequest {
                name,
                phone,
                email,
                service,
                address: optional_text(body, "address"),
                zipcode: optional_text(body, "zipcode"),
                timeline: optional_text(body, "timeline"),
                budget: optional_text(body, "budget"),
                message: optional_text(body, "message"),
            }),
            _ => Err(errors),
        }
    }
}

fn required_text(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Optional fields: absent, non-string and empty values all collapse to
/// `None`, so each destination can pick its own placeholder.
fn optional_text(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
