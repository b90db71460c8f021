//! Typed templates for the two outbound emails. Pure functions, so the
//! rendering is testable without touching the network.

use crate::domain::QuoteRequest;
use chrono::{DateTime, Utc};
use htmlescape::{encode_attribute, encode_minimal};

const NOT_PROVIDED: &str = "Not provided";
const NOT_SPECIFIED: &str = "Not specified";
const NO_MESSAGE: &str = "No message provided";

/// Callback number quoted in the confirmation email.
const OFFICE_PHONE: &str = "(612) 555-0148";
const OFFICE_PHONE_HREF: &str = "tel:+16125550148";

pub fn notification_subject(quote: &QuoteRequest) -> String {
    format!(
        "New quote request: {} from {}",
        quote.service, quote.name
    )
}

/// The new-lead email sent to the business inbox.
pub fn notification_html(quote: &QuoteRequest, submitted_at: DateTime<Utc>) -> String {
    let name = encode_minimal(quote.name.as_ref());
    let phone = encode_minimal(quote.phone.as_ref());
    let phone_href = quote.phone.digits();
    let email = encode_minimal(quote.email.as_ref());
    let email_href = encode_attribute(quote.email.as_ref());
    let service = encode_minimal(&quote.service);
    let address = escaped_or(quote.address.as_deref(), NOT_PROVIDED);
    let zipcode = escaped_or(quote.zipcode.as_deref(), NOT_PROVIDED);
    let timeline = escaped_or(quote.timeline.as_deref(), NOT_SPECIFIED);
    let budget = escaped_or(quote.budget.as_deref(), NOT_SPECIFIED);
    let message = escaped_or(quote.message.as_deref(), NO_MESSAGE);

    format!(
        r#"<html>
<body style="font-family: Arial, sans-serif; color: #333;">
  <h2 style="color: #1a4d8f;">New Quote Request</h2>
  <h3>Contact Information</h3>
  <table cellpadding="6">
    <tr><td><strong>Name</strong></td><td>{name}</td></tr>
    <tr><td><strong>Phone</strong></td><td><a href="tel:{phone_href}">{phone}</a></td></tr>
    <tr><td><strong>Email</strong></td><td><a href="mailto:{email_href}">{email}</a></td></tr>
  </table>
  <h3>Project Details</h3>
  <table cellpadding="6">
    <tr><td><strong>Service</strong></td><td>{service}</td></tr>
    <tr><td><strong>Address</strong></td><td>{address}</td></tr>
    <tr><td><strong>Zip code</strong></td><td>{zipcode}</td></tr>
    <tr><td><strong>Timeline</strong></td><td>{timeline}</td></tr>
    <tr><td><strong>Budget</strong></td><td>{budget}</td></tr>
  </table>
  <h3>Message</h3>
  <p>{message}</p>
  <hr />
  <p style="color: #888; font-size: 12px;">Submitted at {submitted_at}</p>
</body>
</html>"#,
        submitted_at = submitted_at.to_rfc3339(),
    )
}

/// Plain-text alternative body for the new-lead email.
pub fn notification_text(quote: &QuoteRequest, submitted_at: DateTime<Utc>) -> String {
    format!(
        "New quote request\n\n\
         Name: {}\n\
         Phone: {}\n\
         Email: {}\n\
         Service: {}\n\
         Address: {}\n\
         Zip code: {}\n\
         Timeline: {}\n\
         Budget: {}\n\
         Message: {}\n\n\
         Submitted at {}",
        quote.name,
        quote.phone,
        quote.email,
        quote.service,
        quote.address.as_deref().unwrap_or(NOT_PROVIDED),
        quote.zipcode.as_deref().unwrap_or(NOT_PROVIDED),
        quote.timeline.as_deref().unwrap_or(NOT_SPECIFIED),
        quote.budget.as_deref().unwrap_or(NOT_SPECIFIED),
        quote.message.as_deref().unwrap_or(NO_MESSAGE),
        submitted_at.to_rfc3339(),
    )
}

pub fn confirmation_subject() -> String {
    "We received your quote request".to_string()
}

/// The thank-you email sent back to the submitter.
pub fn confirmation_html(name: &str, service: &str) -> String {
    let name = encode_minimal(name);
    let service = encode_minimal(service);
    format!(
        r#"<html>
<body style="font-family: Arial, sans-serif; color: #333;">
  <h2 style="color: #1a4d8f;">Thanks for reaching out, {name}!</h2>
  <p>We received your {service} quote request. One of our estimators will
  review it and get back to you within 24 hours.</p>
  <p>Need us sooner? Call the office at
  <a href="{OFFICE_PHONE_HREF}">{OFFICE_PHONE}</a>.</p>
  <p>The North Star Concrete team</p>
</body>
</html>"#
    )
}

pub fn confirmation_text(name: &str, service: &str) -> String {
    format!(
        "Thanks for reaching out, {}!\n\n\
         We received your {} quote request. One of our estimators will review \
         it and get back to you within 24 hours.\n\n\
         Need us sooner? Call the office at {}.\n\n\
         The North Star Concrete team",
        name, service, OFFICE_PHONE,
    )
}

fn escaped_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(value) => encode_minimal(value),
        None => fallback.to_string(),
    }
}
