mod contact_name;
mod email_address;
mod phone_number;
mod quote_request;

pub use contact_name::ContactName;
pub use email_address::EmailAddress;
pub use phone_number::PhoneNumber;
pub use quote_request::QuoteRequest;
