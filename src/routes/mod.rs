pub use quote::error_chain_fmt;

pub mod health_check;
pub mod quote;
