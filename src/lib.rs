pub mod configuration;
pub mod crm_client;
pub mod domain;
pub mod email_client;
pub mod email_templates;
pub mod routes;
pub mod startup;
pub mod telemetry;
