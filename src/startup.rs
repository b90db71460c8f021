use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::crm_client::CrmClient;
use crate::domain::EmailAddress;
use crate::email_client::EmailClient;
use crate::routes;

/// The business inbox that receives new-lead notifications, wrapped so
/// `web::Data` can tell it apart from any other address.
pub struct NotificationRecipient(pub EmailAddress);

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    crm_client: CrmClient,
    notification_recipient: EmailAddress,
) -> Result<Server, std::io::Error> {
    let email_client = Data::new(email_client);
    let crm_client = Data::new(crm_client);
    let notification_recipient = Data::new(NotificationRecipient(notification_recipient));
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            // The quote form is embedded on third-party pages, so any origin
            // may call the API.
            .wrap(Cors::permissive())
            .route("/", web::get().to(routes::health_check::liveness))
            .route("/health", web::get().to(routes::health_check::health))
            .route("/api/quote", web::post().to(routes::quote::submit_quote))
            .app_data(email_client.clone())
            .app_data(crm_client.clone())
            .app_data(notification_recipient.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
