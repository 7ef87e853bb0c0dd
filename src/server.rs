//! HTTP server assembly.

use std::sync::Arc;

use actix_cors::Cors;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::backend::{BackendClient, QuoteSubmitter};
use crate::models::config::ServerConfig;
use crate::routes::bot::{answer_bot, restart_bot, show_bot};
use crate::routes::main::{page_larger, page_smaller, show_index, submit_quote};
use crate::state::{QuoteConversation, QuoteSearch};
use crate::store::VisitorStore;

/// Registers every page and API route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(crate::routes::api::configure))
        .service(show_index)
        .service(submit_quote)
        .service(page_larger)
        .service(page_smaller)
        .service(show_bot)
        .service(answer_bot)
        .service(restart_bot);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let backend = BackendClient::new(&server_config.backend_url, server_config.backend_timeout())
        .map_err(|e| std::io::Error::other(format!("Failed to build backend client: {e}")))?;
    let backend = Arc::new(backend);
    let submitter: Arc<dyn QuoteSubmitter> = backend.clone();

    let idle_ttl = server_config.visitor_idle_ttl();
    let searches = web::Data::new(VisitorStore::<QuoteSearch>::with_idle_ttl(idle_ttl));
    let conversations = web::Data::new(VisitorStore::<QuoteConversation>::with_idle_ttl(idle_ttl));

    // Keys and stores for sessions and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Listening on {}:{}, pricing backend at {}",
        bind_address.0,
        bind_address.1,
        backend.url()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(configure)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::from(submitter.clone()))
            .app_data(web::Data::from(backend.clone()))
            .app_data(searches.clone())
            .app_data(conversations.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
