use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use dotenvy::dotenv;
use std::sync::Arc;
use std::time::Duration;

mod api;
mod auth;
mod config;
mod db;
mod docs;
mod form;
mod message;
mod model;
mod models;
mod routes;
mod service;
mod utils;

use config::Config;
use db::init_db;

use crate::docs::ApiDoc;
use crate::message::{CatalogMessageSource, MessageSource};
use crate::service::SqlAttendanceService;
use crate::utils::session_flags::SessionFlags;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

/// Upper bound on concurrently tracked login sessions
const MAX_SESSIONS: u64 = 100_000;

#[get("/")]
async fn index() -> impl Responder {
    "LMS attendance service"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let pool = init_db(&config.database_url)
        .await
        .map_err(|e| std::io::Error::other(format!("{e:#}")))?;

    let service = Data::new(SqlAttendanceService::new(pool));
    let messages: Data<dyn MessageSource> =
        Data::from(Arc::new(CatalogMessageSource) as Arc<dyn MessageSource>);
    let flags = Data::new(SessionFlags::new(
        MAX_SESSIONS,
        Duration::from_secs(config.session_ttl),
    ));

    let server_addr = config.server_addr.clone();
    info!(%server_addr, locale = %config.default_locale, "Listening");

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(service.clone())
            .app_data(messages.clone())
            .app_data(flags.clone())
            .app_data(Data::new(config.clone()))
            .service(index)
            .configure(|cfg| routes::configure::<SqlAttendanceService>(cfg, config.clone()))
    })
    .bind(server_addr)?
    .run()
    .await
}
