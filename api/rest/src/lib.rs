use actix_cors::Cors;
use actix_web::{
    middleware::{ErrorHandlers, Logger},
    web, App, HttpServer,
};
use anyhow::Result;
use configure::configure;
use context::ApiRestCtx;
use error_handler::default_error_handler;
use logger::logger_format;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

mod configure;
pub mod context;
mod error_handler;
mod logger;
mod model;
mod service;

pub struct ApiRestServer {
    address: String,
    context: web::Data<ApiRestCtx>,
}

impl ApiRestServer {
    pub fn new(host: &str, port: &u16, ctx: ApiRestCtx) -> Self {
        mb_log::info(Some("⚡"), "[ApiRestServer] Initializing component");

        let address = format!("{host}:{port}");
        let context = web::Data::new(ctx);

        Self { address, context }
    }

    /// Serves until `cancel_token` is cancelled or the server itself fails.
    pub fn run(self, cancel_token: CancellationToken) -> JoinHandle<Result<()>> {
        mb_log::info(Some("💫"), "[ApiRestServer] Running component");

        tokio::spawn((|| async move {
            let context = self.context;

            let server = HttpServer::new(move || {
                App::new()
                    .wrap(Logger::new(logger_format()))
                    .wrap(ErrorHandlers::new().default_handler(default_error_handler))
                    .wrap(cors())
                    .app_data(context.clone())
                    .configure(configure)
            })
            .bind(&self.address)?
            .disable_signals()
            .run();
            let server_handle = server.handle();

            mb_log::info(
                Some("🌐"),
                format!("[ApiRestServer] Listening on {}", self.address),
            );

            tokio::select! {
                _ = cancel_token.cancelled() => {}
                s = server => s?,
            }

            mb_log::info(None, "[ApiRestServer] Shutting down component");
            server_handle.stop(true).await;

            anyhow::Ok(())
        })())
    }
}

/// Public read-only API: any origin, any header, GET only.
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(["GET"])
        .allow_any_header()
}
