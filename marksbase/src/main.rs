use std::sync::Arc;

use mb_api_rest::{context::ApiRestCtx, ApiRestServer};
use tokio_util::sync::CancellationToken;

mod config_path;
mod dataset;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = match mb_config::from_path(&config_path) {
        Ok(config) => config,
        Err(err) => panic!("{err}"),
    };

    if let Err(err) = mb_log::init(config.log().display_level(), config.log().level_filter()) {
        panic!("{err}");
    }

    mb_log::info(Some("🚀"), "[Marksbase] Starting");

    let dataset = dataset::load(config.dataset());

    let api_rest_server = ApiRestServer::new(
        config.api().rest().host(),
        config.api().rest().port(),
        ApiRestCtx::new(Arc::new(dataset)),
    );

    let cancel_token = CancellationToken::new();

    tokio::spawn({
        let cancel_token = cancel_token.clone();
        async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                mb_log::error(
                    None,
                    format!("[Marksbase] Listening for Ctrl-C failed: {err}"),
                );
                return;
            }
            mb_log::warn(
                None,
                "[Marksbase] Received Ctrl-C, shutting down all running components",
            );
            cancel_token.cancel();
        }
    });

    match api_rest_server.run(cancel_token).await {
        Ok(Ok(_)) => mb_log::info(Some("👋"), "[Marksbase] Turned off"),
        Ok(Err(err)) => mb_log::warn(
            Some("👋"),
            format!("[Marksbase] Turned off with error: {err}"),
        ),
        Err(err) => mb_log::warn(
            Some("👋"),
            format!("[Marksbase] Turned off after the server task aborted: {err}"),
        ),
    }
}
