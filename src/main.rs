use crate::app::AppState;
use crate::config::AppConfig;
use crate::randomuser::RandomUserClient;
use crate::responses::error_response;
use crate::router::handle;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod domain;
mod errors;
mod randomuser;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1️⃣ Configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Single fetch; a failure still serves an empty table
    let state = match RandomUserClient::new(&config) {
        Ok(client) => {
            info!(url = %client.url(), "fetching users");
            AppState::load(&client)
        }
        Err(e) => {
            error!("❌ HTTP client init failed: {e}");
            AppState {
                load_error: Some(e.to_string()),
                ..AppState::default()
            }
        }
    };

    // 3️⃣ Start the server
    info!("Starting server at http://{}", config.addr);
    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
