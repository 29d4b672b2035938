use crate::auth::SupabaseAuth;
use crate::config::Config;
use crate::db::{init_db, Database};
use crate::responses::html_error_response;
use crate::router::handle;
use crate::state::AppState;
use crate::storage::SupabaseStorage;
use astra::Server;
use std::sync::Arc;

mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod forms;
mod logging;
mod request;
mod responses;
mod router;
mod state;
mod storage;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Resolve configuration; a missing storage URL or key is fatal
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.log_level);

    // 2️⃣ Database handle + schema
    let db = Database::new(config.database_path.clone());
    if let Err(e) = init_db(&db) {
        tracing::error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    // 3️⃣ Backends
    let storage = match SupabaseStorage::new(&config.supabase_url, &config.supabase_anon_key) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::error!(error = %e, "storage client setup failed");
            std::process::exit(1);
        }
    };
    let identity = match SupabaseAuth::new(&config.supabase_url, &config.supabase_anon_key) {
        Ok(identity) => Arc::new(identity),
        Err(e) => {
            tracing::error!(error = %e, "identity client setup failed");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    let state = AppState::new(config, db, storage, identity);

    // Not fatal: only uploads need the bucket.
    if let Err(e) = state.images.initialize() {
        tracing::warn!(error = %e, bucket = state.images.bucket(), "image bucket not ready");
    }

    // 4️⃣ Serve
    tracing::info!(%addr, "starting server");
    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| {
        handle(req, &state).unwrap_or_else(html_error_response)
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down");
}
