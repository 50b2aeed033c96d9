//! # Rusty-Forum Binary
//!
//! The entry point that assembles the application based on compile-time features.

use actix_web::{web, App, HttpServer};
use rf_api::handlers::AppState;
use rf_api::middleware::{cors_policy, standard_middleware};
use rf_config::{LogSettings, Settings};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "db-memory")]
use rf_db_memory::MemoryForumStore;

#[cfg(not(feature = "db-memory"))]
compile_error!("rusty-forum needs a storage plugin; enable the `db-memory` feature");

fn init_tracing(log: &LogSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// The in-process store, with the configured display names registered.
#[cfg(feature = "db-memory")]
fn memory_store(settings: &Settings) -> Arc<MemoryForumStore> {
    let store = Arc::new(MemoryForumStore::default());
    for (user_id, username) in &settings.users {
        store.register_user(user_id, username);
    }
    tracing::info!(users = settings.users.len(), "user directory seeded");
    store
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load settings and start logging
    let settings = Settings::load()?;
    init_tracing(&settings.log);

    // 2. Initialize the storage implementation
    #[cfg(feature = "db-memory")]
    let store = memory_store(&settings);

    // 3. Wire every use case to the store's ports
    let state = web::Data::new(AppState::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store,
    ));

    let (host, port) = settings.bind_address();
    tracing::info!(%host, port, "rusty-forum starting");

    HttpServer::new(move || {
        App::new()
            .wrap(standard_middleware())
            .wrap(cors_policy())
            .app_data(state.clone())
            .configure(rf_api::configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}
