use std::sync::Arc;

use spu_loyalty_service::adapters::store::memory::MemoryMemberStore;
use spu_loyalty_service::config::{load_env_file, ServerConfig};
use spu_loyalty_service::{domain, http, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_env_file();
    let config = ServerConfig::from_env()?;

    telemetry::init_tracing();

    let accounts = domain::seed_accounts();
    info!(members = accounts.len(), "seeding member accounts");
    let store = Arc::new(MemoryMemberStore::new(accounts));

    http::start_server(store, config).await?;

    Ok(())
}
