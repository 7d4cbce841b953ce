use std::time::Duration;

use configs::DatabaseConfig;
use mongodb::{bson::doc, options::ClientOptions, Client, Database};
use tracing::info;

/// Connect to MongoDB and verify the deployment answers a `ping`.
///
/// The database named in the connection string wins over `cfg.name`.
/// The returned client owns the connection pool; call `Client::shutdown`
/// once no more requests will be issued.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<(Client, Database)> {
    let mut opts = ClientOptions::parse(&cfg.url).await?;
    opts.app_name = Some(cfg.app_name.clone());
    opts.min_pool_size = Some(cfg.min_pool_size);
    opts.max_pool_size = Some(cfg.max_pool_size);
    opts.connect_timeout = Some(Duration::from_secs(cfg.connect_timeout_secs));
    opts.server_selection_timeout = Some(Duration::from_secs(cfg.server_selection_timeout_secs));
    let name = opts.default_database.clone().unwrap_or_else(|| cfg.name.clone());

    let client = Client::with_options(opts)?;
    let db = client.database(&name);
    db.run_command(doc! { "ping": 1 }).await?;
    info!(service = "server", event = "db_connected", database = %name, "MongoDB connected");
    Ok((client, db))
}
