//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `clientdesk_core` linkage and database wiring end to end.
//! - Keep output deterministic for quick local sanity checks.

use anyhow::{anyhow, Context, Result};
use clientdesk_core::{
    init_logging, init_runtime, shutdown_runtime, with_client_service, CoreConfig,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = CoreConfig::from_env().context("failed to load configuration")?;

    if let Some(log_dir) = &config.log_dir {
        let log_dir = log_dir
            .to_str()
            .ok_or_else(|| anyhow!("log directory is not valid UTF-8"))?;
        init_logging(&config.log_level, log_dir).map_err(|err| anyhow!(err))?;
    }

    init_runtime(&config).context("failed to initialize client runtime")?;
    let result = with_client_service(|service| service.list_clients());
    shutdown_runtime();
    let clients = result.context("failed to list clients")?;

    println!("clientdesk_core ping={}", clientdesk_core::ping());
    println!("clientdesk_core version={}", clientdesk_core::core_version());
    println!("clientdesk_core db_path={}", config.db_path.display());
    println!("clientdesk_core clients={}", clients.len());
    Ok(())
}
