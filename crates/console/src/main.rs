use std::io;

use anyhow::Context;

use bankms_accounts::AccountRegistry;
use bankms_console::{Console, ConsoleConfig};

fn main() -> anyhow::Result<()> {
    let (config, warnings) = ConsoleConfig::from_env();
    bankms_observability::init(&config.log);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(AccountRegistry::new(), stdin.lock(), stdout.lock());
    console.run().context("console session failed")?;

    tracing::info!(accounts = console.registry().len(), "session ended");
    Ok(())
}
