use clap::ArgMatches;
use tracing::info;

use botdash_core::events;

use super::helpers::{build_source, resolve_config, runtime};

pub(crate) fn handle_ping_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(matches);
    let source = build_source(&config)?;

    info!(event = "cli.ping_started", base_url = source.base_url());

    match runtime()?.block_on(source.ping()) {
        Ok(reply) => {
            println!("{}", reply);
            info!(event = "cli.ping_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Ping failed: {}", e);
            events::log_failure("cli.ping_failed", &e);
            Err(e.into())
        }
    }
}
