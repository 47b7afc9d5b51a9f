use std::time::Duration;

use clap::ArgMatches;
use tokio_util::sync::CancellationToken;
use tracing::info;

use botdash_core::KeepAlive;

use super::helpers::{build_source, resolve_config, runtime};

pub(crate) fn handle_keepalive_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(matches);
    let source = build_source(&config)?;
    let base_url = source.base_url().to_string();

    let mut keepalive = KeepAlive::new(source, &config.keepalive);
    if let Some(secs) = matches.get_one::<u64>("interval") {
        keepalive = keepalive.with_interval(Duration::from_secs(*secs));
    }

    info!(
        event = "cli.keepalive_started",
        base_url = %base_url,
        interval_secs = keepalive.interval().as_secs()
    );
    println!(
        "💓 Pinging {} every {}s. Press Ctrl+C to stop.",
        base_url,
        keepalive.interval().as_secs()
    );

    let pings = runtime()?.block_on(async {
        let shutdown = CancellationToken::new();
        let trigger = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                trigger.cancel();
            }
        });
        keepalive.run(shutdown).await
    });

    println!("⏹️ Keep-alive stopped after {} pings", pings);
    info!(event = "cli.keepalive_completed", pings = pings);
    Ok(())
}
