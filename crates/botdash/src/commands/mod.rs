use clap::ArgMatches;
use tracing::error;

use botdash_core::events;

pub mod helpers;

mod completions;
mod health;
mod keepalive;
mod once;
mod ping;
mod watch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches),
        Some(("once", sub_matches)) => once::handle_once_command(sub_matches),
        Some(("health", sub_matches)) => health::handle_health_command(sub_matches),
        Some(("ping", sub_matches)) => ping::handle_ping_command(sub_matches),
        Some(("keepalive", sub_matches)) => keepalive::handle_keepalive_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    if let Err(e) = &result {
        events::log_app_error(&**e);
    }
    events::log_app_shutdown();
    result
}
