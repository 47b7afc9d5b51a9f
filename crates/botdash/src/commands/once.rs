use std::sync::Arc;

use clap::ArgMatches;
use tracing::info;

use botdash_core::{
    ConfigError, DashError, PageDocument, PollOutcome, StatusPoller, StatusSource, events,
};

use super::helpers::{build_source, resolve_config, runtime};
use crate::page::print_page;

#[derive(serde::Serialize)]
struct FailureJson {
    error: String,
    error_code: &'static str,
}

pub(crate) fn handle_once_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let config = resolve_config(matches);
    let source = Arc::new(build_source(&config)?);

    info!(
        event = "cli.once_started",
        endpoint = %source.endpoint(),
        json_output = json_output
    );

    if json_output {
        return match runtime()?.block_on(source.fetch_status()) {
            Ok(snapshot) => {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
                info!(event = "cli.once_completed", is_ready = snapshot.is_ready);
                Ok(())
            }
            Err(e) => {
                let failure = FailureJson {
                    error: e.to_string(),
                    error_code: e.error_code(),
                };
                println!("{}", serde_json::to_string_pretty(&failure)?);
                events::log_failure("cli.once_failed", &e);
                Err(e.into())
            }
        };
    }

    let (outcome, page) = runtime()?.block_on(async {
        let poller = StatusPoller::new(source, PageDocument::dashboard(), &config.poller)?;
        let outcome = poller.poll_once().await;
        let page = poller.document().lock().await.clone();
        Ok::<_, ConfigError>((outcome, page))
    })?;

    print_page(&page);

    match outcome {
        PollOutcome::Rendered { is_ready } => {
            info!(event = "cli.once_completed", is_ready = is_ready);
            Ok(())
        }
        PollOutcome::Failed(e) => {
            eprintln!("❌ Could not fetch status: {}", e);
            events::log_failure("cli.once_failed", &e);
            Err(e.into())
        }
    }
}
