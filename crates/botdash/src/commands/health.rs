use chrono::{DateTime, Local, Utc};
use clap::ArgMatches;
use tracing::info;

use botdash_core::snapshot::format_datetime;
use botdash_core::{HealthReport, events};

use super::helpers::{build_source, resolve_config, runtime};

pub(crate) fn handle_health_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let config = resolve_config(matches);
    let source = build_source(&config)?;

    info!(
        event = "cli.health_started",
        base_url = source.base_url(),
        json_output = json_output
    );

    let report = match runtime()?.block_on(source.health()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("❌ Health check failed: {}", e);
            events::log_failure("cli.health_failed", &e);
            return Err(e.into());
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_health(&report);
    }

    info!(event = "cli.health_completed", status = %report.status);
    Ok(())
}

fn print_health(report: &HealthReport) {
    println!("Status:      {}", report.status);
    println!("Uptime:      {}", format_uptime(report.uptime));
    println!("Server time: {}", format_server_time(report.timestamp));
}

/// Seconds since the epoch as local wall-clock time.
fn format_server_time(epoch_secs: f64) -> String {
    let millis = (epoch_secs * 1000.0).round() as i64;
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(utc) => format_datetime(&utc.with_timezone(&Local)),
        None => botdash_core::snapshot::INVALID_DATE.to_string(),
    }
}

fn format_uptime(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    let (days, rest) = (total / 86_400, total % 86_400);
    let (hours, rest) = (rest / 3_600, rest % 3_600);
    let (minutes, seconds) = (rest / 60, rest % 60);

    if days > 0 {
        format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
