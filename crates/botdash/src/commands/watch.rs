use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use clap::ArgMatches;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::mpsc;
use tracing::{info, warn};

use botdash_core::config::DashConfig;
use botdash_core::snapshot::format_datetime;
use botdash_core::{
    HttpStatusSource, PageDocument, PollReport, PollerState, StatusPoller, Visibility,
};

use super::helpers::{build_source, resolve_config, runtime};
use crate::page::render_page;

/// How long in-flight polls get to finish once the watch loop exits.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// A line typed on stdin while watching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatchCommand {
    Hide,
    Show,
    Quit,
}

fn parse_watch_command(line: &str) -> Option<WatchCommand> {
    match line.trim().to_lowercase().as_str() {
        "hide" | "h" => Some(WatchCommand::Hide),
        "show" | "s" => Some(WatchCommand::Show),
        "quit" | "q" | "exit" => Some(WatchCommand::Quit),
        _ => None,
    }
}

pub(crate) fn handle_watch_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(matches);
    let source = Arc::new(build_source(&config)?);

    info!(
        event = "cli.watch_started",
        base_url = source.base_url(),
        interval_ms = config.poller.interval().as_millis() as u64
    );

    let runtime = runtime()?;
    let result = runtime.block_on(run_watch(source, &config));
    // Don't wait on polls still in flight past the grace period
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    result?;

    info!(event = "cli.watch_completed");
    Ok(())
}

async fn run_watch(
    source: Arc<HttpStatusSource>,
    config: &DashConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut poller = StatusPoller::new(source, PageDocument::dashboard(), &config.poller)?;
    let mut reports = poller.subscribe();
    let document = poller.document();
    let interval_secs = poller.interval().as_secs_f64();
    poller.start();

    let mut stdin = spawn_stdin_reader()?;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut last_report: Option<PollReport> = None;

    loop {
        tokio::select! {
            report = reports.recv() => match report {
                Ok(report) => {
                    let page = document.lock().await.clone();
                    redraw(&page, poller.state(), Some(&report), interval_secs)?;
                    last_report = Some(report);
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(event = "cli.watch_reports_lagged", skipped = skipped);
                }
                Err(RecvError::Closed) => break,
            },
            line = stdin.recv() => match line {
                Some(line) => match parse_watch_command(&line) {
                    Some(WatchCommand::Hide) => {
                        poller.set_visibility(Visibility::Hidden);
                        let page = document.lock().await.clone();
                        redraw(&page, poller.state(), last_report.as_ref(), interval_secs)?;
                    }
                    Some(WatchCommand::Show) => poller.set_visibility(Visibility::Visible),
                    Some(WatchCommand::Quit) => break,
                    None if line.trim().is_empty() => {}
                    None => eprintln!("Unknown command '{}'. Use hide, show or quit.", line.trim()),
                },
                // stdin closed
                None => break,
            },
            _ = &mut ctrl_c => break,
        }
    }

    poller.shutdown();
    Ok(())
}

/// Forward stdin lines from a detached thread. The channel closes at EOF or
/// on a read error.
///
/// The thread is never joined. A read blocked on an open terminal ends with
/// the process, so quitting never waits for another line.
fn spawn_stdin_reader() -> std::io::Result<mpsc::UnboundedReceiver<String>> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::Builder::new()
        .name("botdash-stdin".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        })?;
    Ok(rx)
}

fn redraw(
    page: &PageDocument,
    state: PollerState,
    report: Option<&PollReport>,
    interval_secs: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = std::io::stdout();
    write!(stdout, "\x1B[2J\x1B[1;1H")?;
    writeln!(stdout, "{}", render_page(page))?;

    if let Some(report) = report {
        let result = if report.outcome.is_success() {
            "ok"
        } else {
            "failed"
        };
        writeln!(
            stdout,
            "\nLast poll: {} ({})",
            format_datetime(&report.completed_at),
            result
        )?;
    }

    match state {
        PollerState::Active => writeln!(
            stdout,
            "Refreshing every {}s. Type 'hide' to pause, 'quit' or Ctrl+C to exit.",
            interval_secs
        )?,
        PollerState::Paused => writeln!(
            stdout,
            "Paused. Type 'show' to resume, 'quit' or Ctrl+C to exit."
        )?,
    }

    stdout.flush()?;
    Ok(())
}
