use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("botdash")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Live status dashboard for the deployment bot")
        .long_about("botdash polls the bot's web server for its status document and renders it as a small dashboard: whether the bot is online, who it is logged in as, how many guilds it serves and the most recent deployment.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .help("Base URL of the bot's web server (overrides config)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("watch")
                .about("Poll the status endpoint and redraw the dashboard after every poll")
                .long_about("Poll the status endpoint and redraw the dashboard after every poll.\n\nType 'hide' to pause polling, 'show' to resume with an immediate refresh and 'quit' to exit. Ctrl+C also exits.")
        )
        .subcommand(
            Command::new("once")
                .about("Poll the status endpoint once and print the dashboard")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the raw status snapshot as JSON")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("health")
                .about("Show the web server's health report")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("ping")
                .about("Check that the web server answers its liveness check")
        )
        .subcommand(
            Command::new("keepalive")
                .about("Ping the web server periodically so it stays awake")
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .short('i')
                        .help("Seconds between pings (overrides config, default: 60)")
                        .value_parser(clap::value_parser!(u64).range(1..))
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(Shell))
                )
        )
}
