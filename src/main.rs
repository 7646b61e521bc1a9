use anyhow::Context;
use clap::{Parser, Subcommand};
use faqbot_core::config::Config;
use faqbot_server::{Assistant, ChatRequest};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "faqbot", about = "FAQ assistant that answers questions from a fixed knowledge base")]
struct Cli {
    /// Config file (defaults to ~/.config/faqbot/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/faqbot-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the chat endpoint over HTTP.
    Serve {
        /// Listen address, overriding `[server] bind`.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Answer one message and print the JSON reply.
    Ask { message: String },
    /// Look up one entry by id and print the JSON reply.
    Lookup { id: String },
    /// Print the initial topic suggestions as JSON.
    Topics,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to built-in config");
            Config::defaults()
        }),
    };
    let assistant =
        Assistant::from_config(&config.assistant).context("failed to load knowledge base")?;

    match cli.command {
        Command::Serve { bind } => {
            let bind = bind.unwrap_or(config.server.bind);
            tokio::runtime::Runtime::new()?.block_on(faqbot_server::serve(assistant, &bind))
        }
        Command::Ask { message } => print_json(&assistant.reply(&ChatRequest::ByMessage(message)).body),
        Command::Lookup { id } => print_json(&assistant.reply(&ChatRequest::ById(id)).body),
        Command::Topics => print_json(&assistant.topics()),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/faqbot-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(filter)
            .init();
        tracing::info!("faqbot debug log started, tail -f /tmp/faqbot-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    }
    Ok(())
}
