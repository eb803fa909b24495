//! chatcmd - console bot
//!
//! Drives the dispatch engine from stdin. Lines starting with `/` are
//! interactions, lines starting with `:` are console commands, anything
//! else is a chat message from the configured console user.

mod console;
mod demo;

use anyhow::Context as _;
use chatcmd::config::{Config, LoggingConfig, validate};
use chatcmd::{DispatchService, metrics, schema};
use console::{ConsoleHost, ConsoleInput};
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Queue depth between stdin and the dispatch loop.
const EVENT_QUEUE: usize = 64;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = if Path::new(&config_path).exists() {
        Config::load(&config_path).with_context(|| format!("loading {config_path}"))?
    } else {
        Config::default()
    };

    init_tracing(&config.logging);
    metrics::init();

    if let Err(errors) = validate(&config) {
        for e in &errors {
            error!(path = %config_path, error = %e, "Invalid configuration");
        }
        anyhow::bail!("{} configuration error(s) in {config_path}", errors.len());
    }

    info!(
        prefix = %config.bot.prefix,
        restricted_server = config.bot.restricted_server.as_deref(),
        "Starting chatcmd"
    );

    let service = Arc::new(DispatchService::new(
        config.bot.clone(),
        Arc::new(ConsoleHost::default()),
    ));
    demo::register(&service)?;

    let mut input = ConsoleInput::new(&config.console);
    service.publish_interaction_commands(input.server()).await?;

    let (tx, rx) = mpsc::channel(EVENT_QUEUE);
    let dispatcher = tokio::spawn(Arc::clone(&service).run(rx));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let event = match line.chars().next() {
            Some(':') => {
                console_command(&line[1..], &service)?;
                continue;
            }
            Some('/') => match input.interaction(line, service.registry()) {
                Ok(event) => event,
                Err(e) => {
                    warn!(error = %e, "Invalid interaction");
                    continue;
                }
            },
            _ => input.text(line),
        };

        if tx.send(event).await.is_err() {
            break;
        }
    }

    drop(tx);
    dispatcher.await?;
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn console_command(command: &str, service: &DispatchService) -> anyhow::Result<()> {
    match command.trim() {
        "metrics" => print!("{}", metrics::gather_metrics()),
        "commands" => {
            let data = schema::interaction_commands(service.registry());
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        "stats" => {
            for (name, count) in service.registry().command_stats() {
                println!("{name}: {count}");
            }
        }
        "names" => {
            let names: Vec<_> = service.registry().all_names().into_iter().collect();
            println!("{}", names.join(" "));
        }
        other => warn!(command = other, "Unknown console command"),
    }
    Ok(())
}
