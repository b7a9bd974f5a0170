use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::net::SocketAddr;
use std::sync::Arc;
use storyteller::app::App;
use storyteller::models::{parse_bind_addr, Config};
use storyteller::render::{render_page, render_text};
use storyteller::session::CycleOutcome;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "storyteller")]
#[command(about = "Generate a short illustrated story from a prompt")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the story page in the browser.
    Serve {
        /// Listen address, overriding STORY_BIND_ADDR.
        #[arg(long, value_name = "HOST:PORT", value_parser = parse_bind_arg)]
        bind: Option<SocketAddr>,
    },
    /// Run a single generation and print the result.
    Generate {
        prompt: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

fn parse_bind_arg(input: &str) -> std::result::Result<SocketAddr, String> {
    parse_bind_addr(input).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storyteller=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app = Arc::new(App::new(&config));

    match args.command {
        Command::Serve { bind } => {
            let addr = bind.unwrap_or(config.bind_addr);
            info!("Starting storyteller web UI");
            storyteller::web::serve(app, addr).await?;
        }
        Command::Generate { prompt, format } => {
            app.set_prompt(prompt).await;
            let outcome = app.submit().await;
            let state = app.snapshot().await;

            match format {
                OutputFormat::Text => print!("{}", render_text(&state)),
                OutputFormat::Html => print!("{}", render_page(&state)),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&state.to_json())?)
                }
            }

            match outcome {
                CycleOutcome::Completed { .. } | CycleOutcome::EmptyResult => {}
                CycleOutcome::Skipped(reason) => {
                    error!("Nothing generated: {:?}", reason);
                    std::process::exit(2);
                }
                CycleOutcome::Failed => std::process::exit(1),
            }
        }
    }

    Ok(())
}
