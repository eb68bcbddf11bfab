//! Lahja — dialect identification server.

use std::sync::Arc;

use lahja_core::LahjaConfig;
use lahja_lexicon::Language;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

fn print_help() {
    println!("Lahja — dialect identification server");
    println!();
    println!("Usage: lahja [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Start the server");
    println!("  classify <language> <text>    Classify text once and print JSON");
    println!("  help                          Show this help message");
    println!();
    println!("Environment:");
    println!("  LAHJA_CONFIG              Settings file (default config/lahja.json)");
    println!("  PORT                      HTTP port");
    println!("  LAHJA_WEIGHTING           position-tiered | phrase-aware-tiered");
    println!("  LAHJA_REMOTE_URL          Remote classifier endpoint");
    println!("  LAHJA_REMOTE_TIMEOUT_MS   Remote request timeout");
}

async fn classify_once(config: LahjaConfig, language: &str, text: &str) -> anyhow::Result<()> {
    let language: Language = language.parse()?;
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("text must not be empty");
    }

    let state = AppState::new(config)?;
    let classification = state.service().classify(text, language).await?;
    println!("{}", serde_json::to_string_pretty(&classification)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = LahjaConfig::from_env(&LahjaConfig::resolve_path())?;

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "classify" => {
                if args.len() < 4 {
                    eprintln!("Usage: lahja classify <arabic|english> <text...>");
                    std::process::exit(1);
                }
                let text = args[3..].join(" ");
                return classify_once(config, &args[2], &text).await;
            }
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'lahja help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let port = config.port;
    info!("Configuration: {}", config.config_path.display());

    let state = Arc::new(AppState::new(config)?);
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Lahja server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
