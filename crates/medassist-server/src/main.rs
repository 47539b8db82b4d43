//! MedAssist: symptom triage assistant.

use std::sync::Arc;

use medassist_core::AppConfig;
use medassist_server::{build_router, cli, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!("MedAssist: symptom triage assistant");
    println!();
    println!("Usage: medassist [command]");
    println!();
    println!("Commands:");
    println!("  (none) | serve           Start the HTTP server");
    println!("  chat                     Sample questions, then interactive mode");
    println!("  ask <text>               Answer a single question");
    println!("  help                     Show this help message");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("serve");

    if matches!(command, "--help" | "-h" | "help") {
        print_help();
        return Ok(());
    }

    let config = AppConfig::from_env()?;
    let model = medassist_chat::create_model(&config.model)?;
    let state = Arc::new(AppState::new(config, model));

    match command {
        "serve" | "--serve" => {
            let addr = state.config.bind_addr();
            let app = build_router(state);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("MedAssist server listening on {}", addr);
            axum::serve(listener, app).await?;
        }
        "chat" | "--chat" => {
            cli::run(&state.service).await?;
        }
        "ask" | "--ask" => {
            let question = args[2..].join(" ");
            if question.trim().is_empty() {
                eprintln!("Usage: medassist ask <text>");
                std::process::exit(1);
            }
            let reply = state.service.respond(&question, None).await;
            println!("{}", reply.text);
        }
        other => {
            eprintln!("Unknown command: {}. Use 'medassist help' for usage.", other);
            std::process::exit(1);
        }
    }

    Ok(())
}
