//! roastline CLI binary entry point.

use clap::Parser;
use roastline::cli::{Cli, Commands, MatchupArgs};
use roastline::client::GatewayClient;
use roastline::config::RoastConfig;
use roastline::orchestrator::VerseOrchestrator;
use roastline::types::VerseResult;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => RoastConfig::load(path)?,
        None => RoastConfig::from_env()?,
    };
    if let Some(lines) = cli.lines {
        config.verse.target_lines = lines;
    }

    match cli.command {
        Commands::Verse(args) => handle_verse(&config, args).await,
        Commands::Battle(args) => handle_battle(&config, args).await,
        Commands::Health => handle_health(&config).await,
    }
}

async fn handle_verse(
    config: &RoastConfig,
    args: MatchupArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let orchestrator = VerseOrchestrator::from_config(config)?;
    let result = orchestrator.generate_verse(&args.speaker, &args.opponent).await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_verse(&args.speaker.name, &result);
    }
    Ok(())
}

async fn handle_battle(
    config: &RoastConfig,
    args: MatchupArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let orchestrator = VerseOrchestrator::from_config(config)?;
    let verses = orchestrator
        .generate_battle(&args.speaker, &args.opponent)
        .await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&verses)?);
    } else {
        print_verse(&args.speaker.name, &verses.first);
        println!();
        print_verse(&args.opponent.name, &verses.second);
    }
    Ok(())
}

async fn handle_health(config: &RoastConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = GatewayClient::from_settings(&config.gateway)?;
    let health = client.health_check().await?;
    println!(
        "{} {} (status {}, checked {})",
        client.base_url(),
        if health.healthy { "healthy" } else { "unhealthy" },
        health.status,
        health.checked_at.to_rfc3339()
    );
    if !health.healthy {
        std::process::exit(2);
    }
    Ok(())
}

fn print_verse(name: &str, result: &VerseResult) {
    println!("{name}:");
    println!("{}", result.verse);
    let provenance = match result.fallback_reason {
        Some(reason) => format!("fallback ({reason})"),
        None => "generated".to_string(),
    };
    eprintln!(
        "[{provenance}, {} attempt(s), {}ms, {} tokens]",
        result.attempts, result.total_latency_ms, result.tokens_used
    );
}
