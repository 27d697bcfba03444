//! CLI definitions for roastline.

use clap::{Args, Parser, Subcommand};

use crate::types::Actor;

/// roastline CLI
#[derive(Parser, Debug)]
#[command(name = "roastline", version, about = "Generate AI rap battle verses")]
pub struct Cli {
    /// Optional TOML config file (environment variables still override it)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Override the verse line target
    #[arg(long, global = true)]
    pub lines: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one verse: speaker roasting opponent
    Verse(MatchupArgs),
    /// Generate both verses of a round
    Battle(MatchupArgs),
    /// Check that the gateway is reachable
    Health,
}

/// Two actors given as `name:provider:model`.
#[derive(Args, Debug)]
pub struct MatchupArgs {
    /// First actor, e.g. "GPT-4o:openai:gpt-4o"
    #[arg(value_parser = parse_actor)]
    pub speaker: Actor,

    /// Second actor, e.g. "Claude:anthropic:claude-3-5-sonnet"
    #[arg(value_parser = parse_actor)]
    pub opponent: Actor,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parse `name:provider:model`. The model part may itself contain colons.
pub fn parse_actor(raw: &str) -> Result<Actor, String> {
    let mut parts = raw.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(provider), Some(model)) => {
            let actor = Actor::new(name.trim(), provider.trim(), model.trim());
            actor.validate("actor").map_err(|e| e.to_string())?;
            Ok(actor)
        }
        _ => Err(format!(
            "invalid actor '{raw}': use name:provider:model (e.g. GPT-4o:openai:gpt-4o)"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actor_triplet() {
        let actor = parse_actor("Llama:groq:llama-3.1:70b").unwrap();
        assert_eq!(actor, Actor::new("Llama", "groq", "llama-3.1:70b"));
    }

    #[test]
    fn rejects_incomplete_actor() {
        assert!(parse_actor("Claude:anthropic").is_err());
        assert!(parse_actor("::gpt-4o").is_err());
    }
}
