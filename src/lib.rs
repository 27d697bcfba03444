//! roastline: rap-battle verse generation
//!
//! Turns "roast your opponent" into a clean, line-bounded verse despite an
//! unreliable upstream text generator. Raw output is sanitized (intros,
//! stage directions and markdown removed, line endings normalized), checked
//! for refusal language, retried once with a simplified prompt, and replaced
//! by a template verse when everything else fails.
//!
//! # Quick Start
//!
//! ```no_run
//! use roastline::prelude::*;
//!
//! # async fn example() -> roastline::error::Result<()> {
//! let config = RoastConfig::from_env()?;
//! let orchestrator = VerseOrchestrator::from_config(&config)?;
//!
//! let speaker = Actor::new("GPT-4o", "openai", "gpt-4o");
//! let opponent = Actor::new("Claude", "anthropic", "claude-3-5-sonnet");
//! let result = orchestrator.generate_verse(&speaker, &opponent).await?;
//! println!("{}", result.verse);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod orchestrator;
pub mod prelude;
pub mod prompt;
pub mod sanitize;
pub mod types;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
