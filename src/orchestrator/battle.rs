//! Both verses of a battle round.

use serde::{Deserialize, Serialize};

use crate::error::RoastError;
use crate::types::{Actor, VerseResult};

use super::VerseOrchestrator;

/// Verses for the two sides, in presentation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleVerses {
    /// `first` roasting `second`.
    pub first: VerseResult,
    /// `second` roasting `first`.
    pub second: VerseResult,
}

impl VerseOrchestrator {
    /// Generate both sides of a round concurrently. The two calls share no
    /// state; ordering is imposed only on the returned pair.
    pub async fn generate_battle(
        &self,
        first: &Actor,
        second: &Actor,
    ) -> Result<BattleVerses, RoastError> {
        first.validate("first")?;
        second.validate("second")?;
        if first == second {
            return Err(RoastError::invalid_input("an actor cannot battle itself"));
        }

        let (first_verse, second_verse) = futures::join!(
            self.generate_verse(first, second),
            self.generate_verse(second, first)
        );

        Ok(BattleVerses {
            first: first_verse?,
            second: second_verse?,
        })
    }
}
