//! Per-game rule dispatch.
//!
//! Each game owns exactly one [`ScoreRule`]. The table maps a [`GameId`] to its
//! rule; there is no shared fallback parser, so a game without a rule simply
//! extracts nothing.
//!
//! ## Invariants
//!
//! - `by_game` values are indices into `rules`.
//! - When two rules claim the same game, the first one registered wins.
//! - A clock rule fills `time_seconds` whatever the production read, and a
//!   clock on its own counts as a solve.

use crate::rules::score::helpers::clock_seconds;
use crate::{ExtractedFields, GameId, Paste, Reading, ScoreRule};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Output of running one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extraction {
    /// Name of the rule that ran, if the game has one.
    pub rule: Option<&'static str>,
    pub reading: Option<Reading>,
    pub fields: ExtractedFields,
}

#[derive(Debug)]
pub struct RuleTable<'a> {
    rules: &'a [ScoreRule],
    by_game: HashMap<GameId, usize>,
}

impl<'a> RuleTable<'a> {
    pub fn new(rules: &'a [ScoreRule]) -> Self {
        let mut by_game = HashMap::with_capacity(rules.len());
        for (idx, rule) in rules.iter().enumerate() {
            if by_game.contains_key(&rule.game) {
                warn!(target: "gamepaste", game = %rule.game, rule = rule.name, "duplicate score rule ignored");
                continue;
            }
            by_game.insert(rule.game, idx);
        }
        RuleTable { rules, by_game }
    }

    pub fn rule(&self, game: GameId) -> Option<&'a ScoreRule> {
        self.by_game.get(&game).map(|&idx| &self.rules[idx])
    }

    /// Run `game`'s rule over `paste`.
    pub fn extract(&self, game: GameId, paste: &Paste<'_>) -> Extraction {
        let Some(rule) = self.rule(game) else {
            debug!(target: "gamepaste", %game, "no score rule for game");
            return Extraction::default();
        };

        let reading = (rule.production)(paste, rule.cap);
        let mut fields = reading.map(ExtractedFields::from).unwrap_or_default();
        if rule.clock {
            fields.time_seconds = clock_seconds(&paste.text);
            if fields.time_seconds.is_some() && fields.solved.is_none() {
                fields.solved = Some(true);
            }
        }

        debug!(target: "gamepaste", %game, rule = rule.name, ?reading, "score rule applied");
        Extraction { rule: Some(rule.name), reading, fields }
    }
}
