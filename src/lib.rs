extern crate self as gamepaste;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[macro_use]
mod macros;
mod api;
mod catalog;
mod draft;
mod engine;
pub mod game_day;
pub mod glyph;
mod rules;

pub use api::{
    Options, RunDetails, Suggestion, SuggestionVerbose, UnknownGamePolicy, detect, detect_and_extract,
    detect_and_extract_verbose, detect_and_extract_with, extract,
};
pub use catalog::{Catalog, CatalogError, GameDefinition};
pub use draft::{DraftError, ScoreDraft, ScoreRequest};

use crate::engine::TriggerInfo;
use crate::glyph::Symbol;

// --- Public types -------------------------------------------------------------

/// Stable identifier of a supported game.
///
/// The string form (`WORDLE`, `MINUTE_CRYPTIC`, ...) is the key used by game
/// catalogs and by the downstream score store.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameId {
    Wordle,
    Connections,
    Contexto,
    Semantle,
    Horse,
    Travle,
    Worldle,
    MinuteCryptic,
    Countryle,
    Spotle,
    Bandle,
}

/// What a single extraction rule read from a paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// Solved; `attempts` uses the game's own unit (guesses, rows, extra
    /// moves, hint equivalents).
    Solved { attempts: u32 },
    /// Not solved. Some formats report the cap they ran into, others nothing.
    Failed { attempts: Option<u32> },
    /// Percentage-scored result. These games have no failure state.
    Percent { score: u32 },
}

/// Score fields suggested for a paste. Every field is independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    pub solved: Option<bool>,
    pub attempts: Option<u32>,
    pub score: Option<u32>,
    pub time_seconds: Option<u32>,
}

impl ExtractedFields {
    /// True when nothing could be read (the game was detected but its score
    /// was not).
    pub fn is_empty(&self) -> bool {
        self.solved.is_none() && self.attempts.is_none() && self.score.is_none() && self.time_seconds.is_none()
    }
}

impl From<Reading> for ExtractedFields {
    fn from(reading: Reading) -> Self {
        match reading {
            Reading::Solved { attempts } => {
                ExtractedFields { solved: Some(true), attempts: Some(attempts), ..Default::default() }
            }
            Reading::Failed { attempts } => ExtractedFields { solved: Some(false), attempts, ..Default::default() },
            Reading::Percent { score } => ExtractedFields { solved: Some(true), score: Some(score), ..Default::default() },
        }
    }
}

// --- Internal types -------------------------------------------------------------

/// A paste prepared for matching: its glyph-normalized form and the tile rows
/// found in it.
#[derive(Debug, Clone)]
pub(crate) struct Paste<'a> {
    /// The bounded input with every glyph spelling folded to canonical emoji.
    pub text: Cow<'a, str>,
    /// Lowercased `text`, used for phrase tests.
    pub lower: String,
    /// Lines made up only of tile symbols, in order.
    pub rows: Vec<Vec<Symbol>>,
    /// Coarse signals from the trigger scan.
    pub trigger: TriggerInfo,
}

impl Paste<'_> {
    /// All tiles of all rows, in reading order.
    pub fn tiles(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.rows.iter().flatten().copied()
    }
}

/// Cheap glyph-set test evaluated only when a signature's name tokens miss.
pub(crate) type GlyphPredicate = fn(&Paste<'_>) -> bool;

/// How one game announces itself in a paste.
///
/// `phrases` are lowercase substrings (names, hashtags, domains). `glyphs` is
/// an optional structural test over tile rows, gated by `buckets` so that it
/// only runs when the trigger scan saw the prerequisites.
pub(crate) struct Signature {
    pub game: GameId,
    pub phrases: &'static [&'static str],
    pub buckets: u8,
    pub glyphs: Option<GlyphPredicate>,
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signature")
            .field("game", &self.game)
            .field("phrases", &self.phrases)
            .field("buckets", &self.buckets)
            .field("glyphs", &self.glyphs.map(|_| "<predicate>"))
            .finish()
    }
}

pub(crate) type Production = Box<dyn Fn(&Paste<'_>, Option<u32>) -> Option<Reading> + Send + Sync>;

/// A per-game extraction rule: the game it serves, a name for traces, the
/// game's guess cap (if it has one), whether the share carries a clock, and
/// the production that turns a paste into a [`Reading`].
pub(crate) struct ScoreRule {
    pub game: GameId,
    pub name: &'static str,
    pub cap: Option<u32>,
    /// The game cannot be failed and its share may print a clock. The clock
    /// alone counts as a solve.
    pub clock: bool,
    pub production: Production,
}

impl std::fmt::Debug for ScoreRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreRule")
            .field("game", &self.game)
            .field("name", &self.name)
            .field("cap", &self.cap)
            .field("clock", &self.clock)
            .field("production", &"<function>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn game_ids_round_trip_through_strings() {
        for game in GameId::iter() {
            assert_eq!(GameId::from_str(&game.to_string()).ok(), Some(game));
        }
        assert_eq!(GameId::MinuteCryptic.to_string(), "MINUTE_CRYPTIC");
        assert_eq!(GameId::from_str("wordle").ok(), Some(GameId::Wordle));
        assert!(GameId::from_str("HEARDLE").is_err());
    }

    #[test]
    fn readings_map_to_fields() {
        let solved = ExtractedFields::from(Reading::Solved { attempts: 4 });
        assert_eq!(solved, ExtractedFields { solved: Some(true), attempts: Some(4), ..Default::default() });

        let failed = ExtractedFields::from(Reading::Failed { attempts: None });
        assert_eq!(failed.solved, Some(false));
        assert_eq!(failed.attempts, None);

        let percent = ExtractedFields::from(Reading::Percent { score: 100 });
        assert_eq!(percent.score, Some(100));
        assert_eq!(percent.attempts, None);
        assert_eq!(percent.solved, Some(true));
    }

    #[test]
    fn empty_fields_serialize_as_nulls() {
        let json = serde_json::to_value(ExtractedFields::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"solved": null, "attempts": null, "score": null, "timeSeconds": null})
        );
    }
}
