use crate::engine::{self, Evidence, Extraction, Hit, Laps, Matcher, RuleTable, RunMetrics};
use crate::glyph::{GlyphMask, Symbol};
use crate::{ExtractedFields, GameDefinition, GameId, Reading, ScoreRule, Signature};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

static SIGNATURES: Lazy<Vec<Signature>> = Lazy::new(crate::rules::signatures::rules::get);
static SCORE_RULES: Lazy<Vec<ScoreRule>> = Lazy::new(crate::rules::score::rules::get);
static RULE_TABLE: Lazy<RuleTable<'static>> = Lazy::new(|| RuleTable::new(&SCORE_RULES));

/// What to do when a signature names a game the catalog does not list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownGamePolicy {
    /// Report the match anyway, flagged with `in_catalog = false`.
    #[default]
    Surface,
    /// Report no match and skip extraction.
    Suppress,
}

/// Options that affect detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub unknown_games: UnknownGamePolicy,
    /// Only the first `max_input_bytes` bytes of a paste are scanned.
    pub max_input_bytes: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options { unknown_games: UnknownGamePolicy::Surface, max_input_bytes: 64 * 1024 }
    }
}

/// Suggested score for a paste. Every field is a suggestion the user may
/// still edit before submitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// The detected game, or `None` when no signature matched.
    pub game_id: Option<GameId>,
    /// Whether `game_id` is listed in the catalog the caller supplied.
    pub in_catalog: bool,
    pub solved: Option<bool>,
    pub attempts: Option<u32>,
    pub score: Option<u32>,
    pub time_seconds: Option<u32>,
}

impl Suggestion {
    pub fn fields(&self) -> ExtractedFields {
        ExtractedFields {
            solved: self.solved,
            attempts: self.attempts,
            score: self.score,
            time_seconds: self.time_seconds,
        }
    }

    fn new(game_id: Option<GameId>, in_catalog: bool, fields: ExtractedFields) -> Self {
        Suggestion {
            game_id,
            in_catalog,
            solved: fields.solved,
            attempts: fields.attempts,
            score: fields.score,
            time_seconds: fields.time_seconds,
        }
    }
}

/// Debug details of one run, returned by [`detect_and_extract_verbose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunDetails {
    /// The paste after glyph normalization.
    pub normalized: String,
    /// Tile rows found in the paste.
    pub rows: Vec<Vec<Symbol>>,
    /// Every glyph seen.
    pub glyphs: GlyphMask,
    /// Position of the winning signature in the priority list.
    pub signature_rank: Option<usize>,
    /// What made the signature fire: the phrase found, or `"glyphs"`.
    pub matched_by: Option<String>,
    /// Name of the score rule that ran.
    pub rule: Option<&'static str>,
    /// What the rule read, before it was mapped to fields.
    pub reading: Option<Reading>,
    pub total: Duration,
    pub prepare: Duration,
    pub detect: Duration,
    pub extract: Duration,
}

/// Result of [`detect_and_extract_verbose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionVerbose {
    pub suggestion: Suggestion,
    pub details: RunDetails,
}

/// Identify the game that produced `text`, ignoring any catalog.
///
/// # Example
/// ```
/// use gamepaste::{GameId, detect};
///
/// assert_eq!(detect("Wordle 1,234 4/6"), Some(GameId::Wordle));
/// assert_eq!(detect("asdf qwer"), None);
/// ```
pub fn detect(text: &str) -> Option<GameId> {
    let paste = engine::prepare(text, Options::default().max_input_bytes);
    Matcher::new(&SIGNATURES).detect(&paste).map(|hit| hit.game)
}

/// Run `game`'s score rule over `text` without detection.
pub fn extract(game: GameId, text: &str) -> ExtractedFields {
    let paste = engine::prepare(text, Options::default().max_input_bytes);
    RULE_TABLE.extract(game, &paste).fields
}

/// Detect the game and extract its score, with default [`Options`].
///
/// `known_games` is the live catalog. A detected game missing from it is still
/// reported, with `in_catalog = false`.
///
/// # Example
/// ```
/// use gamepaste::{Catalog, GameId, detect_and_extract};
///
/// let catalog = Catalog::builtin();
/// let out = detect_and_extract("Wordle 1,234 X/6", catalog.games());
/// assert_eq!(out.game_id, Some(GameId::Wordle));
/// assert_eq!(out.solved, Some(false));
/// assert_eq!(out.attempts, Some(6));
/// ```
pub fn detect_and_extract(text: &str, known_games: &[GameDefinition]) -> Suggestion {
    detect_and_extract_with(text, known_games, &Options::default())
}

/// Detect the game and extract its score with explicit `options`.
pub fn detect_and_extract_with(text: &str, known_games: &[GameDefinition], options: &Options) -> Suggestion {
    let paste = engine::prepare(text, options.max_input_bytes);
    let hit = accepted(Matcher::new(&SIGNATURES).detect(&paste), known_games, options);
    let extraction = hit.map(|(h, _)| RULE_TABLE.extract(h.game, &paste));
    build(hit, extraction)
}

/// Like [`detect_and_extract_with`], plus per-stage timings and the
/// intermediate state that led to the result.
pub fn detect_and_extract_verbose(text: &str, known_games: &[GameDefinition], options: &Options) -> SuggestionVerbose {
    let mut laps = Laps::start();
    let paste = engine::prepare(text, options.max_input_bytes);
    let mut metrics = RunMetrics { prepare: laps.lap(), ..Default::default() };

    let matcher = Matcher::new(&SIGNATURES);
    let hit = matcher.detect(&paste);
    metrics.detect = laps.lap();
    let kept = accepted(hit, known_games, options);
    let extraction = kept.map(|(h, _)| RULE_TABLE.extract(h.game, &paste));
    metrics.extract = laps.lap();
    metrics.total = laps.total();

    let suggestion = build(kept, extraction);
    let details = RunDetails {
        normalized: paste.text.to_string(),
        rows: paste.rows.clone(),
        glyphs: paste.trigger.glyphs,
        signature_rank: hit.map(|h| h.rank),
        matched_by: hit.map(|h| match h.evidence {
            Evidence::Phrase(phrase) => phrase.to_string(),
            Evidence::Glyphs => "glyphs".to_string(),
        }),
        rule: extraction.and_then(|e| e.rule),
        reading: extraction.and_then(|e| e.reading),
        total: metrics.total,
        prepare: metrics.prepare,
        detect: metrics.detect,
        extract: metrics.extract,
    };

    SuggestionVerbose { suggestion, details }
}

/// Apply the catalog policy to a hit. Returns the hit and whether the catalog
/// lists it, or `None` when the hit is suppressed.
fn accepted(hit: Option<Hit>, known_games: &[GameDefinition], options: &Options) -> Option<(Hit, bool)> {
    let hit = hit?;
    let listed = known_games.iter().any(|def| def.game_id() == Some(hit.game));
    if !listed {
        debug!(target: "gamepaste", game = %hit.game, policy = ?options.unknown_games, "detected game not in catalog");
        if options.unknown_games == UnknownGamePolicy::Suppress {
            return None;
        }
    }
    Some((hit, listed))
}

fn build(kept: Option<(Hit, bool)>, extraction: Option<Extraction>) -> Suggestion {
    match kept {
        Some((hit, listed)) => {
            Suggestion::new(Some(hit.game), listed, extraction.map(|e| e.fields).unwrap_or_default())
        }
        None => Suggestion::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn detect_and_extract_reads_wordle() {
        let catalog = Catalog::builtin();
        let out = detect_and_extract("Wordle 1,234 4/6", catalog.games());
        assert_eq!(out.game_id, Some(GameId::Wordle));
        assert!(out.in_catalog);
        assert_eq!(out.solved, Some(true));
        assert_eq!(out.attempts, Some(4));
        assert_eq!(out.score, None);
        assert_eq!(out.time_seconds, None);
    }

    #[test]
    fn unknown_game_is_surfaced_by_default() {
        let catalog = Catalog::from_games(vec![GameDefinition::new("CONNECTIONS", "Connections")]).unwrap();
        let out = detect_and_extract("Wordle 1,234 4/6", catalog.games());
        assert_eq!(out.game_id, Some(GameId::Wordle));
        assert!(!out.in_catalog);
        assert_eq!(out.attempts, Some(4));
    }

    #[test]
    fn unknown_game_can_be_suppressed() {
        let options = Options { unknown_games: UnknownGamePolicy::Suppress, ..Default::default() };
        let out = detect_and_extract_with("Wordle 1,234 4/6", &[], &options);
        assert_eq!(out, Suggestion::default());
    }

    #[test]
    fn detected_game_without_score_has_empty_fields() {
        let catalog = Catalog::builtin();
        let out = detect_and_extract("I love Wordle", catalog.games());
        assert_eq!(out.game_id, Some(GameId::Wordle));
        assert!(out.fields().is_empty());
    }

    #[test]
    fn verbose_reports_stages() {
        let catalog = Catalog::builtin();
        let res = detect_and_extract_verbose("#travle #484 +2\n✅✅🟧✅", catalog.games(), &Options::default());
        assert_eq!(res.suggestion.game_id, Some(GameId::Travle));
        assert_eq!(res.suggestion.attempts, Some(2));
        assert_eq!(res.details.matched_by.as_deref(), Some("travle"));
        assert_eq!(res.details.rule, Some("travle (+N extra moves)"));
        assert_eq!(res.details.reading, Some(Reading::Solved { attempts: 2 }));
        assert_eq!(res.details.rows.len(), 1);
        assert!(res.details.prepare + res.details.detect + res.details.extract <= res.details.total);
    }

    #[test]
    fn verbose_and_plain_agree() {
        let catalog = Catalog::builtin();
        let text = "Connections\nPuzzle #123\n🟨🟨🟨🟨\n🟩🟩🟩🟩\n🟦🟦🟦🟦\n🟪🟪🟪🟪";
        let plain = detect_and_extract(text, catalog.games());
        let verbose = detect_and_extract_verbose(text, catalog.games(), &Options::default());
        assert_eq!(plain, verbose.suggestion);
    }

    #[test]
    fn input_bound_cuts_scan() {
        let options = Options { max_input_bytes: 4, ..Default::default() };
        let out = detect_and_extract_with("Wordle 1,234 4/6", &[], &options);
        assert_eq!(out.game_id, None);
    }
}
