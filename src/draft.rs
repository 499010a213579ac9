//! Editable score draft.
//!
//! A draft is what a user edits before submitting: the raw paste plus the
//! score fields. Pasting fills in whatever the engine could read and leaves
//! the rest of the user's input alone.

use crate::{GameDefinition, GameId, Options, Suggestion, detect_and_extract_with};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Highest percentage score.
const MAX_SCORE: u32 = 100;
/// Upper bound on attempts; the semantic games can run into the thousands.
const MAX_ATTEMPTS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("no game selected")]
    MissingGame,
    #[error("unknown game: {0}")]
    UnknownGame(String),
    #[error("result text is blank")]
    BlankResult,
    #[error("score {0} is out of range (0-100)")]
    ScoreOutOfRange(u32),
    #[error("attempts {0} is out of range")]
    AttemptsOutOfRange(u32),
}

/// The submit form's state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDraft {
    /// Selected catalog id.
    pub game_id: Option<String>,
    pub raw_result: String,
    pub solved: Option<bool>,
    pub attempts: Option<u32>,
    pub score: Option<u32>,
    pub time_seconds: Option<u32>,
}

/// A validated score ready for the score store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub game_type: GameId,
    pub raw_result: String,
    pub game_date: NaiveDate,
    pub attempts: Option<u32>,
    pub solved: Option<bool>,
    pub score: Option<u32>,
    pub time_seconds: Option<u32>,
}

impl ScoreDraft {
    /// Replace the raw text with `text` and merge in what the engine read.
    ///
    /// The game selection changes only when the detected game is in
    /// `known_games`. Each score field is overwritten only when the suggestion
    /// set it.
    ///
    /// ```
    /// use gamepaste::{Catalog, Options, ScoreDraft};
    ///
    /// let catalog = Catalog::builtin();
    /// let mut draft = ScoreDraft { time_seconds: Some(90), ..Default::default() };
    /// draft.apply_paste("Wordle 1,234 3/6", catalog.games(), &Options::default());
    /// assert_eq!(draft.game_id.as_deref(), Some("WORDLE"));
    /// assert_eq!(draft.attempts, Some(3));
    /// assert_eq!(draft.time_seconds, Some(90));
    /// ```
    pub fn apply_paste(&mut self, text: &str, known_games: &[GameDefinition], options: &Options) -> Suggestion {
        self.raw_result = text.to_string();
        let suggestion = detect_and_extract_with(text, known_games, options);

        if let Some(game) = suggestion.game_id.filter(|_| suggestion.in_catalog) {
            let def = known_games.iter().find(|def| def.game_id() == Some(game));
            self.game_id = Some(def.map_or_else(|| game.to_string(), |def| def.id.clone()));
        }
        if suggestion.solved.is_some() {
            self.solved = suggestion.solved;
        }
        if suggestion.attempts.is_some() {
            self.attempts = suggestion.attempts;
        }
        if suggestion.score.is_some() {
            self.score = suggestion.score;
        }
        if suggestion.time_seconds.is_some() {
            self.time_seconds = suggestion.time_seconds;
        }

        debug!(target: "gamepaste", game = ?self.game_id, ?suggestion, "paste applied to draft");
        suggestion
    }

    /// Validate the draft and turn it into a request dated `game_date`.
    pub fn into_request(self, game_date: NaiveDate) -> Result<ScoreRequest, DraftError> {
        let id = self.game_id.as_deref().map(str::trim).filter(|id| !id.is_empty()).ok_or(DraftError::MissingGame)?;
        let game_type = GameId::from_str(id).map_err(|_| DraftError::UnknownGame(id.to_string()))?;
        if self.raw_result.trim().is_empty() {
            return Err(DraftError::BlankResult);
        }
        if let Some(score) = self.score.filter(|&s| s > MAX_SCORE) {
            return Err(DraftError::ScoreOutOfRange(score));
        }
        if let Some(attempts) = self.attempts.filter(|&a| a > MAX_ATTEMPTS) {
            return Err(DraftError::AttemptsOutOfRange(attempts));
        }

        Ok(ScoreRequest {
            game_type,
            raw_result: self.raw_result,
            game_date,
            attempts: self.attempts,
            solved: self.solved,
            score: self.score,
            time_seconds: self.time_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn paste_overwrites_only_read_fields() {
        let catalog = Catalog::builtin();
        let mut draft = ScoreDraft { score: Some(12), time_seconds: Some(30), ..Default::default() };
        draft.apply_paste("Wordle 1,234 X/6", catalog.games(), &Options::default());

        assert_eq!(draft.game_id.as_deref(), Some("WORDLE"));
        assert_eq!(draft.solved, Some(false));
        assert_eq!(draft.attempts, Some(6));
        assert_eq!(draft.score, Some(12));
        assert_eq!(draft.time_seconds, Some(30));
    }

    #[test]
    fn game_outside_catalog_keeps_selection() {
        let catalog = Catalog::from_games(vec![GameDefinition::new("HORSE", "Horse")]).unwrap();
        let mut draft = ScoreDraft { game_id: Some("HORSE".into()), ..Default::default() };
        let suggestion = draft.apply_paste("Wordle 1,234 4/6", catalog.games(), &Options::default());

        assert_eq!(suggestion.game_id, Some(GameId::Wordle));
        assert!(!suggestion.in_catalog);
        assert_eq!(draft.game_id.as_deref(), Some("HORSE"));
        assert_eq!(draft.attempts, Some(4));
    }

    #[test]
    fn selection_uses_catalog_spelling() {
        let catalog = Catalog::from_games(vec![GameDefinition::new("wordle", "Wordle")]).unwrap();
        let mut draft = ScoreDraft::default();
        draft.apply_paste("Wordle 1,234 4/6", catalog.games(), &Options::default());
        assert_eq!(draft.game_id.as_deref(), Some("wordle"));
    }

    #[test]
    fn request_is_validated() {
        let base = ScoreDraft { game_id: Some("HORSE".into()), raw_result: "🐴 87%".into(), ..Default::default() };

        let ok = ScoreDraft { score: Some(87), solved: Some(true), ..base.clone() }.into_request(day()).unwrap();
        assert_eq!(ok.game_type, GameId::Horse);
        assert_eq!(ok.game_date, day());

        assert_eq!(ScoreDraft { game_id: None, ..base.clone() }.into_request(day()), Err(DraftError::MissingGame));
        assert_eq!(
            ScoreDraft { game_id: Some("HEARDLE".into()), ..base.clone() }.into_request(day()),
            Err(DraftError::UnknownGame("HEARDLE".into()))
        );
        assert_eq!(ScoreDraft { raw_result: "  ".into(), ..base.clone() }.into_request(day()), Err(DraftError::BlankResult));
        assert_eq!(
            ScoreDraft { score: Some(101), ..base.clone() }.into_request(day()),
            Err(DraftError::ScoreOutOfRange(101))
        );
        assert_eq!(
            ScoreDraft { attempts: Some(10_001), ..base }.into_request(day()),
            Err(DraftError::AttemptsOutOfRange(10_001))
        );
    }

    #[test]
    fn request_serializes_like_the_score_api() {
        let request = ScoreDraft {
            game_id: Some("MINUTE_CRYPTIC".into()),
            raw_result: "Minute Cryptic".into(),
            solved: Some(true),
            attempts: Some(0),
            ..Default::default()
        }
        .into_request(day())
        .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["gameType"], "MINUTE_CRYPTIC");
        assert_eq!(json["gameDate"], "2026-10-19");
        assert_eq!(json["rawResult"], "Minute Cryptic");
        assert_eq!(json["timeSeconds"], serde_json::Value::Null);
    }
}
