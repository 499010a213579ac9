//! Game catalog: the set of games a deployment accepts scores for.
//!
//! Detection knows every [`GameId`] the rules can recognize; the catalog says
//! which of them are live. It is plain configuration, loaded from JSON or
//! taken from [`Catalog::builtin`].

use crate::GameId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("game at index {index} has a blank id")]
    BlankId { index: usize },
    #[error("duplicate game id: {0}")]
    Duplicate(String),
}

/// One game entry as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDefinition {
    pub id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl GameDefinition {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        GameDefinition { id: id.into(), display_name: display_name.into(), url: None, description: None }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The [`GameId`] this entry names, if the engine knows it. Ids are matched
    /// case-insensitively.
    pub fn game_id(&self) -> Option<GameId> {
        GameId::from_str(self.id.trim()).ok()
    }
}

/// Ordered, validated list of [`GameDefinition`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    games: Vec<GameDefinition>,
}

impl Catalog {
    /// Every game the engine supports, with display metadata.
    pub fn builtin() -> Self {
        let games = BUILTIN
            .iter()
            .map(|&(game, name, url, description)| {
                GameDefinition::new(<&'static str>::from(game), name).with_url(url).with_description(description)
            })
            .collect();
        Catalog { games }
    }

    /// Parse a JSON array of game entries.
    ///
    /// ```
    /// use gamepaste::{Catalog, GameId};
    ///
    /// let catalog = Catalog::from_json(r#"[{"id": "WORDLE", "displayName": "Wordle"}]"#).unwrap();
    /// assert!(catalog.contains(GameId::Wordle));
    /// assert!(!catalog.contains(GameId::Horse));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let games: Vec<GameDefinition> = serde_json::from_str(json)?;
        Self::from_games(games)
    }

    /// Validate a list of entries: ids must be non-blank and unique (ignoring
    /// case). Entries the engine does not know are kept; they are simply never
    /// detected.
    pub fn from_games(games: Vec<GameDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(games.len());
        for (index, def) in games.iter().enumerate() {
            let id = def.id.trim();
            if id.is_empty() {
                return Err(CatalogError::BlankId { index });
            }
            if !seen.insert(id.to_ascii_uppercase()) {
                return Err(CatalogError::Duplicate(id.to_string()));
            }
            if def.game_id().is_none() {
                debug!(target: "gamepaste", id, "catalog entry has no detection rules");
            }
        }
        Ok(Catalog { games })
    }

    pub fn contains(&self, game: GameId) -> bool {
        self.get(game).is_some()
    }

    pub fn get(&self, game: GameId) -> Option<&GameDefinition> {
        self.games.iter().find(|def| def.game_id() == Some(game))
    }

    pub fn games(&self) -> &[GameDefinition] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl AsRef<[GameDefinition]> for Catalog {
    fn as_ref(&self) -> &[GameDefinition] {
        &self.games
    }
}

const BUILTIN: &[(GameId, &str, &str, &str)] = &[
    (GameId::Wordle, "Wordle", "https://www.nytimes.com/games/wordle", "Guess the 5-letter word in 6 tries"),
    (
        GameId::Connections,
        "Connections",
        "https://www.nytimes.com/games/connections",
        "Group 16 words into 4 categories",
    ),
    (GameId::Contexto, "Contexto", "https://contexto.me/", "Guess the word using semantic similarity"),
    (GameId::Semantle, "Semantle", "https://semantle.com/", "Guess the word using word2vec similarity"),
    (
        GameId::Horse,
        "Horse",
        "https://enclose.horse/",
        "Claim the maximum territory with the number of walls given",
    ),
    (GameId::Travle, "Travle", "https://travle.earth/", "Find the path between two countries"),
    (GameId::Worldle, "Worldle", "https://worldle.teuteuf.fr/", "Guess the country from its shape"),
    (
        GameId::MinuteCryptic,
        "Minute Cryptic",
        "https://www.minutecryptic.com/",
        "Solve a cryptic crossword clue in under a minute",
    ),
    (GameId::Countryle, "Countryle", "https://countryle.com/", "Guess the country from clues"),
    (GameId::Spotle, "Spotle", "https://spotle.io/", "Guess the artist from their top Spotify songs"),
    (GameId::Bandle, "Bandle", "https://bandle.app/", "Guess the song from increasing audio clips"),
];
