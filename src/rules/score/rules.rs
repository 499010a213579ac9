use crate::rules::score::helpers::{
    extra_moves, grouping, hint_count, hint_penalty, narrative_tries, percent, ratio, reveal,
};
use crate::rules::score::predicates::gave_up;
use crate::{GameId, Reading, ScoreRule};

/// `Wordle 1,234 4/6`, `X/6` when the word was missed.
fn rule_wordle() -> ScoreRule {
    score_rule! {
        game: GameId::Wordle,
        name: "wordle (N/6)",
        cap: 6,
        prod: |paste: &Paste, cap: Option<u32>| -> Option<Reading> { ratio(&paste.text, cap) },
    }
}

/// `#Worldle #1234 (19.10.2026) 4/6 (100%)`.
fn rule_worldle() -> ScoreRule {
    score_rule! {
        game: GameId::Worldle,
        name: "worldle (N/6)",
        cap: 6,
        prod: |paste: &Paste, cap: Option<u32>| -> Option<Reading> { ratio(&paste.text, cap) },
    }
}

/// `Bandle #123 4/6`; older shares only carry the clip tiles.
fn rule_bandle() -> ScoreRule {
    score_rule! {
        game: GameId::Bandle,
        name: "bandle (N/6, clip tiles)",
        cap: 6,
        prod: |paste: &Paste, cap: Option<u32>| -> Option<Reading> {
            ratio(&paste.text, cap).or_else(|| reveal(paste.tiles(), cap))
        },
    }
}

/// Misses then a green hit; a red cross when all ten guesses were used.
fn rule_spotle() -> ScoreRule {
    score_rule! {
        game: GameId::Spotle,
        name: "spotle (tiles before hit)",
        cap: 10,
        prod: |paste: &Paste, cap: Option<u32>| -> Option<Reading> {
            reveal(paste.tiles(), cap).or_else(|| ratio(&paste.text, cap))
        },
    }
}

/// One four-tile row per guess.
fn rule_connections() -> ScoreRule {
    score_rule! {
        game: GameId::Connections,
        name: "connections (category rows)",
        prod: |paste: &Paste, _cap: Option<u32>| -> Option<Reading> { grouping(&paste.rows) },
    }
}

/// `#travle #484 +2`, `(Perfect)`, `(3 away)`.
fn rule_travle() -> ScoreRule {
    score_rule! {
        game: GameId::Travle,
        name: "travle (+N extra moves)",
        prod: |paste: &Paste, _cap: Option<u32>| -> Option<Reading> { extra_moves(&paste.text) },
    }
}

/// `Guessed in 4 tries.`, falling back to a plain ratio.
fn rule_countryle() -> ScoreRule {
    score_rule! {
        game: GameId::Countryle,
        name: "countryle (guessed in N tries)",
        prod: |paste: &Paste, _cap: Option<u32>| -> Option<Reading> {
            if gave_up(&paste.text) {
                return Some(Reading::Failed { attempts: None });
            }
            narrative_tries(&paste.text).or_else(|| ratio(&paste.text, None))
        },
    }
}

/// `I played contexto.me #812 and got it in 45 guesses and 2 hints.`
fn rule_contexto() -> ScoreRule {
    score_rule! {
        game: GameId::Contexto,
        name: "contexto (guesses + 5 x hints)",
        prod: |paste: &Paste, _cap: Option<u32>| -> Option<Reading> { hint_penalty(&paste.text) },
    }
}

/// `I solved Semantle #1234 in 45 guesses with 2 hints.`
fn rule_semantle() -> ScoreRule {
    score_rule! {
        game: GameId::Semantle,
        name: "semantle (guesses + 5 x hints)",
        prod: |paste: &Paste, _cap: Option<u32>| -> Option<Reading> { hint_penalty(&paste.text) },
    }
}

/// Always solved; attempts are hints taken.
fn rule_minute_cryptic() -> ScoreRule {
    score_rule! {
        game: GameId::MinuteCryptic,
        name: "minute cryptic (hints)",
        clock: true,
        prod: |paste: &Paste, _cap: Option<u32>| -> Option<Reading> { hint_count(paste) },
    }
}

/// Territory claimed, as a percentage.
fn rule_horse() -> ScoreRule {
    score_rule! {
        game: GameId::Horse,
        name: "horse (N%)",
        prod: |paste: &Paste, _cap: Option<u32>| -> Option<Reading> { percent(&paste.text) },
    }
}

pub fn get() -> Vec<ScoreRule> {
    vec![
        rule_wordle(),
        rule_connections(),
        rule_contexto(),
        rule_semantle(),
        rule_horse(),
        rule_travle(),
        rule_worldle(),
        rule_minute_cryptic(),
        rule_countryle(),
        rule_spotle(),
        rule_bandle(),
    ]
}
