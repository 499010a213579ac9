//! Readers shared by the per-game score rules.
//!
//! Each reader recognizes one result shape and returns `None` when the shape
//! is absent, so rules can chain them with `or_else`.

use regex::Regex;

use crate::glyph::{GlyphMask, Symbol};
use crate::rules::palette;
use crate::rules::score::predicates::{
    failure_marker, gave_up, is_fail_mark, is_hit, no_hints_marker, perfect_marker, uniform,
};
use crate::{Paste, Reading};

/// Guess-equivalents charged per hint in the semantic-distance games.
pub const HINT_PENALTY: u32 = 5;

/// Categories in a Connections puzzle.
const GROUPS: usize = 4;

/// First capture group of `re` in `text`, digits only (thousands separators
/// are dropped).
fn first_count(re: &Regex, text: &str) -> Option<u32> {
    let caps = re.captures(text)?;
    caps.get(1)?.as_str().replace(',', "").parse().ok()
}

/// `N/M` or `X/M`. With a `cap`, only ratios over exactly that denominator are
/// considered (dates like `10/19` are skipped). `X` means failed at the cap.
pub fn ratio(text: &str, cap: Option<u32>) -> Option<Reading> {
    regex!(r"(?i)\b([0-9]{1,2}|x)\s*/\s*([0-9]{1,3})\b").captures_iter(text).find_map(|caps| {
        let denominator: u32 = caps[2].parse().ok()?;
        if denominator == 0 || cap.is_some_and(|c| c != denominator) {
            return None;
        }
        if caps[1].eq_ignore_ascii_case("x") {
            return Some(Reading::Failed { attempts: Some(denominator) });
        }
        let attempts: u32 = caps[1].parse().ok()?;
        (1..=denominator).contains(&attempts).then_some(Reading::Solved { attempts })
    })
}

/// "Guessed in 4 tries." and close variants.
pub fn narrative_tries(text: &str) -> Option<Reading> {
    let re = regex!(r"(?i)\bguessed\s+(?:it\s+)?in\s+([0-9]{1,3})\s+(?:tries|try|attempts?|guesses?)\b");
    first_count(re, text).map(|attempts| Reading::Solved { attempts })
}

/// `G guesses` plus `H hints`, each hint charged [`HINT_PENALTY`] guesses.
/// Giving up is a failure with no attempt count.
pub fn hint_penalty(text: &str) -> Option<Reading> {
    if gave_up(text) {
        return Some(Reading::Failed { attempts: None });
    }
    let guesses = first_count(regex!(r"(?i)\b([0-9][0-9,]*)\s+guess(?:es)?\b"), text)?;
    let hints = first_count(regex!(r"(?i)\b([0-9]+)\s+hints?\b"), text).unwrap_or(0);
    Some(Reading::Solved { attempts: guesses.saturating_add(hints.saturating_mul(HINT_PENALTY)) })
}

/// Hits and misses laid out as tiles. A hit ends the run: attempts are the
/// misses before it plus one. No hit and a fail mark as the last tile means
/// the game ran out at `cap`.
pub fn reveal(tiles: impl IntoIterator<Item = Symbol>, cap: Option<u32>) -> Option<Reading> {
    let mut misses = 0u32;
    let mut last = None;
    for tile in tiles {
        if is_hit(tile) {
            return Some(Reading::Solved { attempts: misses + 1 });
        }
        last = Some(tile);
        misses += 1;
    }
    last.is_some_and(is_fail_mark).then_some(Reading::Failed { attempts: cap })
}

/// Four-wide category rows. Every row is one guess. The puzzle is solved when
/// exactly four rows are single-coloured and the grid ends on one of them.
pub fn grouping(rows: &[Vec<Symbol>]) -> Option<Reading> {
    let grid: Vec<&Vec<Symbol>> =
        rows.iter().filter(|row| row.len() == GROUPS && palette::within(row, palette::CONNECTIONS)).collect();
    let last = grid.last()?;

    let attempts = u32::try_from(grid.len()).unwrap_or(u32::MAX);
    let groups = grid.iter().filter(|row| uniform(row)).count();
    if groups == GROUPS && uniform(last) {
        Some(Reading::Solved { attempts })
    } else {
        Some(Reading::Failed { attempts: Some(attempts) })
    }
}

/// Extra moves over the optimal path.
///
/// A failure marker wins. Otherwise an explicit `+N` gives the count, and a
/// "perfect" marker without any `+N` means zero.
pub fn extra_moves(text: &str) -> Option<Reading> {
    if failure_marker(text) {
        return Some(Reading::Failed { attempts: None });
    }
    if let Some(attempts) = first_count(regex!(r"(?m)(?:^|\s)\+([0-9]{1,2})\b"), text) {
        return Some(Reading::Solved { attempts });
    }
    perfect_marker(text).then_some(Reading::Solved { attempts: 0 })
}

/// Hints used, in a game that cannot be failed. `N hints` wins; a no-hints or
/// perfect marker (or a trophy) means zero; otherwise the purple hint circles
/// of the share are counted.
pub fn hint_count(paste: &Paste<'_>) -> Option<Reading> {
    if let Some(attempts) = first_count(regex!(r"(?i)\b([0-9]{1,2})\s+hints?\b"), &paste.text) {
        return Some(Reading::Solved { attempts });
    }
    if no_hints_marker(&paste.text) || paste.trigger.glyphs.contains(GlyphMask::TROPHY) {
        return Some(Reading::Solved { attempts: 0 });
    }

    let circles = paste.tiles().filter(|t| matches!(t, Symbol::PurpleCircle | Symbol::WhiteCircle));
    let (shown, hints) = circles.fold((0u32, 0u32), |(shown, hints), t| {
        (shown + 1, hints + u32::from(t == Symbol::PurpleCircle))
    });
    (shown > 0).then_some(Reading::Solved { attempts: hints })
}

/// First whole percentage no larger than 100.
pub fn percent(text: &str) -> Option<Reading> {
    regex!(r"\b([0-9]{1,3})\s*%").captures_iter(text).find_map(|caps| {
        let score: u32 = caps[1].parse().ok()?;
        (score <= 100).then_some(Reading::Percent { score })
    })
}

/// `m:ss` after a stopwatch, "time" or "in".
pub fn clock_seconds(text: &str) -> Option<u32> {
    let caps = regex!(r"(?i)(?:⏱|\btime\b:?|\bin\b)\s*([0-9]{1,2}):([0-5][0-9])\b").captures(text)?;
    let minutes: u32 = caps[1].parse().ok()?;
    let seconds: u32 = caps[2].parse().ok()?;
    Some(minutes * 60 + seconds)
}
