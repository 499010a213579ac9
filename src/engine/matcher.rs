//! Signature matching.
//!
//! Signatures are evaluated strictly in the order they were given; the first
//! one that holds names the game. For each signature the phrase test runs
//! first (a lowercase substring search), then the glyph predicate if the
//! trigger buckets allow it.
//!
//! Ordering is part of the contract: several games share glyphs or even names
//! (a Bandle share ends with `#Wordle`, a Spotle grid is a valid Wordle row),
//! so the more specific signature must come first. See
//! `rules/signatures/rules.rs` for the list itself.

use super::trigger::BucketMask;
use crate::{GameId, Paste, Signature};
use tracing::debug;

/// Why a signature fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    /// A name, hashtag or domain token was present.
    Phrase(&'static str),
    /// The game's glyph-set predicate held.
    Glyphs,
}

/// A detected game with the evidence that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub game: GameId,
    pub evidence: Evidence,
    /// Position of the signature in the priority list.
    pub rank: usize,
}

#[derive(Debug)]
pub struct Matcher<'a> {
    signatures: &'a [Signature],
}

impl<'a> Matcher<'a> {
    pub fn new(signatures: &'a [Signature]) -> Self {
        Matcher { signatures }
    }

    /// Return the first signature that holds for `paste`, if any.
    pub fn detect(&self, paste: &Paste<'_>) -> Option<Hit> {
        if paste.lower.trim().is_empty() {
            return None;
        }

        let hit = self
            .signatures
            .iter()
            .enumerate()
            .find_map(|(rank, sig)| evaluate(sig, paste).map(|evidence| Hit { game: sig.game, evidence, rank }));

        match &hit {
            Some(h) => debug!(target: "gamepaste", game = %h.game, evidence = ?h.evidence, rank = h.rank, "signature hit"),
            None => debug!(target: "gamepaste", tried = self.signatures.len(), "no signature matched"),
        }
        hit
    }
}

fn evaluate(sig: &Signature, paste: &Paste<'_>) -> Option<Evidence> {
    if let Some(phrase) = sig.phrases.iter().find(|p| paste.lower.contains(*p)) {
        return Some(Evidence::Phrase(*phrase));
    }

    let predicate = sig.glyphs?;
    let required = BucketMask::from_bits_truncate(sig.buckets);
    if !paste.trigger.buckets.contains(required) {
        return None;
    }
    predicate(paste).then_some(Evidence::Glyphs)
}
