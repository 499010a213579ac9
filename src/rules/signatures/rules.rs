//! Signature priority list.
//!
//! Order is significant: the matcher stops at the first signature that holds.
//!
//! - Connections goes first because its glyph test is the narrowest.
//! - Bandle precedes Wordle: Bandle shares end with `#Bandle #Heardle #Wordle`.
//! - Spotle precedes Wordle: a five-tile Spotle line is a valid Wordle row.
//! - Worldle and Bandle precede Horse: they print percentages too.
//! - Wordle is last; its glyph test is the most general.

use crate::engine::BucketMask;
use crate::rules::signatures::predicates::{bandle_clips, connections_grid, horse_claim, travle_trail, wordle_grid};
use crate::{GameId, Signature};

fn sig_connections() -> Signature {
    signature! {
        game: GameId::Connections,
        phrases: ["connections"],
        buckets: BucketMask::HAS_TILES.bits(),
        glyphs: connections_grid,
    }
}

fn sig_semantle() -> Signature {
    signature! { game: GameId::Semantle, phrases: ["semantle"] }
}

fn sig_contexto() -> Signature {
    signature! { game: GameId::Contexto, phrases: ["contexto"] }
}

fn sig_minute_cryptic() -> Signature {
    signature! { game: GameId::MinuteCryptic, phrases: ["minute cryptic", "minutecryptic"] }
}

fn sig_travle() -> Signature {
    signature! {
        game: GameId::Travle,
        phrases: ["travle"],
        buckets: BucketMask::HAS_TILES.bits(),
        glyphs: travle_trail,
    }
}

fn sig_worldle() -> Signature {
    signature! { game: GameId::Worldle, phrases: ["worldle"] }
}

fn sig_countryle() -> Signature {
    signature! { game: GameId::Countryle, phrases: ["countryle"] }
}

fn sig_spotle() -> Signature {
    signature! { game: GameId::Spotle, phrases: ["spotle"] }
}

fn sig_bandle() -> Signature {
    signature! {
        game: GameId::Bandle,
        phrases: ["bandle"],
        buckets: BucketMask::HAS_TILES.bits(),
        glyphs: bandle_clips,
    }
}

fn sig_horse() -> Signature {
    signature! {
        game: GameId::Horse,
        phrases: ["enclose.horse", "enclosehorse", "enclose horse"],
        buckets: BucketMask::HAS_PERCENT.bits(),
        glyphs: horse_claim,
    }
}

fn sig_wordle() -> Signature {
    signature! {
        game: GameId::Wordle,
        phrases: ["wordle"],
        buckets: BucketMask::HAS_TILES.bits(),
        glyphs: wordle_grid,
    }
}

pub fn get() -> Vec<Signature> {
    vec![
        sig_connections(),
        sig_semantle(),
        sig_contexto(),
        sig_minute_cryptic(),
        sig_travle(),
        sig_worldle(),
        sig_countryle(),
        sig_spotle(),
        sig_bandle(),
        sig_horse(),
        sig_wordle(),
    ]
}
