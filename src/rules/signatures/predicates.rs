use crate::Paste;
use crate::glyph::{GlyphMask, Symbol};
use crate::rules::palette;

/// A row of exactly four category tiles that uses blue or purple. Wordle never
/// prints four-wide rows, and its blue only appears in five-wide ones.
pub fn connections_grid(paste: &Paste<'_>) -> bool {
    paste.rows.iter().any(|row| {
        row.len() == 4
            && palette::within(row, palette::CONNECTIONS)
            && row.iter().any(|s| matches!(s, Symbol::Blue | Symbol::Purple))
    })
}

/// A path row that mixes checks with near/far squares.
pub fn travle_trail(paste: &Paste<'_>) -> bool {
    paste.rows.iter().any(|row| {
        palette::within(row, palette::TRAVLE)
            && row.contains(&Symbol::Check)
            && row.iter().any(|s| matches!(s, Symbol::Orange | Symbol::Red))
    })
}

/// Six clip tiles with at least one wrong (red) guess.
pub fn bandle_clips(paste: &Paste<'_>) -> bool {
    paste
        .rows
        .iter()
        .any(|row| row.len() == 6 && palette::within(row, palette::BANDLE) && row.contains(&Symbol::Red))
}

/// The horse glyph. Only evaluated when a percentage token is present.
pub fn horse_claim(paste: &Paste<'_>) -> bool {
    paste.trigger.glyphs.contains(GlyphMask::HORSE)
}

/// Five-wide guess rows.
pub fn wordle_grid(paste: &Paste<'_>) -> bool {
    paste.rows.iter().any(|row| row.len() == 5 && palette::within(row, palette::WORDLE))
}
