//! Trigger scanning (input pre-classification).
//!
//! Turns a raw paste into a [`Paste`]: the input is bounded, glyphs are
//! normalized, tile rows are split out and a few cheap buckets are computed.
//!
//! Buckets gate glyph predicates in the matcher. A signature whose glyph test
//! needs a percentage token, for example, is skipped outright when the scan saw
//! no `%`. False positives are fine; the predicate still has to hold.

use crate::Paste;
use crate::glyph::{self, GlyphMask};
use tracing::trace;

bitflags::bitflags! {
    /// Coarse buckets for fast input classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BucketMask: u8 {
        const HAS_PERCENT = 1 << 0;
        const HAS_TILES   = 1 << 1;
    }
}

/// Input characteristics detected from the normalized paste.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
    pub glyphs: GlyphMask,
}

impl TriggerInfo {
    /// Scan normalized `text` for buckets and glyphs. `has_rows` reports
    /// whether any tile row was found.
    pub fn scan(text: &str, has_rows: bool) -> Self {
        let mut buckets = BucketMask::empty();

        if text.contains('%') {
            buckets |= BucketMask::HAS_PERCENT;
        }
        if has_rows {
            buckets |= BucketMask::HAS_TILES;
        }

        TriggerInfo { buckets, glyphs: glyph::scan_mask(text) }
    }
}

/// Build a [`Paste`] from raw input, keeping at most `max_input_bytes` bytes
/// (cut back to a char boundary).
pub(crate) fn prepare(raw: &str, max_input_bytes: usize) -> Paste<'_> {
    let raw = bounded(raw, max_input_bytes);
    let text = glyph::normalize(raw);
    let lower = text.to_lowercase();
    let rows: Vec<_> = text.lines().filter_map(glyph::tile_row).collect();
    let trigger = TriggerInfo::scan(&text, !rows.is_empty());

    trace!(
        target: "gamepaste",
        bytes = raw.len(),
        normalized = !matches!(text, std::borrow::Cow::Borrowed(_)),
        rows = rows.len(),
        buckets = ?trigger.buckets,
        glyphs = ?trigger.glyphs,
        "trigger scan"
    );

    Paste { text, lower, rows, trigger }
}

fn bounded(raw: &str, max: usize) -> &str {
    if raw.len() <= max {
        return raw;
    }
    let mut end = max;
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    &raw[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Symbol;

    #[test]
    fn buckets_follow_input() {
        let info = TriggerInfo::scan("enclose.horse Day 42 🐴 87%", false);
        assert_eq!(info.buckets, BucketMask::HAS_PERCENT);

        let info = TriggerInfo::scan("#travle #484 +2", false);
        assert!(info.buckets.is_empty());

        let info = TriggerInfo::scan("🟩🟩🟩", true);
        assert_eq!(info.buckets, BucketMask::HAS_TILES);
    }

    #[test]
    fn prepare_splits_rows_from_corrupted_text() {
        let paste = prepare("Wordle 1,234 2/6\n\n拘游릳拘拘拘\n游릴游릴游릴游릴游릴", 1024);
        assert_eq!(paste.rows.len(), 2);
        assert_eq!(paste.rows[1], vec![Symbol::Green; 5]);
        assert!(paste.trigger.buckets.contains(BucketMask::HAS_TILES));
        assert!(paste.lower.starts_with("wordle"));
    }

    #[test]
    fn bound_respects_char_boundaries() {
        let text = "ab🟩cd";
        assert_eq!(bounded(text, 3), "ab");
        assert_eq!(bounded(text, 6), "ab🟩");
        assert_eq!(bounded(text, 100), text);
        assert_eq!(bounded(text, 0), "");
    }
}
