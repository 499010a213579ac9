//! Canonical glyph alphabet.
//!
//! Result grids are made of a handful of coloured squares, circles and marks.
//! Depending on where a result was copied from, the same glyph reaches us in
//! one of three shapes:
//!
//! ```text
//! 🟩   correctly decoded UTF-8
//! 游릴   UTF-8 bytes read as Korean Johab
//! ðŸŸ© UTF-8 bytes read as Windows-1252
//! ```
//!
//! [`normalize`] rewrites every known variant to the canonical emoji in a
//! single regex pass, so rules downstream are written once against
//! [`Symbol`]s.
//!
//! Johab decoding drops the third byte of three-byte glyphs, which makes `⬛`
//! and `⬜` indistinguishable; both fold into [`Symbol::Void`]. Every game
//! reads either one as a miss. When the replacement character was lost too,
//! the bare lead (`拘`, `九`, ...) is an ordinary CJK character and is only
//! rewritten on lines made of tiles.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;

/// A semantic glyph, independent of how it was encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Void,
    Blank,
    Yellow,
    Green,
    Blue,
    Purple,
    Orange,
    Red,
    Brown,
    Check,
    Cross,
    GreenCircle,
    YellowCircle,
    RedCircle,
    WhiteCircle,
    PurpleCircle,
    BlackCircle,
    Trophy,
    Horse,
}

bitflags::bitflags! {
    /// Which symbols appear anywhere in a normalized paste.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GlyphMask: u32 {
        const VOID          = 1 << 0;
        const BLANK         = 1 << 1;
        const YELLOW        = 1 << 2;
        const GREEN         = 1 << 3;
        const BLUE          = 1 << 4;
        const PURPLE        = 1 << 5;
        const ORANGE        = 1 << 6;
        const RED           = 1 << 7;
        const BROWN         = 1 << 8;
        const CHECK         = 1 << 9;
        const CROSS         = 1 << 10;
        const GREEN_CIRCLE  = 1 << 11;
        const YELLOW_CIRCLE = 1 << 12;
        const RED_CIRCLE    = 1 << 13;
        const WHITE_CIRCLE  = 1 << 14;
        const PURPLE_CIRCLE = 1 << 15;
        const BLACK_CIRCLE  = 1 << 16;
        const TROPHY        = 1 << 17;
        const HORSE         = 1 << 18;
    }
}

impl Symbol {
    pub const ALL: [Symbol; 19] = [
        Symbol::Void,
        Symbol::Blank,
        Symbol::Yellow,
        Symbol::Green,
        Symbol::Blue,
        Symbol::Purple,
        Symbol::Orange,
        Symbol::Red,
        Symbol::Brown,
        Symbol::Check,
        Symbol::Cross,
        Symbol::GreenCircle,
        Symbol::YellowCircle,
        Symbol::RedCircle,
        Symbol::WhiteCircle,
        Symbol::PurpleCircle,
        Symbol::BlackCircle,
        Symbol::Trophy,
        Symbol::Horse,
    ];

    /// The correctly decoded emoji for this symbol.
    pub fn canonical(self) -> char {
        match self {
            Symbol::Void => '⬛',
            Symbol::Blank => '⬜',
            Symbol::Yellow => '🟨',
            Symbol::Green => '🟩',
            Symbol::Blue => '🟦',
            Symbol::Purple => '🟪',
            Symbol::Orange => '🟧',
            Symbol::Red => '🟥',
            Symbol::Brown => '🟫',
            Symbol::Check => '✅',
            Symbol::Cross => '❌',
            Symbol::GreenCircle => '🟢',
            Symbol::YellowCircle => '🟡',
            Symbol::RedCircle => '🔴',
            Symbol::WhiteCircle => '⚪',
            Symbol::PurpleCircle => '🟣',
            Symbol::BlackCircle => '⚫',
            Symbol::Trophy => '🏆',
            Symbol::Horse => '🐴',
        }
    }

    pub fn from_char(c: char) -> Option<Symbol> {
        CANONICAL.get(&c).copied()
    }

    /// Tiles are the symbols that make up result grids. Trophies and horses
    /// decorate a share but never form a row.
    pub fn is_tile(self) -> bool {
        !matches!(self, Symbol::Trophy | Symbol::Horse)
    }

    pub fn mask(self) -> GlyphMask {
        match self {
            Symbol::Void => GlyphMask::VOID,
            Symbol::Blank => GlyphMask::BLANK,
            Symbol::Yellow => GlyphMask::YELLOW,
            Symbol::Green => GlyphMask::GREEN,
            Symbol::Blue => GlyphMask::BLUE,
            Symbol::Purple => GlyphMask::PURPLE,
            Symbol::Orange => GlyphMask::ORANGE,
            Symbol::Red => GlyphMask::RED,
            Symbol::Brown => GlyphMask::BROWN,
            Symbol::Check => GlyphMask::CHECK,
            Symbol::Cross => GlyphMask::CROSS,
            Symbol::GreenCircle => GlyphMask::GREEN_CIRCLE,
            Symbol::YellowCircle => GlyphMask::YELLOW_CIRCLE,
            Symbol::RedCircle => GlyphMask::RED_CIRCLE,
            Symbol::WhiteCircle => GlyphMask::WHITE_CIRCLE,
            Symbol::PurpleCircle => GlyphMask::PURPLE_CIRCLE,
            Symbol::BlackCircle => GlyphMask::BLACK_CIRCLE,
            Symbol::Trophy => GlyphMask::TROPHY,
            Symbol::Horse => GlyphMask::HORSE,
        }
    }

    /// Corrupted spellings of this symbol, Johab first, then Windows-1252.
    ///
    /// Johab forms of three-byte glyphs keep the replacement character here.
    /// Without it they are ordinary CJK characters; see [`Symbol::bare_johab`].
    fn corrupted(self) -> &'static [&'static str] {
        match self {
            Symbol::Void => &["拘\u{FFFD}", "â¬›"],
            Symbol::Blank => &["â¬œ"],
            Symbol::Yellow => &["游릳", "ðŸŸ¨"],
            Symbol::Green => &["游릴", "ðŸŸ©"],
            Symbol::Blue => &["游릱", "ðŸŸ¦"],
            Symbol::Purple => &["游릵", "ðŸŸª"],
            Symbol::Orange => &["游릲", "ðŸŸ§"],
            Symbol::Red => &["游린", "ðŸŸ¥"],
            Symbol::Brown => &["游릶", "ðŸŸ«"],
            Symbol::Check => &["九\u{FFFD}", "âœ…"],
            Symbol::Cross => &["仇\u{FFFD}", "â\u{9D}Œ", "âŒ"],
            Symbol::GreenCircle => &["游릭", "ðŸŸ¢"],
            Symbol::YellowCircle => &["游리", "ðŸŸ¡"],
            Symbol::RedCircle => &["游댮", "ðŸ”´"],
            Symbol::WhiteCircle => &["丘\u{FFFD}", "âšª"],
            Symbol::PurpleCircle => &["游릮", "ðŸŸ£"],
            Symbol::BlackCircle => &["âš«"],
            Symbol::Trophy => &["游끥", "ðŸ\u{8F}†", "ðŸ†"],
            Symbol::Horse => &["游냢", "ðŸ\u{90}´", "ðŸ´"],
        }
    }

    /// Johab lead of a three-byte glyph whose replacement character was lost.
    /// Only trusted on lines that are otherwise tiles.
    fn bare_johab(c: char) -> Option<Symbol> {
        match c {
            '拘' => Some(Symbol::Void),
            '九' => Some(Symbol::Check),
            '仇' => Some(Symbol::Cross),
            '丘' => Some(Symbol::WhiteCircle),
            _ => None,
        }
    }
}

/// Emoji variation selector, plain and corrupted. These carry no meaning and
/// are removed.
const SELECTORS: &[&str] = &["\u{FE0F}", "勇\u{FFFD}", "ï¸\u{8F}", "ï¸"];

static CANONICAL: Lazy<HashMap<char, Symbol>> =
    Lazy::new(|| Symbol::ALL.iter().map(|s| (s.canonical(), *s)).collect());

/// Variant spelling -> replacement text (canonical emoji, or empty for selectors).
static REPLACEMENTS: Lazy<HashMap<&'static str, String>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for symbol in Symbol::ALL {
        for variant in symbol.corrupted() {
            map.insert(*variant, symbol.canonical().to_string());
        }
    }
    for selector in SELECTORS {
        map.insert(*selector, String::new());
    }
    map
});

/// One alternation over every variant, longest first so that a spelling is
/// never shadowed by its own prefix.
static VARIANT_RE: Lazy<Regex> = Lazy::new(|| {
    let mut variants: Vec<&str> = REPLACEMENTS.keys().copied().collect();
    variants.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let alternation = variants.iter().map(|v| regex::escape(v)).collect::<Vec<_>>().join("|");
    Regex::new(&alternation).unwrap()
});

/// Rewrite every known glyph spelling to its canonical emoji and strip
/// variation selectors. Returns the input unchanged (borrowed) when nothing
/// needed rewriting.
pub fn normalize(text: &str) -> Cow<'_, str> {
    let folded = VARIANT_RE.replace_all(text, |caps: &regex::Captures<'_>| {
        REPLACEMENTS.get(&caps[0]).cloned().unwrap_or_default()
    });
    if !folded.split_inclusive('\n').any(has_bare_johab) {
        return folded;
    }
    let rebuilt = folded
        .split_inclusive('\n')
        .map(|line| {
            if has_bare_johab(line) {
                line.chars().map(|c| Symbol::bare_johab(c).map_or(c, Symbol::canonical)).collect()
            } else {
                line.to_string()
            }
        })
        .collect::<String>();
    Cow::Owned(rebuilt)
}

/// True when `line` holds at least one bare Johab lead and nothing but tiles
/// besides.
fn has_bare_johab(line: &str) -> bool {
    let mut bare = false;
    for c in line.chars().filter(|c| !c.is_whitespace()) {
        if Symbol::bare_johab(c).is_some() {
            bare = true;
        } else if !Symbol::from_char(c).is_some_and(Symbol::is_tile) {
            return false;
        }
    }
    bare
}

/// Parse a line as a tile row: after trimming, every non-space char must be a
/// tile symbol. Returns `None` for empty lines and lines with any other text.
pub fn tile_row(line: &str) -> Option<Vec<Symbol>> {
    let mut row = Vec::new();
    for c in line.chars().filter(|c| !c.is_whitespace()) {
        let symbol = Symbol::from_char(c).filter(|s| s.is_tile())?;
        row.push(symbol);
    }
    if row.is_empty() { None } else { Some(row) }
}

/// Union of all symbols found in `text` (expects normalized text).
pub fn scan_mask(text: &str) -> GlyphMask {
    text.chars().filter_map(Symbol::from_char).fold(GlyphMask::empty(), |acc, s| acc | s.mask())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_text_is_borrowed() {
        let out = normalize("Wordle 1,234 4/6\n🟩🟩🟩🟩🟩");
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn johab_squares_fold_to_canonical() {
        assert_eq!(normalize("拘游릳拘拘拘"), "⬛🟨⬛⬛⬛");
        assert_eq!(normalize("游릴游릴游릴游릴游릴"), "🟩🟩🟩🟩🟩");
        assert_eq!(normalize("游릳游릳游릳游릳\n游릱游릱游릱游릱\n游릵游릵游릵游릵"), "🟨🟨🟨🟨\n🟦🟦🟦🟦\n🟪🟪🟪🟪");
    }

    #[test]
    fn johab_replacement_char_is_consumed() {
        assert_eq!(normalize("拘\u{FFFD}游릴"), "⬛🟩");
    }

    #[test]
    fn bare_johab_leads_fold_only_in_tile_lines() {
        assert_eq!(normalize("九九游릲九\n仇 丘"), "✅✅🟧✅\n❌ ⚪");
        assert_eq!(normalize("Wordle 4/6\n拘游릳拘拘拘\nnice"), "Wordle 4/6\n⬛🟨⬛⬛⬛\nnice");
        for text in ["九 items", "拘 text", "仇 🟩 ok"] {
            assert!(matches!(normalize(text), Cow::Borrowed(_)), "{text:?}");
        }
        assert_eq!(normalize("仇 🟩 ok\n"), "仇 🟩 ok\n");
    }

    #[test]
    fn windows_1252_squares_fold_to_canonical() {
        assert_eq!(normalize("â¬›ðŸŸ¨â¬œðŸŸ©"), "⬛🟨⬜🟩");
        assert_eq!(normalize("âœ…â\u{9D}Œ"), "✅❌");
        // Clients that drop the undefined byte.
        assert_eq!(normalize("âœ…âŒ"), "✅❌");
        assert_eq!(normalize("ðŸ´ 87%"), "🐴 87%");
    }

    #[test]
    fn selectors_are_stripped() {
        assert_eq!(normalize("⚪\u{FE0F}⚪\u{FE0F}🟣"), "⚪⚪🟣");
        assert_eq!(normalize("âšªï¸\u{8F}ðŸŸ£"), "⚪🟣");
    }

    #[test]
    fn tile_row_rejects_mixed_text() {
        assert_eq!(tile_row(" 🟩 🟨 "), Some(vec![Symbol::Green, Symbol::Yellow]));
        assert_eq!(tile_row("🟩 12"), None);
        assert_eq!(tile_row("🟩🟩⬅"), None);
        assert_eq!(tile_row("🐴"), None);
        assert_eq!(tile_row("   "), None);
    }

    #[test]
    fn mask_collects_every_symbol() {
        let mask = scan_mask("🐴 ✅🟧 text");
        assert!(mask.contains(GlyphMask::HORSE | GlyphMask::CHECK | GlyphMask::ORANGE));
        assert!(!mask.contains(GlyphMask::GREEN));
    }
}
