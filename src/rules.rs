//! Game knowledge: how each game announces itself (`signatures`) and how its
//! score is read (`score`).

pub(crate) mod signatures {
    pub(crate) mod predicates;
    pub(crate) mod rules;
    #[cfg(test)]
    mod tests;
}

pub(crate) mod score {
    pub(crate) mod helpers;
    pub(crate) mod predicates;
    pub(crate) mod rules;
    #[cfg(test)]
    mod tests;
}

/// Tile palettes shared by signature predicates and score rules.
pub(crate) mod palette {
    use crate::glyph::Symbol;

    /// Four category colours.
    pub const CONNECTIONS: &[Symbol] = &[Symbol::Yellow, Symbol::Green, Symbol::Blue, Symbol::Purple];

    /// Misses, present, correct, plus the high-contrast orange/blue pair.
    pub const WORDLE: &[Symbol] =
        &[Symbol::Void, Symbol::Blank, Symbol::Yellow, Symbol::Green, Symbol::Orange, Symbol::Blue];

    /// Skipped, wrong and correct clips.
    pub const BANDLE: &[Symbol] = &[Symbol::Void, Symbol::Blank, Symbol::Red, Symbol::Yellow, Symbol::Green];

    /// Countries on the path: correct, near, far, wrong.
    pub const TRAVLE: &[Symbol] =
        &[Symbol::Check, Symbol::Green, Symbol::Orange, Symbol::Red, Symbol::Void, Symbol::Blank];

    pub fn within(row: &[Symbol], palette: &[Symbol]) -> bool {
        row.iter().all(|s| palette.contains(s))
    }
}
