use crate::glyph::Symbol;

/// "gave up", "give up", "giving up".
pub fn gave_up(text: &str) -> bool {
    regex!(r"(?i)\b(?:gave|give|giving)\s+up\b").is_match(text)
}

/// Any explicit failure wording: giving up, "failed", or a "(3 away)" distance.
pub fn failure_marker(text: &str) -> bool {
    gave_up(text) || regex!(r"(?i)\bfailed\b|\(\s*[0-9]+\s+away\s*\)").is_match(text)
}

pub fn perfect_marker(text: &str) -> bool {
    regex!(r"(?i)\bperfect\b").is_match(text)
}

/// "no hints", "without any hints", or a perfect marker.
pub fn no_hints_marker(text: &str) -> bool {
    perfect_marker(text) || regex!(r"(?i)\bno\s+hints?\b|\bwithout\s+(?:any\s+)?hints?\b").is_match(text)
}

/// Every tile in the row has the same colour.
pub fn uniform(row: &[Symbol]) -> bool {
    row.first().is_some_and(|first| row.iter().all(|s| s == first))
}

pub fn is_hit(tile: Symbol) -> bool {
    matches!(tile, Symbol::Green | Symbol::GreenCircle)
}

pub fn is_fail_mark(tile: Symbol) -> bool {
    matches!(tile, Symbol::Red | Symbol::Cross | Symbol::RedCircle)
}
