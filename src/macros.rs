#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! signature {
    (
        game: $game:expr,
        phrases: [ $($phrase:expr),* $(,)? ]
        $(, buckets: $buckets:expr)?
        $(, glyphs: $glyphs:expr)?
        $(,)?
    ) => {{
        $crate::Signature {
            game: $game,
            phrases: &[ $($phrase),* ],
            buckets: { 0 $(| $buckets)? },
            glyphs: { None $(.or(Some($glyphs as $crate::GlyphPredicate)))? },
        }
    }};
}

#[macro_export]
macro_rules! score_rule {
    (
        game: $game:expr,
        name: $name:expr
        $(, cap: $cap_val:expr)?
        $(, clock: $clock:expr)?
        , prod: |$paste:ident : &Paste, $cap:ident : Option<u32>| -> Option<Reading> $body:block
        $(,)?
    ) => {{
        $crate::ScoreRule {
            game: $game,
            name: $name,
            cap: { None $(.or(Some($cap_val)))? },
            clock: { false $(|| $clock)? },
            production: Box::new(move |$paste: &$crate::Paste<'_>, $cap: Option<u32>| {
                let reading: Option<$crate::Reading> = $body;
                reading
            }),
        }
    }};
}
