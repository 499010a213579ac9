use chrono::Utc;
use gamepaste::glyph::Symbol;
use gamepaste::{Catalog, SuggestionVerbose, game_day};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, catalog: &Catalog, res: &SuggestionVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let first_line = input.lines().find(|l| !l.trim().is_empty()).unwrap_or_default();
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Reading: \"{}\"", first_line.trim()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Input ━━━", ansi::GRAY));
    print_input(res, &palette);

    println!("\n{}", palette.paint("━━━ Detection ━━━", ansi::GRAY));
    print_detection(catalog, res, &palette);

    println!("\n{}", palette.paint("━━━ Score ━━━", ansi::GRAY));
    print_score(res, &palette);

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    let details = &res.details;
    println!(
        "  Total: {}  │  Prepare: {}  │  Detect: {}  │  Extract: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.dim(format!("{:?}", details.prepare)),
        palette.paint(format!("{:?}", details.detect), ansi::CYAN),
        palette.dim(format!("{:?}", details.extract)),
    );

    let now = Utc::now();
    if let Some(left) = game_day::time_until_reset(now) {
        println!(
            "  {} {} {}",
            palette.dim(format!("Game day {} ({}).", game_day::game_day(now), game_day::REFERENCE_ZONE)),
            palette.dim("Next puzzle in"),
            palette.paint(game_day::format_countdown(left), ansi::YELLOW),
        );
    }
    println!();
}

fn print_input(res: &SuggestionVerbose, palette: &ansi::Palette) {
    let details = &res.details;
    println!(
        "  {} {}  {} {}",
        palette.dim("rows:"),
        palette.paint(details.rows.len().to_string(), ansi::BLUE),
        palette.dim("│ glyphs:"),
        palette.paint(format!("{:?}", details.glyphs), ansi::BLUE),
    );
    for row in details.rows.iter().take(8) {
        println!("    {}", fmt_row(row));
    }
    if details.rows.len() > 8 {
        println!("    {}", palette.dim(format!("... +{} more", details.rows.len() - 8)));
    }
}

fn print_detection(catalog: &Catalog, res: &SuggestionVerbose, palette: &ansi::Palette) {
    let suggestion = &res.suggestion;
    let Some(game) = suggestion.game_id else {
        println!("{}", palette.dim("  No game recognized"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • The paste has neither a game name nor a known tile grid");
        println!("  • The game was detected but is not in the catalog (--suppress-unknown)");
        println!("\n{}", palette.dim("  Tip: Set GAMEPASTE_LOG=gamepaste=debug to see each signature tried"));
        return;
    };

    let name = catalog.get(game).map_or_else(|| game.to_string(), |def| def.display_name.clone());
    let listed = if suggestion.in_catalog {
        palette.paint("in catalog", ansi::GREEN)
    } else {
        palette.paint("not in catalog", ansi::RED)
    };
    println!("  {} {} {}", palette.bold(palette.paint(name, ansi::GREEN)), palette.dim("│"), listed);
    println!(
        "      {} {}  {} {}",
        palette.dim("matched by:"),
        palette.paint(res.details.matched_by.as_deref().unwrap_or("-"), ansi::CYAN),
        palette.dim("│ rank:"),
        palette.paint(res.details.signature_rank.map_or_else(|| "-".to_string(), |r| r.to_string()), ansi::YELLOW),
    );
}

fn print_score(res: &SuggestionVerbose, palette: &ansi::Palette) {
    let fields = res.suggestion.fields();
    if let Some(rule) = res.details.rule {
        println!("  {} {}", palette.dim("rule:"), palette.paint(rule, ansi::CYAN));
    }
    if fields.is_empty() {
        println!("{}", palette.dim("  No score read"));
        return;
    }

    let show = |label: &str, value: Option<String>| {
        let value = value.map_or_else(|| palette.dim("-"), |v| palette.bold(palette.paint(v, ansi::GREEN)));
        println!("  {} {}", palette.dim(format!("{label:<9}")), value);
    };
    show("solved", fields.solved.map(|s| if s { "yes".to_string() } else { "no".to_string() }));
    show("attempts", fields.attempts.map(|n| n.to_string()));
    show("score", fields.score.map(|n| format!("{n}%")));
    show("time", fields.time_seconds.map(|s| format!("{}:{:02}", s / 60, s % 60)));
}

fn fmt_row(row: &[Symbol]) -> String {
    row.iter().map(|s| s.canonical()).collect()
}
