use gamepaste::{
    Catalog, GameDefinition, GameId, Options, ScoreDraft, Suggestion, UnknownGamePolicy, detect, detect_and_extract,
    detect_and_extract_with,
};
use rstest::rstest;

fn suggestion(game: GameId, solved: Option<bool>, attempts: Option<u32>, score: Option<u32>) -> Suggestion {
    Suggestion { game_id: Some(game), in_catalog: true, solved, attempts, score, time_seconds: None }
}

#[rstest]
#[case::wordle(
    "Wordle 1,234 4/6\n\n⬛🟨⬛⬛⬛\n⬛🟩🟩⬛⬛\n🟩🟩🟩⬛🟩\n🟩🟩🟩🟩🟩",
    suggestion(GameId::Wordle, Some(true), Some(4), None)
)]
#[case::wordle_johab(
    "Wordle 1,234 4/6\n\n拘游릳拘拘拘\n拘游릴游릴拘拘\n游릴游릴游릴拘游릴\n游릴游릴游릴游릴游릴",
    suggestion(GameId::Wordle, Some(true), Some(4), None)
)]
#[case::wordle_failed("Wordle 1,234 X/6", suggestion(GameId::Wordle, Some(false), Some(6), None))]
#[case::connections(
    "Connections\nPuzzle #123\n游릳游릳游릳游릳\n游릴游릴游릴游릴\n游릱游릱游릱游릱\n游릵游릵游릵游릵",
    suggestion(GameId::Connections, Some(true), Some(4), None)
)]
#[case::connections_mixed_end(
    "Connections\nPuzzle #123\n🟨🟨🟨🟨\n🟩🟩🟩🟩\n🟦🟦🟦🟦\n🟪🟪🟪🟪\n🟦🟪🟦🟦",
    suggestion(GameId::Connections, Some(false), Some(5), None)
)]
#[case::horse("enclose.horse Day 42\n🐴 100%", suggestion(GameId::Horse, Some(true), None, Some(100)))]
#[case::travle("#travle #484 +2\n✅✅🟧✅", suggestion(GameId::Travle, Some(true), Some(2), None))]
#[case::travle_perfect("#travle #484 (Perfect)\n✅✅✅", suggestion(GameId::Travle, Some(true), Some(0), None))]
#[case::contexto(
    "I played contexto.me #812 and got it in 45 guesses and 2 hints.",
    suggestion(GameId::Contexto, Some(true), Some(55), None)
)]
#[case::bandle(
    "Bandle #812 4/6\n🟥🟥⬛🟩⬜⬜\n#Bandle #Heardle #Wordle",
    suggestion(GameId::Bandle, Some(true), Some(4), None)
)]
#[case::spotle("Spotle #812\n⬜⬜⬜🟩", suggestion(GameId::Spotle, Some(true), Some(4), None))]
fn detects_and_extracts(#[case] text: &str, #[case] expected: Suggestion) {
    let catalog = Catalog::builtin();
    assert_eq!(detect_and_extract(text, catalog.games()), expected);
}

#[test]
fn editor_mangled_fixture_still_reads() {
    // A trailing Johab square swallowed the following byte, taking the line
    // break with it.
    let text = "Wordle 123 4/6\n拘游릳拘拘拘뜦n游릴游릴游릴游릴游릴";
    let out = detect_and_extract(text, Catalog::builtin().games());
    assert_eq!(out.game_id, Some(GameId::Wordle));
    assert_eq!(out.attempts, Some(4));
}

#[test]
fn garbage_yields_nothing() {
    let catalog = Catalog::builtin();
    for text in ["", " ", "hello there", "🟩", "\u{0}\u{7f}\u{FFFD}\u{FFFD}"] {
        assert_eq!(detect_and_extract(text, catalog.games()), Suggestion::default(), "{text:?}");
    }
}

#[test]
fn long_input_is_bounded() {
    let mut text = "Wordle 1,234 3/6\n".to_string();
    text.push_str(&"🟩".repeat(200_000));
    let out = detect_and_extract(&text, Catalog::builtin().games());
    assert_eq!(out.game_id, Some(GameId::Wordle));
    assert_eq!(out.attempts, Some(3));
}

#[test]
fn results_are_idempotent() {
    let catalog = Catalog::builtin();
    let text = "#travle #484 +2\n✅✅🟧✅";
    let first = detect_and_extract(text, catalog.games());
    for _ in 0..3 {
        assert_eq!(detect_and_extract(text, catalog.games()), first);
    }
    assert_eq!(detect(text), first.game_id);
}

#[test]
fn catalog_policy_applies() {
    let catalog = Catalog::from_json(r#"[{"id": "CONNECTIONS", "displayName": "Connections"}]"#).unwrap();
    let text = "Wordle 1,234 4/6";

    let surfaced = detect_and_extract(text, catalog.games());
    assert_eq!(surfaced.game_id, Some(GameId::Wordle));
    assert!(!surfaced.in_catalog);

    let options = Options { unknown_games: UnknownGamePolicy::Suppress, ..Default::default() };
    assert_eq!(detect_and_extract_with(text, catalog.games(), &options), Suggestion::default());
}

#[test]
fn suggestion_serializes_in_camel_case() {
    let out = detect_and_extract("Wordle 1,234 4/6", Catalog::builtin().games());
    let json = serde_json::to_value(out).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "gameId": "WORDLE",
            "inCatalog": true,
            "solved": true,
            "attempts": 4,
            "score": null,
            "timeSeconds": null
        })
    );
}

#[test]
fn draft_round_trip() {
    let catalog = vec![GameDefinition::new("WORDLE", "Wordle"), GameDefinition::new("HORSE", "Horse")];
    let mut draft = ScoreDraft::default();
    draft.apply_paste("enclose.horse Day 42\n🐴 87%", &catalog, &Options::default());
    let request = draft.into_request(chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()).unwrap();

    assert_eq!(request.game_type, GameId::Horse);
    assert_eq!(request.score, Some(87));
    assert_eq!(request.solved, Some(true));
    assert_eq!(request.attempts, None);
}
