//! Detection and extraction engine.
//!
//! Every paste goes through the same short pipeline:
//!
//! ```text
//! raw text ── prepare (trigger.rs) ──────────────┐
//!             - bound input length                │
//!             - glyph normalization (glyph.rs)    │
//!             - tile rows + buckets + glyph mask  │
//!                                                 v
//!                                  Matcher::detect (matcher.rs)
//!                                    - signatures in priority order
//!                                    - phrase test, then glyph test
//!                                    - first hit wins
//!                                                 │ Option<GameId>
//!                                                 v
//!                                  RuleTable::extract (rule_table.rs)
//!                                    - per-game rule lookup
//!                                    - Reading -> ExtractedFields
//! ```
//!
//! Nothing is carried between calls. Regexes are compiled once and shared, so
//! a `Matcher` and a `RuleTable` can be used from any thread.
//!
//! ## Responsibilities by module
//!
//! - `trigger.rs`: builds a [`Paste`](crate::Paste) from raw input and computes
//!   coarse buckets used to gate glyph predicates.
//! - `matcher.rs`: evaluates [`Signature`](crate::Signature)s in order.
//! - `rule_table.rs`: indexes [`ScoreRule`](crate::ScoreRule)s by game and runs
//!   the matching one.
//! - `metrics.rs`: per-stage timings for the verbose API.
//!
//! ## Adding a game
//!
//! - Add the `GameId` variant and its catalog metadata.
//! - Add a signature in `rules/signatures/rules.rs` at the right priority.
//! - Add a score rule in `rules/score/rules.rs`.
//!
//! ## Debugging
//!
//! Stage boundaries emit `tracing` events at `debug` and `trace` level under
//! the `gamepaste` target.

#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/rule_table.rs"]
mod rule_table;
#[path = "engine/trigger.rs"]
mod trigger;

pub(crate) use matcher::{Evidence, Hit, Matcher};
pub(crate) use metrics::{Laps, RunMetrics};
pub(crate) use rule_table::{Extraction, RuleTable};
pub(crate) use trigger::{BucketMask, TriggerInfo, prepare};
