//! Game-day key.
//!
//! Daily puzzles roll over at midnight in a single reference zone,
//! Europe/Amsterdam. Scores are keyed by the calendar date there, whatever the
//! submitter's own clock says.
//!
//! The zone offset follows the EU summer-time rule: CEST (+02:00) from 01:00
//! UTC on the last Sunday of March until 01:00 UTC on the last Sunday of
//! October, CET (+01:00) otherwise.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeDelta, Utc};

/// Name of the reference zone.
pub const REFERENCE_ZONE: &str = "Europe/Amsterdam";

const CET: i32 = 3600;
const CEST: i32 = 2 * 3600;

fn last_sunday(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = first_of_next.pred_opt()?;
    let back = last.weekday().num_days_from_sunday();
    last.checked_sub_signed(Duration::days(i64::from(back)))
}

fn switch_instant(year: i32, month: u32) -> Option<DateTime<Utc>> {
    Some(last_sunday(year, month)?.and_hms_opt(1, 0, 0)?.and_utc())
}

/// Offset of the reference zone at `instant`, in seconds east of UTC.
pub fn utc_offset_seconds(instant: DateTime<Utc>) -> i32 {
    let year = instant.year();
    let summer = match (switch_instant(year, 3), switch_instant(year, 10)) {
        (Some(start), Some(end)) => instant >= start && instant < end,
        _ => false,
    };
    if summer { CEST } else { CET }
}

/// The game day `instant` falls on.
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use gamepaste::game_day::game_day;
///
/// // 23:30 UTC in summer is already the next day in Amsterdam.
/// let late = Utc.with_ymd_and_hms(2026, 7, 1, 23, 30, 0).unwrap();
/// assert_eq!(game_day(late), NaiveDate::from_ymd_opt(2026, 7, 2).unwrap());
/// ```
pub fn game_day(instant: DateTime<Utc>) -> NaiveDate {
    let local = instant.naive_utc() + Duration::seconds(i64::from(utc_offset_seconds(instant)));
    local.date()
}

/// The current game day.
pub fn today() -> NaiveDate {
    game_day(Utc::now())
}

/// Time left until the next game day starts, or `None` when the calendar
/// runs out.
pub fn time_until_reset(instant: DateTime<Utc>) -> Option<TimeDelta> {
    let next = game_day(instant).succ_opt()?.and_hms_opt(0, 0, 0)?;
    // Transitions happen at 01:00 UTC, never near local midnight.
    let probe = next.and_utc() - Duration::hours(1);
    let midnight = next.and_utc() - Duration::seconds(i64::from(utc_offset_seconds(probe)));
    Some(midnight - instant)
}

/// "5 hours 12 minutes", dropping the hours part when it is zero.
pub fn format_countdown(left: TimeDelta) -> String {
    let minutes = left.num_minutes().max(0);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    let unit = |n: i64, one: &str, many: &str| format!("{n} {}", if n == 1 { one } else { many });
    if hours > 0 {
        format!("{} {}", unit(hours, "hour", "hours"), unit(minutes, "minute", "minutes"))
    } else {
        unit(minutes, "minute", "minutes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn last_sundays() {
        assert_eq!(last_sunday(2026, 3), NaiveDate::from_ymd_opt(2026, 3, 29));
        assert_eq!(last_sunday(2026, 10), NaiveDate::from_ymd_opt(2026, 10, 25));
        assert_eq!(last_sunday(2025, 12), NaiveDate::from_ymd_opt(2025, 12, 28));
    }

    #[test]
    fn offset_switches_at_one_utc() {
        assert_eq!(utc_offset_seconds(at(2026, 3, 29, 0, 59)), CET);
        assert_eq!(utc_offset_seconds(at(2026, 3, 29, 1, 0)), CEST);
        assert_eq!(utc_offset_seconds(at(2026, 10, 25, 0, 59)), CEST);
        assert_eq!(utc_offset_seconds(at(2026, 10, 25, 1, 0)), CET);
    }

    #[test]
    fn day_rolls_over_at_local_midnight() {
        assert_eq!(game_day(at(2026, 1, 10, 22, 59)), NaiveDate::from_ymd_opt(2026, 1, 10).unwrap());
        assert_eq!(game_day(at(2026, 1, 10, 23, 0)), NaiveDate::from_ymd_opt(2026, 1, 11).unwrap());
        assert_eq!(game_day(at(2026, 7, 10, 21, 59)), NaiveDate::from_ymd_opt(2026, 7, 10).unwrap());
        assert_eq!(game_day(at(2026, 7, 10, 22, 0)), NaiveDate::from_ymd_opt(2026, 7, 11).unwrap());
    }

    #[test]
    fn reset_countdown() {
        assert_eq!(time_until_reset(at(2026, 1, 10, 12, 0)), Some(TimeDelta::hours(11)));
        assert_eq!(time_until_reset(at(2026, 7, 10, 12, 30)), Some(TimeDelta::minutes(9 * 60 + 30)));
        // The night the clocks go back: midnight local is still CEST.
        assert_eq!(time_until_reset(at(2026, 10, 24, 20, 0)), Some(TimeDelta::hours(2)));
    }

    #[test]
    fn countdown_text() {
        assert_eq!(format_countdown(TimeDelta::minutes(5 * 60 + 12)), "5 hours 12 minutes");
        assert_eq!(format_countdown(TimeDelta::minutes(61)), "1 hour 1 minute");
        assert_eq!(format_countdown(TimeDelta::seconds(59)), "0 minutes");
        assert_eq!(format_countdown(TimeDelta::minutes(-3)), "0 minutes");
    }
}
