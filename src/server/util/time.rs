use chrono::{DateTime, Duration, NaiveTime, Utc};

/// Returns the half-open `[start, end)` range of the UTC calendar day
/// containing `now`. Every daily peak query goes through this so the day
/// boundary is defined in exactly one place.
pub fn utc_day_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = now.date_naive().and_time(NaiveTime::MIN).and_utc();

    (start, start + Duration::days(1))
}
