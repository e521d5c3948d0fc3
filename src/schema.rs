use chrono::{DateTime, SubsecRound, Utc};
use getset::Getters;
use serde::{Deserialize, Serialize};

use crate::zone::Zone;

/// Current date and time as seen in one zone.
///
/// All three fields are truncated to whole seconds, so `date` and `time` are always
/// the two halves of `datetime` (minus its offset designator).
#[derive(Clone, PartialEq, Eq, Debug, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct TimeResponse {
    /// `YYYY-MM-DD`
    date: String,
    /// `HH:MM:SS`, 24-hour clock
    time: String,
    /// ISO-8601 with an explicit offset, e.g. `2024-03-15T21:30:45+09:00`
    datetime: String,
}

impl TimeResponse {
    pub fn at(instant: DateTime<Utc>, zone: Zone) -> Self {
        let local = instant.trunc_subsecs(0).with_timezone(&zone.offset());
        Self {
            date: local.format("%Y-%m-%d").to_string(),
            time: local.format("%H:%M:%S").to_string(),
            datetime: local.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone, Utc};

    use super::TimeResponse;
    use crate::zone::Zone;

    #[test]
    fn jst_and_utc_at_the_same_instant() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 45).unwrap();

        let jst = TimeResponse::at(instant, Zone::Jst);
        assert_eq!(jst.date(), "2024-03-15");
        assert_eq!(jst.time(), "21:30:45");
        assert_eq!(jst.datetime(), "2024-03-15T21:30:45+09:00");

        let utc = TimeResponse::at(instant, Zone::Utc);
        assert_eq!(utc.date(), "2024-03-15");
        assert_eq!(utc.time(), "12:30:45");
        assert_eq!(utc.datetime(), "2024-03-15T12:30:45+00:00");
    }

    #[test]
    fn jst_crosses_midnight() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 16, 0, 0).unwrap();
        let jst = TimeResponse::at(instant, Zone::Jst);
        assert_eq!(jst.date(), "2024-01-02");
        assert_eq!(jst.time(), "01:00:00");
        assert_eq!(jst.datetime(), "2024-01-02T01:00:00+09:00");
        assert_eq!(TimeResponse::at(instant, Zone::Utc).date(), "2024-01-01");
    }

    #[test]
    fn jst_crosses_year_and_leap_day() {
        let new_year = Utc.with_ymd_and_hms(2023, 12, 31, 15, 0, 0).unwrap();
        assert_eq!(
            TimeResponse::at(new_year, Zone::Jst).datetime(),
            "2024-01-01T00:00:00+09:00"
        );
        let leap_day = Utc.with_ymd_and_hms(2024, 2, 28, 20, 5, 9).unwrap();
        let jst = TimeResponse::at(leap_day, Zone::Jst);
        assert_eq!(jst.date(), "2024-02-29");
        assert_eq!(jst.time(), "05:05:09");
    }

    #[test]
    fn sub_seconds_are_truncated() {
        let instant =
            Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 45).unwrap() + TimeDelta::milliseconds(999);
        let utc = TimeResponse::at(instant, Zone::Utc);
        assert_eq!(utc.time(), "12:30:45");
        assert_eq!(utc.datetime(), "2024-03-15T12:30:45+00:00");
    }

    #[test]
    fn serializes_exactly_three_fields() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 45).unwrap();
        let value = serde_json::to_value(TimeResponse::at(instant, Zone::Jst)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "date": "2024-03-15",
                "time": "21:30:45",
                "datetime": "2024-03-15T21:30:45+09:00",
            })
        );
    }
}
