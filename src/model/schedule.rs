//! Weekly opening schedule.
//!
//! Clock times travel on the wire as zero-padded 24h `HHMM` strings and are
//! normalized to minutes-since-midnight at the boundary, so every comparison
//! downstream is numeric. A period whose close is numerically before its open
//! crosses midnight (`2200`–`0200`).

use hashbrown::HashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use tracing::warn;

use crate::{Error, Result};

/// Calendar day key, serialized lowercase (`"mon"` … `"sun"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl From<chrono::Weekday> for Weekday {
    fn from(d: chrono::Weekday) -> Self {
        match d {
            chrono::Weekday::Mon => Self::Mon,
            chrono::Weekday::Tue => Self::Tue,
            chrono::Weekday::Wed => Self::Wed,
            chrono::Weekday::Thu => Self::Thu,
            chrono::Weekday::Fri => Self::Fri,
            chrono::Weekday::Sat => Self::Sat,
            chrono::Weekday::Sun => Self::Sun,
        }
    }
}

/// Minutes since midnight, always `< 1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: Self = Self(0);

    /// Parse a zero-padded 24h `HHMM` string. Returns `None` for anything
    /// that is not exactly four digits in valid hour/minute range.
    pub fn from_hhmm(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let h: u16 = s[..2].parse().ok()?;
        let m: u16 = s[2..].parse().ok()?;
        if h > 23 || m > 59 {
            return None;
        }
        Some(Self(h * 60 + m))
    }

    /// Strict parse, for hosts that want the failure surfaced.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_hhmm(s).ok_or_else(|| Error::MalformedClockTime(s.to_owned()))
    }

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < 1440).then_some(Self(minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Back to the wire form (`"0730"`).
    pub fn hhmm(self) -> String {
        format!("{:02}{:02}", self.0 / 60, self.0 % 60)
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hhmm())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ClockTime::from_hhmm(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("malformed HHMM clock time {s:?}")))
    }
}

/// A single `{open, close}` pair. `close < open` means the period runs past
/// midnight into the next calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub open: ClockTime,
    pub close: ClockTime,
}

impl Period {
    pub fn new(open: ClockTime, close: ClockTime) -> Self {
        Self { open, close }
    }

    /// Parse both endpoints from `HHMM` strings.
    pub fn parse(open: &str, close: &str) -> Result<Self> {
        Ok(Self {
            open: ClockTime::parse(open)?,
            close: ClockTime::parse(close)?,
        })
    }

    pub fn crosses_midnight(&self) -> bool {
        self.close < self.open
    }

    /// Whether `t` falls inside this period, wrap-aware.
    pub fn contains(&self, t: ClockTime) -> bool {
        if self.crosses_midnight() {
            t >= self.open || t <= self.close
        } else {
            self.open <= t && t <= self.close
        }
    }

    /// Minutes from `t` until close. Negative raw differences on a
    /// midnight-crossing period wrap forward by a full day.
    pub fn minutes_until_close(&self, t: ClockTime) -> i32 {
        let mut diff = i32::from(self.close.minutes()) - i32::from(t.minutes());
        if diff < 0 && self.crosses_midnight() {
            diff += 1440;
        }
        diff
    }
}

/// Ordered list of periods for one day. Almost always one or two entries.
pub type DayPeriods = SmallVec<[Period; 2]>;

/// Weekly schedule: weekday key to that day's period list.
///
/// A missing day means "no hours that day". A venue with no schedule at all
/// carries `None` at the venue level — that is a different state and routes
/// to the heuristic fallback instead of this evaluator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekSchedule {
    days: HashMap<Weekday, DayPeriods>,
}

impl WeekSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day: Weekday, period: Period) {
        self.days.entry(day).or_default().push(period);
    }

    /// Lenient insert from wire strings. Malformed endpoints are skipped
    /// with a warning so one bad pair never takes down the venue.
    pub fn insert_raw(&mut self, day: Weekday, open: &str, close: &str) -> bool {
        match Period::parse(open, close) {
            Ok(p) => {
                self.insert(day, p);
                true
            }
            Err(err) => {
                warn!(%err, ?day, "skipping malformed schedule period");
                false
            }
        }
    }

    /// Builder form of [`insert_raw`](Self::insert_raw) over several pairs.
    pub fn with_hours(mut self, day: Weekday, pairs: &[(&str, &str)]) -> Self {
        for (open, close) in pairs {
            self.insert_raw(day, open, close);
        }
        self
    }

    pub fn day(&self, day: Weekday) -> &[Period] {
        self.days.get(&day).map_or(&[], |p| p.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(|p| p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clock_time_parse() {
        assert_eq!(ClockTime::from_hhmm("0000").map(ClockTime::minutes), Some(0));
        assert_eq!(ClockTime::from_hhmm("0730").map(ClockTime::minutes), Some(450));
        assert_eq!(ClockTime::from_hhmm("2359").map(ClockTime::minutes), Some(1439));

        assert_eq!(ClockTime::from_hhmm("2400"), None);
        assert_eq!(ClockTime::from_hhmm("1260"), None);
        assert_eq!(ClockTime::from_hhmm("930"), None);
        assert_eq!(ClockTime::from_hhmm("09:30"), None);
        assert_eq!(ClockTime::from_hhmm("abcd"), None);
    }

    #[test]
    fn test_clock_time_round_trip() {
        let t = ClockTime::from_hhmm("0905").unwrap();
        assert_eq!(t.hhmm(), "0905");
        assert_eq!(t.to_string(), "09:05");
    }

    #[test]
    fn test_period_contains_plain() {
        let p = Period::parse("0900", "1700").unwrap();
        assert!(!p.crosses_midnight());
        assert!(p.contains(ClockTime::from_hhmm("0900").unwrap()));
        assert!(p.contains(ClockTime::from_hhmm("1200").unwrap()));
        assert!(p.contains(ClockTime::from_hhmm("1700").unwrap()));
        assert!(!p.contains(ClockTime::from_hhmm("0859").unwrap()));
        assert!(!p.contains(ClockTime::from_hhmm("1701").unwrap()));
    }

    #[test]
    fn test_period_contains_midnight_wrap() {
        let p = Period::parse("2200", "0200").unwrap();
        assert!(p.crosses_midnight());
        assert!(p.contains(ClockTime::from_hhmm("2300").unwrap()));
        assert!(p.contains(ClockTime::from_hhmm("0100").unwrap()));
        assert!(!p.contains(ClockTime::from_hhmm("1200").unwrap()));
    }

    #[test]
    fn test_minutes_until_close_wraps() {
        let p = Period::parse("2200", "0200").unwrap();
        let t = ClockTime::from_hhmm("2330").unwrap();
        assert_eq!(p.minutes_until_close(t), 150);

        let t = ClockTime::from_hhmm("0130").unwrap();
        assert_eq!(p.minutes_until_close(t), 30);
    }

    #[test]
    fn test_insert_raw_skips_malformed() {
        let mut s = WeekSchedule::new();
        assert!(s.insert_raw(Weekday::Mon, "0900", "1700"));
        assert!(!s.insert_raw(Weekday::Mon, "garbage", "1700"));
        assert_eq!(s.day(Weekday::Mon).len(), 1);
        assert_eq!(s.day(Weekday::Tue).len(), 0);
    }

    #[test]
    fn test_serde_wire_form() {
        let s = WeekSchedule::new().with_hours(Weekday::Fri, &[("1100", "1430"), ("1700", "2300")]);
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"fri\""));
        assert!(json.contains("\"1430\""));

        let back: WeekSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
