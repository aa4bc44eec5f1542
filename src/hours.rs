//! Opening-hours evaluation.
//!
//! Two distinct paths, never mixed:
//!
//! 1. A venue **with** a [`WeekSchedule`] goes through [`evaluate`], which
//!    derives a discrete [`OpeningStatus`] from today's periods.
//! 2. A venue **without** a schedule gets [`heuristic_signal`], a
//!    best-effort label from category keywords crossed with the clock and
//!    the time lens. It carries no numeric guarantees beyond always
//!    producing a non-empty string.
//!
//! Neither path can fail: a bad venue degrades to "no signal", it never
//! stops the rest of the set from being evaluated.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::model::{ClockTime, TimeLens, Venue, VenueClass, WeekSchedule, Weekday};

/// Minutes before close inside which a venue counts as closing soon.
pub const CLOSING_SOON_WINDOW_MIN: i32 = 60;

/// Discrete availability derived from a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OpeningStatus {
    Open,
    /// Open, but closing within [`CLOSING_SOON_WINDOW_MIN`] minutes.
    ClosingSoon { closes: ClockTime },
    /// Closed now, reopening later today.
    OpensLater { opens: ClockTime },
    /// The schedule exists but lists no hours for today.
    ClosedToday,
    /// Today's hours are over.
    ClosedForDay,
}

impl OpeningStatus {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open | Self::ClosingSoon { .. })
    }
}

fn clock_of(now: NaiveDateTime) -> ClockTime {
    // hour * 60 + minute is always < 1440
    ClockTime::from_minutes((now.hour() * 60 + now.minute()) as u16).unwrap_or(ClockTime::MIDNIGHT)
}

/// Evaluate a schedule against an explicit timestamp.
///
/// Containment and the closing-soon window are both computed on
/// minutes-since-midnight; periods whose close precedes their open wrap
/// past midnight.
pub fn evaluate(schedule: &WeekSchedule, now: NaiveDateTime) -> OpeningStatus {
    let today = Weekday::from(now.weekday());
    let periods = schedule.day(today);
    if periods.is_empty() {
        return OpeningStatus::ClosedToday;
    }

    let t = clock_of(now);

    for period in periods {
        if period.contains(t) {
            let diff = period.minutes_until_close(t);
            if diff > 0 && diff <= CLOSING_SOON_WINDOW_MIN {
                return OpeningStatus::ClosingSoon { closes: period.close };
            }
            return OpeningStatus::Open;
        }
    }

    match periods
        .iter()
        .filter(|p| p.open > t)
        .min_by_key(|p| p.open)
    {
        Some(p) => OpeningStatus::OpensLater { opens: p.open },
        None => OpeningStatus::ClosedForDay,
    }
}

/// Whether the venue is provably open at `now`. Venues without a schedule
/// are never "provably" open, so the heuristic path reports `false` here.
pub fn is_open_now(venue: &Venue, now: NaiveDateTime) -> bool {
    venue
        .schedule
        .as_ref()
        .is_some_and(|s| evaluate(s, now).is_open())
}

/// Best-effort availability label for venues with no schedule at all.
///
/// Category keywords crossed with the hour of day and the lens. Purely
/// presentational; always terminates with a non-empty string.
pub fn heuristic_signal(class: &VenueClass, now: NaiveDateTime, lens: TimeLens) -> &'static str {
    let hour = now.hour();

    if class.bar || class.drinks_signal {
        // Bar-like venues keep late hours.
        return if hour >= 16 || hour < 2 {
            "Open late"
        } else if lens == TimeLens::LaterToday {
            "Opens tonight"
        } else {
            "Opens later"
        };
    }

    if class.cafe_like() {
        // Coffee hours, roughly 7:00–16:00.
        return match hour {
            7..=10 => "Open now",
            11..=13 => "Serving lunch",
            14..=15 => "Open now",
            _ => "Opens later",
        };
    }

    match hour {
        11..=13 => "Serving lunch",
        17..=20 => "Open for dinner",
        _ if lens == TimeLens::LaterToday => "Opens tonight",
        14..=16 => "Open now",
        _ => "Opens later",
    }
}

/// The single label surface: schedule-derived status when a schedule
/// exists, heuristic otherwise. Callers never branch on "has schedule".
pub fn describe(venue: &Venue, now: NaiveDateTime, lens: TimeLens) -> String {
    match &venue.schedule {
        Some(schedule) => match evaluate(schedule, now) {
            OpeningStatus::Open => "Open now".to_owned(),
            OpeningStatus::ClosingSoon { closes } => format!("Closing soon · until {closes}"),
            OpeningStatus::OpensLater { opens } => format!("Opens at {opens}"),
            OpeningStatus::ClosedToday => "Closed today".to_owned(),
            OpeningStatus::ClosedForDay => "Closed for the day".to_owned(),
        },
        None => heuristic_signal(&VenueClass::of(venue), now, lens).to_owned(),
    }
}
