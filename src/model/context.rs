//! Browsing context: the viewer's position, the explicit clock, and the
//! user-selected lens/intent/sort triple.
//!
//! The clock is always an input. Nothing in this crate reads process time,
//! which keeps every evaluation deterministic and testable.

use chrono::{NaiveDateTime, Datelike, Timelike};
use serde::{Deserialize, Serialize};

use super::{GeoPoint, Weekday};

/// Coarse temporal scope the user is browsing under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeLens {
    /// Open now.
    #[default]
    Now,
    /// Later today ("tonight").
    LaterToday,
    /// Tomorrow — a planning view with no distance cap.
    Tomorrow,
}

/// The occasion the user is planning for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Coffee,
    Breakfast,
    Lunch,
    Dinner,
    /// Date night / fancy dinner.
    FancyDinner,
    Drinks,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    Best,
    CloseBy,
    Deals,
}

/// One browsing snapshot. Recomputed results derive from a `Context` plus
/// the venue list and own nothing beyond the current render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// `None` means the viewer location is unknown: distance terms and
    /// caps are skipped, and the radial view has nothing to center on.
    pub viewer: Option<GeoPoint>,
    pub now: NaiveDateTime,
    pub lens: TimeLens,
    pub intent: Option<Intent>,
    pub sort: SortMode,
}

impl Context {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            viewer: None,
            now,
            lens: TimeLens::default(),
            intent: None,
            sort: SortMode::default(),
        }
    }

    pub fn with_viewer(mut self, viewer: GeoPoint) -> Self {
        self.viewer = Some(viewer);
        self
    }

    pub fn with_lens(mut self, lens: TimeLens) -> Self {
        self.lens = lens;
        self
    }

    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Replace the viewer position outright (a geocoded search result).
    pub fn teleport(&mut self, viewer: GeoPoint) {
        self.viewer = Some(viewer);
    }

    /// Clock value as minutes since midnight.
    pub fn clock_minutes(&self) -> u16 {
        (self.now.hour() * 60 + self.now.minute()) as u16
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from(self.now.weekday())
    }

    /// Distance from the viewer to `point` in kilometers, if the viewer
    /// location is known.
    pub fn distance_km_to(&self, point: GeoPoint) -> Option<f64> {
        self.viewer.map(|v| v.haversine_km(point))
    }
}
