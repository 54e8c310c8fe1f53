//! Monday-to-Sunday reporting window.

use chrono::Datelike;
use chrono::Duration;
use chrono::Local;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use serde::Serialize;
use serde::Serializer;

/// Layout of date-times in rendered reports
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the reference instant for a report run.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// The week containing a reference instant.
///
/// `start` is the Monday at 00:00:00, `end` the following Sunday at
/// 23:59:59 (no sub-second part). Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekWindow {
    #[serde(serialize_with = "serialize_datetime")]
    pub start: NaiveDateTime,
    #[serde(serialize_with = "serialize_datetime")]
    pub end: NaiveDateTime,
}

impl WeekWindow {
    pub fn containing(reference: NaiveDateTime) -> Self {
        let days_from_monday = i64::from(reference.weekday().num_days_from_monday());
        let start = (reference.date() - Duration::days(days_from_monday)).and_time(NaiveTime::MIN);
        let end = start
            + Duration::days(6)
            + Duration::hours(23)
            + Duration::minutes(59)
            + Duration::seconds(59);
        Self { start, end }
    }

    pub fn current(clock: &dyn Clock) -> Self {
        Self::containing(clock.now())
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

fn serialize_datetime<S: Serializer>(datetime: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&datetime.format(DATETIME_FORMAT))
}
