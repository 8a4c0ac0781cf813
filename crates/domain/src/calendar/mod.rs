//! Gregorian to Hijri calendar conversion.
//!
//! The conversion itself sits behind the [`HijriCalendar`] trait so the
//! service can run without it; [`CalendarConverter`] holds the capability
//! (or its absence) decided once at startup.

mod converter;
mod gregorian;
mod months;
#[cfg(feature = "hijri")]
mod tabular;

pub use converter::{CalendarConverter, Conversion, UNAVAILABLE_MESSAGE};
pub use gregorian::{parse_iso_date, today_in};
pub use months::{HijriMonth, MONTH_NAMES_AR, MONTH_NAMES_EN};
#[cfg(feature = "hijri")]
pub use tabular::TabularIslamic;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while resolving or converting a date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The date string does not have three `-` separated segments.
    #[error("invalid date '{input}': expected YYYY-MM-DD")]
    InvalidFormat { input: String },

    /// One of the segments is not an integer.
    #[error("invalid date '{input}': {component} is not an integer ({reason})")]
    InvalidComponent {
        input: String,
        component: &'static str,
        reason: String,
    },

    /// The segments are integers but do not name a real calendar day.
    #[error("invalid date '{input}': {reason}")]
    OutOfRange { input: String, reason: String },

    /// The timezone name is not in the IANA database.
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),

    /// The calendar backend could not represent the date.
    #[error("cannot convert date: {0}")]
    Conversion(String),
}

/// A date in the Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HijriDate {
    pub year: i32,
    pub month: HijriMonth,
    pub day: u8,
}

impl HijriDate {
    /// Creates a Hijri date without checking the day against the month length.
    pub fn new(year: i32, month: HijriMonth, day: u8) -> Self {
        Self { year, month, day }
    }

    /// English rendering, e.g. `19 Jumada al-thani 1445 AH`.
    pub fn formatted_en(&self) -> String {
        format!("{} {} {} AH", self.day, self.month.name_en(), self.year)
    }
}

impl std::fmt::Display for HijriDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}-{:02} AH", self.year, self.month.number(), self.day)
    }
}

/// A Hijri calendar implementation.
///
/// Implementations must be pure: the same Gregorian date always maps to the
/// same Hijri date.
pub trait HijriCalendar: Send + Sync {
    /// Short identifier used in logs and metrics labels.
    fn name(&self) -> &'static str;

    /// Converts a proleptic Gregorian date to its Hijri equivalent.
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate, CalendarError>;

    /// Converts a Hijri date back to the Gregorian calendar.
    ///
    /// Returns `None` if the day does not exist in that Hijri month or the
    /// result falls outside the range `NaiveDate` can represent.
    fn to_gregorian(&self, date: HijriDate) -> Option<NaiveDate>;
}
