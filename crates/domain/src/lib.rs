//! Domain layer for the Qibla & Hijri API.
//!
//! This crate provides the two stateless computations the service exposes:
//! - Initial great-circle bearing toward the Kaaba (`qibla`)
//! - Gregorian to Hijri conversion with an optional-capability fallback (`calendar`)

pub mod calendar;
pub mod error;
pub mod qibla;

#[cfg(feature = "hijri")]
pub use calendar::TabularIslamic;
pub use calendar::{
    CalendarConverter, CalendarError, Conversion, HijriCalendar, HijriDate, HijriMonth,
    MONTH_NAMES_AR, MONTH_NAMES_EN, UNAVAILABLE_MESSAGE, parse_iso_date, today_in,
};
pub use error::DomainError;
pub use qibla::{KAABA, initial_bearing, qibla_bearing};
