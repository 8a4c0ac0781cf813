//! Capability-aware Gregorian to Hijri conversion.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

#[cfg(feature = "hijri")]
use super::TabularIslamic;
use super::{CalendarError, HijriCalendar, HijriDate, parse_iso_date, today_in};

/// Placeholder returned in place of a Hijri date when conversion is disabled.
pub const UNAVAILABLE_MESSAGE: &str =
    "Hijri conversion is disabled. Set HIJRI_ENABLED=true to enable Hijri dates";

/// Result of converting one Gregorian date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub gregorian: NaiveDate,
    /// `None` when the converter has no Hijri capability.
    pub hijri: Option<HijriDate>,
}

/// Converts Gregorian dates to Hijri, or reports that it cannot.
///
/// Whether a calendar is present is fixed at construction; every call after
/// that branches on it instead of failing.
#[derive(Clone)]
pub struct CalendarConverter {
    calendar: Option<Arc<dyn HijriCalendar>>,
}

impl CalendarConverter {
    /// Creates a converter backed by the given calendar.
    pub fn new(calendar: Arc<dyn HijriCalendar>) -> Self {
        Self {
            calendar: Some(calendar),
        }
    }

    /// Creates a converter using the civil tabular calendar.
    #[cfg(feature = "hijri")]
    pub fn tabular() -> Self {
        Self::new(Arc::new(TabularIslamic::new()))
    }

    /// Creates a converter with no Hijri capability.
    pub fn unavailable() -> Self {
        Self { calendar: None }
    }

    /// Tabular converter if `enabled` and the `hijri` feature is compiled
    /// in, otherwise the fallback.
    pub fn from_flag(enabled: bool) -> Self {
        match enabled {
            #[cfg(feature = "hijri")]
            true => Self::tabular(),
            #[cfg(not(feature = "hijri"))]
            true => {
                tracing::warn!(
                    "hijri conversion requested but the `hijri` feature is not compiled in"
                );
                Self::unavailable()
            }
            false => Self::unavailable(),
        }
    }

    /// Returns true if Hijri dates will be produced.
    pub fn is_available(&self) -> bool {
        self.calendar.is_some()
    }

    /// Resolves the Gregorian date for a request, using the system clock
    /// when no explicit date is given.
    pub fn resolve_date(
        &self,
        date: Option<&str>,
        timezone: &str,
    ) -> Result<NaiveDate, CalendarError> {
        self.resolve_date_at(date, timezone, Utc::now())
    }

    /// Like [`resolve_date`](Self::resolve_date) with an explicit "now".
    ///
    /// An empty date string counts as absent. The timezone is only looked up
    /// when the date is absent.
    pub fn resolve_date_at(
        &self,
        date: Option<&str>,
        timezone: &str,
        now: DateTime<Utc>,
    ) -> Result<NaiveDate, CalendarError> {
        match date.filter(|d| !d.is_empty()) {
            Some(date) => parse_iso_date(date),
            None => today_in(timezone, now),
        }
    }

    /// Converts an already resolved Gregorian date.
    pub fn convert(&self, gregorian: NaiveDate) -> Result<Conversion, CalendarError> {
        let hijri = match &self.calendar {
            Some(calendar) => {
                let hijri = calendar.to_hijri(gregorian)?;
                metrics::counter!("hijri_conversions_total", "mode" => calendar.name())
                    .increment(1);
                tracing::debug!(%gregorian, %hijri, calendar = calendar.name(), "converted date");
                Some(hijri)
            }
            None => {
                metrics::counter!("hijri_conversions_total", "mode" => "fallback").increment(1);
                tracing::debug!(%gregorian, "hijri conversion unavailable, returning fallback");
                None
            }
        };

        Ok(Conversion { gregorian, hijri })
    }

    /// Resolves and converts in one step.
    pub fn convert_request(
        &self,
        date: Option<&str>,
        timezone: &str,
    ) -> Result<Conversion, CalendarError> {
        let gregorian = self.resolve_date(date, timezone)?;
        self.convert(gregorian)
    }
}

impl Default for CalendarConverter {
    fn default() -> Self {
        Self::from_flag(true)
    }
}

impl std::fmt::Debug for CalendarConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarConverter")
            .field("calendar", &self.calendar.as_ref().map(|c| c.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn explicit_date_wins_over_timezone() {
        let converter = CalendarConverter::unavailable();
        let now = Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0).unwrap();
        let date = converter
            .resolve_date_at(Some("2024-01-01"), "NotAZone", now)
            .unwrap();
        assert_eq!(date, ymd(2024, 1, 1));
    }

    #[test]
    fn empty_date_falls_back_to_today() {
        let converter = CalendarConverter::unavailable();
        let now = Utc.with_ymd_and_hms(2024, 3, 11, 22, 0, 0).unwrap();
        let date = converter
            .resolve_date_at(Some(""), "Asia/Karachi", now)
            .unwrap();
        assert_eq!(date, ymd(2024, 3, 12));
    }

    #[test]
    fn missing_date_with_bad_timezone_fails() {
        let converter = CalendarConverter::unavailable();
        let err = converter
            .resolve_date_at(None, "NotAZone", Utc::now())
            .unwrap_err();
        assert_eq!(err, CalendarError::UnknownTimezone("NotAZone".to_string()));
    }

    #[cfg(feature = "hijri")]
    #[test]
    fn tabular_converter_produces_hijri_date() {
        use crate::calendar::HijriMonth;

        let converter = CalendarConverter::from_flag(true);
        assert!(converter.is_available());

        let conversion = converter.convert(ymd(2024, 1, 1)).unwrap();
        assert_eq!(conversion.gregorian, ymd(2024, 1, 1));
        assert_eq!(
            conversion.hijri,
            Some(HijriDate::new(1445, HijriMonth::JumadaAlThani, 19))
        );
    }

    #[cfg(not(feature = "hijri"))]
    #[test]
    fn flag_is_ignored_without_the_hijri_feature() {
        assert!(!CalendarConverter::from_flag(true).is_available());
    }

    #[test]
    fn unavailable_converter_returns_no_hijri_date() {
        let converter = CalendarConverter::from_flag(false);
        assert!(!converter.is_available());

        let conversion = converter.convert(ymd(2024, 1, 1)).unwrap();
        assert_eq!(conversion.gregorian, ymd(2024, 1, 1));
        assert_eq!(conversion.hijri, None);
    }

    #[cfg(feature = "hijri")]
    #[test]
    fn debug_names_the_calendar() {
        assert_eq!(
            format!("{:?}", CalendarConverter::tabular()),
            "CalendarConverter { calendar: Some(\"tabular\") }"
        );
    }

    #[test]
    fn debug_shows_missing_calendar() {
        assert_eq!(
            format!("{:?}", CalendarConverter::unavailable()),
            "CalendarConverter { calendar: None }"
        );
    }
}
