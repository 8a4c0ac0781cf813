//! Arithmetical (tabular) Islamic calendar, civil variant.
//!
//! Backed by `icu_calendar`'s `IslamicCivil`: thirty-year leap cycle,
//! Friday epoch (16 July 622 Julian).

use chrono::{Datelike, NaiveDate};
use icu_calendar::islamic::IslamicCivil;
use icu_calendar::{Date, Iso};

use super::{CalendarError, HijriCalendar, HijriDate, HijriMonth};

/// Civil tabular Hijri calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabularIslamic;

impl TabularIslamic {
    pub const fn new() -> Self {
        Self
    }
}

fn iso_from_naive(date: NaiveDate) -> Result<Date<Iso>, CalendarError> {
    Date::try_new_iso_date(date.year(), date.month() as u8, date.day() as u8)
        .map_err(|e| CalendarError::Conversion(e.to_string()))
}

fn naive_from_iso(date: &Date<Iso>) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year().number, date.month().ordinal, date.day_of_month().0)
}

impl HijriCalendar for TabularIslamic {
    fn name(&self) -> &'static str {
        "tabular"
    }

    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate, CalendarError> {
        let hijri = iso_from_naive(date)?.to_calendar(IslamicCivil::new());

        let month = u8::try_from(hijri.month().ordinal)
            .ok()
            .and_then(HijriMonth::from_number)
            .ok_or_else(|| {
                CalendarError::Conversion(format!(
                    "month {} is not a Hijri month",
                    hijri.month().ordinal
                ))
            })?;
        let day = u8::try_from(hijri.day_of_month().0)
            .map_err(|e| CalendarError::Conversion(e.to_string()))?;

        Ok(HijriDate::new(hijri.year().number, month, day))
    }

    fn to_gregorian(&self, date: HijriDate) -> Option<NaiveDate> {
        let hijri = Date::try_new_islamic_civil_date_with_calendar(
            date.year,
            date.month.number(),
            date.day,
            IslamicCivil::new(),
        )
        .ok()?;
        naive_from_iso(&hijri.to_iso())
    }
}
