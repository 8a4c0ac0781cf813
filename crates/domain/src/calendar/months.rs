/// English month names, Muharram first.
pub const MONTH_NAMES_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-awwal",
    "Rabi' al-thani",
    "Jumada al-awwal",
    "Jumada al-thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// Arabic month names, same order as [`MONTH_NAMES_EN`].
pub const MONTH_NAMES_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

/// The twelve months of the Hijri year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HijriMonth {
    Muharram,
    Safar,
    RabiAlAwwal,
    RabiAlThani,
    JumadaAlAwwal,
    JumadaAlThani,
    Rajab,
    Shaban,
    Ramadan,
    Shawwal,
    DhuAlQidah,
    DhuAlHijjah,
}

impl HijriMonth {
    pub const ALL: [HijriMonth; 12] = [
        HijriMonth::Muharram,
        HijriMonth::Safar,
        HijriMonth::RabiAlAwwal,
        HijriMonth::RabiAlThani,
        HijriMonth::JumadaAlAwwal,
        HijriMonth::JumadaAlThani,
        HijriMonth::Rajab,
        HijriMonth::Shaban,
        HijriMonth::Ramadan,
        HijriMonth::Shawwal,
        HijriMonth::DhuAlQidah,
        HijriMonth::DhuAlHijjah,
    ];

    /// Looks up a month by its 1-indexed number.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=12 => Some(Self::ALL[usize::from(number - 1)]),
            _ => None,
        }
    }

    /// 1-indexed month number (Muharram = 1).
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn name_en(&self) -> &'static str {
        MONTH_NAMES_EN[self.index()]
    }

    pub fn name_ar(&self) -> &'static str {
        MONTH_NAMES_AR[self.index()]
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name_en())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip_through_lookup() {
        for month in HijriMonth::ALL {
            assert_eq!(HijriMonth::from_number(month.number()), Some(month));
        }
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        assert_eq!(HijriMonth::from_number(0), None);
        assert_eq!(HijriMonth::from_number(13), None);
    }

    #[test]
    fn names_come_from_the_tables() {
        assert_eq!(HijriMonth::Muharram.name_en(), "Muharram");
        assert_eq!(HijriMonth::JumadaAlThani.name_en(), "Jumada al-thani");
        assert_eq!(HijriMonth::Ramadan.name_ar(), "رمضان");
        assert_eq!(HijriMonth::DhuAlHijjah.name_ar(), "ذو الحجة");
        assert_eq!(HijriMonth::DhuAlHijjah.number(), 12);
    }
}
