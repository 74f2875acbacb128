use std::{fmt::Display, str::FromStr};

use chrono::{Datelike, NaiveDate};

use super::lexicon::SWEDISH;

/// A weekday as used to index a [`WeeklyMenu`](super::WeeklyMenu).
///
/// Serialized as the lowercase Swedish day name, which is also how the
/// restaurant labels its days.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Serialize, serde::Deserialize,
)]
pub enum DayKey {
    #[serde(rename = "måndag")]
    Monday,
    #[serde(rename = "tisdag")]
    Tuesday,
    #[serde(rename = "onsdag")]
    Wednesday,
    #[serde(rename = "torsdag")]
    Thursday,
    #[serde(rename = "fredag")]
    Friday,
    #[serde(rename = "lördag")]
    Saturday,
    #[serde(rename = "söndag")]
    Sunday,
}

impl DayKey {
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Monday is 0, Sunday is 6.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        // num_days_from_monday is always in 0..7
        Self::ALL[date.weekday().num_days_from_monday() as usize]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        SWEDISH.days[self.index()]
    }
}

impl Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDay(String);

impl Display for UnknownDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown day name: {}", self.0)
    }
}

impl std::error::Error for UnknownDay {}

impl FromStr for DayKey {
    type Err = UnknownDay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SWEDISH
            .day_from_name(s)
            .ok_or_else(|| UnknownDay(s.to_owned()))
    }
}
