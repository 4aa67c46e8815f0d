//! Calendar period types.
//!
//! Reporting is monthly within calendar years; years are plain `i32`.

use serde::{Deserialize, Serialize};

/// A calendar month number, January (1) through December (12).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    /// January.
    pub const JANUARY: Month = Month(1);
    /// December.
    pub const DECEMBER: Month = Month(12);

    /// Creates a month from its 1-based number, if valid.
    #[must_use]
    pub fn new(number: u8) -> Option<Self> {
        (1..=12).contains(&number).then_some(Self(number))
    }

    /// Returns the 1-based month number.
    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Returns the 0-based index, for array access.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Iterates January through December in order.
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }

    /// Iterates January through this month, inclusive.
    pub fn year_to_date(self) -> impl Iterator<Item = Month> {
        (1..=self.0).map(Month)
    }

    /// Returns the previous month within the same year, if any.
    #[must_use]
    pub fn prev(self) -> Option<Month> {
        (self.0 > 1).then(|| Month(self.0 - 1))
    }

    /// Returns the English month name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self.0 {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            _ => "December",
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number).ok_or_else(|| format!("Invalid month number: {number}"))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
