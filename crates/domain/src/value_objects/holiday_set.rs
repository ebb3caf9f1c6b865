//! Holiday set value object

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Set of Colombian national holidays, keyed by local calendar date.
///
/// An empty set is a valid, loaded set; "holidays unknown" is modelled by
/// the caller holding no set at all, never by an empty one.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use domain::value_objects::HolidaySet;
///
/// let holidays = HolidaySet::parse(["2025-01-01", "2025-01-06"]).unwrap();
/// let reyes = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// assert!(holidays.contains(reyes));
/// assert_eq!(holidays.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Build a set from already-parsed dates. Duplicates collapse.
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Parse a set from `YYYY-MM-DD` strings as delivered by the holiday feed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidHolidayDate`] carrying the first entry
    /// that does not parse as a calendar date. A partially valid payload is
    /// rejected as a whole; silently dropping entries would turn holidays
    /// into working days.
    pub fn parse<I, S>(raw: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dates = BTreeSet::new();
        for entry in raw {
            let entry = entry.as_ref();
            let date = NaiveDate::parse_from_str(entry, "%Y-%m-%d")
                .map_err(|_| DomainError::invalid_holiday(entry))?;
            dates.insert(date);
        }
        Ok(Self { dates })
    }

    /// Whether the given date is a holiday.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of distinct holiday dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the set holds no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Holidays in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self::new(iter)
    }
}
