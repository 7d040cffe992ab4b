// Temperature dataset domain models
use crate::error::ValidationError;
use chrono::Month;
use serde::Serialize;

/// 0-based month (January = 0).
///
/// Every layer past validation speaks this convention: the y-axis domain,
/// the `data-month` cell attribute and the tooltip formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MonthIndex(u8);

impl MonthIndex {
    pub const COUNT: u8 = 12;

    pub fn new(index: u8) -> Option<Self> {
        (index < Self::COUNT).then_some(Self(index))
    }

    /// Convert a 1-based calendar month.
    pub fn from_calendar(month: u8) -> Option<Self> {
        month.checked_sub(1).and_then(Self::new)
    }

    pub fn all() -> impl Iterator<Item = MonthIndex> {
        (0..Self::COUNT).map(Self)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn calendar(self) -> u8 {
        self.0 + 1
    }

    /// Full English month name, e.g. "January".
    pub fn name(self) -> &'static str {
        match Month::try_from(self.calendar()) {
            Ok(month) => month.name(),
            // unreachable: the constructor bounds the index
            Err(_) => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureRecord {
    pub year: i32,
    pub month: MonthIndex,
    pub variance: f64,
}

impl TemperatureRecord {
    /// Validate a raw record. `index` is the record's position in the source
    /// document and is only used for error reporting.
    pub fn new(index: usize, year: i64, month: i64, variance: f64) -> Result<Self, ValidationError> {
        let year = i32::try_from(year).map_err(|_| ValidationError::YearOutOfRange { index, year })?;

        let month = u8::try_from(month)
            .ok()
            .and_then(MonthIndex::from_calendar)
            .ok_or(ValidationError::MonthOutOfRange { index, month })?;

        if !variance.is_finite() {
            return Err(ValidationError::NonFiniteVariance { index });
        }

        Ok(Self {
            year,
            month,
            variance,
        })
    }

    /// 1-based calendar month as it appears in the source document.
    pub fn calendar_month(&self) -> u8 {
        self.month.calendar()
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<TemperatureRecord>,
}

impl Dataset {
    pub fn new(base_temperature: f64, monthly_variance: Vec<TemperatureRecord>) -> Self {
        Self {
            base_temperature,
            monthly_variance,
        }
    }

    pub fn absolute_temperature(&self, record: &TemperatureRecord) -> f64 {
        self.base_temperature + record.variance
    }

    /// Inclusive (first, last) year, or `None` when the dataset is empty.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let mut years = self.monthly_variance.iter().map(|r| r.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }
}
