//! Date filters shared by the readings and history queries.
//!
//! Every filter is expressed as a `sea_orm::Condition` on the table's `created_at`
//! column, so values are always bound as placeholders and the same condition can be
//! reused verbatim for a paginated select and its count.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::{ColumnTrait, Condition};

use crate::error::{AppError, AppResult};

pub const DATE_FORMAT_ERROR: &str = "Invalid date format. Please use YYYY-MM-DD.";

/// Coarse time window relative to the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeSelector {
    Yearly,
    Monthly,
    Weekly,
    Daily,
    #[default]
    All,
}

impl RangeSelector {
    /// Selectors match exactly (lowercase); anything else falls back to `All`.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("yearly") => Self::Yearly,
            Some("monthly") => Self::Monthly,
            Some("weekly") => Self::Weekly,
            Some("daily") => Self::Daily,
            _ => Self::All,
        }
    }

    /// Half-open `[from, to)` date window containing `today`, or `None` for `All`.
    ///
    /// Weeks start on Sunday and never extend past the boundaries of `today`'s year.
    #[must_use]
    pub fn window(self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let year_start = NaiveDate::from_ymd_opt(today.year(), 1, 1)?;
        let next_year_start = NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)?;

        match self {
            Self::All => None,
            Self::Daily => Some((today, today.checked_add_days(Days::new(1))?)),
            Self::Weekly => {
                let offset = u64::from(today.weekday().num_days_from_sunday());
                let week_start = today.checked_sub_days(Days::new(offset))?;
                let week_end = week_start.checked_add_days(Days::new(7))?;
                Some((week_start.max(year_start), week_end.min(next_year_start)))
            }
            Self::Monthly => {
                let month_start = today.with_day(1)?;
                Some((month_start, month_start.checked_add_months(Months::new(1))?))
            }
            Self::Yearly => Some((year_start, next_year_start)),
        }
    }
}

/// Strictly parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `AppError::Validation` for anything else, including unpadded fields.
pub fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    let well_formed = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(AppError::Validation(DATE_FORMAT_ERROR.to_string()));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(DATE_FORMAT_ERROR.to_string()))
}

/// Inclusive calendar-date bounds plus a range selector, ANDed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub range: RangeSelector,
}

impl DateFilter {
    /// Build a filter from raw query values. Empty strings count as absent.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if a supplied date is not `YYYY-MM-DD`.
    pub fn parse(start: Option<&str>, end: Option<&str>, range: Option<&str>) -> AppResult<Self> {
        let parse_opt = |raw: Option<&str>| -> AppResult<Option<NaiveDate>> {
            match raw.map(str::trim).filter(|s| !s.is_empty()) {
                Some(s) => parse_date(s).map(Some),
                None => Ok(None),
            }
        };

        Ok(Self {
            start: parse_opt(start)?,
            end: parse_opt(end)?,
            range: RangeSelector::parse(range),
        })
    }

    /// Condition on `created_at` for the given current date.
    #[must_use]
    pub fn condition<C: ColumnTrait>(&self, created_at: C, today: NaiveDate) -> Condition {
        let mut cond = Condition::all();

        if let Some(start) = self.start {
            cond = cond.add(created_at.gte(midnight(start)));
        }
        if let Some(end) = self.end.and_then(|d| d.checked_add_days(Days::new(1))) {
            cond = cond.add(created_at.lt(midnight(end)));
        }
        if let Some((from, to)) = self.range.window(today) {
            cond = cond
                .add(created_at.gte(midnight(from)))
                .add(created_at.lt(midnight(to)));
        }

        cond
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
