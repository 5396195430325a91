//! Calendar-month arithmetic for due dates
//!
//! Adding months to a date whose day does not exist in the target month
//! (e.g. the 31st into a 30-day month) has two common answers:
//!
//! - [`MonthOverflow::Rollover`]: keep the day number and let the excess
//!   spill into the following month. `2024-01-31 + 1 month` is `2024-03-02`.
//!   This is what setting the month field of a JavaScript `Date` does and is
//!   the default.
//! - [`MonthOverflow::Clamp`]: stop at the last day of the target month.
//!   `2024-01-31 + 1 month` is `2024-02-29`. This is `chrono`'s own rule.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Rule applied when the day of month does not exist in the target month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthOverflow {
    /// Spill the excess days into the next month
    #[default]
    Rollover,
    /// Clamp to the last day of the target month
    Clamp,
}

/// Add `months` calendar months to `date` under the given overflow rule
///
/// Returns `None` only when the result falls outside the range `chrono`
/// can represent.
pub fn add_months(date: NaiveDate, months: u32, overflow: MonthOverflow) -> Option<NaiveDate> {
    match overflow {
        MonthOverflow::Clamp => date.checked_add_months(Months::new(months)),
        MonthOverflow::Rollover => {
            use chrono::Datelike;

            // Move from the first of the month so the month step itself never
            // clamps, then add the day offset back.
            let first = date.with_day(1)?;
            let target = first.checked_add_months(Months::new(months))?;
            target.checked_add_days(Days::new(u64::from(date.day() - 1)))
        }
    }
}
