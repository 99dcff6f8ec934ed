//! Future date frequency model

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Spacing of generated future dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Frequency {
    /// Every calendar day
    #[serde(rename = "D", alias = "daily")]
    Daily,
    /// Every seven days
    #[serde(rename = "W", alias = "weekly")]
    Weekly,
    /// First day of every month
    #[default]
    #[serde(rename = "MS", alias = "month_start")]
    MonthStart,
}

impl Frequency {
    /// `periods` dates strictly after `last`, spaced by this frequency.
    ///
    /// Month starts are anchored to the calendar, not to `last`: the first
    /// generated date is the first day of the month after `last`.
    pub fn dates_after(self, last: NaiveDate, periods: usize) -> Vec<NaiveDate> {
        match self {
            Frequency::Daily => (1..=periods)
                .filter_map(|k| last.checked_add_signed(Duration::days(k as i64)))
                .collect(),
            Frequency::Weekly => (1..=periods)
                .filter_map(|k| last.checked_add_signed(Duration::weeks(k as i64)))
                .collect(),
            Frequency::MonthStart => {
                let month_start = last.with_day(1).unwrap_or(last);
                (1..=periods)
                    .filter_map(|k| month_start.checked_add_months(Months::new(k as u32)))
                    .collect()
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Daily => "D",
            Frequency::Weekly => "W",
            Frequency::MonthStart => "MS",
        }
    }
}
