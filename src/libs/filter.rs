//! Turns filter flags into an [`EntryFilter`]: a half-open date range
//! `[start, end)` plus optional consultant, project and customer names.
//!
//! ## Precedence
//!
//! The first matching rule wins:
//!
//! 1. `--week` (with optional `--year`): ISO week, Monday to Monday
//! 2. `--date` (or `--today`): a single day
//! 3. `--month` (with optional `--year`, or as `YYYY-MM`): a calendar month
//! 4. `--year`: a calendar year
//! 5. `--from` / `--to`: either side optional, `--to` inclusive
//! 6. nothing: current month for `get`, unbounded for `export`
//!
//! "Today" is passed in by the caller so the builder stays pure.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use worklog::libs::filter::{build, DefaultRange, FilterArgs};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let args = FilterArgs { month: Some("2".into()), ..Default::default() };
//! let filter = build(&args, today, DefaultRange::CurrentMonth).unwrap();
//!
//! assert_eq!(filter.range.start, NaiveDate::from_ymd_opt(2024, 2, 1));
//! assert_eq!(filter.range.end, NaiveDate::from_ymd_opt(2024, 3, 1));
//! ```

use crate::libs::error::{LedgerError, LedgerResult};
use crate::libs::messages::Message;
use chrono::{Datelike, Days, NaiveDate};
use clap::Args;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Filter flags shared by `get` and `export`.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Only entries logged by this consultant (exact name)
    #[arg(short = 'n', long)]
    pub consultant: Option<String>,

    /// Only entries for this project (exact name)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Only entries for projects of this customer (exact name)
    #[arg(short, long)]
    pub customer: Option<String>,

    /// Month number (1-12, combined with --year) or YYYY-MM
    #[arg(short, long)]
    pub month: Option<String>,

    /// ISO week number (1-53, combined with --year)
    #[arg(short, long)]
    pub week: Option<u32>,

    /// Calendar year; on its own selects the whole year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Single day (YYYY-MM-DD)
    #[arg(short = 'D', long)]
    pub date: Option<String>,

    /// Shorthand for --date with today's date
    #[arg(long)]
    pub today: bool,

    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

/// Half-open interval of days. `None` leaves that side unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn day(date: NaiveDate) -> LedgerResult<Self> {
        Ok(Self::new(date, next_day(date)?))
    }

    pub fn month(year: i32, month: u32) -> LedgerResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(LedgerError::InvalidRange(Message::MonthOutOfRange(month)));
        }
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(LedgerError::InvalidRange(Message::YearOutOfRange(year)))?;
        let end = start
            .checked_add_months(chrono::Months::new(1))
            .ok_or(LedgerError::InvalidRange(Message::YearOutOfRange(year)))?;
        Ok(Self::new(start, end))
    }

    pub fn year(year: i32) -> LedgerResult<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(LedgerError::InvalidRange(Message::YearOutOfRange(year)))?;
        let end = year
            .checked_add(1)
            .and_then(|next| NaiveDate::from_ymd_opt(next, 1, 1))
            .ok_or(LedgerError::InvalidRange(Message::YearOutOfRange(year)))?;
        Ok(Self::new(start, end))
    }

    /// ISO week `week` of `year`: Monday of that week up to the following Monday.
    pub fn iso_week(year: i32, week: u32) -> LedgerResult<Self> {
        if !(1..=53).contains(&week) {
            return Err(LedgerError::InvalidRange(Message::WeekOutOfRange(week)));
        }
        let start = iso_week_start(year, week)?;
        let end = start
            .checked_add_days(Days::new(7))
            .ok_or(LedgerError::InvalidRange(Message::YearOutOfRange(year)))?;
        Ok(Self::new(start, end))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFilter {
    pub range: DateRange,
    pub consultant: Option<String>,
    pub project: Option<String>,
    pub customer: Option<String>,
}

impl EntryFilter {
    pub fn for_range(range: DateRange) -> Self {
        Self {
            range,
            ..Default::default()
        }
    }
}

/// Range used when no date flag is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultRange {
    CurrentMonth,
    Unbounded,
}

/// Parses a zero-padded `YYYY-MM-DD` date. chrono alone would also accept
/// `2024-3-4`.
pub fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    let invalid = || LedgerError::InvalidDateFormat(Message::InvalidDateFormat(input.to_string()));
    let trimmed = input.trim();

    if trimmed.len() != 10 {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())
}

/// Parses `--month`: either a bare month number or `YYYY-MM`.
///
/// Returns the month and, for the `YYYY-MM` form, the year it pins.
pub fn parse_month(input: &str) -> LedgerResult<(Option<i32>, u32)> {
    let input_trimmed = input.trim();
    let invalid = || LedgerError::InvalidDateFormat(Message::InvalidMonthFormat(input.to_string()));

    match input_trimmed.split_once('-') {
        Some((year, month)) if !year.is_empty() => {
            let year: i32 = year.parse().map_err(|_| invalid())?;
            let month: u32 = month.parse().map_err(|_| invalid())?;
            Ok((Some(year), month))
        }
        Some(_) => Err(invalid()),
        None => {
            let month: u32 = input_trimmed.parse().map_err(|_| invalid())?;
            Ok((None, month))
        }
    }
}

/// First day of the month named by `--month`, or of the current month when
/// no month is given. A bare month number falls in the current year.
pub fn resolve_month(input: Option<&str>, today: NaiveDate) -> LedgerResult<NaiveDate> {
    let (year, month) = match input {
        Some(input) => {
            let (pinned_year, month) = parse_month(input)?;
            (pinned_year.unwrap_or(today.year()), month)
        }
        None => (today.year(), today.month()),
    };

    if !(1..=12).contains(&month) {
        return Err(LedgerError::InvalidRange(Message::MonthOutOfRange(month)));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(LedgerError::InvalidRange(Message::YearOutOfRange(year)))
}

/// Monday of ISO week `week` in `year`.
///
/// Week 1 is the week holding the year's first Thursday, so its Monday is
/// that Thursday minus three days and may fall in the previous December.
pub fn iso_week_start(year: i32, week: u32) -> LedgerResult<NaiveDate> {
    let out_of_range = || LedgerError::InvalidRange(Message::YearOutOfRange(year));

    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(out_of_range)?;
    let weekday = jan1.weekday().num_days_from_sunday();
    let days_until_thursday = (11 - weekday) % 7;
    let first_thursday = jan1.checked_add_days(Days::new(days_until_thursday as u64)).ok_or_else(out_of_range)?;
    let week1_monday = first_thursday.checked_sub_days(Days::new(3)).ok_or_else(out_of_range)?;

    week1_monday
        .checked_add_days(Days::new(7 * (week as u64 - 1)))
        .ok_or_else(out_of_range)
}

fn next_day(date: NaiveDate) -> LedgerResult<NaiveDate> {
    date.succ_opt()
        .ok_or(LedgerError::InvalidRange(Message::YearOutOfRange(date.year())))
}

fn current_month(today: NaiveDate) -> LedgerResult<DateRange> {
    DateRange::month(today.year(), today.month())
}

/// Builds the filter for `args`, evaluating the precedence rules in order.
pub fn build(args: &FilterArgs, today: NaiveDate, default: DefaultRange) -> LedgerResult<EntryFilter> {
    let date = if args.today {
        Some(today.format(DATE_FORMAT).to_string())
    } else {
        args.date.clone()
    };

    let range = if let Some(week) = args.week {
        DateRange::iso_week(args.year.unwrap_or(today.year()), week)?
    } else if let Some(date) = date {
        DateRange::day(parse_date(&date)?)?
    } else if let Some(month) = &args.month {
        let (pinned_year, month) = parse_month(month)?;
        let year = pinned_year.or(args.year).unwrap_or(today.year());
        DateRange::month(year, month)?
    } else if let Some(year) = args.year {
        DateRange::year(year)?
    } else if args.from.is_some() || args.to.is_some() {
        let start = args.from.as_deref().map(parse_date).transpose()?;
        let end = match args.to.as_deref() {
            Some(to) => Some(next_day(parse_date(to)?)?),
            None => None,
        };
        DateRange { start, end }
    } else {
        match default {
            DefaultRange::CurrentMonth => current_month(today)?,
            DefaultRange::Unbounded => DateRange::unbounded(),
        }
    };

    Ok(EntryFilter {
        range,
        consultant: args.consultant.clone(),
        project: args.project.clone(),
        customer: args.customer.clone(),
    })
}
