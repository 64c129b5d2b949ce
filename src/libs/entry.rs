//! Resolution and validation of a new time entry.
//!
//! `add` collects optional flags into an [`AddRequest`]; missing values are
//! filled from the configured defaults and the result is validated into an
//! [`EntryDraft`] before anything touches the store.

use crate::libs::config::Config;
use crate::libs::error::{LedgerError, LedgerResult};
use crate::libs::filter::parse_date;
use crate::libs::messages::Message;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct AddRequest {
    pub hours: f64,
    pub description: String,
    pub project: Option<String>,
    pub client: Option<String>,
    pub consultant: Option<String>,
    pub rate: Option<f64>,
    pub date: Option<String>,
}

/// A fully specified entry, ready for reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
    pub hourly_rate: f64,
    pub consultant: String,
    pub customer: String,
    pub project: String,
}

fn pick(flag: Option<String>, default: &Option<String>) -> Option<String> {
    flag.filter(|v| !v.is_empty())
        .or_else(|| default.clone())
        .filter(|v| !v.is_empty())
}

impl AddRequest {
    /// Applies `config` defaults and validates the result.
    ///
    /// Checks run in a fixed order: consultant, client, project, rate,
    /// date, hours, description. The first failure is returned.
    pub fn resolve(self, config: &Config, today: NaiveDate) -> LedgerResult<EntryDraft> {
        let consultant = pick(self.consultant, &config.default_consultant).ok_or(LedgerError::Validation(Message::ConsultantRequired))?;
        let customer = pick(self.client, &config.default_client).ok_or(LedgerError::Validation(Message::CustomerRequired))?;
        let project = pick(self.project, &config.default_project).ok_or(LedgerError::Validation(Message::ProjectRequired))?;

        let hourly_rate = self.rate.or(config.default_rate).unwrap_or(0.0);
        if !(hourly_rate.is_finite() && hourly_rate > 0.0) {
            return Err(LedgerError::Validation(Message::RateMustBePositive));
        }

        let date = match self.date.as_deref() {
            Some(date) if !date.is_empty() => parse_date(date)?,
            _ => today,
        };

        if !(self.hours.is_finite() && self.hours > 0.0) {
            return Err(LedgerError::Validation(Message::HoursMustBePositive));
        }

        if self.description.is_empty() {
            return Err(LedgerError::Validation(Message::DescriptionRequired));
        }

        Ok(EntryDraft {
            date,
            hours: self.hours,
            description: self.description,
            hourly_rate,
            consultant,
            customer,
            project,
        })
    }
}
