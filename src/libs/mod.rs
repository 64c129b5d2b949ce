//! Core library modules for worklog.
//!
//! - **Input**: [`filter`] builds date/entity filters, [`entry`] resolves and validates new entries
//! - **Domain**: [`ledger`] runs the add and query paths, [`summary`] computes costs and totals
//! - **Output**: [`export`] renderers, [`view`] tables, [`report`] monthly report, [`formatter`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`error`], [`messages`]
//!
//! ```rust
//! use chrono::NaiveDate;
//! use worklog::db::db::Db;
//! use worklog::libs::config::Config;
//! use worklog::libs::entry::AddRequest;
//! use worklog::libs::filter::{DateRange, EntryFilter};
//! use worklog::libs::ledger::Ledger;
//!
//! let dir = tempfile::tempdir()?;
//! let mut db = Db::open(&dir.path().join("worklog.db"))?;
//! let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let draft = AddRequest {
//!     hours: 3.5,
//!     description: "Workshop".into(),
//!     project: Some("Apollo".into()),
//!     client: Some("Acme".into()),
//!     consultant: Some("Alice".into()),
//!     rate: Some(500.0),
//!     date: None,
//! }
//! .resolve(&Config::default(), today)?;
//!
//! let mut ledger = Ledger::new(&mut db);
//! assert!(!ledger.add(&draft)?.merged);
//! let outcome = ledger.query(&EntryFilter::for_range(DateRange::month(2024, 3)?))?;
//! # let _ = outcome;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod entry;
pub mod error;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod ledger;
pub mod messages;
pub mod report;
pub mod summary;
pub mod view;
