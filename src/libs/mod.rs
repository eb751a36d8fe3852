//! Core library modules for the tallysheet application.
//!
//! ## Features
//!
//! - **Report Engine**: Interval normalization, day aggregation, break inference
//! - **Presentation**: Display formatting, console tables, file export, sheet layout
//! - **Infrastructure**: Configuration, data storage, entry sources, messaging
//!
//! ## Usage
//!
//! ```rust
//! use tallysheet::libs::interval::RawEntry;
//! use tallysheet::libs::report::generate_report;
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let entries = vec![RawEntry::new("2024-01-01T09:00:00", "2024-01-01T12:00:00")];
//! let report = generate_report(&entries, day, day)?;
//! assert_eq!(report.days[0].formatted.duration, "03:00");
//! # Ok::<(), tallysheet::libs::error::ReportError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod interval;
pub mod messages;
pub mod report;
pub mod sheet;
pub mod source;
pub mod view;
