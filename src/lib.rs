//! # Tallysheet - attendance sheets from tracked time
//!
//! A command-line utility that turns tracked time entries into a per-day
//! attendance report: start, end, worked duration and break, rounded to
//! clean values for payroll and administration.
//!
//! ## Features
//!
//! - **Report Generation**: Midnight splitting, boundary rounding, daily aggregation, break inference
//! - **Time Tracker Integration**: Paginated retrieval from Toggl
//! - **Spreadsheet Output**: Row export to Google Sheets
//! - **Data Export**: CSV, JSON and Excel files
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tallysheet::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
