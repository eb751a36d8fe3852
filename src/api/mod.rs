//! API clients for external services.
//!
//! - **Toggl**: paginated retrieval of tracked time entries
//! - **Sheets**: writing report rows to a Google spreadsheet

pub mod sheets;
pub mod toggl;

pub use sheets::SheetsConfig;
pub use toggl::TogglConfig;
