//! Toggl detailed report client.
//!
//! Retrieves the tracked time entries of a workspace for a date range from
//! the Toggl "details" report endpoint. The endpoint is paginated: pages are
//! requested one after another, starting at 1, until the number of collected
//! entries reaches the `total_count` announced by the API or a page comes
//! back empty. Each entry is reduced to its `start` / `end` pair.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tallysheet::api::toggl::{Toggl, TogglConfig};
//! use chrono::NaiveDate;
//!
//! # async fn run(config: TogglConfig) -> anyhow::Result<()> {
//! let since = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let until = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//! let entries = Toggl::new(&config).get_entries(since, until).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::config::ConfigModule;
use crate::libs::interval::RawEntry;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_debug, msg_print};
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Default endpoint of the detailed report API.
pub const DEFAULT_API_URL: &str = "https://api.track.toggl.com/reports/api/v2/details";

/// Password Toggl expects when authenticating with an API token.
const API_TOKEN_PASSWORD: &str = "api_token";

/// One page of the detailed report.
#[derive(Debug, Deserialize)]
pub struct DetailsPage {
    /// Number of entries matching the query across all pages.
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub per_page: usize,
    #[serde(default)]
    pub data: Vec<TogglEntry>,
}

/// A time entry as returned by the report API. Only the fields used here are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct TogglEntry {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl From<TogglEntry> for RawEntry {
    fn from(entry: TogglEntry) -> Self {
        RawEntry {
            start: entry.start,
            end: entry.end,
        }
    }
}

/// Returns `true` when another page should be requested.
///
/// `received` is the size of the page just read, `collected` the number of
/// entries gathered so far and `total` the API's `total_count`.
pub fn has_more_pages(received: usize, collected: usize, total: usize) -> bool {
    received > 0 && collected < total
}

#[derive(Debug)]
pub struct Toggl {
    client: Client,
    config: TogglConfig,
}

impl Toggl {
    pub fn new(config: &TogglConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Requests a single page of the detailed report.
    ///
    /// # Errors
    ///
    /// Fails on network errors, on a non-success status (the response body is
    /// included in the error) and when the body is not a report page.
    pub async fn fetch_page(&self, since: NaiveDate, until: NaiveDate, page: u32) -> Result<DetailsPage> {
        let mut query = vec![
            ("workspace_id", self.config.workspace_id.clone()),
            ("since", since.format("%Y-%m-%d").to_string()),
            ("until", until.format("%Y-%m-%d").to_string()),
            ("user_agent", self.config.user_agent.clone()),
            ("page", page.to_string()),
        ];
        if !self.config.project_ids.trim().is_empty() {
            query.push(("project_ids", self.config.project_ids.clone()));
        }

        let response = self
            .client
            .get(&self.config.api_url)
            .query(&query)
            .basic_auth(&self.config.api_token, Some(API_TOKEN_PASSWORD))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            msg_bail_anyhow!(Message::TogglRequestFailed(format!("{} {}", status, body.trim())));
        }

        Ok(response.json::<DetailsPage>().await?)
    }

    /// Fetches every entry between `since` and `until`, page by page.
    pub async fn get_entries(&self, since: NaiveDate, until: NaiveDate) -> Result<Vec<RawEntry>> {
        let mut entries = Vec::new();
        let mut page = 1;

        loop {
            let details = self.fetch_page(since, until, page).await?;
            let received = details.data.len();
            entries.extend(details.data.into_iter().map(RawEntry::from));
            msg_debug!(Message::TogglPageFetched(page, entries.len(), details.total_count));

            if !has_more_pages(received, entries.len(), details.total_count) {
                break;
            }
            page += 1;
        }

        Ok(entries)
    }
}

/// Toggl connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TogglConfig {
    pub api_token: String,
    pub workspace_id: String,
    /// Comma-separated project IDs; empty means all projects.
    #[serde(default)]
    pub project_ids: String,
    /// Sent as `user_agent`; Toggl asks for an email address or app name.
    pub user_agent: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for TogglConfig {
    fn default() -> Self {
        Self {
            api_token: "".to_string(),
            workspace_id: "".to_string(),
            project_ids: "".to_string(),
            user_agent: "tallysheet".to_string(),
            api_url: default_api_url(),
        }
    }
}

impl TogglConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "toggl".to_string(),
            name: "Toggl".to_string(),
        }
    }

    pub fn init(config: &Option<TogglConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleToggl);

        Ok(Self {
            api_token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTogglToken.to_string())
                .default(config.api_token)
                .interact_text()?,
            workspace_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTogglWorkspace.to_string())
                .default(config.workspace_id)
                .interact_text()?,
            project_ids: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTogglProjects.to_string())
                .default(config.project_ids)
                .allow_empty(true)
                .interact_text()?,
            user_agent: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTogglUserAgent.to_string())
                .default(config.user_agent)
                .interact_text()?,
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTogglApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
