//! Google Sheets client for writing report rows.
//!
//! Uses the `spreadsheets.values.update` call of the Sheets API v4 with
//! `USER_ENTERED` input, so dates and times are interpreted by the sheet
//! just as if they had been typed. Authentication is a pre-issued OAuth
//! access token from the configuration; obtaining it is left to the user.

use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::report::ReportDay;
use crate::libs::sheet::{sheet_rows, SheetLayout, SheetRow};
use crate::{msg_bail_anyhow, msg_debug, msg_error_anyhow, msg_info, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

/// Base URL of the spreadsheets resource.
pub const SHEETS_API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange<'a> {
    range: &'a str,
    major_dimension: &'a str,
    values: &'a [SheetRow],
}

/// Summary returned by the update call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesResponse {
    #[serde(default)]
    pub updated_cells: u64,
    #[serde(default)]
    pub updated_range: String,
}

#[derive(Debug)]
pub struct Sheets {
    client: Client,
    config: SheetsConfig,
    api_url: String,
}

impl Sheets {
    pub fn new(config: &SheetsConfig) -> Self {
        Self::with_api_url(config, SHEETS_API_URL)
    }

    /// Creates a client talking to another Sheets-compatible endpoint.
    pub fn with_api_url(config: &SheetsConfig, api_url: &str) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Layout configured for this client.
    pub fn layout(&self) -> Result<SheetLayout> {
        SheetLayout::new(&self.config.tab_name, &self.config.start_column, self.config.start_row)
    }

    /// URL of the `values.update` call for `range`.
    pub fn update_url(&self, range: &str) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)?;
        url.path_segments_mut()
            .map_err(|_| msg_error_anyhow!(Message::SheetsRequestFailed(self.api_url.clone())))?
            .push(&self.config.spreadsheet_id)
            .push("values")
            .push(range);
        url.query_pairs_mut().append_pair("valueInputOption", "USER_ENTERED");
        Ok(url)
    }

    /// Writes one row per day, starting at the configured cell.
    ///
    /// Nothing is sent for an empty report and `Ok(None)` is returned.
    pub async fn write_days(&self, days: &[ReportDay]) -> Result<Option<UpdateValuesResponse>> {
        if days.is_empty() {
            msg_info!(Message::SheetsNothingToWrite);
            return Ok(None);
        }

        let range = self.layout()?.range(days.len());
        let values = sheet_rows(days);
        let body = ValueRange {
            range: &range,
            major_dimension: "ROWS",
            values: &values,
        };
        msg_debug!(Message::SheetsWriting(range.clone()));

        let response = self
            .client
            .put(self.update_url(&range)?)
            .bearer_auth(&self.config.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            msg_bail_anyhow!(Message::SheetsRequestFailed(format!("{} {}", status, text.trim())));
        }

        let result = response.json::<UpdateValuesResponse>().await?;
        msg_success!(Message::SheetsUpdated(result.updated_cells, result.updated_range.clone()));
        Ok(Some(result))
    }
}

/// Target spreadsheet settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub tab_name: String,
    /// 1-based row of the first day.
    pub start_row: u32,
    /// Column letters of the date cell.
    pub start_column: String,
    /// OAuth access token with the spreadsheets scope.
    pub access_token: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: "".to_string(),
            tab_name: "Sheet1".to_string(),
            start_row: 1,
            start_column: "A".to_string(),
            access_token: "".to_string(),
        }
    }
}

impl SheetsConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "sheets".to_string(),
            name: "Google Sheets".to_string(),
        }
    }

    pub fn init(config: &Option<SheetsConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleSheets);

        Ok(Self {
            spreadsheet_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSheetsSpreadsheetId.to_string())
                .default(config.spreadsheet_id)
                .interact_text()?,
            tab_name: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSheetsTabName.to_string())
                .default(config.tab_name)
                .interact_text()?,
            start_row: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSheetsStartRow.to_string())
                .default(config.start_row)
                .interact_text()?,
            start_column: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSheetsStartColumn.to_string())
                .default(config.start_column)
                .interact_text()?,
            access_token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSheetsAccessToken.to_string())
                .default(config.access_token)
                .interact_text()?,
        })
    }
}
