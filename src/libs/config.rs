//! Configuration management for tallysheet.
//!
//! Settings are grouped in optional modules, each configured independently:
//!
//! - **Toggl**: API token, workspace and project filter for fetching entries
//! - **Sheets**: target spreadsheet, tab and top-left cell for the export
//! - **Report**: default date range used when none is given on the command line
//!
//! The configuration is stored as pretty-printed JSON in `config.json` inside
//! the application data directory (see [`DataStorage`]). On top of the file,
//! environment variables (optionally loaded from a `.env` file) override
//! individual fields, see [`Config::apply_env`].
//!
//! ```rust,no_run
//! use tallysheet::libs::config::Config;
//!
//! let config = Config::read()?.apply_env();
//! if let Some(toggl) = &config.toggl {
//!     println!("Workspace: {}", toggl.workspace_id);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::sheets::SheetsConfig;
use crate::api::toggl::TogglConfig;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_print, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown in the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Default report range.
///
/// Either bound may be left empty; the command line and fixture files take
/// precedence over these values.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ReportConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Root configuration object.
///
/// Unconfigured modules are `None` and omitted from the JSON file.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggl: Option<TogglConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheets: Option<SheetsConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

impl ReportConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "report".to_string(),
            name: "Report".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleReport);

        Ok(Self {
            start_date: prompt_date(Message::PromptReportStartDate, config.start_date)?,
            end_date: prompt_date(Message::PromptReportEndDate, config.end_date)?,
        })
    }
}

fn prompt_date(prompt: Message, default: Option<NaiveDate>) -> Result<Option<NaiveDate>> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.map(|date| date.to_string()).unwrap_or_default())
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() || input.trim().parse::<NaiveDate>().is_ok() {
                Ok(())
            } else {
                Err(Message::InvalidDate(input.clone()).to_string())
            }
        })
        .interact_text()?;

    let value = value.trim();
    Ok(if value.is_empty() { None } else { Some(value.parse()?) })
}

impl Config {
    /// Reads the configuration file, or returns the default configuration when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration file as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if it exists.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive setup wizard.
    ///
    /// Starts from the stored configuration, lets the user pick the modules
    /// to configure and prompts for each of them with the current values as
    /// defaults. The result is returned, not saved.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![TogglConfig::module(), SheetsConfig::module(), ReportConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "toggl" => config.toggl = Some(TogglConfig::init(&config.toggl)?),
                "sheets" => config.sheets = Some(SheetsConfig::init(&config.sheets)?),
                "report" => config.report = Some(ReportConfig::init(&config.report)?),
                _ => {}
            }
        }

        Ok(config)
    }

    /// Overrides configuration fields from the process environment.
    ///
    /// | Variable              | Field                        |
    /// |-----------------------|------------------------------|
    /// | `TOGGL_TOKEN`         | `toggl.api_token`            |
    /// | `WORKSPACE_ID`        | `toggl.workspace_id`         |
    /// | `PROJECT_ID`          | `toggl.project_ids`          |
    /// | `USER_AGENT`          | `toggl.user_agent`           |
    /// | `TOGGL_API_URL`       | `toggl.api_url`              |
    /// | `SPREAD_SHEET_ID`     | `sheets.spreadsheet_id`      |
    /// | `TAB_NAME`            | `sheets.tab_name`            |
    /// | `START_ROW`           | `sheets.start_row`           |
    /// | `START_COL`           | `sheets.start_column`        |
    /// | `GOOGLE_ACCESS_TOKEN` | `sheets.access_token`        |
    /// | `START_DATE`          | `report.start_date`          |
    /// | `END_DATE`            | `report.end_date`            |
    ///
    /// A module that is not configured yet is created with defaults as soon
    /// as one of its variables is present. Empty variables are ignored.
    pub fn apply_env(self) -> Self {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::apply_env`], reading variables through `lookup`.
    pub fn apply_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| {
            let value = lookup(name).map(|value| value.trim().to_string()).filter(|value| !value.is_empty());
            if value.is_some() {
                msg_debug!(Message::ConfigEnvOverride(name.to_string()));
            }
            value
        };

        let toggl_vars = ["TOGGL_TOKEN", "WORKSPACE_ID", "PROJECT_ID", "USER_AGENT", "TOGGL_API_URL"];
        if toggl_vars.iter().any(|name| lookup(name).is_some()) {
            let toggl = self.toggl.get_or_insert_with(TogglConfig::default);
            if let Some(value) = lookup("TOGGL_TOKEN") {
                toggl.api_token = value;
            }
            if let Some(value) = lookup("WORKSPACE_ID") {
                toggl.workspace_id = value;
            }
            if let Some(value) = lookup("PROJECT_ID") {
                toggl.project_ids = value;
            }
            if let Some(value) = lookup("USER_AGENT") {
                toggl.user_agent = value;
            }
            if let Some(value) = lookup("TOGGL_API_URL") {
                toggl.api_url = value;
            }
        }

        let sheets_vars = ["SPREAD_SHEET_ID", "TAB_NAME", "START_ROW", "START_COL", "GOOGLE_ACCESS_TOKEN"];
        if sheets_vars.iter().any(|name| lookup(name).is_some()) {
            let sheets = self.sheets.get_or_insert_with(SheetsConfig::default);
            if let Some(value) = lookup("SPREAD_SHEET_ID") {
                sheets.spreadsheet_id = value;
            }
            if let Some(value) = lookup("TAB_NAME") {
                sheets.tab_name = value;
            }
            if let Some(value) = lookup("START_ROW") {
                match value.parse() {
                    Ok(row) => sheets.start_row = row,
                    Err(_) => msg_warning!(Message::ConfigInvalidEnvValue("START_ROW".to_string(), value)),
                }
            }
            if let Some(value) = lookup("START_COL") {
                sheets.start_column = value;
            }
            if let Some(value) = lookup("GOOGLE_ACCESS_TOKEN") {
                sheets.access_token = value;
            }
        }

        for (name, is_start) in [("START_DATE", true), ("END_DATE", false)] {
            let Some(value) = lookup(name) else {
                continue;
            };
            match value.parse::<NaiveDate>() {
                Ok(date) => {
                    let report = self.report.get_or_insert_with(ReportConfig::default);
                    if is_start {
                        report.start_date = Some(date);
                    } else {
                        report.end_date = Some(date);
                    }
                }
                Err(_) => msg_warning!(Message::ConfigInvalidEnvValue(name.to_string(), value)),
            }
        }

        self
    }
}
