#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use tallysheet::api::sheets::SheetsConfig;
    use tallysheet::api::toggl::{TogglConfig, DEFAULT_API_URL};
    use tallysheet::libs::config::{Config, ReportConfig, CONFIG_FILE_NAME};
    use tallysheet::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the data directory at a temporary home.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    fn sample_config() -> Config {
        Config {
            toggl: Some(TogglConfig {
                api_token: "token123".to_string(),
                workspace_id: "42".to_string(),
                project_ids: "1,2".to_string(),
                user_agent: "me@example.com".to_string(),
                api_url: DEFAULT_API_URL.to_string(),
            }),
            sheets: Some(SheetsConfig {
                spreadsheet_id: "sheet-id".to_string(),
                tab_name: "Hours".to_string(),
                start_row: 3,
                start_column: "B".to_string(),
                access_token: "ya29.token".to_string(),
            }),
            report: Some(ReportConfig {
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
                end_date: NaiveDate::from_ymd_opt(2024, 1, 31),
            }),
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.toggl.is_none());
        assert!(config.sheets.is_none());
        assert!(config.report.is_none());
    }

    // Everything touching the config file lives in one test, the home directory is process-wide.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_file_lifecycle(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.toggl.is_none());

        sample_config().save().unwrap();
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        assert!(path.exists());

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.toggl, sample_config().toggl);
        assert_eq!(loaded.sheets, sample_config().sheets);
        assert_eq!(loaded.report, sample_config().report);

        Config::delete().unwrap();
        assert!(!path.exists());
        assert!(Config::read().unwrap().sheets.is_none());
        Config::delete().unwrap();
    }

    #[test]
    fn test_unconfigured_modules_are_omitted() {
        let config = Config {
            report: Some(ReportConfig {
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
                end_date: None,
            }),
            ..Config::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"report":{"start_date":"2024-01-01"}}"#);
    }

    #[test]
    fn test_toggl_api_url_defaults_when_missing() {
        let json = r#"{"toggl":{"api_token":"t","workspace_id":"1","user_agent":"me"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let toggl = config.toggl.unwrap();

        assert_eq!(toggl.api_url, DEFAULT_API_URL);
        assert_eq!(toggl.project_ids, "");
    }

    #[test]
    fn test_env_creates_missing_modules() {
        let config = Config::default().apply_env_from(env(&[
            ("TOGGL_TOKEN", "abc"),
            ("WORKSPACE_ID", "7"),
            ("SPREAD_SHEET_ID", "sheet"),
            ("START_ROW", "5"),
            ("START_COL", "C"),
            ("START_DATE", "2024-02-01"),
            ("END_DATE", "2024-02-29"),
        ]));

        let toggl = config.toggl.unwrap();
        assert_eq!(toggl.api_token, "abc");
        assert_eq!(toggl.workspace_id, "7");
        assert_eq!(toggl.user_agent, TogglConfig::default().user_agent);

        let sheets = config.sheets.unwrap();
        assert_eq!(sheets.spreadsheet_id, "sheet");
        assert_eq!(sheets.start_row, 5);
        assert_eq!(sheets.start_column, "C");
        assert_eq!(sheets.tab_name, "Sheet1");

        let report = config.report.unwrap();
        assert_eq!(report.start_date, NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(report.end_date, NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_env_overrides_only_given_fields() {
        let config = sample_config().apply_env_from(env(&[("TOGGL_TOKEN", "new-token"), ("TAB_NAME", "March")]));

        let toggl = config.toggl.unwrap();
        assert_eq!(toggl.api_token, "new-token");
        assert_eq!(toggl.workspace_id, "42");

        let sheets = config.sheets.unwrap();
        assert_eq!(sheets.tab_name, "March");
        assert_eq!(sheets.start_row, 3);
        assert_eq!(config.report, sample_config().report);
    }

    #[test]
    fn test_env_ignores_empty_and_invalid_values() {
        let config = Config::default().apply_env_from(env(&[("TOGGL_TOKEN", "  "), ("START_ROW", "first"), ("END_DATE", "31.01.2024")]));

        assert!(config.toggl.is_none());
        assert_eq!(config.sheets.unwrap().start_row, 1);
        assert!(config.report.is_none());
    }

    #[test]
    fn test_env_without_variables_changes_nothing() {
        let config = Config::default().apply_env_from(|_| None);
        assert!(config.toggl.is_none());
        assert!(config.sheets.is_none());
        assert!(config.report.is_none());
    }
}
