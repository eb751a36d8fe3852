#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use tallysheet::libs::formatter::{format_clock, format_duration, format_end_clock, format_minutes, format_total_hours, FormattedDay};
    use tallysheet::libs::interval::TimeInterval;
    use tallysheet::libs::report::DayRecord;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(&Duration::zero()), "00:00");
    }

    #[test]
    fn test_format_duration_minutes_only() {
        assert_eq!(format_duration(&Duration::minutes(30)), "00:30");
        assert_eq!(format_duration(&Duration::minutes(59)), "00:59");
        assert_eq!(format_duration(&Duration::minutes(1)), "00:01");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(&(Duration::hours(1) + Duration::minutes(30))), "01:30");
        assert_eq!(format_duration(&(Duration::hours(13) + Duration::minutes(5))), "13:05");
    }

    #[test]
    fn test_format_duration_ignores_seconds() {
        assert_eq!(format_duration(&(Duration::minutes(45) + Duration::seconds(59))), "00:45");
    }

    #[test]
    fn test_format_duration_negative() {
        assert_eq!(format_duration(&Duration::minutes(-30)), "00:00");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(90), "01:30");
        assert_eq!(format_minutes(480), "08:00");
        assert_eq!(format_minutes(780), "13:00");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(&at(9, 0)), "09:00");
        assert_eq!(format_clock(&at(17, 30)), "17:30");
        assert_eq!(format_clock(&at(0, 0)), "00:00");
    }

    #[test]
    fn test_format_end_clock_shows_midnight_as_end_of_day() {
        assert_eq!(format_end_clock(&at(0, 0)), "23:59");
        assert_eq!(format_end_clock(&at(0, 30)), "00:30");
        assert_eq!(format_end_clock(&at(18, 0)), "18:00");
    }

    #[test]
    fn test_format_total_hours_truncates() {
        assert_eq!(format_total_hours(0), "0 hours");
        assert_eq!(format_total_hours(59), "0 hours");
        assert_eq!(format_total_hours(125), "2 hours");
        assert_eq!(format_total_hours(2400), "40 hours");
    }

    #[test]
    fn test_formatted_day_without_entries() {
        let day = DayRecord::new(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        let formatted = FormattedDay::from(&day);

        assert_eq!(formatted.date, "2024-03-04");
        assert_eq!(formatted.start_time, None);
        assert_eq!(formatted.end_time, None);
        assert_eq!(formatted.break_time, None);
        assert_eq!(formatted.duration, "00:00");
    }

    #[test]
    fn test_formatted_day_with_entries() {
        let mut day = DayRecord::new(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        day.add(TimeInterval::new(at(9, 0), at(12, 0)));
        day.add(TimeInterval::new(at(13, 0), at(16, 0)));
        day.settle_break();

        let formatted = FormattedDay::from(&day);
        assert_eq!(formatted.start_time.as_deref(), Some("09:00"));
        assert_eq!(formatted.end_time.as_deref(), Some("16:00"));
        assert_eq!(formatted.break_time.as_deref(), Some("01:00"));
        assert_eq!(formatted.duration, "06:00");
    }

    #[test]
    fn test_formatted_day_serialization() {
        let formatted = FormattedDay {
            date: "2024-03-04".to_string(),
            start_time: Some("09:00".to_string()),
            end_time: Some("23:59".to_string()),
            break_time: None,
            duration: "08:00".to_string(),
        };

        let json = serde_json::to_string(&formatted).unwrap();
        assert!(json.contains("\"break\":null"));
        assert!(json.contains("\"end_time\":\"23:59\""));

        let restored: FormattedDay = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, formatted);
    }
}
