#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
    use tallysheet::libs::error::InvalidInterval;
    use tallysheet::libs::interval::{parse_timestamp, round_down, round_up, NormalizeIntervals, RawEntry, TimeInterval};

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn end_of_day(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap().and_hms_milli_opt(23, 59, 59, 999).unwrap()
    }

    #[test]
    fn test_parse_timestamp_keeps_offset_wall_clock() {
        assert_eq!(parse_timestamp("2024-01-01T09:13:00+01:00"), Some(at(1, 9, 13)));
        assert_eq!(parse_timestamp("2024-01-01T09:13:00Z"), Some(at(1, 9, 13)));
    }

    #[test]
    fn test_parse_timestamp_naive_forms() {
        assert_eq!(parse_timestamp("2024-01-01T22:00"), Some(at(1, 22, 0)));
        assert_eq!(parse_timestamp("2024-01-01T22:00:00"), Some(at(1, 22, 0)));
        assert_eq!(parse_timestamp("2024-01-01 22:00"), Some(at(1, 22, 0)));
        assert_eq!(parse_timestamp("2024-01-01T22:00:00.250"), Some(at(1, 22, 0) + TimeDelta::milliseconds(250)));
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_raw_entry_parse() {
        let interval = RawEntry::new("2024-01-01T09:00:00", "2024-01-01T12:30:00").parse(0).unwrap();
        assert_eq!(interval, TimeInterval::new(at(1, 9, 0), at(1, 12, 30)));
        assert_eq!(interval.minutes(), 210);
    }

    #[test]
    fn test_raw_entry_missing_end_names_the_entry() {
        let entry = RawEntry {
            start: Some("2024-01-01T09:00:00".to_string()),
            end: None,
        };
        let error = entry.parse(3).unwrap_err();
        assert_eq!(error.index, 3);
        assert_eq!(error.reason, InvalidInterval::MissingEnd);
        assert_eq!(error.start.as_deref(), Some("2024-01-01T09:00:00"));

        let message = error.to_string();
        assert!(message.contains("#3"));
        assert!(message.contains("end timestamp is missing"));
    }

    #[test]
    fn test_raw_entry_missing_start() {
        let entry = RawEntry {
            start: None,
            end: Some("2024-01-01T09:00:00".to_string()),
        };
        assert_eq!(entry.parse(0).unwrap_err().reason, InvalidInterval::MissingStart);
    }

    #[test]
    fn test_raw_entry_malformed_timestamp() {
        let error = RawEntry::new("yesterday", "2024-01-01T09:00:00").parse(1).unwrap_err();
        assert_eq!(error.reason, InvalidInterval::Malformed("yesterday".to_string()));
        assert!(error.to_string().contains("'yesterday' is not a valid timestamp"));
    }

    #[test]
    fn test_raw_entry_end_before_start() {
        let error = RawEntry::new("2024-01-01T12:00:00", "2024-01-01T09:00:00").parse(0).unwrap_err();
        assert_eq!(error.reason, InvalidInterval::EndBeforeStart);
    }

    #[test]
    fn test_round_down_boundaries() {
        assert_eq!(round_down(at(1, 9, 0)), at(1, 9, 0));
        assert_eq!(round_down(at(1, 9, 20)), at(1, 9, 0));
        assert_eq!(round_down(at(1, 9, 21)), at(1, 9, 30));
        assert_eq!(round_down(at(1, 9, 50)), at(1, 9, 30));
        assert_eq!(round_down(at(1, 9, 51)), at(1, 10, 0));
    }

    #[test]
    fn test_round_up_boundaries() {
        assert_eq!(round_up(at(1, 17, 0)), at(1, 17, 0));
        assert_eq!(round_up(at(1, 17, 10)), at(1, 17, 0));
        assert_eq!(round_up(at(1, 17, 11)), at(1, 17, 30));
        assert_eq!(round_up(at(1, 17, 40)), at(1, 17, 30));
        assert_eq!(round_up(at(1, 17, 41)), at(1, 18, 0));
    }

    #[test]
    fn test_rounding_drops_seconds() {
        let start = at(1, 9, 13) + TimeDelta::seconds(45);
        let end = at(1, 10, 5) + TimeDelta::seconds(10);
        assert_eq!(round_down(start), at(1, 9, 0));
        assert_eq!(round_up(end), at(1, 10, 0));
    }

    #[test]
    fn test_rounding_can_cross_midnight() {
        assert_eq!(round_down(at(1, 23, 55)), at(2, 0, 0));
        assert_eq!(round_up(end_of_day(1)), at(2, 0, 0));
    }

    #[test]
    fn test_split_same_day_is_untouched() {
        let interval = TimeInterval::new(at(1, 9, 0), at(1, 17, 0));
        assert_eq!(interval.split_at_midnight(), vec![interval]);
    }

    #[test]
    fn test_split_at_midnight() {
        let parts = TimeInterval::new(at(1, 22, 0), at(2, 2, 0)).split_at_midnight();
        assert_eq!(
            parts,
            vec![
                TimeInterval::new(at(1, 22, 0), end_of_day(1)),
                TimeInterval::new(at(2, 0, 0), at(2, 2, 0)),
            ]
        );
    }

    #[test]
    fn test_split_only_once_for_multi_day_interval() {
        let parts = TimeInterval::new(at(1, 22, 0), at(3, 2, 0)).split_at_midnight();
        assert_eq!(
            parts,
            vec![
                TimeInterval::new(at(1, 22, 0), end_of_day(1)),
                TimeInterval::new(at(3, 0, 0), at(3, 2, 0)),
            ]
        );
    }

    #[test]
    fn test_normalize_splits_before_rounding() {
        let intervals = vec![
            TimeInterval::new(at(1, 8, 55), at(1, 12, 20)),
            TimeInterval::new(at(1, 22, 10), at(2, 1, 45)),
        ]
        .normalize();

        assert_eq!(
            intervals,
            vec![
                TimeInterval::new(at(1, 9, 0), at(1, 12, 30)),
                TimeInterval::new(at(1, 22, 0), at(2, 0, 0)),
                TimeInterval::new(at(2, 0, 0), at(2, 2, 0)),
            ]
        );
    }

    #[test]
    fn test_split_keeps_input_order() {
        let intervals = vec![
            TimeInterval::new(at(2, 22, 0), at(3, 1, 0)),
            TimeInterval::new(at(1, 9, 0), at(1, 10, 0)),
        ]
        .split_at_midnight();

        assert_eq!(intervals.len(), 3);
        assert_eq!(intervals[0].start, at(2, 22, 0));
        assert_eq!(intervals[1].start, at(3, 0, 0));
        assert_eq!(intervals[2].start, at(1, 9, 0));
    }
}
