use char_frequency::{
    analyze_sentence, analyze_sentence_with_custom_config, Error, ReportConfig, SentenceParser,
    WordUnit,
};
use std::fs;
use tempfile::tempdir;

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn test_report_lines() {
        let sentence_parser = SentenceParser::new("test testing", "t").unwrap();

        assert_eq!(
            sentence_parser.report_lines().unwrap(),
            vec![
                "{(t), 4} = 0.50 (2/4)",
                "{(t), 7} = 0.50 (2/4)",
                "Total Frequency: 0.36 (4/11)",
            ]
        );
    }

    #[test]
    fn test_report_line_at() {
        let sentence_parser = SentenceParser::new("test t ttttt testttt", "test").unwrap();

        assert_eq!(
            sentence_parser.report_line_at(0).unwrap(),
            "{(t), 1} = 0.06 (1/17)"
        );
        assert_eq!(
            sentence_parser.report_line_at(3).unwrap(),
            "{(t, e, s), 7} = 0.41 (7/17)"
        );
    }

    #[test]
    fn test_report_line_for_foreign_unit() {
        let sentence_parser = SentenceParser::new("aaaaa aaa a", "b").unwrap();
        let unit = WordUnit::new("b", "b").unwrap();

        assert!(matches!(
            sentence_parser.report_line(&unit),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_report_without_units() {
        let sentence_parser = SentenceParser::new("aaaaa aaa a", "b").unwrap();

        assert_eq!(
            sentence_parser.report_lines().unwrap(),
            vec!["Total Frequency: 0.00 (0/9)"]
        );
    }

    #[test]
    fn test_summary_line() {
        let sentence_parser = SentenceParser::new("aaaaa aaa ab", "b").unwrap();

        assert_eq!(
            sentence_parser.summary_line(),
            "Total Frequency: 0.10 (1/10)"
        );
    }

    #[test]
    fn test_custom_config() {
        let config = ReportConfig {
            decimal_places: 3,
            include_summary: false,
        };

        assert_eq!(
            analyze_sentence_with_custom_config(&config, "test testing", "t").unwrap(),
            vec!["{(t), 4} = 0.500 (2/4)", "{(t), 7} = 0.500 (2/4)"]
        );

        let sentence_parser = SentenceParser::new("test testing", "t").unwrap();
        assert_eq!(
            sentence_parser.summary_line_with_config(&config),
            "Total Frequency: 0.364 (4/11)"
        );
    }

    #[test]
    fn test_analyze_sentence() {
        let report = analyze_sentence("test test", "test").unwrap();

        assert_eq!(
            report,
            vec![
                "{(t, e, s), 4} = 1.00 (8/8)",
                "Total Frequency: 1.00 (8/8)"
            ]
        );
        assert!(matches!(
            analyze_sentence("", "t"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_write_report() {
        let sentence_parser = SentenceParser::new("test testing", "t").unwrap();
        let mut output = Vec::new();

        sentence_parser.write_report(&mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "{(t), 4} = 0.50 (2/4)\n{(t), 7} = 0.50 (2/4)\nTotal Frequency: 0.36 (4/11)"
        );
    }

    #[test]
    fn test_frequency_ties_round_up() {
        let sentence_parser = SentenceParser::new("t ttttttt", "t").unwrap();

        assert_eq!(
            sentence_parser.report_lines().unwrap(),
            vec![
                "{(t), 1} = 0.13 (1/8)",
                "{(t), 7} = 0.88 (7/8)",
                "Total Frequency: 1.00 (8/8)",
            ]
        );

        let sentence_parser = SentenceParser::new("tttttaaa", "t").unwrap();
        assert_eq!(
            sentence_parser.summary_line(),
            "Total Frequency: 0.63 (5/8)"
        );
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let sentence_parser = SentenceParser::new("test testing", "t").unwrap();

        sentence_parser.write_report_to_file(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents.lines().collect::<Vec<_>>(),
            sentence_parser.report_lines().unwrap()
        );
        assert!(contents.ends_with("Total Frequency: 0.36 (4/11)"));
    }

    #[test]
    fn test_write_report_to_directory() {
        let dir = tempdir().unwrap();
        let sentence_parser = SentenceParser::new("test testing", "t").unwrap();

        assert!(matches!(
            sentence_parser.write_report_to_file(dir.path()),
            Err(Error::IoError(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logic.txt");
        fs::write(&path, "I love to work in global logic!\nLOGIC\n").unwrap();

        let sentence_parser = SentenceParser::from_file(&path).unwrap();

        assert_eq!(sentence_parser.phrase(), "I love to work in global logic");
        assert_eq!(sentence_parser.total_match_count(), 15);
        assert_eq!(sentence_parser.all_units().len(), 7);
    }

    #[test]
    fn test_from_file_with_wrong_line_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("three_lines.txt");
        fs::write(&path, "first\nsecond\nthird\n").unwrap();

        assert!(matches!(
            SentenceParser::from_file(&path),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempdir().unwrap();

        assert!(matches!(
            SentenceParser::from_file(dir.path().join("missing.txt")),
            Err(Error::IoError(_))
        ));
    }

    #[test]
    fn test_from_reader_with_empty_characters() {
        assert!(matches!(
            SentenceParser::from_reader("test\n\n".as_bytes()),
            Err(Error::InvalidArgument(_))
        ));
    }
}
