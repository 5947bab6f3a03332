//! Tests for output maps and their text form

#[cfg(test)]
mod tests {
    use terramap::MapError;
    use terramap::spatial::grid::OutputMap;

    // Tests rows of equal length build a map of the right shape
    // Verified by swapping rows and cols in the shape
    #[test]
    fn test_from_rows_shape() {
        let map = OutputMap::from_rows(&[vec!['G', 'A', 'M'], vec!['S', 'F', '?']]).unwrap();
        assert_eq!(map.rows(), 2);
        assert_eq!(map.cols(), 3);
        assert_eq!(map.get(1, 0), Some('S'));
        assert_eq!(map.get(0, 2), Some('M'));
        assert_eq!(map.get(2, 0), None);
        assert_eq!(map.row_string(1).as_deref(), Some("SF?"));
        assert_eq!(map.row_string(2), None);
    }

    // Tests ragged rows are rejected with the offending line number
    // Verified by skipping the length check
    #[test]
    fn test_ragged_rows_are_rejected() {
        let result = OutputMap::from_rows(&[vec!['G', 'G'], vec!['G'], vec!['G', 'G']]);
        match result {
            Err(MapError::MalformedMap { line, .. }) => assert_eq!(line, 2),
            other => unreachable!("Expected MalformedMap, got {other:?}"),
        }
    }

    // Tests text output is one newline-terminated line per row
    // Verified by omitting the final newline
    #[test]
    fn test_to_text_format() {
        let map = OutputMap::from_rows(&[vec!['C', '#'], vec!['#', 'C']]).unwrap();
        assert_eq!(map.to_text(), "C#\n#C\n");
    }

    // Tests parsing strips trailing whitespace and trailing blank lines
    // Verified by keeping carriage returns in parsed rows
    #[test]
    fn test_from_text_strips_trailing_whitespace() {
        let map = OutputMap::from_text("GgA  \r\nMSF\n\n\n").unwrap();
        assert_eq!(map.rows(), 2);
        assert_eq!(map.cols(), 3);
        assert_eq!(map.to_text(), "GgA\nMSF\n");
    }

    // Tests parsing preserves leading characters on each line
    // Verified by trimming both ends of each line
    #[test]
    fn test_from_text_keeps_leading_symbols() {
        let map = OutputMap::from_text("#C#\nCCC\n").unwrap();
        assert_eq!(map.get(0, 0), Some('#'));
    }

    // Tests an interior blank line makes the map malformed
    // Verified by dropping every blank line
    #[test]
    fn test_interior_blank_line_is_malformed() {
        assert!(OutputMap::from_text("GG\n\nGG\n").is_err());
    }

    // Tests empty text yields an empty map
    // Verified by returning an error for empty input
    #[test]
    fn test_empty_text() {
        let map = OutputMap::from_text("").unwrap();
        assert!(map.is_empty());
        assert_eq!(map, OutputMap::empty());
        assert_eq!(map.to_text(), "");
    }
}
