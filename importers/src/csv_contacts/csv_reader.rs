use csv::{ReaderBuilder, Terminator};

/// Splits delimited text into rows of trimmed cells, one row per `\n`-separated line.
///
/// Quoting is disabled: every delimiter starts a new cell and quote characters are kept
/// verbatim. Whitespace around the whole text is ignored, but a blank line in the middle
/// is still a row (a single empty cell) so row numbers follow the file.
pub struct CsvReader {
    delimiter: u8,
}

impl CsvReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn read_rows(&self, content: &str) -> Vec<Vec<String>> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content).trim();
        if content.is_empty() {
            return Vec::new();
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(content.as_bytes());

        // The reader skips empty lines, so each non-empty line maps to the next record
        let mut records = reader.records();
        let mut rows = Vec::new();

        for line in content.split('\n') {
            if line.is_empty() {
                rows.push(vec![String::new()]);
                continue;
            }

            match records.next() {
                Some(Ok(record)) => {
                    rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
                }
                Some(Err(e)) => {
                    tracing::warn!("Failed to read CSV row: {}", e);
                    rows.push(vec![String::new()]);
                }
                None => break,
            }
        }

        rows
    }
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rows_trims_cells() {
        let rows = CsvReader::new().read_rows("name , phone\n John ,  5551234 \n");
        assert_eq!(
            rows,
            vec![
                vec!["name".to_string(), "phone".to_string()],
                vec!["John".to_string(), "5551234".to_string()],
            ]
        );
    }

    #[test]
    fn test_outer_blank_lines_are_ignored() {
        let rows = CsvReader::new().read_rows("\n\n  name,phone\nJohn,5551234\n\n  \n");
        assert_eq!(rows.len(), 2);
        assert!(CsvReader::new().read_rows(" \n\r\n ").is_empty());
    }

    #[test]
    fn test_interior_blank_lines_are_kept() {
        let rows = CsvReader::new().read_rows("name,phone\n\n   \r\nJohn,5551234");
        assert_eq!(
            rows,
            vec![
                vec!["name".to_string(), "phone".to_string()],
                vec![String::new()],
                vec![String::new()],
                vec!["John".to_string(), "5551234".to_string()],
            ]
        );
    }

    #[test]
    fn test_lone_carriage_return_does_not_split_rows() {
        let rows = CsvReader::new().read_rows("name,phone\nJohn,555\r1234567");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["John".to_string(), "555\r1234567".to_string()]);
    }

    #[test]
    fn test_read_rows_handles_crlf_and_bom() {
        let rows = CsvReader::new().read_rows("\u{feff}Name,Phone\r\nJohn,5551234\r\n");
        assert_eq!(rows[0], vec!["Name".to_string(), "Phone".to_string()]);
        assert_eq!(rows[1], vec!["John".to_string(), "5551234".to_string()]);
    }

    #[test]
    fn test_quotes_do_not_group_cells() {
        let rows = CsvReader::new().read_rows("name,phone\n\"Doe, John\",5551234\n");
        assert_eq!(rows[1].len(), 3);
        assert_eq!(rows[1][0], "\"Doe");
    }

    #[test]
    fn test_rows_keep_their_own_width() {
        let rows = CsvReader::new().read_rows("a,b,c\n1,2\n,,\n");
        assert_eq!(rows[1].len(), 2);
        assert_eq!(rows[2], vec![String::new(), String::new(), String::new()]);
    }

    #[test]
    fn test_custom_delimiter() {
        let reader = CsvReader::with_delimiter(b';');
        assert_eq!(reader.delimiter(), b';');
        let rows = reader.read_rows("name;phone\nJohn;5551234");
        assert_eq!(rows[1], vec!["John".to_string(), "5551234".to_string()]);
    }
}
