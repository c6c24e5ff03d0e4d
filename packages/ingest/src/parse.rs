//! Delimited-text row parser.
//!
//! Splits a whole document into rows of string fields without looking at
//! the schema. Quoted fields may contain the delimiter, line breaks, and
//! doubled quotes. `\r\n`, `\n`, and bare `\r` all end a row. Parsing never
//! fails: an unterminated quote keeps whatever was read as the last field.

/// Parses `text` into rows of raw fields.
///
/// Rows whose fields are all empty or whitespace are dropped. Rows are not
/// required to have the same number of fields.
///
/// A quote only opens a quoted field when it is the field's first
/// character. A quote after leading whitespace or in the middle of a field
/// is literal text, so ` "x,y",z` splits into three fields at both commas.
#[must_use]
pub fn parse_rows(text: &str, delimiter: u8) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();

    for (index, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let row: Vec<String> = record.iter().map(str::to_owned).collect();
                if is_blank(&row) {
                    continue;
                }
                rows.push(row);
            }
            Err(e) => {
                log::warn!("Skipping unreadable CSV record {index}: {e}");
            }
        }
    }

    rows
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|field| field.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(field: &str) -> String {
        format!("\"{}\"", field.replace('"', "\"\""))
    }

    #[test]
    fn parses_unquoted_fields() {
        assert_eq!(
            parse_rows("a,b,c\n1,2,3\n", b','),
            vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]
        );
    }

    #[test]
    fn quoted_special_fields_survive_parsing() {
        for field in ["one, two", "line\nbreak", "say \"hi\"", "crlf\r\ninside", "\""] {
            let text = format!("{},tail\n", quote(field));
            let rows = parse_rows(&text, b',');
            assert_eq!(rows, vec![vec![field.to_string(), "tail".to_string()]]);
        }
    }

    #[test]
    fn crlf_does_not_produce_empty_rows() {
        let rows = parse_rows("a,b\r\n1,2\r\n3,4\r\n", b',');
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], vec!["3", "4"]);
    }

    #[test]
    fn bare_carriage_return_ends_a_row() {
        let rows = parse_rows("a,b\r1,2", b',');
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn final_row_without_terminator_is_kept() {
        let rows = parse_rows("a,b\n1,2", b',');
        assert_eq!(rows.last().unwrap(), &vec!["1", "2"]);
    }

    #[test]
    fn blank_and_whitespace_rows_are_dropped() {
        let rows = parse_rows("a,b\n\n , \n,\n1,2\n\n", b',');
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn ragged_rows_pass_through() {
        let rows = parse_rows("a,b,c\n1\n1,2,3,4\n", b',');
        assert_eq!(rows[1], vec!["1"]);
        assert_eq!(rows[2].len(), 4);
    }

    #[test]
    fn unterminated_quote_keeps_accumulated_text() {
        let rows = parse_rows("a,b\n1,\"never closed\nstill going", b',');
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["1", "never closed\nstill going"]);
    }

    #[test]
    fn quote_not_at_field_start_is_literal() {
        assert_eq!(
            parse_rows(" \"x,y\",z", b','),
            vec![vec![" \"x", "y\"", "z"]]
        );
        assert_eq!(parse_rows("ab\"c,d", b','), vec![vec!["ab\"c", "d"]]);
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(parse_rows("", b',').is_empty());
        assert!(parse_rows("\r\n\n", b',').is_empty());
    }
}
