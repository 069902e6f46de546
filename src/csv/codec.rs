//! CSV text <-> table conversion
//!
//! Decoding splits each line on commas that sit outside a quoted span, found
//! by quote parity: a comma is a delimiter when the number of `"` characters
//! between it and the end of the line is even. This is a heuristic, not an
//! RFC 4180 state machine, and it never rejects input. Unbalanced quotes just
//! produce a different split.
//!
//! Encoding quotes any cell containing a comma, a quote or a line break, and
//! doubles every embedded quote.

use std::fmt::Display;

use super::model::Table;

const DELIMITER: char = ',';
const QUOTE: char = '"';
const ESCAPED_QUOTE: &str = "\"\"";
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Parse CSV text into a [`Table`].
///
/// Lines are separated by `\n` or `\r\n`. Blank lines are skipped, so they
/// never produce empty rows. Fields are trimmed (a byte order mark counts as
/// whitespace), and a field wrapped in quotes
/// loses the wrapping quotes and has `""` unescaped to `"`.
pub fn decode(text: &str) -> Table {
    if trim(text).is_empty() {
        return Table::new();
    }

    let rows = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !trim(line).is_empty())
        .map(|line| split_line(line).into_iter().map(decode_field).collect())
        .collect();

    Table::from_rows(rows)
}

/// Split a single line on every comma followed by an even number of quotes.
fn split_line(line: &str) -> Vec<&str> {
    let mut remaining_quotes = line.matches(QUOTE).count();
    let mut fields = Vec::new();
    let mut start = 0;

    for (i, ch) in line.char_indices() {
        match ch {
            QUOTE => remaining_quotes -= 1,
            DELIMITER if remaining_quotes % 2 == 0 => {
                fields.push(&line[start..i]);
                start = i + ch.len_utf8();
            }
            _ => {}
        }
    }
    fields.push(&line[start..]);

    fields
}

fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

fn decode_field(raw: &str) -> String {
    let field = trim(raw);

    // A lone `"` both starts and ends with a quote but has nothing to strip.
    if field.len() >= 2 && field.starts_with(QUOTE) && field.ends_with(QUOTE) {
        field[1..field.len() - 1].replace(ESCAPED_QUOTE, "\"")
    } else {
        field.to_string()
    }
}

/// Serialize a [`Table`] back into CSV text.
///
/// Rows are joined with `\n` and there is no trailing newline. An empty table
/// yields an empty string.
pub fn encode(table: &Table) -> String {
    encode_rows(table.rows())
}

/// Serialize any row/cell sequence whose cells can be displayed.
///
/// Each cell is stringified before the quoting decision, so numbers and other
/// `Display` values are accepted as well as strings.
pub fn encode_rows<R, C>(rows: impl IntoIterator<Item = R>) -> String
where
    R: IntoIterator<Item = C>,
    C: Display,
{
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| escape_cell(&cell.to_string()))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether a cell value must be wrapped in quotes to survive decoding.
pub fn needs_quotes(value: &str) -> bool {
    value.contains([DELIMITER, QUOTE, '\n', '\r'])
}

/// Escape a single cell value for CSV output.
///
/// Quotes are doubled unconditionally; the quote wrapping is added only when
/// the original value needed it.
pub fn escape_cell(value: &str) -> String {
    let escaped = value.replace(QUOTE, ESCAPED_QUOTE);
    if needs_quotes(value) {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}
