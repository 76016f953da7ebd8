// Best-effort quoted-field splitter for a single line.
//
// A delimiter splits only when an even number of '"' characters precede it on
// the line. Doubled quotes ("") inside a quoted field are NOT unescaped; a cell
// written as "say ""hi""" comes back with its inner quotes intact.

const QUOTE: char = '"';

/// Splits `line` into trimmed cells, removing one wrapping quote on each side.
pub fn tokenize_row(line: &str, delimiter: char) -> Vec<String> {
    let mut cells = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (idx, ch) in line.char_indices() {
        if ch == QUOTE {
            in_quotes = !in_quotes;
        } else if ch == delimiter && !in_quotes {
            cells.push(clean_cell(&line[start..idx]));
            start = idx + ch.len_utf8();
        }
    }
    cells.push(clean_cell(&line[start..]));

    cells
}

/// True when the line holds an odd number of quote characters, i.e. a quoted
/// field is never closed and every later delimiter would be swallowed.
pub fn has_unbalanced_quotes(line: &str) -> bool {
    line.chars().filter(|c| *c == QUOTE).count() % 2 == 1
}

fn clean_cell(raw: &str) -> String {
    let without_lead = raw.strip_prefix(QUOTE).unwrap_or(raw);
    let without_quotes = without_lead.strip_suffix(QUOTE).unwrap_or(without_lead);
    without_quotes.trim().to_string()
}
