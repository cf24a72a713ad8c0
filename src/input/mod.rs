//! Loose parsing of lesson input strings
//!
//! Lesson inputs arrive as short form-style strings ("1,8,6,2,5", "[[1,3],[2,6]]",
//! "apple app | search:app"). Parsing is deliberately forgiving: malformed
//! numeric tokens default to 0, stray brackets and separators are ignored, and
//! an empty string parses to an empty collection. Lessons handle trivially
//! empty input by starting in their terminal phase, so parsing never fails.
//!
//! Multi-part inputs use `|` between parts, e.g. `1,2,5 | 11` for coin change
//! (coins, then amount).

/// Split a multi-part input on `|`, trimming each part
pub fn parts(input: &str) -> Vec<&str> {
    input.split('|').map(str::trim).collect()
}

/// Parse a list of integers, ignoring brackets and splitting on commas,
/// semicolons, and whitespace. Malformed tokens default to 0.
pub fn int_list(input: &str) -> Vec<i64> {
    input
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .map(|tok| tok.trim_matches(|c| c == '[' || c == ']' || c == '(' || c == ')'))
        .filter(|tok| !tok.is_empty())
        .map(|tok| tok.parse::<i64>().unwrap_or(0))
        .collect()
}

/// Parse a single integer, defaulting to 0
pub fn int(input: &str) -> i64 {
    input.trim().parse::<i64>().unwrap_or(0)
}

/// Parse a list of pairs (intervals, edges) by flattening the integers and
/// chunking them in twos. A trailing unpaired value is dropped.
pub fn pair_list(input: &str) -> Vec<(i64, i64)> {
    let flat = int_list(input);
    flat.chunks_exact(2).map(|c| (c[0], c[1])).collect()
}

/// Parse a 0/1 grid: rows separated by `;` or newlines, anything other than
/// `1` in a cell reads as 0. Rows are right-padded with 0 to equal width.
pub fn grid(input: &str) -> Vec<Vec<u8>> {
    let mut rows: Vec<Vec<u8>> = input
        .split(|c: char| c == ';' || c == '\n')
        .map(|row| {
            row.chars()
                .filter(|c| !c.is_whitespace() && *c != ',' && *c != '[' && *c != ']')
                .map(|c| u8::from(c == '1'))
                .collect::<Vec<u8>>()
        })
        .filter(|row| !row.is_empty())
        .collect();

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, 0);
    }
    rows
}

/// Parse an optional level-order binary tree: `4 2 7 1 3 6 9`, with `_` or
/// `null` for missing children.
pub fn level_order(input: &str) -> Vec<Option<i64>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            if tok == "_" || tok.eq_ignore_ascii_case("null") {
                None
            } else {
                Some(tok.parse::<i64>().unwrap_or(0))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_list_ignores_brackets_and_defaults_bad_tokens() {
        assert_eq!(int_list("[1, 8, 6]"), vec![1, 8, 6]);
        assert_eq!(int_list("3 x 5"), vec![3, 0, 5]);
        assert_eq!(int_list(""), Vec::<i64>::new());
    }

    #[test]
    fn pair_list_drops_trailing_odd_value() {
        assert_eq!(pair_list("[[1,3],[2,6]]"), vec![(1, 3), (2, 6)]);
        assert_eq!(pair_list("1 2 3"), vec![(1, 2)]);
    }

    #[test]
    fn parts_trims() {
        assert_eq!(parts("1,2,5 | 11"), vec!["1,2,5", "11"]);
    }

    #[test]
    fn grid_pads_ragged_rows() {
        let g = grid("110;10;000");
        assert_eq!(g, vec![vec![1, 1, 0], vec![1, 0, 0], vec![0, 0, 0]]);
    }

    #[test]
    fn level_order_reads_nulls() {
        assert_eq!(
            level_order("4 2 7 _ null 6 9"),
            vec![
                Some(4),
                Some(2),
                Some(7),
                None,
                None,
                Some(6),
                Some(9)
            ]
        );
    }
}
