// src/preview.rs
//
// Plain-text table for the console: leading row number, every column shown,
// cells right-aligned to the widest of header and shown values.

use crate::table::Table;

const GAP: &str = "  ";

pub fn render(table: &Table, max_rows: usize) -> String {
    let rows = table.head(max_rows);
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| r.iter().map(|c| one_line(c)).collect())
        .collect();

    let index_w = rows.len().saturating_sub(1).to_string().len();
    let widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .map(|r| r.get(i).map_or(0, |c| c.chars().count()))
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();

    out.push_str(&" ".repeat(index_w));
    for (name, w) in table.columns.iter().zip(&widths) {
        out.push_str(GAP);
        out.push_str(&pad_left(name, *w));
    }
    out.push('\n');

    for (ix, row) in cells.iter().enumerate() {
        out.push_str(&pad_right(&ix.to_string(), index_w));
        for (cell, w) in row.iter().zip(&widths) {
            out.push_str(GAP);
            out.push_str(&pad_left(cell, *w));
        }
        out.push('\n');
    }

    out
}

/// Keep one record per line on screen.
fn one_line(s: &str) -> String {
    s.replace('\r', "\\r").replace('\n', "\\n")
}

fn pad_left(s: &str, width: usize) -> String {
    let n = s.chars().count();
    format!("{}{}", " ".repeat(width.saturating_sub(n)), s)
}

fn pad_right(s: &str, width: usize) -> String {
    let n = s.chars().count();
    format!("{}{}", s, " ".repeat(width.saturating_sub(n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(columns: &[&str], rows: &[&[&str]]) -> Table {
        Table {
            columns: columns.iter().map(|s| s.to_string()).collect(),
            rows: rows.iter().map(|r| r.iter().map(|s| s.to_string()).collect()).collect(),
        }
    }

    #[test]
    fn aligned_two_rows() {
        let table = t(&["zpid", "price"], &[&["123", "450000"], &["456", "399000"]]);
        assert_eq!(
            render(&table, 5),
            "   zpid   price\n0   123  450000\n1   456  399000\n"
        );
    }

    #[test]
    fn limited_to_max_rows_but_all_columns() {
        let rows: Vec<Vec<&str>> = (0..8).map(|_| vec!["a", "b", "c"]).collect();
        let refs: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
        let table = t(&["x", "y", "z"], &refs);
        let text = render(&table, 5);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains('x') && lines[0].contains('y') && lines[0].contains('z'));
        assert!(lines[5].starts_with('4'));
    }

    #[test]
    fn newlines_in_cells_stay_on_one_line() {
        let table = t(&["title"], &[&["line1\nline2"]]);
        assert_eq!(render(&table, 5).lines().count(), 2);
    }

    #[test]
    fn wide_index_is_padded() {
        let rows: Vec<Vec<&str>> = (0..12).map(|_| vec!["v"]).collect();
        let refs: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
        let table = t(&["k"], &refs);
        let text = render(&table, 12);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    k");
        assert_eq!(lines[1], "0   v");
        assert_eq!(lines[12], "11  v");
    }
}
