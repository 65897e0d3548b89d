use crate::types::value::value_to_string;
use crate::types::ResultSet;

/// Formats a result set as a fixed-width text table.
///
/// Every column is as wide as the longest header plus two; longer cells are
/// cut and marked with `..`.
pub fn format_table(result: &ResultSet) -> String {
    let width = result
        .columns
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    push_line(&mut out, result.columns.iter().cloned(), width);
    for row in &result.rows {
        push_line(&mut out, row.iter().map(value_to_string), width);
    }
    out
}

fn push_line(out: &mut String, cells: impl Iterator<Item = String>, width: usize) {
    for cell in cells {
        let len = cell.chars().count();
        if len <= width {
            out.push_str(&cell);
            out.push_str(&" ".repeat(width - len));
            out.push('|');
        } else {
            out.extend(cell.chars().take(width - 2));
            out.push_str("..|");
        }
    }
    out.push('\n');
}
