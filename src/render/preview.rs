use crate::model::table::GAMMA_EXPOSURE;
use crate::model::{Cell, OptionsTable};

/// Rows ordered by `GammaExposure`, largest first.
pub fn preview(table: &OptionsTable) -> OptionsTable {
    table.sorted_descending_by(GAMMA_EXPOSURE)
}

/// Compact cell text for tables: integers without decimals, other numbers
/// with at most six decimals.
pub fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{v:.0}"),
        Cell::Number(v) => {
            let s = format!("{v:.6}");
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        other => other.to_string(),
    }
}

/// Aligned plain-text table of the first `limit` rows.
pub fn preview_text(table: &OptionsTable, limit: usize) -> String {
    let cells: Vec<Vec<String>> = table
        .rows()
        .iter()
        .take(limit)
        .map(|row| row.iter().map(format_cell).collect())
        .collect();

    let widths: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = table.columns().to_vec();
    let rule: Vec<String> = widths.iter().map(|w| "\u{2500}".repeat(*w)).collect();

    let mut out = String::new();
    for row in [&header, &rule].into_iter().chain(&cells) {
        out.push_str(&padded(row, &widths));
        out.push('\n');
    }
    if table.row_count() > limit {
        out.push_str(&format!("... {} more rows\n", table.row_count() - limit));
    }
    out
}

fn padded(values: &[String], widths: &[usize]) -> String {
    values
        .iter()
        .zip(widths)
        .map(|(v, &w)| format!("{v:<w$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
