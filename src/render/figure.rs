use serde_json::{Value, json};

use crate::model::{Cell, ChartSpec, OptionsTable};

/// Plotly's default qualitative palette, cycled for categorical colors.
const QUALITATIVE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Continuous colorscale for numeric color columns.
const CONTINUOUS: &str = "Plasma";

/// Build a Plotly figure (`{"data": [...], "layout": {...}}`) for a bubble
/// scatter of `table` as described by `spec`.
///
/// A numeric color column yields one trace with a colorbar; any other color
/// column yields one trace per distinct value, in first-seen order.
pub fn figure(table: &OptionsTable, spec: &ChartSpec) -> Value {
    let sizes: Vec<f64> = column_cells(table, &spec.size)
        .iter()
        .map(|c| c.as_number().unwrap_or(0.0))
        .collect();
    let peak = sizes.iter().copied().fold(0.0_f64, f64::max);
    let size_max = f64::from(spec.size_max);
    let sizeref = if peak > 0.0 {
        2.0 * peak / (size_max * size_max)
    } else {
        1.0
    };

    let colors = column_cells(table, &spec.color);
    let numeric_color = !colors.is_empty() && colors.iter().all(|c| matches!(c, Cell::Number(_)));

    let data = if numeric_color {
        let all: Vec<usize> = (0..table.row_count()).collect();
        let mut trace = trace(table, spec, &all, &sizes, sizeref);
        trace["name"] = json!("");
        trace["showlegend"] = json!(false);
        trace["marker"]["color"] = json!(colors);
        trace["marker"]["colorscale"] = json!(CONTINUOUS);
        trace["marker"]["showscale"] = json!(true);
        trace["marker"]["colorbar"] = json!({ "title": { "text": spec.label(&spec.color) } });
        vec![trace]
    } else {
        group_rows(&colors)
            .into_iter()
            .enumerate()
            .map(|(i, (key, rows))| {
                let mut trace = trace(table, spec, &rows, &sizes, sizeref);
                trace["name"] = json!(key);
                trace["legendgroup"] = json!(key);
                trace["showlegend"] = json!(true);
                trace["marker"]["color"] = json!(QUALITATIVE[i % QUALITATIVE.len()]);
                trace
            })
            .collect()
    };

    json!({
        "data": data,
        "layout": layout(spec, numeric_color),
    })
}

/// One scatter trace over the given row indices.
fn trace(
    table: &OptionsTable,
    spec: &ChartSpec,
    rows: &[usize],
    sizes: &[f64],
    sizeref: f64,
) -> Value {
    let pick = |column: &str| -> Vec<Cell> {
        let cells = column_cells(table, column);
        rows.iter().map(|&r| cells[r].clone()).collect()
    };

    let hover_columns: Vec<Vec<Cell>> = spec.hover_data.iter().map(|c| pick(c.as_str())).collect();
    let customdata: Vec<Vec<&Cell>> = (0..rows.len())
        .map(|i| hover_columns.iter().map(|col| &col[i]).collect())
        .collect();
    let hovertext: Vec<String> = pick(spec.hover_name.as_str()).iter().map(Cell::to_string).collect();

    json!({
        "type": "scatter",
        "mode": "markers",
        "x": pick(spec.x.as_str()),
        "y": pick(spec.y.as_str()),
        "hovertext": hovertext,
        "customdata": customdata,
        "hovertemplate": hover_template(spec),
        "marker": {
            "size": rows.iter().map(|&r| sizes[r]).collect::<Vec<_>>(),
            "sizemode": "area",
            "sizeref": sizeref,
        },
    })
}

/// `<b>name</b>` followed by one `label=value` line per hover column and the
/// bubble size.
fn hover_template(spec: &ChartSpec) -> String {
    let mut lines = vec!["<b>%{hovertext}</b><br>".to_string()];
    for (i, column) in spec.hover_data.iter().enumerate() {
        lines.push(format!("{}=%{{customdata[{i}]}}", spec.label(column)));
    }
    lines.push(format!("{}=%{{marker.size}}", spec.label(&spec.size)));
    format!("{}<extra></extra>", lines.join("<br>"))
}

fn layout(spec: &ChartSpec, numeric_color: bool) -> Value {
    let style = &spec.style;
    let axis = |column: &str| {
        json!({
            "title": {
                "text": spec.label(column),
                "font": { "size": style.axis_title_font_size },
            },
            "gridcolor": style.grid_color,
        })
    };

    let mut layout = json!({
        "title": { "text": spec.title },
        "plot_bgcolor": style.plot_bgcolor,
        "paper_bgcolor": style.paper_bgcolor,
        "hoverlabel": {
            "bgcolor": style.hover_bgcolor,
            "font": {
                "size": style.hover_font_size,
                "family": style.hover_font_family,
            },
        },
        "xaxis": axis(spec.x.as_str()),
        "yaxis": axis(spec.y.as_str()),
    });
    if !numeric_color {
        layout["legend"] = json!({
            "title": { "text": spec.label(&spec.color) },
            "itemsizing": "constant",
        });
    }
    layout
}

/// Cells of a column, or blanks when the column is absent.
fn column_cells(table: &OptionsTable, column: &str) -> Vec<Cell> {
    match table.column(column) {
        Some(cells) => cells.cloned().collect(),
        None => vec![Cell::Empty; table.row_count()],
    }
}

/// Row indices grouped by the display value of a column, in first-seen order.
fn group_rows(cells: &[Cell]) -> Vec<(String, Vec<usize>)> {
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    for (row, cell) in cells.iter().enumerate() {
        let key = cell.to_string();
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, rows)) => rows.push(row),
            None => groups.push((key, vec![row])),
        }
    }
    groups
}
