use crate::model::{ChartSpec, OptionsTable};

use super::figure::figure;
use super::preview::{format_cell, preview};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Standalone HTML page with the bubble chart and, when `show_data` is set,
/// the preview table sorted by gamma exposure.
pub fn html_document(table: &OptionsTable, spec: &ChartSpec, show_data: bool) -> String {
    let figure = script_json(&figure(table, spec).to_string());
    let data_section = if show_data {
        format!(
            "<h3>Data Preview</h3>\n<div class=\"preview\">{}</div>",
            preview_html(&preview(table))
        )
    } else {
        String::new()
    };

    format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
  <script src="{PLOTLY_CDN}"></script>
  <style>
    body {{ font-family: "Source Sans Pro", "Segoe UI", sans-serif; margin: 24px; color: #262730; }}
    #chart {{ width: 100%; min-height: 640px; }}
    .preview {{ max-height: 300px; overflow: auto; border: 1px solid #e9ecef; }}
    table {{ border-collapse: collapse; font-size: 13px; }}
    th, td {{ padding: 4px 10px; border-bottom: 1px solid #e9ecef; text-align: right; white-space: nowrap; }}
    th {{ position: sticky; top: 0; background: #f8f9fa; }}
  </style>
</head>
<body>
  <h1>Options Greek Exposure Visualization</h1>
  <div id="chart"></div>
  {data_section}
  <script>
    const figure = {figure};
    Plotly.newPlot('chart', figure.data, figure.layout, {{responsive: true}});
  </script>
</body>
</html>
"#,
        title = escape_html(&spec.title),
    )
}

/// Preview rows as an HTML `<table>`.
pub fn preview_html(table: &OptionsTable) -> String {
    let mut out = String::from("<table><thead><tr>");
    for column in table.columns() {
        out.push_str(&format!("<th>{}</th>", escape_html(column)));
    }
    out.push_str("</tr></thead><tbody>");
    for row in table.rows() {
        out.push_str("<tr>");
        for cell in row {
            out.push_str(&format!("<td>{}</td>", escape_html(&format_cell(cell))));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Make serialized JSON safe to inline inside a `<script>` element.
fn script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
