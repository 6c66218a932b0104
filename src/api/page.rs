//! The single upload page. All interaction happens client-side: every change
//! to a control re-posts the whole form to `/api/analyze` and redraws.

use crate::format_help;
use crate::model::selection::{DEFAULT_SIZE_MAX, MAX_SIZE_MAX, MIN_SIZE_MAX};
use crate::render::escape_html;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub fn index_html(max_upload_mb: usize) -> String {
    let help = escape_html(format_help::listing());
    format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Options Gamma Exposure Analyzer</title>
  <script src="{PLOTLY_CDN}"></script>
  <style>
    body {{ margin: 0; display: flex; font-family: "Source Sans Pro", "Segoe UI", sans-serif; color: #262730; }}
    aside {{ width: 300px; min-height: 100vh; padding: 24px; background: #f0f2f6; box-sizing: border-box; }}
    main {{ flex: 1; padding: 24px 48px; }}
    label {{ display: block; margin: 12px 0 4px; font-size: 14px; }}
    .selectors {{ display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; }}
    .selectors select {{ width: 100%; }}
    .error {{ display: none; padding: 12px 16px; border-radius: 6px; background: #ffe4e4; color: #7d1a1a; margin: 16px 0; }}
    .preview {{ max-height: 300px; overflow: auto; border: 1px solid #e9ecef; }}
    table {{ border-collapse: collapse; font-size: 13px; }}
    th, td {{ padding: 4px 10px; border-bottom: 1px solid #e9ecef; text-align: right; white-space: nowrap; }}
    th {{ position: sticky; top: 0; background: #f8f9fa; }}
    pre {{ font-size: 12px; white-space: pre-wrap; }}
    #chart {{ width: 100%; min-height: 640px; }}
  </style>
</head>
<body>
  <aside>
    <form id="controls">
      <h2>Data Input</h2>
      <label for="file">Upload Options Chain Excel File</label>
      <input id="file" name="file" type="file" accept=".xlsx" />
      <small>Limit {max_upload_mb}MB per file &middot; XLSX</small>

      <h2>Chart Settings</h2>
      <label for="size_max">Maximum Bubble Size: <span id="size_value">{DEFAULT_SIZE_MAX}</span></label>
      <input id="size_max" name="size_max" type="range" min="{MIN_SIZE_MAX}" max="{MAX_SIZE_MAX}" value="{DEFAULT_SIZE_MAX}" />
      <label><input id="show_data" name="show_data" type="checkbox" value="true" /> Show Raw Data Preview</label>
    </form>
    <p><strong>Requirements:</strong></p>
    <ul>
      <li>Excel file with options chain data</li>
      <li>Required columns: Gamma, Delta, Vanna</li>
      <li>Supported formats: .xlsx</li>
    </ul>
  </aside>
  <main>
    <h1>Options Greek Exposure Visualization</h1>
    <h3>Interactive Bubble Chart for Gamma/Delta/Vanna Analysis</h3>
    <div id="error" class="error"></div>
    <div id="help"><pre>{help}</pre></div>
    <div id="result" hidden>
      <div class="selectors">
        <div><label for="x">X-Axis</label><select id="x" name="x" form="controls"></select></div>
        <div><label for="y">Y-Axis</label><select id="y" name="y" form="controls"></select></div>
        <div><label for="color">Color By</label><select id="color" name="color" form="controls"></select></div>
        <div><label for="hover">Hover Info</label><select id="hover" name="hover" form="controls"></select></div>
      </div>
      <div id="chart"></div>
      <div id="preview-section" hidden>
        <h3>Data Preview</h3>
        <div id="preview" class="preview"></div>
      </div>
    </div>
  </main>
  <script>
    const form = document.getElementById('controls');
    const roles = ['x', 'y', 'color', 'hover'];

    function fillSelectors(columns, chosen) {{
      for (const role of roles) {{
        const select = document.getElementById(role);
        const current = chosen[role] ?? select.value;
        select.innerHTML = '';
        const blank = document.createElement('option');
        blank.value = '';
        blank.textContent = '(choose a column)';
        select.appendChild(blank);
        for (const column of columns) {{
          const option = document.createElement('option');
          option.value = column;
          option.textContent = column;
          select.appendChild(option);
        }}
        select.value = columns.includes(current) ? current : '';
      }}
    }}

    function showError(message) {{
      const box = document.getElementById('error');
      box.textContent = message;
      box.style.display = message ? 'block' : 'none';
    }}

    let latestRun = 0;
    let inFlight = null;

    async function rerun() {{
      document.getElementById('size_value').textContent = form.size_max.value;
      if (!form.file.files.length) return;

      // A new interaction supersedes whatever is still running.
      const runId = ++latestRun;
      if (inFlight) inFlight.abort();
      inFlight = new AbortController();

      let response;
      let payload;
      try {{
        const body = new FormData(form);
        response = await fetch('/api/analyze', {{ method: 'POST', body, signal: inFlight.signal }});
        payload = await response.json();
      }} catch (err) {{
        if (runId !== latestRun) return;
        showError(`Error processing file: ${{err.name === 'SyntaxError' ? 'unexpected server response' : err.message}}`);
        document.getElementById('result').hidden = true;
        return;
      }}
      if (runId !== latestRun) return;
      document.getElementById('help').hidden = true;

      if (!response.ok) {{
        showError(payload.error ?? `Error processing file: HTTP ${{response.status}}`);
        if (payload.columns) {{
          document.getElementById('result').hidden = false;
          fillSelectors(payload.columns, {{}});
          Plotly.purge('chart');
        }} else {{
          document.getElementById('result').hidden = true;
        }}
        return;
      }}

      showError('');
      document.getElementById('result').hidden = false;
      fillSelectors(payload.columns, {{
        x: payload.spec.x,
        y: payload.spec.y,
        color: payload.spec.color,
        hover: payload.spec.hover_name,
      }});
      Plotly.react('chart', payload.figure.data, payload.figure.layout, {{ responsive: true }});

      const section = document.getElementById('preview-section');
      section.hidden = !payload.preview_html;
      document.getElementById('preview').innerHTML = payload.preview_html ?? '';
    }}

    form.file.addEventListener('change', () => {{
      for (const role of roles) document.getElementById(role).innerHTML = '';
      rerun();
    }});
    form.size_max.addEventListener('input', () => {{
      document.getElementById('size_value').textContent = form.size_max.value;
    }});
    form.size_max.addEventListener('change', rerun);
    form.show_data.addEventListener('change', rerun);
    for (const role of roles) document.getElementById(role).addEventListener('change', rerun);
  </script>
</body>
</html>
"#
    )
}
