use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::model::{ChartSettings, SelectionRequest};
use crate::{pipeline, render};

/// Rows printed by `--show-data`.
const PREVIEW_ROWS: usize = 25;

/// Options for the `analyze` command.
pub struct AnalyzeConfig {
    pub file: PathBuf,
    pub selection: SelectionRequest,
    pub size_max: u32,
    pub show_data: bool,
    pub format: String,
    pub output: Option<PathBuf>,
}

/// Entry point for the `analyze` command.
pub fn run(config: &AnalyzeConfig) -> anyhow::Result<()> {
    let settings = ChartSettings::new(config.size_max, config.show_data)?;
    let bytes = std::fs::read(&config.file)
        .with_context(|| format!("reading {}", config.file.display()))?;

    let result = pipeline::run(&bytes, &config.selection, &settings);
    let (table, spec) = match (result.table, result.chart) {
        (Ok(table), Ok(spec)) => (table, spec),
        (Ok(table), Err(e)) => anyhow::bail!(
            "Error processing file: {e}\n  Available columns: {}",
            table.columns().join(", ")
        ),
        (Err(e), _) => anyhow::bail!("Error processing file: {e}"),
    };

    if settings.show_data {
        println!("Data Preview");
        print!("{}", render::preview_text(&render::preview(&table), PREVIEW_ROWS));
        println!();
    }

    match config.format.as_str() {
        "html" => {
            let html = render::html_document(&table, &spec, settings.show_data);
            let path = config
                .output
                .clone()
                .unwrap_or_else(|| default_output(&config.file));
            write_output(&html, Some(&path))
        }
        "json" => {
            let figure = serde_json::to_string_pretty(&render::figure(&table, &spec))?;
            write_output(&figure, config.output.as_deref())
        }
        other => anyhow::bail!("Unknown format '{other}'. Use: html, json"),
    }
}

/// `chain.xlsx` -> `chain.html` next to the input.
fn default_output(input: &Path) -> PathBuf {
    input.with_extension("html")
}

/// Write text output to file or stdout.
fn write_output(content: &str, output: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = output {
        std::fs::write(path, content)
            .with_context(|| format!("writing {}", path.display()))?;
        eprintln!("Written to {}", path.display());
    } else {
        print!("{content}");
    }
    Ok(())
}
