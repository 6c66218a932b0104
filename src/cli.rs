use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gamma_exposure::model::selection::{DEFAULT_SIZE_MAX, MAX_SIZE_MAX, MIN_SIZE_MAX};

/// Options gamma exposure analyzer. Turns an options-chain spreadsheet into
/// an interactive Gamma / Delta / Vanna bubble chart.
#[derive(Parser)]
#[command(name = "gamma-exposure", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a bubble chart from an options chain .xlsx file
    Analyze {
        /// Path to the options chain workbook
        file: PathBuf,

        /// X-Axis column (default: Delta)
        #[arg(long)]
        x: Option<String>,

        /// Y-Axis column (default: Vanna)
        #[arg(long)]
        y: Option<String>,

        /// Color By column (default: Moneyness)
        #[arg(long)]
        color: Option<String>,

        /// Hover Info column (default: Option_Type)
        #[arg(long)]
        hover: Option<String>,

        /// Maximum bubble size in pixels
        #[arg(
            long,
            default_value_t = DEFAULT_SIZE_MAX,
            value_parser = clap::value_parser!(u32).range(i64::from(MIN_SIZE_MAX)..=i64::from(MAX_SIZE_MAX))
        )]
        size_max: u32,

        /// Print the data preview sorted by gamma exposure
        #[arg(long)]
        show_data: bool,

        /// Output format: html (default) or json (Plotly figure)
        #[arg(long, default_value = "html")]
        format: String,

        /// Output file path (default: <file>.html for html, stdout for json)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Check that a workbook has the required columns and usable gamma values
    Validate {
        /// Path to the options chain workbook
        file: PathBuf,
    },

    /// Serve the interactive upload page
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value = "8501")]
        port: u16,

        /// Largest accepted upload, in MiB
        #[arg(long, default_value = "20")]
        max_upload_mb: u64,
    },

    /// Output the JSON schema of the chart description
    Schema,

    /// Describe the expected spreadsheet layout
    Format,
}
