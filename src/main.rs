use clap::Parser;

use gamma_exposure::analyze::{self, AnalyzeConfig};
use gamma_exposure::config::ServeConfig;
use gamma_exposure::model::SelectionRequest;
use gamma_exposure::{api, format_help, schema, telemetry, validate};

mod cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    telemetry::init()?;

    match cli.command {
        cli::Command::Analyze {
            file,
            x,
            y,
            color,
            hover,
            size_max,
            show_data,
            format,
            output,
        } => analyze::run(&AnalyzeConfig {
            file,
            selection: SelectionRequest { x, y, color, hover },
            size_max,
            show_data,
            format,
            output,
        }),
        cli::Command::Validate { file } => validate::run(&file),
        cli::Command::Serve {
            host,
            port,
            max_upload_mb,
        } => {
            let config = ServeConfig::from_cli(&host, port, max_upload_mb)?;
            tokio::runtime::Runtime::new()?.block_on(api::serve(config))
        }
        cli::Command::Schema => schema::run(),
        cli::Command::Format => format_help::run(),
    }
}
