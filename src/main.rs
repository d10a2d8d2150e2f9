mod chart;
mod cli_messages;
mod config;
mod consts;
mod dashboard;
mod dataset;
mod logging;
mod metadata;
mod provider;
mod scale;
mod session;
mod surface;
mod ui;

use crate::cli_messages::report_failure;
use crate::config::{Config, get_config_path};
use crate::logging::{init_console_logger, init_quiet_logger};
use crate::session::{
    CommandError, run_export_mode, run_list_mode, run_tui_mode, setup_session, source_from_env,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Belly button biodiversity dashboard
struct Args {
    /// Config file to read instead of ~/.otu-dashboard/config.json
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    View {
        /// Dataset URL or file path
        #[arg(long, value_name = "SOURCE")]
        source: Option<String>,

        /// Paint a dark background behind the dashboard
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Print the samples in the dataset
    List {
        /// Dataset URL or file path
        #[arg(long, value_name = "SOURCE")]
        source: Option<String>,
    },
    /// Render one sample to SVG and HTML files
    Export {
        /// Dataset URL or file path
        #[arg(long, value_name = "SOURCE")]
        source: Option<String>,

        /// Sample id to render. Defaults to the first sample.
        #[arg(long, value_name = "ID")]
        sample: Option<String>,

        /// Directory the files are written to
        #[arg(long, value_name = "DIR", default_value = "otu-dashboard")]
        out: PathBuf,
    },
    /// Remember a dataset source in the config file
    SetSource {
        /// Dataset URL or file path
        source: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), CommandError> {
    let config_path = match args.config {
        Some(path) => path,
        None => get_config_path().map_err(CommandError::ConfigPath)?,
    };
    let config =
        Config::load_or_default(&config_path).map_err(|source| CommandError::ReadConfig {
            path: config_path.clone(),
            source,
        })?;

    match args.command {
        Command::View {
            source,
            with_background,
        } => {
            init_quiet_logger();
            let session = setup_session(source_from_env(source.as_deref(), &config)).await?;
            run_tui_mode(session, with_background || config.with_background_color).await
        }
        Command::List { source } => {
            init_console_logger();
            let session = setup_session(source_from_env(source.as_deref(), &config)).await?;
            run_list_mode(session);
            Ok(())
        }
        Command::Export {
            source,
            sample,
            out,
        } => {
            init_console_logger();
            let session = setup_session(source_from_env(source.as_deref(), &config)).await?;
            run_export_mode(session, sample.as_deref(), &out)?;
            Ok(())
        }
        Command::SetSource { source } => {
            config
                .with_dataset_source(source.trim())
                .save(&config_path)
                .map_err(|err| CommandError::SaveConfig {
                    path: config_path.clone(),
                    source: err,
                })?;
            print_cmd_success!("Dataset source saved", "{}", config_path.display());
            Ok(())
        }
    }
}
