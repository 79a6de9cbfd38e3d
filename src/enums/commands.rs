use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::output_format::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file for problems
    Validate,
    /// Parse a free-text analysis report
    Parse {
        file: PathBuf,
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Ask DigiBot a question about a report
    Chat {
        file: PathBuf,
        #[clap(short, long)]
        message: String,
    },
    /// Email a report link to a visitor
    SendReport {
        #[clap(long)]
        to: String,
        #[clap(long)]
        report_id: String,
        #[clap(long)]
        name: Option<String>,
        #[clap(long)]
        message: Option<String>,
    },
    /// Translate site content
    Translate {
        #[clap(short, long)]
        target: String,
        #[clap(short, long)]
        key: String,
        #[clap(required = true)]
        text: Vec<String>,
    },
    /// Forward a JSON payload to the configured webhook
    Relay {
        payload: String,
    },
}
