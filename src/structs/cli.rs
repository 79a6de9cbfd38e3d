use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "digibot")]
#[clap(about = "Digital analysis report parser and DigiBot tooling", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::output_format::OutputFormat;

    #[test]
    fn parses_parse_command() {
        let cli = Cli::try_parse_from(["digibot", "parse", "rapor.txt", "--format", "context", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Parse { file, format } => {
                assert_eq!(file.to_str(), Some("rapor.txt"));
                assert_eq!(format, OutputFormat::Context);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn translate_requires_text() {
        assert!(Cli::try_parse_from(["digibot", "translate", "-t", "EN", "-k", "hero.title"]).is_err());
    }
}
