use clap::Parser;
use digibot::errors::ErrorHandler;
use digibot::logger;
use digibot::structs::cli::Cli;
use digibot::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let mut runner = CommandRunner::new();
    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        return Err(e.into());
    }

    Ok(())
}
