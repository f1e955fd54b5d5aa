use anyhow::Result;
use clap::Parser;
use draft_sheet::{logging, Cli, Command, SheetConfig, USAGE};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mode = match cli.command() {
        Command::Run(mode) => mode,
        Command::Help => {
            print!("{USAGE}");
            return Ok(());
        }
        Command::Invalid(_) => {
            println!("Invalid input.");
            print!("{USAGE}");
            return Ok(());
        }
    };

    let config = SheetConfig::load(cli.config.as_deref())?;
    logging::initialize_logging(&config.logging)?;

    let path = draft_sheet::run(&config, mode).await?;
    println!("File {} written.", path.display());

    Ok(())
}
