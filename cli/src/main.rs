mod commands;
mod display;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Security scan report analyzer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    #[command(about = "Analyze scan reports and generate a Markdown report")]
    Analyze(commands::Analyze),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(cmd) => {
            cmd.run()?;
        }
    }

    Ok(())
}
