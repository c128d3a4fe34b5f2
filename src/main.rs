use clap::Parser;
use mapart::cli::{Cli, Commands};
use mapart::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::List(args) => mapart::cli::list::run(args, &printer)?,
        Commands::Preview(args) => mapart::cli::preview::run(args, &printer)?,
        Commands::Preset(args) => mapart::cli::preset::run(args, &printer)?,
        Commands::Validate(args) => mapart::cli::validate::run(args, &printer)?,
        Commands::Completions(args) => mapart::cli::completions::run(args)?,
    }

    Ok(())
}
