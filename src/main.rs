mod cli;
mod commands;
mod error;
mod output;
mod page_range;
mod pdf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use commands::merge::MergeConfig;
use commands::split::SplitConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Split {
            input,
            output,
            start,
            end,
            merge,
        } => {
            let Some(input) = input else {
                return print_subcommand_help("split");
            };
            commands::split::run(&SplitConfig {
                input,
                output,
                start,
                end,
                merge,
            })?;
        }
        Commands::Merge { inputs, output } => {
            if inputs.is_empty() {
                return print_subcommand_help("merge");
            }
            commands::merge::run(&MergeConfig { inputs, output })?;
        }
        Commands::Simple => {
            commands::simple::run()?;
        }
    }

    Ok(())
}

/// Missing required arguments show the subcommand's help and exit cleanly
/// instead of raising an error.
fn print_subcommand_help(name: &str) -> Result<()> {
    let mut cmd = Cli::command();
    if let Some(sub) = cmd.find_subcommand_mut(name) {
        sub.print_help()?;
    }
    Ok(())
}
