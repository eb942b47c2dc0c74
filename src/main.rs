mod agents;
mod branches;
mod cli;
mod config;
mod error;
mod logger;
mod model;
mod tracker;
mod update;
mod utils;
mod workflow;

#[cfg(test)]
mod testing;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        logger::enable_verbose();
    }

    let result = match &cli.command {
        Commands::Update {
            target,
            train,
            iteration,
            phase,
        } => workflow::execute_update(&cli.config, *target, train, iteration, *phase),
        Commands::Branches { train, project } => {
            workflow::execute_branches(&cli.config, train, project.as_deref())
        }
        Commands::Changelog {
            train,
            iteration,
            project,
        } => workflow::execute_changelog(&cli.config, train, iteration, project),
        Commands::Tickets {
            train,
            iteration,
            project,
        } => workflow::execute_tickets(&cli.config, train, iteration, project),
        Commands::Train { train, iteration } => {
            workflow::execute_train(&cli.config, train, iteration.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
