use crate::config::DEFAULT_CONFIG_FILE;
use crate::model::Phase;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "release-train",
    about = "Release train tooling - prepares and cleans up module releases of a train",
    version,
    author
)]
pub struct Cli {
    /// Path to the release train configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply release edits to the checkouts of all modules of a train iteration
    Update {
        /// Which files to update
        #[arg(value_enum)]
        target: UpdateTarget,

        /// Train name (e.g. Dijkstra)
        train: String,

        /// Iteration name (M1, RC1, GA, SR2, ...)
        iteration: String,

        /// Release phase the edits are made for
        #[arg(short, long, value_enum, default_value_t = Phase::Prepare)]
        phase: Phase,
    },

    /// List ticket branches of all projects in a train
    Branches {
        /// Train name
        train: String,

        /// Only inspect the project with this key
        #[arg(short, long, value_name = "KEY")]
        project: Option<String>,
    },

    /// Print the changelog of one module iteration
    Changelog {
        train: String,
        iteration: String,
        /// Project key
        project: String,
    },

    /// List tickets referenced in commits since the previous iteration
    Tickets {
        train: String,
        iteration: String,
        /// Project key
        project: String,
    },

    /// Show the modules and versions of a train
    Train {
        train: String,

        /// Show versions at this iteration instead of listing iterations
        iteration: Option<String>,
    },
}

/// Group of files touched by `update`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateTarget {
    /// gradle.properties and build.gradle
    Gradle,
    /// build.gradle repository URLs only
    Build,
    /// Documentation includes
    Docs,
    /// Changelog files (commits each change)
    Changelog,
    /// Notice banners
    Notice,
    /// Everything the phase requires
    All,
}
