//! CLI argument definitions using clap

use std::convert::Infallible;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::domain::Id;

/// Connection dashboard: catalog metrics, ticket counts, and theme style variables
#[derive(Parser, Debug)]
#[command(name = "cozydash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file (layered over the global config)
    #[arg(short = 'c', long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count connections in a catalog
    Stats {
        /// Catalog JSON (forest of folders and connections)
        #[arg(value_hint = ValueHint::FilePath)]
        catalog: PathBuf,
        /// Only count connections with this protocol (exact match)
        #[arg(short, long)]
        protocol: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a catalog as a tree
    Tree {
        /// Catalog JSON
        #[arg(value_hint = ValueHint::FilePath)]
        catalog: PathBuf,
    },

    /// Count access tickets for a user
    Tickets {
        /// Ticket list JSON
        #[arg(value_hint = ValueHint::FilePath)]
        tickets: PathBuf,
        /// Current user id
        #[arg(short, long, value_parser = parse_id)]
        user: Id,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Connection and ticket overview
    Summary {
        /// Catalog JSON
        #[arg(value_hint = ValueHint::FilePath)]
        catalog: PathBuf,
        /// Ticket list JSON
        #[arg(value_hint = ValueHint::FilePath)]
        tickets: PathBuf,
        /// Current user id
        #[arg(short, long, value_parser = parse_id)]
        user: Id,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect themes
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// List registered themes
    List,
    /// Show a palette (default: the active theme)
    Show {
        /// Theme name
        name: Option<String>,
    },
    /// Print the injected style variables as CSS
    Css {
        /// Write to file instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a config template
    Template,
    /// Show config file location
    Path,
}

/// Digits become a numeric id; `Id` also converts from `&str`, which clap would
/// otherwise prefer over `FromStr`.
fn parse_id(s: &str) -> Result<Id, Infallible> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_tickets_args_when_parsing_then_user_is_numeric_id() {
        let cli = Cli::try_parse_from(["cozydash", "-dd", "tickets", "t.json", "--user", "12"])
            .expect("parse");
        assert_eq!(cli.debug, 2);
        match cli.command {
            Some(Commands::Tickets { user, .. }) => assert_eq!(user, Id::Number(12)),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
