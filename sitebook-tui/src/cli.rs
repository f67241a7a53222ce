use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sitebook-tui")]
#[command(about = "Terminal UI for construction project records and allowance tracking")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// JSON project data file to open (same as `run FILE`)
    pub file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the UI, optionally opening a project data file
    Run {
        /// JSON project data file to open
        file: Option<PathBuf>,
    },
    /// Start the UI with a new, empty document
    New,
    /// Print remaining allowances for every project in a file
    Report {
        /// JSON project data file to read
        file: PathBuf,
        /// Only list projects with an overspent category
        #[arg(long)]
        overdrawn: bool,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}

impl Cli {
    pub fn command(self) -> Commands {
        self.command.unwrap_or(Commands::Run { file: self.file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(args).unwrap().command()
    }

    #[test]
    fn bare_invocation_runs_without_file() {
        assert!(matches!(parse(&["sitebook-tui"]), Commands::Run { file: None }));
    }

    #[test]
    fn file_may_be_given_with_or_without_run() {
        for args in [
            &["sitebook-tui", "data.json"][..],
            &["sitebook-tui", "run", "data.json"][..],
        ] {
            match parse(args) {
                Commands::Run { file } => assert_eq!(file, Some(PathBuf::from("data.json"))),
                other => panic!("unexpected command: {other:?}"),
            }
        }
    }

    #[test]
    fn report_takes_overdrawn_flag() {
        match parse(&["sitebook-tui", "report", "data.json", "--overdrawn"]) {
            Commands::Report { file, overdrawn } => {
                assert_eq!(file, PathBuf::from("data.json"));
                assert!(overdrawn);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
