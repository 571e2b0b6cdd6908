use clap::{ArgAction, Parser};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Points To Remember:

  .env        - holds the create/export URLs and the X_API_KEY used for the remote calls.
  Solutions   - directory where all solution exports (*.json) have to be placed.";

/// Consolidate e-invoice solution exports into one solution with the latest components
#[derive(Parser, Debug)]
#[command(name = "einv-sol")]
#[command(version)]
#[command(
    about = "Consolidate e-invoice solution exports and create only one solution with the updated components",
    long_about = None,
    after_help = AFTER_HELP,
    disable_help_flag = true
)]
pub struct Args {
    /// Identifier of the solution to create (prompted for when omitted)
    #[arg(short, long, value_name = "ID")]
    pub solution_id: Option<String>,

    /// Directory holding the solution exports (defaults to ./Solutions)
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Directory where payload.json and the exported solution are written
    #[arg(short, long, value_name = "PATH")]
    pub output_dir: Option<PathBuf>,

    /// Submitting user recorded on the new solution
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Path to a config file (defaults to ./einv-sol.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the env file with the API settings (defaults to ./.env)
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Build and write payload.json without calling the remote service
    #[arg(long)]
    pub dry_run: bool,

    /// Print help
    #[arg(short = 'h', long = "help", short_alias = '?', action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Args {
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
