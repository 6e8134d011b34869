use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "scholarship-portal",
    version,
    about = "Apply for the board's scholarship from the terminal"
)]
pub struct Cli {
    /// Config file; defaults to `config.toml` in the app config dir
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show who is logged in and whether a scholarship is open
    Status,
    /// Fill in and submit a scholarship application
    Apply,
}
