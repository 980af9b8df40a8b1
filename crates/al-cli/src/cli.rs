use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "accountlab")]
#[command(about = "Register, sign in and view the stored profile")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Use process-local identity and document services instead of the remote ones
    #[arg(long, global = true)]
    pub(crate) offline: bool,
}
