use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "labdesk")]
#[command(about = "Lab dashboard identity administration CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Identity service URL (defaults to the configured api.server_url)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Actor ID sent in the X-Actor-Id header
    #[arg(long, global = true)]
    pub(crate) actor_id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
