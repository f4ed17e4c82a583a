use crate::identity_commands::IdentityCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Identity operations
    Identity {
        #[command(subcommand)]
        action: IdentityCommands,
    },
}
