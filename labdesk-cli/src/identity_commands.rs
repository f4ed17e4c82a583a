use clap::Subcommand;

#[derive(Subcommand)]
pub enum IdentityCommands {
    /// List identities
    List {
        /// Page number (server default if omitted)
        #[arg(long)]
        page: Option<u64>,
        /// Page size
        #[arg(long)]
        items_per_page: Option<u64>,
        /// Column to sort by
        #[arg(long)]
        sort_column: Option<String>,
        /// Sort direction: asc or desc
        #[arg(long)]
        sort_direction: Option<String>,
        /// Free-text search
        #[arg(long)]
        search: Option<String>,
        /// Entity type filter
        #[arg(long)]
        entity_type: Option<String>,
    },
    /// Show one identity
    Show {
        /// Identity ID
        id: String,
    },
    /// Create an identity
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        alias: String,
        #[arg(long)]
        password: String,
        /// Role to grant (repeatable)
        #[arg(long = "grant")]
        grants: Vec<String>,
        /// Initial status (active, inactive, blocked)
        #[arg(long, default_value = "inactive")]
        status: String,
        /// Permissions as a JSON object
        #[arg(long)]
        permissions: Option<String>,
    },
    /// Update an identity (partial patch)
    Update {
        /// Identity ID
        id: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        alias: Option<String>,
        #[arg(long)]
        password: Option<String>,
        /// Role to grant (repeatable)
        #[arg(long = "grant")]
        grants: Vec<String>,
        /// Role to revoke (repeatable)
        #[arg(long = "revoke")]
        revokes: Vec<String>,
        #[arg(long)]
        status: Option<String>,
        /// Permissions as a JSON object (replaces the whole map)
        #[arg(long)]
        permissions: Option<String>,
    },
    /// Soft-delete an identity
    Delete {
        /// Identity ID
        id: String,
    },
}
