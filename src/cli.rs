use clap::{Parser, Subcommand};

use crate::catalog::{SortDirection, SortOption};

#[derive(Parser)]
#[command(name = "bookshelfctl")]
#[command(about = "CLI client for browsing and managing a personal bookshelf service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server base URL (overrides the config file)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List books in the library
    List {
        /// Free-text search over title, author, and description
        query: Option<String>,

        /// Only show books whose genre matches exactly
        #[arg(long)]
        genre: Option<String>,

        /// Field to sort by
        #[arg(long, value_enum, default_value = "added")]
        sort: SortOption,

        /// Sort direction
        #[arg(long, value_enum, default_value = "desc")]
        direction: SortDirection,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a single book
    Show {
        /// Book identifier
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Show only a specific field
        #[arg(long)]
        field: Option<String>,
    },

    /// Add a book to the library
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        /// Genre (see 'bookshelfctl genres' for suggestions)
        #[arg(long)]
        genre: String,

        /// Publication year (cannot be in the future)
        #[arg(long)]
        year: i32,

        #[arg(long)]
        isbn: String,

        /// Cover image URL
        #[arg(long)]
        cover: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Edit a book's fields in $EDITOR with diff preview
    Edit {
        /// Book identifier
        id: String,

        /// Skip confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Remove a book from the library
    Rm {
        /// Book identifier
        id: String,

        /// Skip confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List the suggested genres
    Genres,

    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: Option<String>,

        /// Password (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account and store the session token
    Register {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Password (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// Show the signed-in user
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a config file interactively
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}
