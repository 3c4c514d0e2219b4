use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Searchable student record manager for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new student
    #[command(alias = "a")]
    Add {
        /// Full name (letters and spaces)
        #[arg(long)]
        name: String,

        /// Student ID (digits, unique)
        #[arg(long)]
        id: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Contact number (10 digits)
        #[arg(long)]
        contact: String,
    },

    /// List students
    #[command(alias = "ls")]
    List {
        /// Search term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search students by name, id, or email
    Search { term: String },

    /// Edit a student record; omitted fields keep their current value
    #[command(alias = "e")]
    Edit {
        /// Student ID of the record to edit
        id: String,

        /// New full name
        #[arg(long)]
        name: Option<String>,

        /// New student ID
        #[arg(long = "id")]
        new_id: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New contact number
        #[arg(long)]
        contact: Option<String>,
    },

    /// Delete a student record
    #[command(alias = "rm")]
    Delete {
        /// Student ID of the record to delete
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every student record
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Export records to CSV
    Export {
        /// Output file (defaults to the configured export file)
        path: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data_file, export_file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
