use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for myot
#[derive(Parser)]
#[command(
    name = "myot",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log overtime hours and track monthly totals and earnings",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Log overtime hours for today
    Add {
        /// Hours worked (e.g. 2 or 3.5)
        hours: String,
    },

    /// Show or change the hourly rate applied to new entries
    Rate {
        /// New rate; omit to print the current one
        value: Option<String>,
    },

    /// Show total hours and earnings for a month
    Summary {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to summarize (default: current)")]
        month: Option<String>,
    },

    /// List entries in the order they were logged
    List {
        #[arg(long, short, value_name = "YYYY-MM", help = "Only list entries of this month")]
        month: Option<String>,
    },

    /// Show a month calendar annotated with logged hours
    Calendar {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,
    },

    /// Show the entries logged on one date
    Day {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Show or change display preferences
    #[command(group(ArgGroup::new("mode").args(["dark", "light"])))]
    Theme {
        #[arg(long, help = "Use the dark palette")]
        dark: bool,

        #[arg(long, help = "Use the light palette")]
        light: bool,

        #[arg(long, value_name = "HEX", help = "Primary color as #rrggbb")]
        color: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Import data exported from the browser version (localStorage dump)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
