use crate::config::TravelMode;
use crate::export::ViewFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for itinerary-ics
#[derive(Parser)]
#[command(
    name = "itinerary-ics",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn pasted itinerary text into WORK, TRAVEL and HOLD calendar files",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the home base city from the configuration
    #[arg(global = true, long = "home", value_name = "CITY")]
    pub home: Option<String>,

    /// Override the travel mode from the configuration
    #[arg(global = true, long = "travel", value_enum)]
    pub travel: Option<TravelMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "fill",
            requires = "check",
            help = "Add missing fields with their default value (with --check)"
        )]
        fill: bool,

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

    /// Parse itinerary text and show the resulting events
    Parse {
        /// Text file to read (`-` for stdin)
        #[arg(long, short = 'i', value_name = "FILE", default_value = "-")]
        input: String,

        /// Output format for the event table
        #[arg(long, value_enum, default_value = "table")]
        format: ViewFormat,

        /// Save the event table as a session file for later edits/export
        #[arg(long, value_name = "SESSION")]
        save: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the session file without asking")]
        force: bool,
    },

    /// Edit a saved session
    Edit {
        /// Session file written by `parse --save`
        #[arg(long, short = 's', value_name = "SESSION")]
        session: String,

        #[command(subcommand)]
        action: EditAction,
    },

    /// Write work.ics, travel.ics and hold.ics
    Export {
        /// Text file to parse (`-` for stdin)
        #[arg(long, short = 'i', value_name = "FILE", conflicts_with = "session")]
        input: Option<String>,

        /// Session file written by `parse --save`
        #[arg(long, short = 's', value_name = "SESSION")]
        session: Option<String>,

        /// Directory for the three .ics files
        #[arg(long = "out-dir", short = 'o', value_name = "DIR", default_value = ".")]
        out_dir: String,

        /// Use this RunID instead of generating one
        #[arg(long = "run-id", value_name = "ID")]
        run_id: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite existing .ics files without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EditAction {
    /// Add an event
    Add {
        /// Date (YYYY-MM-DD)
        date: String,
        city: String,
        label: String,

        #[arg(long, default_value = "work", help = "WORK, TRAVEL or HOLD")]
        category: String,

        #[arg(long, help = "Start time (HH:MM)")]
        time: Option<String>,

        #[arg(long, help = "End time (HH:MM)")]
        end: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Remove an event by id
    Remove { id: u32 },

    /// Change fields of an event
    Update {
        id: u32,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "New start time (HH:MM), empty to clear")]
        time: Option<String>,

        #[arg(long, help = "New end time (HH:MM), empty to clear")]
        end: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        label: Option<String>,

        #[arg(long, help = "WORK, TRAVEL or HOLD")]
        category: Option<String>,

        #[arg(long = "include-travel", help = "Whether this event's run gets travel days")]
        include_travel: Option<bool>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Recompute the inferred travel days
    Travel,
}
