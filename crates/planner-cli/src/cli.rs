//! Command-line interface definition using clap.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};

use planner_models::{Privacy, Recurrence, RsvpStatus};
use planner_views::{ExportFormat, SortKey, SortOrder};

/// Default base URL of a locally running API server.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

/// Planner - event planning from the command line
#[derive(Parser, Debug)]
#[command(name = "planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to state directory
    #[arg(short, long, env = "PLANNER_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the API server
    Serve {
        /// Host to bind to (default: PLANNER_HOST or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (default: PLANNER_PORT or 5000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Add a new event
    Add {
        /// Event title
        #[arg(required = true)]
        title: String,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,

        /// Start time (HH:MM:SS)
        #[arg(long)]
        start: NaiveTime,

        /// End time (HH:MM:SS)
        #[arg(long)]
        end: NaiveTime,

        /// Location
        #[arg(short, long)]
        location: String,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Category tag
        #[arg(short, long)]
        category: Option<String>,

        /// Privacy (public, private)
        #[arg(long, value_enum)]
        privacy: Option<PrivacyArg>,

        /// Meeting link; marks the event as online
        #[arg(long)]
        meeting_link: Option<String>,

        /// Maximum number of attendees
        #[arg(long)]
        capacity: Option<u32>,

        /// Track overflow signups once full
        #[arg(long)]
        waitlist: bool,

        /// Recurrence (none, daily, weekly, monthly)
        #[arg(short, long, value_enum)]
        recurrence: Option<RecurrenceArg>,

        /// Timezone label (default: UTC)
        #[arg(long)]
        timezone: Option<String>,
    },

    /// List events
    List {
        /// Substring search over title, description, and location
        #[arg(long)]
        search: Option<String>,

        /// Filter by exact category
        #[arg(short, long)]
        category: Option<String>,

        /// Filter by privacy (public, private)
        #[arg(long, value_enum)]
        privacy: Option<PrivacyArg>,

        /// Include events dated before today
        #[arg(long)]
        past: bool,

        /// Sort key (date, title, attendees, created)
        #[arg(long, value_enum, default_value = "date")]
        sort: SortArg,

        /// Sort order (asc, desc)
        #[arg(long, value_enum, default_value = "asc")]
        order: OrderArg,

        /// 1-based page index
        #[arg(long, default_value = "1")]
        page: usize,

        /// Page size (6, 9, 12, 24)
        #[arg(long)]
        page_size: Option<usize>,

        /// Output format (table, json, brief)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show one event in full
    Show {
        /// Event ID
        #[arg(required = true)]
        id: String,
    },

    /// Delete an event
    Delete {
        /// Event ID
        #[arg(required = true)]
        id: String,
    },

    /// Invite an attendee to an event
    Invite {
        /// Event ID
        #[arg(required = true)]
        id: String,

        /// Attendee email
        #[arg(required = true)]
        email: String,

        /// Initial RSVP status (yes, no, maybe)
        #[arg(long, value_enum, default_value = "maybe")]
        status: StatusArg,
    },

    /// Update an attendee's RSVP status
    Rsvp {
        /// Event ID
        #[arg(required = true)]
        id: String,

        /// Attendee email
        #[arg(required = true)]
        email: String,

        /// New status (yes, no, maybe)
        #[arg(required = true, value_enum)]
        status: StatusArg,
    },

    /// Export events to CSV, JSON, or plain text
    Export {
        /// Export format (csv, json, txt)
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormatArg,

        /// Include events dated before today
        #[arg(long)]
        past: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Register an account on a running server and log in
    Register {
        /// Display name
        #[arg(required = true)]
        name: String,

        /// Email address
        #[arg(required = true)]
        email: String,

        /// Password
        #[arg(required = true)]
        password: String,

        /// Server base URL
        #[arg(long, env = "PLANNER_SERVER", default_value = DEFAULT_SERVER)]
        server: String,
    },

    /// Log in against a running server
    Login {
        /// Email address
        #[arg(required = true)]
        email: String,

        /// Password
        #[arg(required = true)]
        password: String,

        /// Server base URL
        #[arg(long, env = "PLANNER_SERVER", default_value = DEFAULT_SERVER)]
        server: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Brief,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PrivacyArg {
    Public,
    Private,
}

impl From<PrivacyArg> for Privacy {
    fn from(arg: PrivacyArg) -> Self {
        match arg {
            PrivacyArg::Public => Privacy::Public,
            PrivacyArg::Private => Privacy::Private,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RecurrenceArg {
    None,
    Daily,
    Weekly,
    Monthly,
}

impl From<RecurrenceArg> for Recurrence {
    fn from(arg: RecurrenceArg) -> Self {
        match arg {
            RecurrenceArg::None => Recurrence::None,
            RecurrenceArg::Daily => Recurrence::Daily,
            RecurrenceArg::Weekly => Recurrence::Weekly,
            RecurrenceArg::Monthly => Recurrence::Monthly,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StatusArg {
    Yes,
    No,
    Maybe,
}

impl From<StatusArg> for RsvpStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Yes => RsvpStatus::Yes,
            StatusArg::No => RsvpStatus::No,
            StatusArg::Maybe => RsvpStatus::Maybe,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SortArg {
    Date,
    Title,
    Attendees,
    Created,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Date => SortKey::Date,
            SortArg::Title => SortKey::Title,
            SortArg::Attendees => SortKey::Attendees,
            SortArg::Created => SortKey::Created,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Json,
    Txt,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Csv => ExportFormat::Csv,
            ExportFormatArg::Json => ExportFormat::Json,
            ExportFormatArg::Txt => ExportFormat::Txt,
        }
    }
}

impl Cli {
    /// Returns the state directory path, using default if not specified.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|h| h.join(".planner"))
                .unwrap_or_else(|| PathBuf::from(".planner"))
        })
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
