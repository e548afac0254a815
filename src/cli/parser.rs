use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for leavedesk.
/// Chatbot and admin front-end over the leave ledger.
#[derive(Parser)]
#[command(
    name = "leavedesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Leave-request assistant: chat to apply for leave, review and approve requests",
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

    /// Provision a user with a balance row and an owning administrator
    Adduser {
        user_id: i64,
        admin_id: i64,

        #[arg(long, help = "Earned Leave days (default: yearly entitlement)")]
        el: Option<i64>,

        #[arg(long, help = "Sick Leave days (default: yearly entitlement)")]
        sl: Option<i64>,

        #[arg(long, help = "Casual Leave days (default: yearly entitlement)")]
        cl: Option<i64>,
    },

    /// Interactive chat session for one user
    Chat { user_id: i64 },

    /// Send a single chat message and print the reply
    Send {
        user_id: i64,

        #[arg(required = true, help = "The message text")]
        message: Vec<String>,
    },

    /// List pending leave requests for an administrator
    Pending { admin_id: i64 },

    /// Approve one pending request, or all of them with --all
    Approve {
        admin_id: i64,

        #[arg(long, conflicts_with_all = ["user_id", "date"])]
        all: bool,

        #[arg(requires = "date")]
        user_id: Option<i64>,

        #[arg(help = "Leave date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Reject one pending request
    Reject {
        admin_id: i64,
        user_id: i64,

        #[arg(help = "Leave date (YYYY-MM-DD)")]
        date: String,
    },

    /// Show (or clear) a user's chat history
    History {
        user_id: i64,

        #[arg(long, help = "Clear this user's chat history instead of printing it")]
        clear: bool,
    },

    /// Export the ledger tables to a file
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, help = "Output file (default: leavedesk_export.<ext>)")]
        output: Option<String>,
    },
}
