use crate::listing::StatusFilter;
use clap::Parser;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(
    name = "kursdash",
    version = VERSION,
    about = "Course management dashboard for Bildungserlebnis 4.0"
)]
pub struct Cli {
    /// JSON file with the course list (built-in sample data when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub courses: Option<PathBuf>,

    /// Initial search text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Initial status filter: all, draft, active or archived
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// Disable desktop notifications
    #[arg(long)]
    pub no_notify: bool,

    /// Write debug logs to $XDG_STATE_HOME/kursdash/debug.log
    #[arg(short, long)]
    pub verbose: bool,
}
