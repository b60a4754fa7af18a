use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all available KDE themes installed on the system
    #[command(alias = "ls")]
    List,

    /// Show the directories searched for themes and color schemes
    Paths,

    /// Show details and colors of a theme (defaults to the current theme)
    Theme {
        /// Theme name; case, spaces and hyphens are ignored
        name: Option<String>,
    },

    /// Show the tool's configuration
    Config {
        /// Print config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Output as JSON (same as --format json)
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Write output to the specified file instead of stdout
    #[arg(short, long, value_name = "PATH", global = true)]
    pub output: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Resolve the output format; explicit flags win over the configured default.
    pub fn output_format(&self, default_json: bool) -> OutputFormat {
        match (self.format, self.json) {
            (Some(format), _) => format,
            (None, true) => OutputFormat::Json,
            (None, false) if default_json => OutputFormat::Json,
            (None, false) => OutputFormat::Text,
        }
    }
}

/// Extract color schemes from KDE Plasma desktop themes
#[derive(Debug, Parser)]
#[command(name = "kde-colors", version, verbatim_doc_comment)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}
