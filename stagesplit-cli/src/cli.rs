//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use stagesplit_core::split::{Rect, SplitOrientation};

/// `stagesplit` command-line interface for split-screen staging layouts
#[derive(Parser)]
#[command(name = "stagesplit")]
#[command(author, version, about = "Split-screen staging command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true, env = "STAGESPLIT_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute pane shares for a split layout
    #[command(about = "Compute the pane shares of a split layout")]
    Bounds {
        /// Top (portrait) or left (landscape) pane as LEFT,TOP,RIGHT,BOTTOM
        #[arg(long, value_name = "RECT", allow_hyphen_values = true)]
        top_left: Rect,

        /// Bottom (portrait) or right (landscape) pane as LEFT,TOP,RIGHT,BOTTOM
        #[arg(long, value_name = "RECT", allow_hyphen_values = true)]
        bottom_right: Rect,

        /// Divider between the panes as LEFT,TOP,RIGHT,BOTTOM
        #[arg(long, value_name = "RECT", allow_hyphen_values = true)]
        divider: Rect,

        /// Orientation used to pick the meaningful share
        #[arg(short, long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,

        /// Output format
        #[arg(short, long, default_value = "text", value_enum)]
        format: OutputFormat,

        /// Fail on a layout with zero total width or height
        #[arg(long)]
        reject_degenerate: bool,
    },

    /// List the configured split menu entries
    #[command(about = "List the split menu entries from the settings file")]
    Options {
        /// Orientation used to name the target side
        #[arg(short, long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,

        /// Output format
        #[arg(short, long, default_value = "text", value_enum)]
        format: OutputFormat,
    },

    /// Build a task slot from integer tags
    #[command(about = "Validate and show a task to stage assignment")]
    Task {
        /// Task id (-1 for none)
        #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
        task_id: i32,

        /// Stage position tag (-1 undefined, 0 top/left, 1 bottom/right)
        #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
        position: i32,

        /// Stage type tag (-1 undefined, 0 main, 1 side)
        #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
        stage_type: i32,

        /// Output format
        #[arg(short, long, default_value = "text", value_enum)]
        format: OutputFormat,
    },

    /// Manage the settings file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Settings file subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the settings file path
    Path,
    /// Print the effective settings as TOML
    Show,
    /// Write the default settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

/// Output format for command results
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON document
    Json,
}

/// Device orientation argument
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OrientationArg {
    /// Stages stacked top/bottom
    Portrait,
    /// Stages side by side
    Landscape,
}

impl From<OrientationArg> for SplitOrientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}
