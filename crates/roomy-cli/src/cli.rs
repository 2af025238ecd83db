use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "roomy",
    about = "Container query demo: breakpoint markers and tier-scoped styles",
    version
)]
pub struct Cli {
    /// Output mode: auto, term, text, or json
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the tiers a container satisfies at each width, in order
    Classify {
        /// Container content widths in pixels
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        widths: Vec<f64>,

        /// Breakpoint table (YAML, or JSON with a .json extension)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the style sheet generated for the demo page
    Stylesheet {
        /// Use hashed class names instead of sequential ones
        #[arg(long)]
        hashed: bool,
    },

    /// Show which demo labels are visible inside a container of WIDTH
    Visibility {
        /// Container content width in pixels
        #[arg(allow_negative_numbers = true)]
        width: f64,

        /// Breakpoint table (YAML, or JSON with a .json extension)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// How command output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Styled when stdout is a terminal
    Auto,
    /// Always styled
    Term,
    /// Never styled
    Text,
    /// Structured JSON
    Json,
}

impl OutputMode {
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json => false,
        }
    }
}
