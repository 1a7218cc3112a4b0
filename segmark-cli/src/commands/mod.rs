//! Command implementations for the CLI

pub mod generate_config;
pub mod segment;
pub mod validate;

use anyhow::Result;
use clap::Subcommand;
use segmark_core::Mode;

pub use generate_config::GenerateConfigArgs;
pub use segment::{ModeArg, OutputFormat, SegmentArgs};
pub use validate::ValidateArgs;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment documents into typed chunks
    Segment(SegmentArgs),

    /// List available modes or output formats
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration template
    GenerateConfig(GenerateConfigArgs),

    /// Check a configuration file
    Validate(ValidateArgs),
}

/// Subcommands of `list`
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// Segmentation modes
    Modes,
    /// Output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Segment(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Listing text for the subcommand
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Modes => {
                out.push_str("Available modes:\n");
                for mode in Mode::ALL {
                    out.push_str(&format!("  {:<14}{}\n", mode.as_str(), mode.description()));
                }
            }
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                for format in OutputFormat::ALL {
                    out.push_str(&format!("  {:<10}{}\n", format.name(), format.description()));
                }
            }
        }
        out
    }
}
