//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use segmark_core::api::defaults;
use segmark_core::ListItemPolicy;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to adjust modes, sizes and output settings");
        println!("2. Validate your configuration:");
        println!("   segmark validate -c {}", self.output.display());
        println!("3. Use it for segmentation:");
        println!("   segmark segment -i input.md -c {}", self.output.display());

        Ok(())
    }
}

/// Commented template holding the default settings
pub fn generate_template() -> String {
    let list_items = ListItemPolicy::default();
    format!(
        r#"# segmark configuration
#
# Every key is optional. Command-line flags override values set here.

[segmentation]
# Segmentation mode: smart, line, symbol or subtitle_srt
mode = "smart"

# Chunks shorter than this (in characters) are merged with neighbours
min_chunk_size = {min}

# Prose longer than this (in characters) is split in smart mode
max_chunk_size = {max}

# Literal separators for symbol mode, applied in order
separators = ["{sep}"]

# Short Markdown list items with inline code or links stay whole
[segmentation.list_items]
enabled = {enabled}
# Longest protectable line in characters (defaults to max_chunk_size)
# max_line_len = 200
max_inline_elements = {inline}

[output]
# Output format when --format is not given: text, json or markdown
default_format = "text"

# Pretty print JSON output
pretty_json = true

[performance]
# Segment multiple files in parallel
parallel = false

# Worker threads for parallel segmentation (0 = one per CPU)
worker_threads = 0
"#,
        min = defaults::MIN_CHUNK_SIZE,
        max = defaults::MAX_CHUNK_SIZE,
        sep = defaults::SEPARATOR,
        enabled = list_items.enabled,
        inline = list_items.max_inline_elements,
    )
}
