//! Segment command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use segmark_core::{Config, Mode, Output, Segmenter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text, or the config file's default_format]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Segmentation mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Merge threshold in characters
    #[arg(long, value_name = "CHARS")]
    pub min: Option<usize>,

    /// Split threshold in characters
    #[arg(long, value_name = "CHARS")]
    pub max: Option<usize>,

    /// Separator for symbol mode (repeatable, applied in order)
    #[arg(short, long, value_name = "SEP")]
    pub separator: Vec<String>,

    /// Disable keeping short list items with inline code or links whole
    #[arg(long)]
    pub no_list_items: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Segment files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per chunk with a kind marker
    Text,
    /// JSON array of files with chunks and report
    Json,
    /// Markdown numbered list with totals
    Markdown,
}

impl OutputFormat {
    /// All formats in display order
    pub const ALL: [OutputFormat; 3] =
        [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Name accepted by `--format`
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "one line per chunk, prefixed with [kind] (* = not translatable)",
            OutputFormat::Json => "array of {file, chunks, report} objects",
            OutputFormat::Markdown => "numbered list per file followed by totals",
        }
    }
}

/// Segmentation modes as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Structure-aware Markdown/HTML segmentation
    Smart,
    /// One chunk per non-blank line
    Line,
    /// Split on literal separators
    Symbol,
    /// SubRip subtitles
    #[value(aliases = ["srt", "subtitle_srt"])]
    SubtitleSrt,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Smart => Mode::Smart,
            ModeArg::Line => Mode::Line,
            ModeArg::Symbol => Mode::Symbol,
            ModeArg::SubtitleSrt => Mode::SubtitleSrt,
        }
    }
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting segmentation");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let config = self.segmenter_config(&file_config)?;
        let format = self.resolve_format(&file_config)?;
        let segmenter = Segmenter::with_config(config).map_err(CliError::from)?;

        let files = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let parallel = self.parallel || file_config.performance.parallel;
        let results = if parallel && files.len() > 1 {
            let threads = file_config.performance.effective_threads();
            log::debug!("Segmenting {} files on {} threads", files.len(), threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| {
                files
                    .par_iter()
                    .map(|path| segment_file(&segmenter, path, &progress))
                    .collect::<Result<Vec<_>>>()
            })?
        } else {
            files
                .iter()
                .map(|path| segment_file(&segmenter, path, &progress))
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        let mut formatter = self.create_formatter(format, &file_config, files.len() > 1)?;
        for (path, output) in &results {
            formatter.format_file(path, output)?;
        }
        formatter.finish()?;

        let total: usize = results.iter().map(|(_, o)| o.report.total_chunks).sum();
        log::info!("Wrote {} chunks from {} file(s)", total, results.len());
        Ok(())
    }

    /// Library configuration: file values overridden by flags
    pub fn segmenter_config(&self, file_config: &CliConfig) -> Result<Config> {
        let mut merged = file_config.clone();
        let seg = &mut merged.segmentation;

        if let Some(mode) = self.mode {
            seg.mode = Mode::from(mode).as_str().to_string();
        }
        if let Some(min) = self.min {
            seg.min_chunk_size = min;
        }
        if let Some(max) = self.max {
            seg.max_chunk_size = max;
        }
        if !self.separator.is_empty() {
            seg.separators = self.separator.clone();
        }
        if self.no_list_items {
            seg.list_items.enabled = false;
        }

        merged.to_segmenter_config()
    }

    /// Output format from the flag, else from the config file
    pub fn resolve_format(&self, file_config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        let name = &file_config.output.default_format;
        OutputFormat::from_str(name, true).map_err(|_| {
            CliError::ConfigError(format!(
                "default_format must be one of: text, json, markdown (got '{name}')"
            ))
            .into()
        })
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        file_config: &CliConfig,
        multiple_files: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => {
                Box::new(TextFormatter::new(writer).with_headers(multiple_files))
            }
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, file_config.output.pretty_json))
            }
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn segment_file(
    segmenter: &Segmenter,
    path: &Path,
    progress: &ProgressReporter,
) -> Result<(PathBuf, Output)> {
    log::debug!(
        "Segmenting {} ({} bytes)",
        path.display(),
        FileReader::file_size(path)?
    );
    let text = FileReader::read_text(path)?;
    let output = segmenter.segment(&text);
    log::info!(
        "{}: {} chunks, {} translatable",
        path.display(),
        output.report.total_chunks,
        output.report.translatable_chunks
    );
    progress.file_completed(&path.display().to_string());
    Ok((path.to_path_buf(), output))
}
