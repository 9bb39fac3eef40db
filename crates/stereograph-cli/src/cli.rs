//! Command-line interface for the stereograph utility
//!
//! Provides a CLI to turn JSON type events into stereotyped class diagrams.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::info;

use stereograph::core::logging::init_logging;
use stereograph::plugins::{ClassifiedName, Orchestrator};
use stereograph::{DuplicatePolicy, OutputFormat, RenderConfig};

/// Stereograph - Stereotyped class diagrams from type records
#[derive(Parser)]
#[command(name = "stereograph")]
#[command(about = "Classify types as interfaces or datatypes and emit yUML or DOT class diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert type events to a class diagram
    Convert {
        /// Input file containing JSON type events (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the diagram (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Diagram notation
        #[arg(long, value_enum, default_value_t = FormatChoice::Yuml)]
        format: FormatChoice,

        /// Omit the document preamble (yUML directives, DOT graph wrapper)
        #[arg(long)]
        no_preamble: bool,

        /// What to do when a type name arrives twice
        #[arg(long, value_enum, default_value_t = DuplicateChoice::Reject)]
        duplicates: DuplicateChoice,
    },

    /// Print the stereotype of every type
    Classify {
        /// Input file containing JSON type events (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Validate type events without rendering
    Validate {
        /// Input file to validate (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Supported diagram notations
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum FormatChoice {
    /// yUML class diagram text
    #[default]
    Yuml,
    /// Graphviz DOT
    Dot,
}

impl From<FormatChoice> for OutputFormat {
    fn from(value: FormatChoice) -> Self {
        match value {
            FormatChoice::Yuml => OutputFormat::Yuml,
            FormatChoice::Dot => OutputFormat::Dot,
        }
    }
}

/// Duplicate type name handling
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum DuplicateChoice {
    /// Fail on the second definition
    #[default]
    Reject,
    /// Keep the latest definition
    LastWriteWins,
}

impl From<DuplicateChoice> for DuplicatePolicy {
    fn from(value: DuplicateChoice) -> Self {
        match value {
            DuplicateChoice::Reject => DuplicatePolicy::Reject,
            DuplicateChoice::LastWriteWins => DuplicatePolicy::LastWriteWins,
        }
    }
}

/// Main CLI application
pub struct StereographApp {
    orchestrator: Orchestrator,
}

impl StereographApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a new application instance with a render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            orchestrator: Orchestrator::with_config(config),
        }
    }

    fn build_config(
        format: FormatChoice,
        no_preamble: bool,
        duplicates: DuplicateChoice,
    ) -> RenderConfig {
        RenderConfig::new(format.into())
            .with_preamble(!no_preamble)
            .with_duplicates(duplicates.into())
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var("STEREOGRAPH_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("STEREOGRAPH_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Stereograph v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Convert {
                input,
                output,
                format,
                no_preamble,
                duplicates,
            } => {
                let config = Self::build_config(format, no_preamble, duplicates);
                self.convert_command(input, output, config, cli.verbose)
            }
            Commands::Classify { input, json } => self.classify_command(input, json, cli.verbose),
            Commands::Validate { input } => self.validate_command(input, cli.verbose),
        }
    }

    /// Handle the convert command
    fn convert_command(
        &mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        config: RenderConfig,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        self.orchestrator = Orchestrator::with_config(config);
        let diagram = self.orchestrator.process(&content)?;
        info!(format = %config.format, bytes = diagram.len(), "Diagram rendered");

        if verbose {
            eprintln!("Successfully rendered {} diagram", config.format);
        }

        self.write_output(output, &diagram)
    }

    /// Handle the classify command
    fn classify_command(&self, input: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let classified = self.orchestrator.classify(&content)?;
        println!("{}", Self::format_classification(&classified, json)?);
        Ok(())
    }

    /// `name<TAB>stereotype` lines, or a pretty JSON array
    pub fn format_classification(classified: &[ClassifiedName], json: bool) -> Result<String> {
        if json {
            return Ok(serde_json::to_string_pretty(classified)?);
        }
        Ok(classified
            .iter()
            .map(|entry| format!("{}\t{}", entry.name, entry.stereotype))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Handle the validate command
    fn validate_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        match self.orchestrator.summarize(&content) {
            Ok(summary) => {
                println!(
                    "✓ Valid: {} types ({} interfaces, {} datatypes, {} plain), {} edges ({} realizations, {} generalizations)",
                    summary.types,
                    summary.interfaces,
                    summary.datatypes,
                    summary.plain,
                    summary.edges,
                    summary.realizations,
                    summary.generalizations
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Invalid type events: {}", e);
                Err(e)
            }
        }
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                print!("{}", content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }

    /// Get a reference to the orchestrator (for testing)
    #[cfg(test)]
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }
}

impl Default for StereographApp {
    fn default() -> Self {
        Self::new()
    }
}
