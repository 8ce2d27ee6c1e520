//! hdg - Entry Point
//!
//! Reads a document (file or stdin), runs the configured pipeline and prints
//! the resulting chunk tree, structural graph and embeddings as JSON.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `hdg README.md` | Heading chunks with the configured defaults |
//! | `hdg --strategy structural README.md` | Chunks plus the block-level graph |
//! | `hdg --max-chunk-size 800 --overlap 80 -` | Constrained chunks from stdin |

// Force-link hdg-providers to ensure linkme registrations are included
extern crate hdg_providers;

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use hdg::infrastructure::ErrorContext;
use hdg::infrastructure::logging::init_logging;
use hdg::{ChunkingStrategy, ConfigLoader, Result, init_app};
use tokio_util::sync::CancellationToken;

/// Command line interface for hdg
#[derive(Parser, Debug)]
#[command(name = "hdg")]
#[command(about = "Hierarchical document graph - heading-aware document chunking")]
#[command(version)]
pub struct Cli {
    /// Document to process, or `-` for stdin
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Chunking pipeline (overrides `chunking.strategy`)
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Enforce a maximum chunk size in characters
    #[arg(long)]
    pub max_chunk_size: Option<usize>,

    /// Characters of overlap between consecutive chunks
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Extract keywords for every chunk
    #[arg(long)]
    pub keywords: bool,

    /// Vectorize every chunk
    #[arg(long)]
    pub embeddings: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Command line names of the chunking pipelines
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    /// Heading chunks only
    Headings,
    /// Heading chunks plus the block-level graph
    Structural,
}

impl From<StrategyArg> for ChunkingStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Headings => Self::Headings,
            StrategyArg::Structural => Self::Structural,
        }
    }
}

impl Cli {
    /// Source identifier recorded on the graph
    fn source_id(&self) -> String {
        if self.reads_stdin() {
            "stdin".to_string()
        } else {
            self.input.display().to_string()
        }
    }

    fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }

    fn read_input(&self) -> Result<String> {
        if self.reads_stdin() {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .io_context("Failed to read stdin")?;
            Ok(text)
        } else {
            std::fs::read_to_string(&self.input)
                .io_context(format!("Failed to read {}", self.input.display()))
        }
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;

    if let Some(strategy) = cli.strategy {
        config.chunking.strategy = strategy.into();
    }
    if let Some(max_chunk_size) = cli.max_chunk_size {
        config.chunking.enforce_constraints = true;
        config.chunking.max_chunk_size = max_chunk_size;
        config.chunking.min_chunk_size = config.chunking.min_chunk_size.min(max_chunk_size);
    }
    if let Some(overlap) = cli.overlap {
        config.chunking.enforce_constraints = true;
        config.chunking.chunk_overlap = overlap;
    }
    config.keywords.extract_keywords |= cli.keywords;
    config.embedding.enabled |= cli.embeddings;

    init_logging(&config.logging)?;
    let context = init_app(config)?;

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.cancel();
        }
    });

    let text = cli.read_input()?;
    let document = context.process(&text, &cli.source_id(), &cancel).await?;

    let output = serde_json::json!({
        "graph": document.graph,
        "embeddings": document.embeddings,
    });
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}
