//! clust CLI - Command line interface for clust
//!
//! Loads a barcode table and runs exact or fuzzy lookups against it.
//! Results are printed as JSON, one object per lookup.

use clap::{Parser, Subcommand};
use clust::{edit_count, load_table, BarcodeTrie, FuzzyMatch, Sequence, TrieConfig};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "clust")]
#[command(about = "Exact and fuzzy lookup of nucleotide barcodes")]
#[command(version)]
struct Cli {
    /// Path to the barcode table (sequence and label per line)
    #[arg(short, long, default_value = "barcodes.tsv")]
    table: PathBuf,

    /// Path to a JSON config file (defaults to ~/.config/clust/config.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Log progress at info level
    #[arg(short, long)]
    verbose: bool,

    /// Log search statistics at debug level
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a sequence exactly
    Lookup {
        /// The query sequence
        query: String,
    },

    /// Look up a sequence allowing substitutions, insertions and deletions
    Search {
        /// The query sequence
        query: String,
        /// Maximum number of edits
        #[arg(short, long, default_value = "1")]
        max_edits: usize,
    },

    /// Fuzzy-search every line of a file ("-" for stdin)
    Batch {
        /// File with one query per line
        input: PathBuf,
        /// Maximum number of edits
        #[arg(short, long, default_value = "1")]
        max_edits: usize,
    },

    /// Show table size and configuration
    Stats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    let config = TrieConfig::resolve(cli.config.as_deref())?;
    let trie = open_table(&cli.table, config)?;

    match cli.command {
        Commands::Lookup { query } => {
            let key: Sequence = query.parse()?;
            let label = trie.get(&key);
            output(
                &cli.format,
                &serde_json::json!({
                    "query": query,
                    "label": label,
                    "found": label.is_some()
                }),
            )?;
            if label.is_none() {
                std::process::exit(1);
            }
        }

        Commands::Search { query, max_edits } => {
            let key: Sequence = query.parse()?;
            let result = trie.search(&key, max_edits);
            output(&cli.format, &search_json(&query, max_edits, result))?;
            if result.is_none() {
                std::process::exit(1);
            }
        }

        Commands::Batch { input, max_edits } => {
            let reader: Box<dyn BufRead> = if input.as_os_str() == "-" {
                Box::new(BufReader::new(std::io::stdin()))
            } else {
                Box::new(BufReader::new(std::fs::File::open(&input)?))
            };

            let mut total = 0usize;
            let mut matched = 0usize;
            for line in reader.lines() {
                let line = line?;
                let query = line.trim();
                if query.is_empty() {
                    continue;
                }
                total += 1;
                let value = match query.parse::<Sequence>() {
                    Ok(key) => {
                        let result = trie.search(&key, max_edits);
                        if result.is_some() {
                            matched += 1;
                        }
                        search_json(query, max_edits, result)
                    }
                    Err(e) => serde_json::json!({
                        "query": query,
                        "error": e.to_string()
                    }),
                };
                output(&cli.format, &value)?;
            }
            log::info!("{} of {} queries matched", matched, total);
        }

        Commands::Stats => {
            let config = trie.config();
            output(
                &cli.format,
                &serde_json::json!({
                    "table": cli.table.display().to_string(),
                    "barcodes": trie.len(),
                    "config": config
                }),
            )?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, debug: bool) {
    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn open_table(path: &Path, config: TrieConfig) -> anyhow::Result<BarcodeTrie<String>> {
    load_table(path, config)
        .map_err(|e| anyhow::anyhow!("Failed to load table {}: {}", path.display(), e))
}

fn search_json(
    query: &str,
    max_edits: usize,
    result: Option<FuzzyMatch<'_, String>>,
) -> serde_json::Value {
    serde_json::json!({
        "query": query,
        "label": result.map(|m| m.label),
        "edits": edit_count(result.as_ref()),
        "max_edits": max_edits,
        "found": result.is_some()
    })
}

fn output(format: &OutputFormat, value: &serde_json::Value) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value)?);
        }
        OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
    }
    Ok(())
}
