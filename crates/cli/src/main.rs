use clap::{Parser, Subcommand};
use setu_core::{ConceptIndex, MappingTable, TerminologyService};
use setu_types::SystemFilter;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "setu")]
#[command(about = "NAMASTE / ICD-11 terminology matching and mapping CLI")]
struct Cli {
    /// Concept corpus JSON file
    #[arg(long, global = true, default_value = "data/concepts.json")]
    corpus: PathBuf,

    /// Curated mapping table JSON file
    #[arg(long, global = true, default_value = "data/mappings.json")]
    mappings: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the corpus for concepts matching a query
    Search {
        /// Free-text query
        query: String,
        /// Restrict to coding systems (namaste, mms, tm2, icd11, all)
        #[arg(long = "system")]
        systems: Vec<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Propose cross-system mappings for a source concept
    Map {
        /// Source concept code
        code: String,
        /// Source system URI (first concept carrying the code wins when omitted)
        #[arg(long)]
        system: Option<String>,
        /// Print candidates as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("setu=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let concepts = setu_corpus::load_concepts(&cli.corpus)?;
    let entries = setu_corpus::load_mapping_table(&cli.mappings)?;
    let index = Arc::new(ConceptIndex::build(concepts)?);
    let table = MappingTable::from_entries(entries);
    tracing::info!(
        "corpus ready: {} concept(s), {} mapped source code(s)",
        index.len(),
        table.len()
    );
    let service = TerminologyService::new(index, table);

    match cli.command {
        Commands::Search {
            query,
            systems,
            json,
        } => {
            let filter = SystemFilter::from_labels(&systems);
            let results = service.search(&query, &filter);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No matching concepts.");
            } else {
                for result in results {
                    println!(
                        "{:<12} {:>3.0}%  [{}] {} <{}>",
                        result.concept.code,
                        result.confidence * 100.0,
                        result.match_type,
                        result.concept.display,
                        result.concept.system_tag(),
                    );
                }
            }
        }
        Commands::Map { code, system, json } => {
            let candidates = service.map(&code, system.as_deref());
            if json {
                println!("{}", serde_json::to_string_pretty(&candidates)?);
            } else if candidates.is_empty() {
                println!("No mappings found for {code}.");
            } else {
                for candidate in candidates {
                    println!(
                        "{:<12} {:>3.0}%  {:<10} via {}: {}",
                        candidate.target_code,
                        candidate.confidence * 100.0,
                        candidate.equivalence,
                        candidate.method,
                        candidate.target_display,
                    );
                }
            }
        }
    }

    Ok(())
}
