//! DCAT-AP.de Enrichment CLI
//!
//! Command-line tool for applying the DCAT-AP.de profile to N-Triples graphs.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use oxrdf::{Graph, NamedNode, Subject};
use oxttl::{NTriplesParser, NTriplesSerializer};
use serde_json::Value;
use tracing::Level;

use dcatde_profile::{
    dataset_uri, DatasetRecord, DcatDeProfile, MappingTables, ProfileError, ProfileSettings,
    TableSource,
};

#[derive(Parser)]
#[command(name = "dcatde-enrich")]
#[command(about = "Apply the DCAT-AP.de profile to DCAT-AP graphs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level written to stderr
    #[arg(long, global = true, default_value = "info")]
    log_level: Level,
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich the catalog node of a graph
    Catalog(CatalogArgs),
    /// Enrich a dataset node and its distributions
    Dataset(DatasetArgs),
}

#[derive(Args)]
struct CommonArgs {
    /// Mapping tables: directory, .zip archive or base URL
    #[arg(long, value_name = "SRC")]
    tables: String,

    /// Settings file (TOML, YAML or JSON); DCATDE_* variables override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input graph in N-Triples
    #[arg(long)]
    graph: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct CatalogArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// IRI of the catalog node
    #[arg(long)]
    subject: String,

    /// Catalog record as JSON
    #[arg(long)]
    record: Option<PathBuf>,
}

#[derive(Args)]
struct DatasetArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Dataset record as JSON
    #[arg(long)]
    record: PathBuf,

    /// IRI of the dataset node (default: derived from the record)
    #[arg(long)]
    subject: Option<String>,
}

/// Mapping tables and settings shared by both commands
fn load_profile(common: &CommonArgs) -> Result<DcatDeProfile<Graph>, ProfileError> {
    let source = TableSource::from_location(&common.tables);
    tracing::info!("Loading mapping tables from {}", source.location());
    let tables = MappingTables::load(&source)?;
    let settings = ProfileSettings::load(common.config.as_deref())?;
    let graph = read_graph(&common.graph)?;
    Ok(DcatDeProfile::new(graph, Arc::new(tables), settings))
}

/// Parse an N-Triples file into a graph
fn read_graph(path: &Path) -> Result<Graph, ProfileError> {
    let reader = BufReader::new(File::open(path)?);
    let mut graph = Graph::new();
    for triple in NTriplesParser::new().for_reader(reader) {
        let triple =
            triple.map_err(|e| ProfileError::Syntax(format!("{}: {}", path.display(), e)))?;
        graph.insert(&triple);
    }
    tracing::debug!("Read {} triples from {}", graph.len(), path.display());
    Ok(graph)
}

/// Write the graph as N-Triples to a file or stdout
fn write_graph(graph: &Graph, output: Option<&PathBuf>) -> Result<(), ProfileError> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut serializer = NTriplesSerializer::new().for_writer(writer);
    for triple in graph.iter() {
        serializer.serialize_triple(triple)?;
    }
    serializer.finish().flush()?;

    if let Some(path) = output {
        tracing::info!("Wrote {} triples to {}", graph.len(), path.display());
    }
    Ok(())
}

fn parse_subject(iri: &str) -> Result<Subject, ProfileError> {
    NamedNode::new(iri)
        .map(Subject::from)
        .map_err(|e| ProfileError::InvalidRecord(format!("invalid subject IRI '{}': {}", iri, e)))
}

fn run_catalog(args: CatalogArgs) -> Result<(), ProfileError> {
    let mut profile = load_profile(&args.common)?;
    let catalog = match &args.record {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Value::Null,
    };
    let subject = parse_subject(&args.subject)?;

    profile.enrich_catalog(&catalog, &subject);

    write_graph(profile.graph(), args.common.output.as_ref())
}

fn run_dataset(args: DatasetArgs) -> Result<(), ProfileError> {
    let mut profile = load_profile(&args.common)?;
    let record: DatasetRecord = serde_json::from_str(&fs::read_to_string(&args.record)?)?;
    let dataset = profile.parse_dataset(record);

    let subject = match &args.subject {
        Some(iri) => parse_subject(iri)?,
        None => {
            let uri = dataset_uri(&dataset, profile.settings().base_uri()).ok_or_else(|| {
                ProfileError::InvalidRecord(
                    "dataset has no uri and no base_uri is configured".to_string(),
                )
            })?;
            parse_subject(&uri)?
        }
    };

    let stats = profile.enrich_dataset(&dataset, &subject);
    if stats.distributions_enriched < stats.resources {
        tracing::warn!(
            "Only {} of {} resources matched a distribution node",
            stats.distributions_enriched,
            stats.resources
        );
    }

    write_graph(profile.graph(), args.common.output.as_ref())
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(cli.log_level)
        .init();

    let result = match cli.command {
        Commands::Catalog(args) => run_catalog(args),
        Commands::Dataset(args) => run_dataset(args),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
