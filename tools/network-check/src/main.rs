use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use metro_watch_core::closure::{apply_closure_snapshot, ClosureRecord, ClosureSnapshot};
use metro_watch_core::routing::{compute_route_with, RoutingConfig};
use metro_watch_core::transit::{StationDataset, StationGraph, StationIdentifier, TransitNetwork};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

mod report;

use report::{print_decision, print_endpoints, NetworkSummary};

#[derive(Parser, Debug)]
#[command(
    name = "network-check",
    author,
    version,
    about = "Validate a metro station dataset and inspect closure-aware routes",
    long_about = "Loads a station dataset, checks it for dangling connections and invalid \
                  costs, applies an optional closure feed dump, and prints the route \
                  decision the app would show for a pair of stations."
)]
struct Args {
    /// Station dataset JSON file
    #[arg(short, long)]
    stations: PathBuf,

    /// Closure records JSON file (array of closure records)
    #[arg(short, long)]
    closures: Option<PathBuf>,

    /// Routing configuration JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Origin station id or unique name
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// Destination station id or unique name
    #[arg(long, requires = "from")]
    to: Option<String>,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    if !args.stations.exists() {
        bail!("Station dataset does not exist: {}", args.stations.display());
    }

    let config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            RoutingConfig::from_json(&json).context("Invalid routing configuration")?
        }
        None => RoutingConfig::default(),
    };

    log::info!("Loading stations from {}", args.stations.display());
    let file = File::open(&args.stations)
        .with_context(|| format!("Failed to open {}", args.stations.display()))?;
    let dataset = StationDataset::from_reader(BufReader::new(file)).context("Failed to parse station dataset")?;
    let mut graph = dataset.into_graph().context("Station dataset is inconsistent")?;

    NetworkSummary::of(&graph).log();

    let snapshot = match &args.closures {
        Some(path) => read_closures(path, &config)?,
        None => ClosureSnapshot::empty(),
    };
    let applied = apply_closure_snapshot(&mut graph, &snapshot);
    log::info!(
        "Applied {} closures ({} unknown stations)",
        applied.closed,
        applied.unknown.len()
    );

    let (Some(from), Some(to)) = (&args.from, &args.to) else {
        return Ok(());
    };

    let start = resolve_station(&graph, from)?;
    let end = resolve_station(&graph, to)?;

    print_endpoints(&graph, &snapshot, [&start, &end]);

    let decision = compute_route_with(&graph, &start, &end, &snapshot, &config)
        .with_context(|| format!("Failed to compute route {start} -> {end}"))?;
    print_decision(&decision);

    Ok(())
}

fn read_closures(path: &Path, config: &RoutingConfig) -> Result<ClosureSnapshot> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let records: Vec<ClosureRecord> =
        serde_json::from_reader(BufReader::new(file)).context("Failed to parse closure records")?;
    log::info!("Read {} closure records from {}", records.len(), path.display());

    let snapshot = match config.closure_max_age() {
        Some(max_age) => ClosureSnapshot::from_fresh_records(records, Utc::now(), max_age),
        None => ClosureSnapshot::from_records(records),
    };
    log::debug!("{} stations closed after freshness filter", snapshot.len());

    Ok(snapshot)
}

/// Accept either an exact station id or a name that matches a single station
fn resolve_station(graph: &StationGraph, query: &str) -> Result<StationIdentifier> {
    let id = StationIdentifier::from(query);
    if graph.contains(&id) {
        return Ok(id);
    }

    let matches = graph.search_by_name(query);
    match matches.as_slice() {
        [] => bail!("No station matches {query:?}"),
        [station] => Ok(station.id.clone()),
        many => {
            let exact: Vec<_> = many
                .iter()
                .filter(|station| station.name.eq_ignore_ascii_case(query.trim()))
                .collect();
            if let [station] = exact.as_slice() {
                return Ok(station.id.clone());
            }

            let candidates: Vec<String> = many.iter().map(|s| s.id.to_string()).collect();
            bail!(
                "{query:?} is ambiguous, use one of: {}",
                candidates.join(", ")
            )
        }
    }
}
