use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use route_planner::config::NetworkConfig;
use route_planner::load::build_network;
use route_planner::planner::{Planner, Priority, TravelMode};

/// Find the shortest, fastest or cheapest way between two locations.
#[derive(Debug, Parser)]
#[command(name = "route-planner", version)]
struct Args {
    /// Road segment records (`from to distance`)
    #[arg(long, default_value = "Edgeweight.txt")]
    distances: PathBuf,

    /// Bus-route records (`busLineId stop1 stop2 ...`)
    #[arg(long, default_value = "BUS.TXT")]
    buses: PathBuf,

    /// JSON fare table; without one every line uses the default bus model
    #[arg(long)]
    fares: Option<PathBuf>,

    /// Starting location
    #[arg(long, required_unless_present = "list")]
    from: Option<String>,

    /// Destination
    #[arg(long, required_unless_present = "list")]
    to: Option<String>,

    /// How to travel
    #[arg(long, value_enum, default_value_t = Mode::Public)]
    mode: Mode,

    /// What to minimise when travelling by bus
    #[arg(long, value_enum, default_value_t = Minimise::Time)]
    priority: Minimise,

    /// Print every known location and exit
    #[arg(long)]
    list: bool,

    /// Print the route as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Car or motorcycle
    Own,
    /// Bus
    Public,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Minimise {
    Time,
    Price,
}

impl From<Mode> for TravelMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Own => TravelMode::OwnTransport,
            Mode::Public => TravelMode::PublicTransport,
        }
    }
}

impl From<Minimise> for Priority {
    fn from(priority: Minimise) -> Self {
        match priority {
            Minimise::Time => Priority::ShortestTime,
            Minimise::Price => Priority::CheapestPrice,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("route_planner=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = NetworkConfig::new(args.distances, args.buses, args.fares);
    let network = build_network(&config);
    for problem in &network.problems {
        eprintln!("Error: {problem}");
    }

    let planner = Planner::new(&network.graph);

    if args.list {
        for location in planner.locations() {
            println!("{location}");
        }
        return ExitCode::SUCCESS;
    }

    // clap enforces both unless --list was given
    let (Some(from), Some(to)) = (args.from, args.to) else {
        return ExitCode::from(2);
    };

    match planner.find_route(&from, &to, args.mode.into(), args.priority.into()) {
        Ok(route) if args.json => match serde_json::to_string_pretty(&route) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error = %e, "failed to serialise route");
                ExitCode::FAILURE
            }
        },
        Ok(route) => {
            println!("{route}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
