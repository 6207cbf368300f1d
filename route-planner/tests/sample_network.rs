//! Route queries against the bundled Kathmandu sample network.

use std::path::PathBuf;

use route_planner::config::NetworkConfig;
use route_planner::load::{NetworkLoad, build_network};
use route_planner::planner::{Metric, Planner, Priority, RouteError, TravelMode};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn sample() -> NetworkLoad {
    let config = NetworkConfig::new(
        data("Edgeweight.txt"),
        data("BUS.TXT"),
        Some(data("fares.json")),
    );
    build_network(&config)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn sample_loads_cleanly() {
    let network = sample();
    assert!(network.is_complete(), "problems: {:?}", network.problems);
    assert_eq!(network.graph.vertex_count(), 21);
    assert_eq!(network.graph.edge_count(), 25);

    let first: Vec<&str> = network.graph.vertices().take(3).collect();
    assert_eq!(first, vec!["Kalanki", "Balkhu", "Ekantakuna"]);
}

#[test]
fn drive_takes_shortest_road() {
    let network = sample();
    let route = Planner::new(&network.graph)
        .find_route("Kalanki", "Ratnapark", TravelMode::OwnTransport, Priority::default())
        .unwrap();

    assert_eq!(
        route.description(),
        "Kalanki -> Kalimati -> Tripureshwor -> Ratnapark"
    );
    assert!(close(route.total(), 4.8));
    assert_eq!(route.metric(), Metric::Distance);
}

#[test]
fn fastest_bus_changes_at_koteshwor() {
    let network = sample();
    let route = Planner::new(&network.graph)
        .find_route("Kalanki", "Ratnapark", TravelMode::PublicTransport, Priority::ShortestTime)
        .unwrap();

    assert_eq!(
        route.description(),
        "Kalanki -> Balkhu -> Ekantakuna -> Satdobato -> Koteshwor -> Tinkune -> Baneshwor -> Maitighar -> Ratnapark"
    );
    assert!(close(route.total(), 9.6 / 30.0 + 5.4 / 35.0));

    let lines: Vec<&str> = route
        .hops()
        .iter()
        .map(|h| h.bus_line.as_ref().map(|l| l.as_str()).unwrap_or("-"))
        .collect();
    assert_eq!(
        lines,
        vec!["Sajha", "Sajha", "Sajha", "Sajha", "Micro", "Micro", "Micro", "Micro"]
    );
}

#[test]
fn cheapest_bus_goes_round_the_north() {
    let network = sample();
    let route = Planner::new(&network.graph)
        .find_route("Kalanki", "Ratnapark", TravelMode::PublicTransport, Priority::CheapestPrice)
        .unwrap();

    assert_eq!(
        route.description(),
        "Kalanki -> Swayambhu -> Balaju -> Gongabu -> Maharajgunj -> Lainchaur -> Thamel -> Ratnapark"
    );
    // Four Sajha segments with a 5.00 base fare each, then Tempo at 1.5 per km
    assert!(close(route.total(), 4.0 * 5.0 + 7.5 * 2.5 + 4.1 * 1.5));
    assert!(route.to_string().ends_with("Cost: Rs. 44.9"));
}

#[test]
fn no_bus_to_kalimati() {
    let network = sample();
    let planner = Planner::new(&network.graph);

    assert!(
        planner
            .find_route("Kalanki", "Kalimati", TravelMode::OwnTransport, Priority::default())
            .is_ok()
    );
    assert_eq!(
        planner.find_route(
            "Kalanki",
            "Kalimati",
            TravelMode::PublicTransport,
            Priority::CheapestPrice
        ),
        Err(RouteError::NoRouteFound {
            from: "Kalanki".into(),
            to: "Kalimati".into(),
            metric: Metric::Price,
        })
    );
}

#[test]
fn missing_bus_file_leaves_road_network() {
    let dir = tempfile::tempdir().unwrap();
    let config = NetworkConfig::new(data("Edgeweight.txt"), dir.path().join("BUS.TXT"), None);
    let network = build_network(&config);

    assert_eq!(network.problems.len(), 1);
    let planner = Planner::new(&network.graph);
    assert!(
        planner
            .find_route("Kalanki", "Thamel", TravelMode::OwnTransport, Priority::default())
            .is_ok()
    );
    assert!(
        planner
            .find_route("Kalanki", "Thamel", TravelMode::PublicTransport, Priority::ShortestTime)
            .is_err()
    );
}
