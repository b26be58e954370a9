//! End-to-end routing scenarios over a small fixture network.

use merlion_core::prelude::*;

/// Four stops roughly 3 km apart, so coordinate queries snap to exactly
/// one stop each. Bus 10 runs A-B-C, bus 20 covers C-D, bus 30 covers
/// B-D, and A-D can be walked directly.
fn fixture_network() -> TransitNetwork {
    build_network(
        serde_json::from_value(serde_json::json!({
            "A": {
                "B": [{"service": "10", "direction": 1, "distance": 2.0, "weight": 60}],
                "D": [{"service": "WALK", "distance": 0.8, "weight": 600}]
            },
            "B": {
                "C": [{"service": "10", "direction": 1, "distance": 2.0, "weight": 120}],
                "D": [{"service": "30", "direction": 1, "distance": 3.0, "weight": 180}]
            },
            "C": {
                "D": [{"service": "20", "direction": 1, "distance": 2.0, "weight": 90}]
            }
        }))
        .unwrap(),
        serde_json::from_value(serde_json::json!({
            "A": {"name": "Ang Mo Kio Int", "road": "AMK Ave 8", "lat": 1.280, "lng": 103.840},
            "B": {"name": "Bishan Int", "road": "Bishan Rd", "lat": 1.300, "lng": 103.860},
            "C": {"name": "Caldecott Stn", "road": "Thomson Rd", "lat": 1.320, "lng": 103.880},
            "D": {"name": "Dhoby Ghaut", "road": "Orchard Rd", "lat": 1.340, "lng": 103.900}
        }))
        .unwrap(),
    )
}

fn assert_chained(path: &[PathStep]) {
    for pair in path.windows(2) {
        assert_eq!(pair[0].to, pair[1].from, "steps must chain");
    }
}

fn assert_duration_is_raw_weight_sum(path: &[PathStep], total: f64) {
    let weight_sum: f64 = path.iter().map(|step| step.weight).sum();
    assert!((total - weight_sum).abs() < 1e-9);
}

#[test]
fn fastest_route_prefers_the_single_change() {
    let network = fixture_network();
    let path = find_path(
        &network,
        &RoutePoint::stop("A"),
        &RoutePoint::stop("D"),
        &RoutingOptions::default(),
    )
    .unwrap();

    // Bus 10 then bus 30 at B beats riding round through C and beats the
    // double-scored walk.
    let services: Vec<&str> = path.steps.iter().map(|s| s.service.as_str()).collect();
    assert_eq!(services, vec!["10", "30"]);
    assert_eq!(path.total_duration, 240.0);
    assert_chained(&path.steps);
    assert_eq!(path.steps[0].from, "A");
    assert_eq!(path.steps.last().unwrap().to, "D");
    assert_duration_is_raw_weight_sum(&path.steps, path.total_duration);

    let legs = compact_legs(&network, &path.steps);
    assert_eq!(legs.len(), 2);
    assert_eq!(legs[0].start_stop_name, "Ang Mo Kio Int");
    assert_eq!(legs[1].end_stop_name, "Dhoby Ghaut");
    let leg_total: f64 = legs.iter().map(|leg| leg.duration).sum();
    assert_eq!(leg_total, 240.0);
    let stop_total: usize = legs.iter().map(|leg| leg.stop_count).sum();
    assert_eq!(stop_total, path.steps.len());
}

#[test]
fn alternative_that_repeats_the_fastest_route_is_dropped() {
    // Both searches settle on 10 -> 30: one candidate, not two copies.
    let network = fixture_network();
    let candidates = find_route_candidates(
        &network,
        &RoutePoint::stop("A"),
        &RoutePoint::stop("D"),
        ExcludedModes::none(),
    )
    .unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id, "fastest");
}

#[test]
fn direct_route_penalty_never_adds_transfers() {
    let network = fixture_network();
    let routes = plan_routes(
        &network,
        &RoutePoint::stop("A"),
        &RoutePoint::stop("D"),
        ExcludedModes::none(),
        SortOption::Fastest,
    )
    .unwrap();

    let fastest = routes.iter().find(|r| r.id == "fastest").unwrap();
    for route in &routes {
        if route.id == "direct" {
            assert!(route.transfer_count() <= fastest.transfer_count());
        }
    }
}

#[test]
fn excluding_buses_leaves_the_walking_route() {
    let network = fixture_network();
    let routes = plan_routes(
        &network,
        &RoutePoint::stop("A"),
        &RoutePoint::stop("D"),
        ExcludedModes::none().exclude(TransitKind::Bus),
        SortOption::Fastest,
    )
    .unwrap();

    assert_eq!(routes.len(), 1);
    let route = &routes[0];
    assert_eq!(route.total_duration, 600.0);
    assert_eq!(route.legs.len(), 1);
    assert_eq!(route.legs[0].kind, TransitKind::Walk);
    assert_eq!(route.legs[0].stop_count, 1);
    assert!(
        route
            .path
            .iter()
            .all(|step| step.kind == TransitKind::Walk),
        "no excluded mode may appear in the result"
    );
}

#[test]
fn unknown_destination_is_reported() {
    let network = fixture_network();
    match find_path(
        &network,
        &RoutePoint::stop("A"),
        &RoutePoint::stop("Z"),
        &RoutingOptions::default(),
    ) {
        Err(Error::UnknownDestinationNode(id)) => assert_eq!(id, "Z"),
        other => panic!("expected UnknownDestinationNode, got {other:?}"),
    }
}

#[test]
fn coordinates_on_stops_match_the_stop_query_plus_walk_legs() {
    let network = fixture_network();
    let path = find_path(
        &network,
        &RoutePoint::coord(1.280, 103.840),
        &RoutePoint::coord(1.340, 103.900),
        &RoutingOptions::default(),
    )
    .unwrap();

    let services: Vec<&str> = path.steps.iter().map(|s| s.service.as_str()).collect();
    assert_eq!(services, vec!["Start", "10", "30", "End"]);
    assert_eq!(path.steps[0].from, ORIGIN_DISPLAY_NAME);
    assert_eq!(path.steps.last().unwrap().to, DESTINATION_DISPLAY_NAME);
    assert!(path.steps[0].weight < 1.0);
    assert!(path.steps.last().unwrap().weight < 1.0);
    assert!((path.total_duration - 240.0).abs() < 1.0);
    assert_chained(&path.steps);
    assert_duration_is_raw_weight_sum(&path.steps, path.total_duration);

    // The walk stubs have no coordinates of their own, so the drawn route
    // still starts at A and stays gap-free.
    let segments = build_segments(&network, &path.steps);
    assert_eq!(segments.len(), 2);
    for pair in segments.windows(2) {
        assert_eq!(
            pair[0].positions.last(),
            pair[1].positions.first(),
            "segment continuity"
        );
    }
}

#[test]
fn excluding_buses_without_a_walking_link_finds_nothing() {
    let network = build_network(
        serde_json::from_value(serde_json::json!({
            "A": {"B": [{"service": "10", "distance": 2.0, "weight": 60}]},
            "B": {"D": [{"service": "30", "distance": 3.0, "weight": 180}]}
        }))
        .unwrap(),
        serde_json::from_value(serde_json::json!({})).unwrap(),
    );

    match find_path(
        &network,
        &RoutePoint::stop("A"),
        &RoutePoint::stop("D"),
        &RoutingOptions {
            excluded_modes: ExcludedModes::none().exclude(TransitKind::Bus),
            ..RoutingOptions::default()
        },
    ) {
        Err(Error::NoPathFound) => {}
        other => panic!("expected NoPathFound, got {other:?}"),
    }
}

#[test]
fn one_seat_alternative_appears_when_it_genuinely_differs() {
    // Bus 100 covers the whole corridor slowly; hopping onto 8 at B is
    // faster but costs a change. The alternative search keeps the seat.
    let network = build_network(
        serde_json::from_value(serde_json::json!({
            "A": {"B": [{"service": "100", "distance": 2.0, "weight": 100}]},
            "B": {"C": [
                {"service": "100", "distance": 2.0, "weight": 400},
                {"service": "8", "distance": 2.0, "weight": 50}
            ]}
        }))
        .unwrap(),
        serde_json::from_value(serde_json::json!({})).unwrap(),
    );

    let routes = plan_routes(
        &network,
        &RoutePoint::stop("A"),
        &RoutePoint::stop("C"),
        ExcludedModes::none(),
        SortOption::LessTransfers,
    )
    .unwrap();

    assert_eq!(routes.len(), 2);
    // Ranked by transfers: the one-seat ride first despite being slower
    assert_eq!(routes[0].id, "direct");
    assert_eq!(routes[0].transfer_count(), 0);
    assert_eq!(routes[0].total_duration, 500.0);
    assert_eq!(routes[1].id, "fastest");
    assert_eq!(routes[1].transfer_count(), 1);
    assert_eq!(routes[1].total_duration, 150.0);

    // Weak monotonicity: the penalty never buys extra changes
    assert!(routes[0].transfer_count() <= routes[1].transfer_count());
}

#[test]
fn ranking_by_walking_distance_prefers_the_ride() {
    let network = fixture_network();
    let mut routes = plan_routes(
        &network,
        &RoutePoint::stop("A"),
        &RoutePoint::stop("D"),
        ExcludedModes::none(),
        SortOption::Fastest,
    )
    .unwrap();

    // Stitch in the pure-walk itinerary as a second option, then re-rank.
    let walk = find_path(
        &network,
        &RoutePoint::stop("A"),
        &RoutePoint::stop("D"),
        &RoutingOptions {
            excluded_modes: ExcludedModes::none().exclude(TransitKind::Bus),
            ..RoutingOptions::default()
        },
    )
    .unwrap();
    routes.push(RouteItinerary::from_candidate(
        &network,
        RouteCandidate {
            id: "walk".to_string(),
            label: "Walk".to_string(),
            total_duration: walk.total_duration,
            path: walk.steps,
        },
    ));

    rank_routes(&mut routes, SortOption::LessWalking);
    assert_eq!(routes[0].id, "fastest", "no walking beats 0.8 km of it");
    assert!(routes[0].walking_distance() < routes.last().unwrap().walking_distance());
}
