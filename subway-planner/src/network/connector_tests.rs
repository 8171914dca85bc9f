//! Unit tests for the route connection search.

use super::*;
use crate::domain::{RouteKind, Stop, StopId};

fn route(id: &str, name: &str, kind: RouteKind, stops: &[&str]) -> Route {
    let stops = stops
        .iter()
        .map(|name| {
            let id = format!("place-{}", name.to_lowercase().replace([' ', '/'], "-"));
            Stop::new(StopId::parse(&id).unwrap(), *name)
        })
        .collect();
    Route::new(RouteId::parse(id).unwrap(), name, kind, stops)
}

/// A cut-down MBTA subway, plus one line that touches nothing else.
fn routes() -> Vec<Route> {
    vec![
        route(
            "Red",
            "Red Line",
            RouteKind::HeavyRail,
            &[
                "Alewife",
                "Harvard",
                "Kendall/MIT",
                "Park Street",
                "Downtown Crossing",
                "South Station",
                "JFK/UMass",
                "Ashmont",
            ],
        ),
        route(
            "Mattapan",
            "Mattapan Trolley",
            RouteKind::LightRail,
            &["Ashmont", "Mattapan"],
        ),
        route(
            "Orange",
            "Orange Line",
            RouteKind::HeavyRail,
            &["Oak Grove", "State", "Downtown Crossing", "Back Bay", "Forest Hills"],
        ),
        route(
            "Blue",
            "Blue Line",
            RouteKind::HeavyRail,
            &["Wonderland", "Airport", "State", "Government Center", "Bowdoin"],
        ),
        route(
            "Green-B",
            "Green Line B",
            RouteKind::LightRail,
            &[
                "Boston College",
                "Kenmore",
                "Copley",
                "Arlington",
                "Boylston",
                "Park Street",
                "Government Center",
            ],
        ),
        route(
            "Green-E",
            "Green Line E",
            RouteKind::LightRail,
            &["Heath Street", "Copley", "Arlington", "Park Street", "Government Center"],
        ),
        route(
            "Shuttle",
            "Isolated Shuttle",
            RouteKind::LightRail,
            &["Somewhere", "Elsewhere"],
        ),
    ]
}

fn names(chain: &[Arc<Route>]) -> Vec<&str> {
    chain.iter().map(|r| r.name.as_str()).collect()
}

/// Build the table and index, then run `f` with a connector over them.
fn with_connector<T>(routes: Vec<Route>, f: impl FnOnce(RouteConnector<'_>) -> T) -> T {
    let table = RouteStopTable::new(routes).unwrap();
    let index = ConnectivityIndex::build(&table);
    f(RouteConnector::new(&table, &index))
}

// ============================================================================
// connect
// ============================================================================

#[test]
fn red_and_green_meet_at_park_street() {
    let routes = vec![
        route(
            "Red",
            "Red Line",
            RouteKind::HeavyRail,
            &["Ashmont", "JFK/UMass", "Park Street"],
        ),
        route(
            "Green-B",
            "Green Line",
            RouteKind::LightRail,
            &["Arlington", "Park Street", "Government Center"],
        ),
    ];

    let chain = with_connector(routes, |c| c.connect("Ashmont", "Arlington")).unwrap();
    assert_eq!(names(&chain), vec!["Red Line", "Green Line"]);
}

#[test]
fn greedy_chain_accumulates_transfers() {
    // Expanding Ashmont reaches Downtown Crossing and Park Street on the Red
    // Line; Downtown Crossing adds the Orange Line on the way to State before
    // Park Street is expanded and reaches Arlington.
    let chain = with_connector(routes(), |c| c.connect("Ashmont", "Arlington")).unwrap();
    assert_eq!(names(&chain), vec!["Red Line", "Orange Line", "Green Line B"]);
}

#[test]
fn shared_route_gives_single_route() {
    let chain =
        with_connector(routes(), |c| c.connect("Park Street", "Government Center")).unwrap();
    // Green Line B and E both serve the pair; B sorts first.
    assert_eq!(names(&chain), vec!["Green Line B"]);
}

#[test]
fn same_stop_gives_its_route() {
    let chain = with_connector(routes(), |c| c.connect("Kendall/MIT", "Kendall/MIT")).unwrap();
    assert_eq!(names(&chain), vec!["Red Line"]);

    // Ashmont is on two routes; the first in name order wins.
    let chain = with_connector(routes(), |c| c.connect("Ashmont", "Ashmont")).unwrap();
    assert_eq!(names(&chain), vec!["Mattapan Trolley"]);
}

#[test]
fn unknown_origin() {
    let result = with_connector(routes(), |c| c.connect("Hogwarts", "Ashmont"));
    assert_eq!(result, Err(ConnectError::UnknownStop("Hogwarts".into())));
}

#[test]
fn unknown_destination() {
    let result = with_connector(routes(), |c| c.connect("Ashmont", "Hogwarts"));
    assert_eq!(result, Err(ConnectError::UnknownStop("Hogwarts".into())));
}

#[test]
fn disconnected_stops_not_found() {
    let result = with_connector(routes(), |c| c.connect("Ashmont", "Somewhere"));
    assert_eq!(
        result,
        Err(ConnectError::NoRoute {
            from: "Ashmont".into(),
            to: "Somewhere".into(),
        })
    );
}

#[test]
fn three_line_journey() {
    let chain = with_connector(routes(), |c| c.connect("Alewife", "Wonderland")).unwrap();

    assert_eq!(chain.first().unwrap().name, "Red Line");
    assert_eq!(chain.last().unwrap().name, "Blue Line");
    assert!(chain.last().unwrap().serves("Wonderland"));
    assert!(names(&chain).contains(&"Orange Line"));
}

#[test]
fn result_independent_of_load_order() {
    let forward = with_connector(routes(), |c| c.connect("Alewife", "Wonderland")).unwrap();

    let mut reversed_routes = routes();
    reversed_routes.reverse();
    let reversed = with_connector(reversed_routes, |c| c.connect("Alewife", "Wonderland")).unwrap();

    assert_eq!(names(&forward), names(&reversed));
}

#[test]
fn repeated_queries_agree() {
    let table = RouteStopTable::new(routes()).unwrap();
    let index = ConnectivityIndex::build(&table);
    let connector = RouteConnector::new(&table, &index);

    let first = connector.connect("Heath Street", "Oak Grove").unwrap();
    for _ in 0..10 {
        assert_eq!(connector.connect("Heath Street", "Oak Grove").unwrap(), first);
    }
}

#[test]
fn chain_routes_are_distinct() {
    let chain = with_connector(routes(), |c| c.connect("Alewife", "Wonderland")).unwrap();
    let unique: HashSet<&RouteId> = chain.iter().map(|r| &r.id).collect();
    assert_eq!(unique.len(), chain.len());
}

/// A route whose stops are given as `(id, name)` pairs, for fixtures where
/// distinct stops share a display name.
fn route_with_ids(id: &str, stops: &[(&str, &str)]) -> Route {
    let stops = stops
        .iter()
        .map(|(id, name)| Stop::new(StopId::parse(id).unwrap(), *name))
        .collect();
    Route::new(RouteId::parse(id).unwrap(), id, RouteKind::LightRail, stops)
}

#[test]
fn same_named_stops_are_not_merged() {
    // Two distinct "T" stops; A and D never meet.
    let routes = || {
        vec![
            route_with_ids("A", &[("a", "a"), ("t1", "T")]),
            route_with_ids("B", &[("t1", "T"), ("b", "b")]),
            route_with_ids("D", &[("t2", "T"), ("d", "d")]),
        ]
    };

    let expected = Err(ConnectError::NoRoute {
        from: "a".into(),
        to: "d".into(),
    });
    assert_eq!(with_connector(routes(), |c| c.connect("a", "d")), expected);
    assert_eq!(with_connector(routes(), |c| c.shortest_chain("a", "d")), expected);
}

#[test]
fn same_named_stops_are_each_a_transfer() {
    // A reaches D only by riding B and E between the two "T" stops.
    let routes = || {
        vec![
            route_with_ids("A", &[("a", "a"), ("t1", "T")]),
            route_with_ids("B", &[("t1", "T"), ("b", "b")]),
            route_with_ids("E", &[("t2", "T"), ("b", "b")]),
            route_with_ids("D", &[("t2", "T"), ("d", "d")]),
        ]
    };

    let greedy = with_connector(routes(), |c| c.connect("a", "d")).unwrap();
    assert_eq!(names(&greedy), vec!["A", "B", "E", "D"]);

    let shortest = with_connector(routes(), |c| c.shortest_chain("a", "d")).unwrap();
    assert_eq!(names(&shortest), vec!["A", "B", "E", "D"]);
}

#[test]
fn same_named_stops_resolve_together_at_endpoints() {
    // By name, "T" is on A and D, so both routes start the search.
    let routes = vec![
        route_with_ids("A", &[("a", "a"), ("t1", "T")]),
        route_with_ids("D", &[("t2", "T"), ("d", "d")]),
    ];

    let chain = with_connector(routes, |c| c.connect("T", "d")).unwrap();
    assert_eq!(names(&chain), vec!["D"]);
}

// ============================================================================
// shortest_chain
// ============================================================================

#[test]
fn shortest_skips_detours() {
    let chain = with_connector(routes(), |c| c.shortest_chain("Ashmont", "Arlington")).unwrap();
    assert_eq!(names(&chain), vec!["Red Line", "Green Line B"]);
}

#[test]
fn shortest_three_line_journey() {
    let chain =
        with_connector(routes(), |c| c.shortest_chain("Alewife", "Wonderland")).unwrap();
    // Red -> Orange -> Blue is just as short; Green Line B is expanded first.
    assert_eq!(names(&chain), vec!["Red Line", "Green Line B", "Blue Line"]);
}

#[test]
fn shortest_shared_route() {
    let chain =
        with_connector(routes(), |c| c.shortest_chain("Park Street", "Government Center"))
            .unwrap();
    assert_eq!(names(&chain), vec!["Green Line B"]);
}

#[test]
fn shortest_errors_match_connect() {
    with_connector(routes(), |c| {
        assert_eq!(
            c.shortest_chain("Hogwarts", "Ashmont"),
            Err(ConnectError::UnknownStop("Hogwarts".into()))
        );
        assert!(matches!(
            c.shortest_chain("Ashmont", "Elsewhere"),
            Err(ConnectError::NoRoute { .. })
        ));
    });
}

// ============================================================================
// Properties
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Up to eight routes over a pool of twelve stop names.
    fn arb_routes() -> impl Strategy<Value = Vec<Route>> {
        prop::collection::vec(prop::collection::btree_set(0u8..12, 1..5), 1..8).prop_map(
            |routes| {
                routes
                    .into_iter()
                    .enumerate()
                    .map(|(i, stops)| {
                        Route::new(
                            RouteId::parse(&format!("R{i}")).unwrap(),
                            format!("Route {i}"),
                            RouteKind::HeavyRail,
                            stops
                                .into_iter()
                                .map(|s| {
                                    Stop::new(StopId::parse(&format!("s{s}")).unwrap(), format!("Stop {s}"))
                                })
                                .collect(),
                        )
                    })
                    .collect()
            },
        )
    }

    proptest! {
        /// Greedy search succeeds exactly when some chain exists, and its
        /// last route serves the destination
        #[test]
        fn connect_finds_reachable(routes in arb_routes(), a in 0u8..12, b in 0u8..12) {
            let from = format!("Stop {a}");
            let to = format!("Stop {b}");

            with_connector(routes, |c| {
                let greedy = c.connect(&from, &to);
                let shortest = c.shortest_chain(&from, &to);

                match (&greedy, &shortest) {
                    (Ok(chain), Ok(short)) => {
                        prop_assert!(chain.last().unwrap().serves(&to));
                        prop_assert!(short.last().unwrap().serves(&to));
                        prop_assert!(short.first().unwrap().serves(&from));
                        prop_assert!(short.len() <= chain.len());
                    }
                    (Err(e1), Err(e2)) => prop_assert_eq!(e1, e2),
                    _ => prop_assert!(false, "greedy {:?} vs shortest {:?}", greedy, shortest),
                }
                Ok(())
            })?;
        }

        /// Shared-route queries always answer with one route
        #[test]
        fn same_stop_single_route(routes in arb_routes(), a in 0u8..12) {
            let stop = format!("Stop {a}");
            with_connector(routes, |c| {
                if let Ok(chain) = c.connect(&stop, &stop) {
                    prop_assert_eq!(chain.len(), 1);
                    prop_assert!(chain[0].serves(&stop));
                }
                Ok(())
            })?;
        }
    }
}
