//! Unit tests for frt-net.
//!
//! All tests use hand-crafted networks with controlled durations so every
//! expected route is asserted deterministically.

#[cfg(test)]
mod helpers {
    use frt_core::NodeId;

    use crate::RailNetwork;

    /// The reference line network: A —E1(30)— B —E2(10)— C.
    pub fn line_network() -> (RailNetwork, [NodeId; 3]) {
        let mut net = RailNetwork::new();
        let a = net.add_node("A").unwrap();
        let b = net.add_node("B").unwrap();
        let c = net.add_node("C").unwrap();
        net.link("E1", a, b, 30).unwrap();
        net.link("E2", b, c, 10).unwrap();
        (net, [a, b, c])
    }

    /// Line network plus a direct A—C shortcut:
    /// A—B 30, B—C 10, A—C 5.  Shortest A→C is the shortcut (5), not the
    /// two-hop path (40).
    pub fn triangle_network() -> (RailNetwork, [NodeId; 3]) {
        let (mut net, nodes) = line_network();
        net.link("E3", nodes[0], nodes[2], 5).unwrap();
        (net, nodes)
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod building {
    use frt_core::NodeId;

    use crate::{NetError, RailNetwork};

    #[test]
    fn empty_network() {
        let net = RailNetwork::new();
        assert!(net.is_empty());
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert_eq!(net.link_count(), 0);
    }

    #[test]
    fn sequential_node_ids_and_lookup() {
        let (net, [a, b, c]) = super::helpers::line_network();
        assert_eq!((a, b, c), (NodeId(0), NodeId(1), NodeId(2)));
        assert_eq!(net.node_by_name("B"), Some(b));
        assert_eq!(net.node_by_name("Z"), None);
        assert_eq!(net.node_name(c), "C");
    }

    #[test]
    fn duplicate_node_rejected_without_mutation() {
        let (mut net, [a, ..]) = super::helpers::line_network();
        let before = net.node_count();
        let err = net.add_node("A").unwrap_err();
        assert!(matches!(err, NetError::DuplicateNode(ref n) if n == "A"));
        assert_eq!(net.node_count(), before);
        assert_eq!(net.node_by_name("A"), Some(a));
    }

    #[test]
    fn link_inserts_symmetric_adjacency() {
        let (net, [a, b, _]) = super::helpers::line_network();
        // E1 contributes one outgoing edge to each endpoint.
        let a_to_b = net.out_edges(a).find(|&e| net.edge_to(e) == b).unwrap();
        let b_to_a = net.out_edges(b).find(|&e| net.edge_to(e) == a).unwrap();
        assert_eq!(net.edge_duration(a_to_b).minutes(), 30);
        assert_eq!(net.edge_duration(b_to_a).minutes(), 30);
        // Both directions belong to the same link record.
        assert_eq!(net.edge_link(a_to_b), net.edge_link(b_to_a));
        assert_eq!(net.link_name(net.edge_link(a_to_b)), "E1");
    }

    #[test]
    fn link_counts() {
        let (net, [a, b, c]) = super::helpers::line_network();
        assert_eq!(net.link_count(), 2);
        assert_eq!(net.edge_count(), 4); // two directed edges per link
        assert_eq!(net.out_degree(b), 2); // B touches both links
        assert_eq!(net.out_degree(a), 1);
        assert_eq!(net.out_degree(c), 1);
    }

    #[test]
    fn duplicate_link_rejected_without_mutation() {
        let (mut net, [a, _, c]) = super::helpers::line_network();
        let (edges, links) = (net.edge_count(), net.link_count());
        let deg_a = net.out_degree(a);

        let err = net.link("E1", a, c, 99).unwrap_err();
        assert!(matches!(err, NetError::DuplicateEdge(ref n) if n == "E1"));
        assert_eq!(net.edge_count(), edges);
        assert_eq!(net.link_count(), links);
        assert_eq!(net.out_degree(a), deg_a);
    }

    #[test]
    fn negative_duration_rejected_without_mutation() {
        let (mut net, [a, _, c]) = super::helpers::line_network();
        let edges = net.edge_count();

        let err = net.link("E9", a, c, -1).unwrap_err();
        assert!(matches!(err, NetError::InvalidDuration { minutes: -1, .. }));
        assert_eq!(net.edge_count(), edges);
        assert_eq!(net.link_by_name("E9"), None);
    }

    #[test]
    fn zero_duration_allowed() {
        let (mut net, [a, _, c]) = super::helpers::line_network();
        assert!(net.link("E0", a, c, 0).is_ok());
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let (mut net, [a, ..]) = super::helpers::line_network();
        let err = net.link("E9", a, NodeId(99), 5).unwrap_err();
        assert!(matches!(err, NetError::UnknownNode(NodeId(99))));
        assert_eq!(net.link_by_name("E9"), None);
    }

    #[test]
    fn link_record_fields() {
        let (net, [a, b, _]) = super::helpers::line_network();
        let e1 = net.link_by_name("E1").unwrap();
        assert_eq!(net.link_endpoints(e1), (a, b));
        assert_eq!(net.link_duration(e1).minutes(), 30);
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use frt_core::NodeId;

    use crate::{DijkstraRouter, NetError, RailNetwork, Router};

    #[test]
    fn trivial_same_node() {
        let (net, [a, ..]) = super::helpers::line_network();
        let route = DijkstraRouter.route(&net, a, a).unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.total.minutes(), 0);
        assert_eq!(route.node_sequence(&net), vec![a]);
    }

    #[test]
    fn two_hop_route() {
        let (net, [a, b, c]) = super::helpers::line_network();
        let route = DijkstraRouter.route(&net, a, c).unwrap();
        assert_eq!(route.total.minutes(), 40);
        assert_eq!(route.hops(), 2);
        assert_eq!(route.node_sequence(&net), vec![a, b, c]);
    }

    #[test]
    fn direct_shortcut_wins() {
        let (net, [a, _, c]) = super::helpers::triangle_network();
        let route = DijkstraRouter.route(&net, a, c).unwrap();
        // 5 via the direct link, not 40 via B.
        assert_eq!(route.total.minutes(), 5);
        assert_eq!(route.hops(), 1);
    }

    #[test]
    fn relaxation_improves_first_discovery() {
        // A—B 10, A—C 1, C—B 2.  B is first discovered from A at 10 but the
        // detour through C costs 3; proper relaxation must keep the minimum.
        let mut net = RailNetwork::new();
        let a = net.add_node("A").unwrap();
        let b = net.add_node("B").unwrap();
        let c = net.add_node("C").unwrap();
        net.link("AB", a, b, 10).unwrap();
        net.link("AC", a, c, 1).unwrap();
        net.link("CB", c, b, 2).unwrap();

        let route = DijkstraRouter.route(&net, a, b).unwrap();
        assert_eq!(route.total.minutes(), 3);
        assert_eq!(route.node_sequence(&net), vec![a, c, b]);
    }

    #[test]
    fn symmetric_cost_both_directions() {
        let (net, [a, _, c]) = super::helpers::line_network();
        let forward = DijkstraRouter.route(&net, a, c).unwrap();
        let back = DijkstraRouter.route(&net, c, a).unwrap();
        assert_eq!(forward.total, back.total);
    }

    #[test]
    fn unreachable_destination() {
        let (mut net, [a, ..]) = super::helpers::line_network();
        let island = net.add_node("X").unwrap();
        let result = DijkstraRouter.route(&net, a, island);
        assert!(matches!(
            result,
            Err(NetError::Unreachable { to, .. }) if to == island
        ));
    }

    #[test]
    fn empty_network_rejected() {
        let net = RailNetwork::new();
        let result = DijkstraRouter.route(&net, NodeId(0), NodeId(0));
        assert!(matches!(result, Err(NetError::EmptyNetwork)));
    }

    #[test]
    fn unknown_origin_rejected() {
        let (net, _) = super::helpers::line_network();
        let result = DijkstraRouter.route(&net, NodeId(99), NodeId(0));
        assert!(matches!(result, Err(NetError::UnknownNode(NodeId(99)))));
    }

    #[test]
    fn equal_cost_tie_breaks_by_insertion_order() {
        // Two disjoint equal-cost paths A→B: via X (added first) and via Y.
        // The NodeId secondary heap key finalizes X before Y, so the route
        // must go through X on every run.
        let mut net = RailNetwork::new();
        let a = net.add_node("A").unwrap();
        let x = net.add_node("X").unwrap();
        let y = net.add_node("Y").unwrap();
        let b = net.add_node("B").unwrap();
        net.link("AX", a, x, 5).unwrap();
        net.link("AY", a, y, 5).unwrap();
        net.link("XB", x, b, 5).unwrap();
        net.link("YB", y, b, 5).unwrap();

        for _ in 0..3 {
            let route = DijkstraRouter.route(&net, a, b).unwrap();
            assert_eq!(route.total.minutes(), 10);
            assert_eq!(route.node_sequence(&net), vec![a, x, b]);
        }
    }
}

// ── Search state ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod search_state {
    use crate::{DijkstraRouter, NetError, Router, SearchState};

    #[test]
    fn one_search_serves_every_target() {
        let (net, [a, b, c]) = super::helpers::triangle_network();
        let mut state = SearchState::new();
        DijkstraRouter.search(&net, a, &mut state).unwrap();

        assert_eq!(state.origin(), a);
        assert_eq!(state.distance_to(a).unwrap().minutes(), 0);
        assert_eq!(state.distance_to(b).unwrap().minutes(), 15); // via C
        assert_eq!(state.distance_to(c).unwrap().minutes(), 5);

        let to_b = state.route_to(&net, b).unwrap();
        let to_c = state.route_to(&net, c).unwrap();
        assert_eq!(to_b.node_sequence(&net), vec![a, c, b]);
        assert_eq!(to_c.node_sequence(&net), vec![a, c]);
    }

    #[test]
    fn visited_in_ascending_distance_order() {
        let (net, [a, b, c]) = super::helpers::line_network();
        let mut state = SearchState::new();
        DijkstraRouter.search(&net, b, &mut state).unwrap();
        // From B: B (0), C (10), A (30).
        assert_eq!(state.visited(), &[b, c, a]);
    }

    #[test]
    fn rerun_is_independent_of_previous_search() {
        let (net, [a, _, c]) = super::helpers::line_network();
        let mut state = SearchState::new();

        DijkstraRouter.search(&net, a, &mut state).unwrap();
        let from_a = state.distance_to(c).unwrap();

        DijkstraRouter.search(&net, c, &mut state).unwrap();
        assert_eq!(state.origin(), c);
        assert_eq!(state.distance_to(c).unwrap().minutes(), 0);
        // Same topology searched the other way: same total, fresh scratch.
        assert_eq!(state.distance_to(a).unwrap(), from_a);
    }

    #[test]
    fn clear_is_idempotent() {
        let (net, [a, _, c]) = super::helpers::line_network();
        let mut state = SearchState::new();
        DijkstraRouter.search(&net, a, &mut state).unwrap();
        assert!(!state.is_cleared());

        state.clear();
        assert!(state.is_cleared());
        state.clear();
        assert!(state.is_cleared());

        // A cleared state answers nothing.
        assert!(state.distance_to(c).is_none());
        assert!(matches!(
            state.route_to(&net, c),
            Err(NetError::Unreachable { .. })
        ));
    }
}
