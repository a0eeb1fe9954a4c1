//! Path counting between devices, with optional mandatory waypoints
//!
//! Two counters share the same contract: counts are exact u128 values
//! and a cyclic graph is an error, while a missing source, sink or
//! waypoint simply means zero paths. `count_paths` enumerates by
//! depth-first search and is fine for small graphs; `count_paths_through`
//! runs a dynamic program over the topological order with a visitation
//! bitmask and stays polynomial even when the raw path count is
//! astronomical.

use std::collections::{HashMap, HashSet};

use crate::error::AocError;
use crate::graph::DeviceGraph;

/// Each waypoint costs one bit of DP state, so the table grows as 2^k
pub const MAX_WAYPOINTS: usize = 16;

impl DeviceGraph {
    /// Count distinct paths from `source` to `sink` by exhaustive DFS.
    ///
    /// Runtime is proportional to the number of paths. Returns 0 when
    /// either endpoint is missing, and fails when the graph has a cycle.
    pub fn count_paths(&self, source: &str, sink: &str) -> Result<u128, AocError> {
        self.topological_order()?;
        if !self.contains(source) || !self.contains(sink) {
            return Ok(0);
        }
        self.dfs_count(source, sink)
    }

    fn dfs_count(&self, current: &str, sink: &str) -> Result<u128, AocError> {
        if current == sink {
            return Ok(1);
        }
        let mut total: u128 = 0;
        for next in self.successors(current) {
            let below = self.dfs_count(next, sink)?;
            total = total.checked_add(below).ok_or(AocError::CountOverflow)?;
        }
        Ok(total)
    }

    /// Count distinct paths from `source` to `sink` that visit every
    /// device in `waypoints` (in any order, each at least once).
    ///
    /// Dynamic program over the topological order: each device keeps one
    /// count per subset of waypoints already visited, and an edge moves a
    /// count into the subset extended by the target's waypoint bit (if
    /// any). The answer is the sink's count for the full subset. With no
    /// waypoints this degenerates to plain path counting.
    pub fn count_paths_through(
        &self,
        source: &str,
        sink: &str,
        waypoints: &[&str],
    ) -> Result<u128, AocError> {
        // Dedup first so a repeated name costs one bit, not two
        let mut seen: HashSet<&str> = HashSet::new();
        let required: Vec<&str> = waypoints
            .iter()
            .copied()
            .filter(|w| seen.insert(w))
            .collect();

        if required.len() > MAX_WAYPOINTS {
            return Err(AocError::TooManyWaypoints {
                count: required.len(),
                limit: MAX_WAYPOINTS,
            });
        }

        let order = self.topological_order()?;
        if !self.contains(source) || !self.contains(sink) {
            return Ok(0);
        }

        let full_mask: usize = (1 << required.len()) - 1;
        let bit_of = |device: &str| -> usize {
            required
                .iter()
                .position(|w| *w == device)
                .map(|i| 1 << i)
                .unwrap_or(0)
        };

        // counts[device][mask] = paths from source to device having
        // visited exactly the waypoints in mask
        let mut counts: HashMap<&str, Vec<u128>> = HashMap::with_capacity(self.node_count());
        for node in self.nodes() {
            counts.insert(node.as_ref(), vec![0; full_mask + 1]);
        }
        if let Some(start) = counts.get_mut(source) {
            // The source itself may be a waypoint; it starts visited
            start[bit_of(source)] = 1;
        }

        for node in &order {
            let snapshot = match counts.get(node.as_ref()) {
                Some(masks) if masks.iter().any(|&c| c > 0) => masks.clone(),
                _ => continue,
            };
            for next in self.successors(node) {
                let bit = bit_of(next);
                if let Some(target) = counts.get_mut(next.as_ref()) {
                    for (mask, &count) in snapshot.iter().enumerate() {
                        if count > 0 {
                            let entry = &mut target[mask | bit];
                            *entry = entry.checked_add(count).ok_or(AocError::CountOverflow)?;
                        }
                    }
                }
            }
        }

        Ok(counts.get(sink).map(|masks| masks[full_mask]).unwrap_or(0))
    }
}

/// Chain of `n` diamonds: d0 splits, rejoins at d1, splits again, and so
/// on. Exactly 2^n paths end to end, which makes overflow tests cheap.
#[cfg(test)]
fn diamond_chain(n: usize) -> (DeviceGraph, String, String) {
    let mut edges: Vec<(String, String)> = Vec::new();
    for i in 0..n {
        let join = format!("d{}", i + 1);
        for arm in ["a", "b"] {
            let mid = format!("{arm}{i}");
            edges.push((format!("d{i}"), mid.clone()));
            edges.push((mid, join.clone()));
        }
    }
    let graph = DeviceGraph::from_edges(edges.iter().map(|(s, t)| (s.as_str(), t.as_str())));
    (graph, "d0".to_string(), format!("d{n}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// svr fans out twice, once through fft and once through dac
    const REACTOR: &str = "\
svr: aaa bbb
aaa: fft
fft: ccc
bbb: tty
tty: ccc
ccc: ddd eee
ddd: hub
hub: fff
eee: dac
dac: fff
fff: ggg hhh
ggg: out
hhh: out";

    fn triangle() -> DeviceGraph {
        DeviceGraph::from_edges([("a", "b"), ("b", "c"), ("a", "c")])
    }

    #[test]
    fn counts_both_routes_of_a_triangle() {
        let graph = triangle();
        assert_eq!(graph.count_paths("a", "c").unwrap(), 2);
    }

    #[test]
    fn single_waypoint_keeps_only_routes_through_it() {
        let graph = triangle();
        assert_eq!(graph.count_paths_through("a", "c", &["b"]).unwrap(), 1);
    }

    #[test]
    fn sink_may_itself_be_a_waypoint() {
        let graph = triangle();
        assert_eq!(graph.count_paths_through("a", "c", &["b", "c"]).unwrap(), 1);
    }

    #[test]
    fn source_waypoint_starts_visited() {
        let graph = triangle();
        assert_eq!(graph.count_paths_through("a", "c", &["a"]).unwrap(), 2);
    }

    #[test]
    fn cycle_fails_even_when_no_path_reaches_it() {
        // The a -> b route never touches the c/d loop; it still counts
        // as a broken graph
        let graph = DeviceGraph::from_edges([("a", "b"), ("c", "d"), ("d", "c")]);
        assert!(matches!(
            graph.count_paths("a", "b"),
            Err(AocError::CycleDetected { .. })
        ));
        assert!(matches!(
            graph.count_paths_through("a", "b", &[]),
            Err(AocError::CycleDetected { .. })
        ));
    }

    #[test]
    fn missing_endpoints_count_zero() {
        let graph = triangle();
        assert_eq!(graph.count_paths("zzz", "c").unwrap(), 0);
        assert_eq!(graph.count_paths("a", "zzz").unwrap(), 0);
        assert_eq!(graph.count_paths_through("zzz", "c", &["b"]).unwrap(), 0);
    }

    #[test]
    fn missing_waypoint_counts_zero() {
        let graph = triangle();
        assert_eq!(graph.count_paths_through("a", "c", &["zzz"]).unwrap(), 0);
    }

    #[test]
    fn source_equal_to_sink_is_one_trivial_path() {
        let graph = triangle();
        assert_eq!(graph.count_paths("a", "a").unwrap(), 1);
        assert_eq!(graph.count_paths_through("a", "a", &[]).unwrap(), 1);
        assert_eq!(graph.count_paths_through("a", "a", &["a"]).unwrap(), 1);
        assert_eq!(graph.count_paths_through("a", "a", &["b"]).unwrap(), 0);
    }

    #[test]
    fn no_waypoints_agrees_with_plain_counting() {
        let graph = DeviceGraph::parse(REACTOR).unwrap();
        let plain = graph.count_paths("svr", "out").unwrap();
        let dp = graph.count_paths_through("svr", "out", &[]).unwrap();
        assert_eq!(plain, 8);
        assert_eq!(dp, plain);
    }

    #[test]
    fn adding_waypoints_never_increases_the_count() {
        let graph = DeviceGraph::parse(REACTOR).unwrap();
        let unconstrained = graph.count_paths_through("svr", "out", &[]).unwrap();
        let through_fft = graph.count_paths_through("svr", "out", &["fft"]).unwrap();
        let through_both = graph
            .count_paths_through("svr", "out", &["fft", "dac"])
            .unwrap();
        assert_eq!(unconstrained, 8);
        assert_eq!(through_fft, 4);
        assert_eq!(through_both, 2);
        assert!(through_fft <= unconstrained);
        assert!(through_both <= through_fft);
    }

    #[test]
    fn waypoint_order_and_duplicates_do_not_matter() {
        let graph = DeviceGraph::parse(REACTOR).unwrap();
        let forward = graph
            .count_paths_through("svr", "out", &["fft", "dac"])
            .unwrap();
        let backward = graph
            .count_paths_through("svr", "out", &["dac", "fft"])
            .unwrap();
        let repeated = graph
            .count_paths_through("svr", "out", &["fft", "fft", "dac"])
            .unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward, repeated);
    }

    #[test]
    fn repeated_queries_return_identical_counts() {
        let graph = DeviceGraph::parse(REACTOR).unwrap();
        let first = graph.count_paths_through("svr", "out", &["fft", "dac"]).unwrap();
        let second = graph.count_paths_through("svr", "out", &["fft", "dac"]).unwrap();
        assert_eq!(first, second);
        assert_eq!(graph.count_paths("svr", "out").unwrap(), 8);
    }

    #[test]
    fn unreachable_waypoint_counts_zero() {
        // e is a waypoint nothing on the a->c routes can reach
        let graph = DeviceGraph::from_edges([("a", "b"), ("b", "c"), ("a", "c"), ("d", "e")]);
        assert_eq!(graph.count_paths_through("a", "c", &["e"]).unwrap(), 0);
    }

    #[test]
    fn forty_eight_diamonds_are_counted_exactly() {
        let (graph, source, sink) = diamond_chain(48);
        let count = graph.count_paths_through(&source, &sink, &[]).unwrap();
        assert_eq!(count, 1u128 << 48);
    }

    #[test]
    fn diamond_waypoint_halves_the_count() {
        let (graph, source, sink) = diamond_chain(48);
        let count = graph.count_paths_through(&source, &sink, &["a7"]).unwrap();
        assert_eq!(count, 1u128 << 47);
    }

    #[test]
    fn overflowing_count_is_an_error_not_a_wrap() {
        let (graph, source, sink) = diamond_chain(130);
        assert!(matches!(
            graph.count_paths_through(&source, &sink, &[]),
            Err(AocError::CountOverflow)
        ));
    }

    #[test]
    fn waypoint_limit_is_enforced() {
        let graph = triangle();
        let names: Vec<String> = (0..17).map(|i| format!("w{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let err = graph.count_paths_through("a", "c", &refs).unwrap_err();
        match err {
            AocError::TooManyWaypoints { count, limit } => {
                assert_eq!(count, 17);
                assert_eq!(limit, MAX_WAYPOINTS);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn waypoint_limit_applies_after_dedup() {
        let graph = triangle();
        let names: Vec<String> = (0..17).map(|_| "b".to_string()).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(graph.count_paths_through("a", "c", &refs).unwrap(), 1);
    }
}
