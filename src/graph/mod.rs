//! Directed device graph built from puzzle edge lists (Arc<str> node ids)
//!
//! One line per device: `"<device>: <output> <output> ..."`. Devices that
//! appear only as outputs (e.g. the reactor output) are still nodes of the
//! graph. The graph is built once and never mutated afterwards.

mod paths;
mod topo;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::error::AocError;

/// Graph of devices and their directed output connections
///
/// Uses Arc<str> internally for zero-cost cloning of device names.
pub struct DeviceGraph {
    /// device -> downstream devices, in input order
    adjacency: HashMap<Arc<str>, Vec<Arc<str>>>,
    /// All device names, in first-seen order
    nodes: Vec<Arc<str>>,
    /// Quick lookup for device existence (also reused for Arc dedup)
    node_set: HashSet<Arc<str>>,
}

impl DeviceGraph {
    /// Parse the edge-list format: one `"device: out out ..."` per line.
    ///
    /// Blank lines are skipped. A line without a `:` separator, or with an
    /// empty device name, is malformed. A device listed with no outputs is
    /// accepted as a declared terminal.
    pub fn parse(input: &str) -> Result<Self, AocError> {
        let mut graph = Self::empty();

        for (idx, raw) in input.trim().lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let (device, outputs) = line.split_once(':').ok_or_else(|| {
                AocError::MalformedLine {
                    line_no: idx + 1,
                    content: raw.to_string(),
                }
            })?;

            let device = device.trim();
            if device.is_empty() {
                return Err(AocError::MalformedLine {
                    line_no: idx + 1,
                    content: raw.to_string(),
                });
            }

            let source = graph.intern(device);
            for output in outputs.split_whitespace() {
                let target = graph.intern(output);
                graph
                    .adjacency
                    .entry(Arc::clone(&source))
                    .or_default()
                    .push(target);
            }
        }

        Ok(graph)
    }

    /// Build a graph directly from (source, target) pairs
    pub fn from_edges<'a>(edges: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut graph = Self::empty();
        for (source, target) in edges {
            let src = graph.intern(source);
            let tgt = graph.intern(target);
            graph.adjacency.entry(src).or_default().push(tgt);
        }
        graph
    }

    fn empty() -> Self {
        Self {
            adjacency: HashMap::new(),
            nodes: Vec::new(),
            node_set: HashSet::new(),
        }
    }

    /// Register a device name, reusing the existing Arc<str> if seen before
    fn intern(&mut self, name: &str) -> Arc<str> {
        if let Some(existing) = self.node_set.get(name) {
            return Arc::clone(existing);
        }
        let id: Arc<str> = Arc::from(name);
        self.nodes.push(Arc::clone(&id));
        self.node_set.insert(Arc::clone(&id));
        id
    }

    /// Check if a device exists
    #[inline]
    pub fn contains(&self, device: &str) -> bool {
        self.node_set.contains(device)
    }

    /// Downstream devices of a device (empty for terminals and unknowns)
    #[inline]
    pub fn successors(&self, device: &str) -> &[Arc<str>] {
        static EMPTY: &[Arc<str>] = &[];
        self.adjacency
            .get(device)
            .map(|v| v.as_slice())
            .unwrap_or(EMPTY)
    }

    /// All devices, in first-seen order
    #[inline]
    pub fn nodes(&self) -> &[Arc<str>] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
aaa: you hhh
you: bbb ccc
bbb: ddd eee
ccc: ddd eee fff
ddd: ggg
eee: out
fff: out
ggg: out
hhh: ccc fff iii
iii: out";

    #[test]
    fn parse_collects_sources_and_targets() {
        let graph = DeviceGraph::parse(EXAMPLE).unwrap();
        assert_eq!(graph.node_count(), 11);
        assert_eq!(graph.edge_count(), 14);
        assert!(graph.contains("out"));
        assert!(!graph.contains("zzz"));
    }

    #[test]
    fn successors_keep_input_order() {
        let graph = DeviceGraph::parse(EXAMPLE).unwrap();
        let next: Vec<&str> = graph.successors("hhh").iter().map(|s| s.as_ref()).collect();
        assert_eq!(next, vec!["ccc", "fff", "iii"]);
        assert!(graph.successors("out").is_empty());
        assert!(graph.successors("zzz").is_empty());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let graph = DeviceGraph::parse("aaa: bbb\n\n\nbbb: ccc\n").unwrap();
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn line_without_separator_is_malformed() {
        let err = DeviceGraph::parse("aaa: bbb\nccc ddd").unwrap_err();
        match err {
            AocError::MalformedLine { line_no, content } => {
                assert_eq!(line_no, 2);
                assert_eq!(content, "ccc ddd");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_device_name_is_malformed() {
        let err = DeviceGraph::parse(": bbb ccc").unwrap_err();
        assert!(matches!(err, AocError::MalformedLine { line_no: 1, .. }));
    }

    #[test]
    fn repeated_source_lines_merge() {
        let graph = DeviceGraph::parse("aaa: bbb\naaa: ccc").unwrap();
        let next: Vec<&str> = graph.successors("aaa").iter().map(|s| s.as_ref()).collect();
        assert_eq!(next, vec!["bbb", "ccc"]);
    }

    #[test]
    fn declared_terminal_has_no_outputs() {
        let graph = DeviceGraph::parse("aaa: bbb\nbbb:").unwrap();
        assert!(graph.contains("bbb"));
        assert!(graph.successors("bbb").is_empty());
    }

    #[test]
    fn from_edges_matches_parsed_graph() {
        let graph = DeviceGraph::from_edges([("a", "b"), ("a", "c"), ("b", "c")]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        let next: Vec<&str> = graph.successors("a").iter().map(|s| s.as_ref()).collect();
        assert_eq!(next, vec!["b", "c"]);
    }
}
