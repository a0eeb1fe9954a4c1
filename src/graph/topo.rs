//! Topological ordering (Kahn's algorithm) and cycle reporting

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::error::AocError;
use crate::graph::DeviceGraph;

impl DeviceGraph {
    /// Topological order of all devices via Kahn's algorithm.
    ///
    /// Iterative, so deep chains cannot blow the stack. Fails with the
    /// offending cycle spelled out when the graph is not a DAG.
    pub fn topological_order(&self) -> Result<Vec<Arc<str>>, AocError> {
        let mut in_degree: HashMap<&str, usize> = HashMap::with_capacity(self.node_count());
        for node in self.nodes() {
            in_degree.entry(node.as_ref()).or_insert(0);
        }
        for node in self.nodes() {
            for next in self.successors(node) {
                *in_degree.entry(next.as_ref()).or_insert(0) += 1;
            }
        }

        let mut queue: VecDeque<&Arc<str>> = self
            .nodes()
            .iter()
            .filter(|n| in_degree[n.as_ref()] == 0)
            .collect();

        let mut order: Vec<Arc<str>> = Vec::with_capacity(self.node_count());
        while let Some(node) = queue.pop_front() {
            order.push(Arc::clone(node));
            for next in self.successors(node) {
                if let Some(degree) = in_degree.get_mut(next.as_ref()) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(next);
                    }
                }
            }
        }

        if order.len() != self.node_count() {
            let cycle_path = self
                .find_cycle()
                .unwrap_or_else(|| "(cycle could not be reconstructed)".to_string());
            return Err(AocError::CycleDetected { cycle_path });
        }

        Ok(order)
    }

    /// Locate one cycle and render it as `a → b → a`
    fn find_cycle(&self) -> Option<String> {
        fn visit<'a>(
            graph: &'a DeviceGraph,
            node: &'a str,
            visited: &mut HashMap<&'a str, bool>,
            stack: &mut Vec<&'a str>,
        ) -> Option<String> {
            if let Some(&in_stack) = visited.get(node) {
                if in_stack {
                    let start = stack.iter().position(|&n| n == node).unwrap_or(0);
                    let mut path: Vec<&str> = stack[start..].to_vec();
                    path.push(node);
                    return Some(path.join(" → "));
                }
                return None;
            }

            visited.insert(node, true);
            stack.push(node);

            for next in graph.successors(node) {
                if let Some(found) = visit(graph, next, visited, stack) {
                    return Some(found);
                }
            }

            stack.pop();
            visited.insert(node, false);
            None
        }

        let mut visited: HashMap<&str, bool> = HashMap::new();
        let mut stack: Vec<&str> = Vec::new();
        for node in self.nodes() {
            if !visited.contains_key(node.as_ref()) {
                if let Some(found) = visit(self, node, &mut visited, &mut stack) {
                    return Some(found);
                }
            }
        }
        None
    }
}
