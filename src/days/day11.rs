//! Day 11: Reactor
//!
//! The input wires devices into a DAG of data connections. Part 1
//! counts every distinct path from the debug interface `you` to the
//! reactor output `out`. Part 2 counts paths from the server rack `svr`
//! to `out` that pass through both the `dac` and `fft` units.

use crate::days::DayAnswers;
use crate::error::AocError;
use crate::graph::DeviceGraph;

const DEBUG_INTERFACE: &str = "you";
const SERVER_RACK: &str = "svr";
const REACTOR_OUTPUT: &str = "out";
const REQUIRED_UNITS: [&str; 2] = ["dac", "fft"];

pub fn solve(data: &str) -> Result<DayAnswers, AocError> {
    let graph = DeviceGraph::parse(data)?;
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "parsed device graph"
    );
    let part1 = graph.count_paths(DEBUG_INTERFACE, REACTOR_OUTPUT)?;
    let part2 = graph.count_paths_through(SERVER_RACK, REACTOR_OUTPUT, &REQUIRED_UNITS)?;
    Ok(DayAnswers::both(part1, part2))
}
