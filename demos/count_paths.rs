//! Example usage of the device graph path counters

use aoc2025::DeviceGraph;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ========================================
    // Building a graph
    // ========================================

    println!("=== Building a Graph ===\n");

    let wiring = "\
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

    let graph = DeviceGraph::parse(wiring)?;
    println!("Devices: {}", graph.node_count());
    println!("Connections: {}", graph.edge_count());

    // ========================================
    // Counting paths
    // ========================================

    println!("\n=== Counting Paths ===\n");

    let every = graph.count_paths("svr", "out")?;
    println!("svr -> out, unconstrained: {}", every);

    let through_fft = graph.count_paths_through("svr", "out", &["fft"])?;
    println!("svr -> out via fft:        {}", through_fft);

    let through_both = graph.count_paths_through("svr", "out", &["fft", "dac"])?;
    println!("svr -> out via fft + dac:  {}", through_both);

    // Unknown devices are not an error, just zero paths
    let none = graph.count_paths("svr", "nowhere")?;
    println!("svr -> nowhere:            {}", none);

    // ========================================
    // Broken wiring
    // ========================================

    println!("\n=== Broken Wiring ===\n");

    let looped = DeviceGraph::parse("aaa: bbb\nbbb: aaa")?;
    if let Err(e) = looped.count_paths("aaa", "bbb") {
        println!("Cycle caught: {}", e);
    }

    if let Err(e) = DeviceGraph::parse("aaa bbb ccc") {
        println!("Malformed line caught: {}", e);
    }

    Ok(())
}
