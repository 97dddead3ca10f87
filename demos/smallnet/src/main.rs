//! smallnet — smallest end-to-end example for the frt freight routing core.
//!
//! Three stations on a line, one payload, one train: A —E1(30m)— B —E2(10m)— C,
//! payload K1 (5 t) waiting at A for delivery to C, train Q1 (capacity 6)
//! starting at B.

use anyhow::Result;

use frt_dispatch::{Dispatcher, Payload, Train};
use frt_net::RailNetwork;

fn main() -> Result<()> {
    // 1. Build the network.
    let mut net = RailNetwork::new();
    let a = net.add_node("A")?;
    let b = net.add_node("B")?;
    let c = net.add_node("C")?;
    net.link("E1", a, b, 30)?;
    net.link("E2", b, c, 10)?;
    println!(
        "Network: {} stations, {} links",
        net.node_count(),
        net.link_count()
    );

    // 2. One payload, one train.
    let mut payload = Payload::new("K1", a, c, 5);
    let mut train = Train::new("Q1", 6, b);

    // 3. Run the job and report.
    let report = Dispatcher::new().execute(&net, &mut train, &mut payload)?;
    println!("{report}");
    println!(
        "Delivered {} at {} with {} t of headroom after {}",
        payload.name(),
        report.destination,
        report.headroom,
        report.total_duration,
    );

    // 4. Ready the train for its next payload.
    train.reset();

    Ok(())
}
