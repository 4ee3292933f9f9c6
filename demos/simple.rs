use frontier_sssp::{shortest_paths, INFINITY};

fn main() {
    env_logger::init();

    // Two hub-and-spoke clusters around vertices 0 and 6. The direct edge
    // 0 -> 6 is priced well above the bridge through vertex 4, and vertex 11
    // has no incoming edges at all.
    let edges = [
        (0, 1, 1.2),
        (0, 2, 0.8),
        (0, 3, 2.5),
        (1, 4, 1.0),
        (2, 4, 1.8),
        (3, 5, 0.6),
        (4, 5, 1.1),
        (4, 6, 3.0),
        (0, 6, 9.5),
        (6, 7, 0.7),
        (6, 8, 1.4),
        (7, 9, 2.2),
        (8, 9, 1.0),
        (9, 10, 0.5),
        (10, 0, 4.0),
    ];

    let distances = shortest_paths(12, &edges, 0).expect("valid input");

    println!("Shortest distances from vertex 0:");
    for (i, &dist) in distances.iter().enumerate() {
        if dist == INFINITY {
            println!("  {} -> unreachable", i);
        } else {
            println!("  {} -> {:.1}", i, dist);
        }
    }
}
