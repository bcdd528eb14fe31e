//! Demonstration driver: runs each algorithm on the fixed demo data sets
//! and prints results plus the metrics snapshot each run leaves behind.

use divconq::{closest_pair_distance, select, stable, unstable, Metrics, Point};

fn print_metrics(label: &str, metrics: &Metrics) {
    println!(
        "     {label}: comparisons={} allocations={} max_depth={}",
        metrics.comparisons(),
        metrics.allocations(),
        metrics.max_recursion_depth()
    );
}

fn main() {
    println!("divide & conquer demo\n");

    println!("1. sorting");
    let input = [64, 34, 25, 12, 22, 11, 90, 5, 77, 42];
    println!("   input:      {input:?}");

    let mut metrics = Metrics::new();
    let mut merge_data = input;
    stable::merge::sort(&mut merge_data, &mut metrics);
    println!("   merge sort: {merge_data:?}");
    print_metrics("merge", &metrics);

    metrics.reset();
    let mut quick_data = input;
    unstable::quick::sort(&mut quick_data, &mut metrics);
    println!("   quick sort: {quick_data:?}");
    print_metrics("quick", &metrics);

    println!("\n2. selection");
    let base = [7, 10, 4, 3, 20, 15, 8, 12, 6];
    println!("   input: {base:?}");
    for k in 1..=3 {
        metrics.reset();
        let mut data = base;
        match select(&mut data, k, &mut metrics) {
            Ok(value) => {
                println!("   rank {k}: {value}");
                print_metrics("select", &metrics);
            }
            Err(err) => println!("   rank {k}: {err}"),
        }
    }

    println!("\n3. closest pair");
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 2.0),
        Point::new(2.0, 2.0),
    ];
    println!("   input: {points:?}");
    metrics.reset();
    match closest_pair_distance(&points, &mut metrics) {
        Ok(distance) => {
            println!("   minimum distance: {distance:.5}");
            print_metrics("closest", &metrics);
        }
        Err(err) => println!("   {err}"),
    }
}
