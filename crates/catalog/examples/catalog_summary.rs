use catalog::{CourseCatalog, Semester};
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/Courses.csv".to_string());

    println!("Loading course catalog from {}...\n", path);

    let start = Instant::now();
    let catalog = CourseCatalog::load_from_file(Path::new(&path))
        .expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let (fall, spring, both) = catalog.offering_counts();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Courses: {}", catalog.len());
    println!("Fall only: {}, Spring only: {}, Both: {}", fall, spring, both);

    for semester in [Semester::Fall, Semester::Spring] {
        println!(
            "{} credit hours on offer: {}",
            semester,
            catalog.offered_credit_hours(semester)
        );
    }

    let dangling = catalog.dangling_references();
    if !dangling.is_empty() {
        println!("\n{} requisite(s) point outside the catalog:", dangling.len());
        for reference in dangling {
            println!("  {} -> {} ({:?})", reference.course, reference.missing, reference.kind);
        }
    }
}
