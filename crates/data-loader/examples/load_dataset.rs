use data_loader::MovieLens;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data/ml-10m");

    println!("Loading MovieLens dataset...\n");

    let start = Instant::now();
    let data = MovieLens::load_from_files(data_dir)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let (ratings, movies, tags) = data.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Ratings: {}", ratings);
    println!("Movies: {}", movies);
    println!("Tags: {}", tags);
    println!("\nPerformance: {:.0} ratings/second",
             ratings as f64 / elapsed.as_secs_f64());
}
