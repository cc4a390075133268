use clap::Parser;
use degrees::{config::Config, load_dataset};
use std::path::PathBuf;

/// Print summary statistics for a dataset directory.
#[derive(Parser, Debug)]
#[command(name = "stats")]
struct Args {
    /// Dataset directory (default: degrees.dataset_dir from config)
    directory: Option<PathBuf>,

    /// Number of largest casts to list
    #[arg(long, default_value_t = 5)]
    top: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.degrees.log_level),
    )
    .init();

    let directory = args
        .directory
        .unwrap_or_else(|| config.dataset_dir().to_path_buf());
    let (dataset, report) = load_dataset(&directory)?;

    println!("\n=== Dataset Statistics: {} ===\n", directory.display());
    println!("{:-<50}", "");
    println!("{:<30} {:>15}", "People", report.people);
    println!("{:<30} {:>15}", "Movies", report.movies);
    println!("{:<30} {:>15}", "Cast links", report.stars);
    println!("{:-<50}", "");
    println!("{:<30} {:>15}", "Dangling cast rows", report.dangling_stars);
    println!("{:<30} {:>15}", "Duplicate ids", report.duplicate_ids);
    println!("{:<30} {:>15}", "Malformed rows", report.malformed_rows);
    println!("{:-<50}", "");

    let uncredited = dataset.people().filter(|p| p.movies.is_empty()).count();
    let empty_casts = dataset.movies().filter(|m| m.stars.is_empty()).count();
    println!("{:<30} {:>15}", "People with no movies", uncredited);
    println!("{:<30} {:>15}", "Movies with no stars", empty_casts);

    let mut ambiguous: Vec<_> = dataset.ambiguous_names().collect();
    ambiguous.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then(a.0.cmp(b.0)));
    println!("{:<30} {:>15}", "Ambiguous names", ambiguous.len());
    for (name, ids) in ambiguous.iter().take(args.top) {
        println!("  {} ({} people)", name, ids.len());
    }

    let mut movies: Vec<_> = dataset.movies().collect();
    movies.sort_by(|a, b| b.stars.len().cmp(&a.stars.len()).then(a.id.cmp(&b.id)));
    if !movies.is_empty() {
        println!("\nLargest casts:\n");
        for movie in movies.iter().take(args.top) {
            let year = movie.year.map(|y| y.to_string()).unwrap_or_default();
            println!("  {:>4} stars  {} ({})", movie.stars.len(), movie.title, year);
        }
    }

    println!();
    Ok(())
}
