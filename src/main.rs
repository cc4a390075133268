use anyhow::{Context, Result};
use clap::Parser;
use degrees::prompt::Prompt;
use degrees::report::{format_movie, format_person, PathReport};
use degrees::{load_dataset, person_id_for_name, search, Config, Dataset, PersonId, SearchOutcome};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "degrees")]
#[command(about = "Find the degrees of separation between two people via shared movies")]
struct Args {
    /// Dataset directory with people.csv, movies.csv and stars.csv
    /// (default: degrees.dataset_dir from config, else "large")
    directory: Option<PathBuf>,

    /// Source person's name (prompted when omitted)
    #[arg(long)]
    source: Option<String>,

    /// Target person's name (prompted when omitted)
    #[arg(long)]
    target: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Give up after expanding this many people (at least 1)
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    max_expansions: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", &config.degrees.log_level)
    ).init();

    let directory = args
        .directory
        .clone()
        .unwrap_or_else(|| config.dataset_dir().to_path_buf());

    println!("Loading data...");
    let (dataset, _report) = load_dataset(&directory)
        .with_context(|| format!("Failed to load dataset from {}", directory.display()))?;
    println!("Data loaded.");
    if dataset.is_empty() {
        log::warn!("Dataset in {} has no people or movies", directory.display());
    }

    let stdin = std::io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), std::io::stdout());

    let source = read_person(&dataset, &mut prompt, args.source.as_deref())?;
    let target = read_person(&dataset, &mut prompt, args.target.as_deref())?;
    log::info!("source: {}", format_person(&dataset, &source));
    log::info!("target: {}", format_person(&dataset, &target));

    let mut limits = config.search_limits();
    if args.max_expansions.is_some() {
        limits.max_expansions = args.max_expansions;
    }

    let path = match search(&dataset, &source, &target, &limits) {
        SearchOutcome::Found(path) => Some(path),
        SearchOutcome::NotConnected => None,
        SearchOutcome::BudgetExceeded { expanded } => {
            return Err(degrees::DegreesError::SearchBudgetExceeded(expanded).into());
        }
    };

    if let Some(path) = &path {
        for step in path.steps() {
            log::debug!("via {}", format_movie(&dataset, &step.movie));
        }
    }

    let report = PathReport::new(&dataset, &source, &target, path.as_ref());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.lines() {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Resolve a name given on the command line, or prompt for one.
fn read_person<R: BufRead, W: Write>(
    dataset: &Dataset,
    prompt: &mut Prompt<R, W>,
    given: Option<&str>,
) -> Result<PersonId> {
    let name = match given {
        Some(name) => name.to_string(),
        None => prompt
            .ask_name()?
            .ok_or_else(|| anyhow::anyhow!("No name given"))?,
    };
    let id = person_id_for_name(dataset, &name, |name, candidates| {
        prompt.choose_candidate(name, candidates)
    })?;
    Ok(id)
}
