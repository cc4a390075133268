//! CSV loader: reads people.csv, movies.csv and stars.csv from a directory.

use serde::Deserialize;
use std::path::Path;

use super::{Dataset, DatasetBuilder};
use crate::error::{DegreesError, Result};

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    birth: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    year: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Row counts gathered while loading a dataset directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub people: usize,
    pub movies: usize,
    pub stars: usize,
    /// Cast rows naming an unknown person or movie.
    pub dangling_stars: usize,
    /// People or movies whose id was already loaded.
    pub duplicate_ids: usize,
    /// Rows that could not be deserialized.
    pub malformed_rows: usize,
}

/// Load the three tables from `dir` into a [`Dataset`].
///
/// Dangling cast rows, duplicate ids and malformed rows are skipped and
/// counted in the returned [`LoadReport`]; only a missing or unreadable file
/// is an error.
pub fn load_dataset(dir: &Path) -> Result<(Dataset, LoadReport)> {
    if !dir.is_dir() {
        return Err(DegreesError::DatasetNotFound(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut builder = DatasetBuilder::new();
    let mut report = LoadReport::default();

    report.malformed_rows += for_each_row(dir, PEOPLE_FILE, |row: PersonRow| {
        if builder.add_person(&row.id, &row.name, row.birth) {
            report.people += 1;
        } else {
            log::debug!("Duplicate person id {} skipped", row.id);
            report.duplicate_ids += 1;
        }
    })?;

    report.malformed_rows += for_each_row(dir, MOVIES_FILE, |row: MovieRow| {
        if builder.add_movie(&row.id, &row.title, row.year) {
            report.movies += 1;
        } else {
            log::debug!("Duplicate movie id {} skipped", row.id);
            report.duplicate_ids += 1;
        }
    })?;

    report.malformed_rows += for_each_row(dir, STARS_FILE, |row: StarRow| {
        if builder.add_star(&row.person_id, &row.movie_id) {
            report.stars += 1;
        } else {
            log::debug!(
                "Dangling cast row skipped: person {} / movie {}",
                row.person_id,
                row.movie_id
            );
            report.dangling_stars += 1;
        }
    })?;

    log::info!(
        "Loaded {} people, {} movies, {} cast links from {}",
        report.people,
        report.movies,
        report.stars,
        dir.display()
    );
    if report.dangling_stars > 0 || report.duplicate_ids > 0 || report.malformed_rows > 0 {
        log::info!(
            "Skipped rows: dangling={}, duplicate={}, malformed={}",
            report.dangling_stars,
            report.duplicate_ids,
            report.malformed_rows
        );
    }

    Ok((builder.build(), report))
}

/// Stream the rows of `dir/file_name` into `on_row`, one at a time.
///
/// Returns the number of malformed rows skipped.
fn for_each_row<T, F>(dir: &Path, file_name: &str, mut on_row: F) -> Result<usize>
where
    T: for<'de> Deserialize<'de>,
    F: FnMut(T),
{
    let path = dir.join(file_name);
    if !path.is_file() {
        return Err(DegreesError::DatasetNotFound(format!(
            "missing {}",
            path.display()
        )));
    }

    let mut reader = csv::Reader::from_path(&path)?;
    let mut malformed = 0;
    for (idx, record) in reader.deserialize::<T>().enumerate() {
        match record {
            Ok(row) => on_row(row),
            Err(e) => {
                // header is line 1
                log::warn!("{}:{}: malformed row skipped: {}", file_name, idx + 2, e);
                malformed += 1;
            }
        }
    }
    Ok(malformed)
}
