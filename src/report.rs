//! Text and JSON rendering of search results.

use serde::Serialize;

use crate::dataset::{Dataset, MovieId, PersonId};
use crate::graph::Path;

/// `id: name, birth` (birth left blank when unknown).
pub fn format_person(dataset: &Dataset, id: &PersonId) -> String {
    match dataset.person(id) {
        Some(p) => format!("{}: {}, {}", id, p.name, year_or_blank(p.birth)),
        None => id.to_string(),
    }
}

/// `id: title, year` (year left blank when unknown).
pub fn format_movie(dataset: &Dataset, id: &MovieId) -> String {
    match dataset.movie(id) {
        Some(m) => format!("{}: {}, {}", id, m.title, year_or_blank(m.year)),
        None => id.to_string(),
    }
}

fn year_or_blank(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_default()
}

fn person_name(dataset: &Dataset, id: &PersonId) -> String {
    dataset
        .person(id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn movie_title(dataset: &Dataset, id: &MovieId) -> String {
    dataset
        .movie(id)
        .map(|m| m.title.clone())
        .unwrap_or_else(|| id.to_string())
}

/// One rendered hop: `person1` and `person2` starred in `movie`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HopReport {
    pub person1: String,
    pub person2: String,
    pub movie: String,
    pub movie_id: MovieId,
}

/// Serializable summary of one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub source: PersonId,
    pub target: PersonId,
    pub connected: bool,
    /// `None` when not connected.
    pub degrees: Option<usize>,
    pub hops: Vec<HopReport>,
}

impl PathReport {
    pub fn new(dataset: &Dataset, source: &PersonId, target: &PersonId, path: Option<&Path>) -> Self {
        let hops = path
            .map(|path| {
                let mut previous = source;
                path.steps()
                    .iter()
                    .map(|step| {
                        let hop = HopReport {
                            person1: person_name(dataset, previous),
                            person2: person_name(dataset, &step.person),
                            movie: movie_title(dataset, &step.movie),
                            movie_id: step.movie.clone(),
                        };
                        previous = &step.person;
                        hop
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            source: source.clone(),
            target: target.clone(),
            connected: path.is_some(),
            degrees: path.map(Path::degrees),
            hops,
        }
    }

    /// Lines as printed by the interactive CLI.
    pub fn lines(&self) -> Vec<String> {
        let Some(degrees) = self.degrees else {
            return vec!["Not connected.".to_string()];
        };
        let mut lines = Vec::with_capacity(self.hops.len() + 1);
        lines.push(format!("{} degrees of separation.", degrees));
        for (i, hop) in self.hops.iter().enumerate() {
            lines.push(format!(
                "{}: {} and {} starred in {}",
                i + 1,
                hop.person1,
                hop.person2,
                hop.movie
            ));
        }
        lines
    }
}

/// Text rendering of a search result.
pub fn render_path(dataset: &Dataset, source: &PersonId, target: &PersonId, path: Option<&Path>) -> Vec<String> {
    PathReport::new(dataset, source, target, path).lines()
}
