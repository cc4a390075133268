//! In-memory movie dataset: people, movies, and the name index.
//!
//! A `Dataset` is assembled once through [`DatasetBuilder`] (usually by
//! [`load_dataset`]) and is read-only afterwards; every other component
//! borrows it.

mod builder;
mod loader;

pub use builder::DatasetBuilder;
pub use loader::{load_dataset, LoadReport, MOVIES_FILE, PEOPLE_FILE, STARS_FILE};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Opaque person identifier (the `id` column of people.csv).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

/// Opaque movie identifier (the `id` column of movies.csv).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub String);

impl PersonId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl MovieId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        PersonId(s.to_string())
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        MovieId(s.to_string())
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A person record with the movies they star in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Birth year; `None` when unknown.
    pub birth: Option<i32>,
    pub movies: BTreeSet<MovieId>,
}

/// A movie record with its stars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Release year; `None` when blank or unparseable in the source.
    pub year: Option<i32>,
    pub stars: BTreeSet<PersonId>,
}

/// Immutable people/movies tables plus the lowercase name index.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    names: HashMap<String, BTreeSet<PersonId>>,
}

impl Dataset {
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// Person ids whose name matches `name` case-insensitively.
    pub fn person_ids_for_name(&self, name: &str) -> Option<&BTreeSet<PersonId>> {
        self.names.get(&name.to_lowercase())
    }

    pub fn contains_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    /// Lowercase names shared by more than one person, with their ids.
    pub fn ambiguous_names(&self) -> impl Iterator<Item = (&str, &BTreeSet<PersonId>)> {
        self.names
            .iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|(name, ids)| (name.as_str(), ids))
    }

    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    pub fn movies_count(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.movies.is_empty()
    }
}
