//! Load-time construction of a [`Dataset`].

use std::collections::{BTreeSet, HashMap};

use super::{Dataset, Movie, MovieId, Person, PersonId};

/// Accumulates people, movies and cast links, then freezes them into a
/// [`Dataset`]. The name index is derived from person records in `build`.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a person. Returns false (and keeps the first record) on a duplicate id.
    pub fn add_person(&mut self, id: &str, name: &str, birth: Option<i32>) -> bool {
        let id = PersonId::from(id);
        if self.people.contains_key(&id) {
            return false;
        }
        self.people.insert(
            id.clone(),
            Person {
                id,
                name: name.to_string(),
                birth,
                movies: BTreeSet::new(),
            },
        );
        true
    }

    /// Add a movie. Returns false (and keeps the first record) on a duplicate id.
    pub fn add_movie(&mut self, id: &str, title: &str, year: Option<i32>) -> bool {
        let id = MovieId::from(id);
        if self.movies.contains_key(&id) {
            return false;
        }
        self.movies.insert(
            id.clone(),
            Movie {
                id,
                title: title.to_string(),
                year,
                stars: BTreeSet::new(),
            },
        );
        true
    }

    /// Link a person to a movie in both directions.
    ///
    /// Returns false without touching either table when the person or the
    /// movie is unknown.
    pub fn add_star(&mut self, person_id: &str, movie_id: &str) -> bool {
        let person_id = PersonId::from(person_id);
        let movie_id = MovieId::from(movie_id);
        let (Some(person), Some(movie)) = (
            self.people.get_mut(&person_id),
            self.movies.get_mut(&movie_id),
        ) else {
            return false;
        };
        person.movies.insert(movie_id);
        movie.stars.insert(person_id);
        true
    }

    pub fn build(self) -> Dataset {
        let mut names: HashMap<String, BTreeSet<PersonId>> = HashMap::new();
        for person in self.people.values() {
            names
                .entry(person.name.to_lowercase())
                .or_default()
                .insert(person.id.clone());
        }
        Dataset {
            people: self.people,
            movies: self.movies,
            names,
        }
    }
}
