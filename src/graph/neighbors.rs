use std::collections::BTreeSet;

use crate::dataset::{Dataset, MovieId, PersonId};

/// (movie, co-star) pairs for every movie `person_id` appears in.
///
/// The person themself is included once per movie; callers that walk the
/// graph must skip those self pairs. Unknown ids produce no pairs.
pub fn neighbors_for_person(dataset: &Dataset, person_id: &PersonId) -> BTreeSet<(MovieId, PersonId)> {
    let mut neighbors = BTreeSet::new();
    let Some(person) = dataset.person(person_id) else {
        return neighbors;
    };
    for movie_id in &person.movies {
        // dangling movie refs contribute nothing
        let Some(movie) = dataset.movie(movie_id) else {
            continue;
        };
        for star in &movie.stars {
            neighbors.insert((movie_id.clone(), star.clone()));
        }
    }
    neighbors
}
