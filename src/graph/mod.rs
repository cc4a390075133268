//! Co-star graph: on-demand adjacency and BFS shortest-path search.
//!
//! The graph is never materialised. Nodes are people; an edge is a
//! (movie, co-star) pair derived from the dataset each time a person is
//! expanded.

mod neighbors;
mod bfs;

pub use neighbors::neighbors_for_person;
pub use bfs::{search, shortest_path, SearchLimits, SearchOutcome};

use serde::Serialize;

use crate::dataset::{MovieId, PersonId};

/// One hop of a path: arrived at `person` via `movie`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub movie: MovieId,
    pub person: PersonId,
}

/// Ordered steps from a source person to a target person.
///
/// The source itself is implied; an empty path means source == target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Degrees of separation (number of movie hops).
    pub fn degrees(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Person reached by the last step, if any.
    pub fn last_person(&self) -> Option<&PersonId> {
        self.steps.last().map(|s| &s.person)
    }
}
