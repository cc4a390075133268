//! BFS shortest path between two people.

use std::collections::{HashSet, VecDeque};

use super::{neighbors_for_person, Path, Step};
use crate::dataset::{Dataset, MovieId, PersonId};

/// Optional bounds on a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of people to expand before giving up. `None` = unlimited.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }
}

/// Terminal state of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Shortest path found (empty when source == target).
    Found(Path),
    /// Frontier exhausted without reaching the target.
    NotConnected,
    /// `max_expansions` people were expanded without reaching the target.
    BudgetExceeded { expanded: usize },
}

/// Arena entry. `parent` indexes into the same arena; `action` is the movie
/// linking parent to this node and is `None` only for the root.
#[derive(Debug)]
struct SearchNode {
    state: PersonId,
    parent: Option<usize>,
    action: Option<MovieId>,
}

/// Shortest path from `source` to `target`, or `None` when they are not
/// connected.
pub fn shortest_path(dataset: &Dataset, source: &PersonId, target: &PersonId) -> Option<Path> {
    match search(dataset, source, target, &SearchLimits::unlimited()) {
        SearchOutcome::Found(path) => Some(path),
        SearchOutcome::NotConnected | SearchOutcome::BudgetExceeded { .. } => None,
    }
}

/// Breadth-first search from `source` to `target`.
///
/// A discovered person is marked explored as it is enqueued, and the target
/// check happens at that same point for every depth, so the first hit is at
/// minimal depth. Neighbors are enumerated in (movie, person) order, which
/// makes tie-breaking between equally short paths deterministic.
pub fn search(
    dataset: &Dataset,
    source: &PersonId,
    target: &PersonId,
    limits: &SearchLimits,
) -> SearchOutcome {
    if source == target {
        return SearchOutcome::Found(Path::default());
    }
    if !dataset.contains_person(source) || !dataset.contains_person(target) {
        log::warn!("Search endpoint not in dataset: {} -> {}", source, target);
    }

    let mut nodes = vec![SearchNode {
        state: source.clone(),
        parent: None,
        action: None,
    }];
    let mut frontier: VecDeque<usize> = VecDeque::from([0]);
    let mut explored: HashSet<PersonId> = HashSet::from([source.clone()]);
    let mut expanded = 0usize;

    while let Some(idx) = frontier.pop_front() {
        if limits.max_expansions.is_some_and(|max| expanded >= max) {
            log::debug!("Search budget exhausted after {} expansions", expanded);
            return SearchOutcome::BudgetExceeded { expanded };
        }
        expanded += 1;

        let current = nodes[idx].state.clone();
        for (movie, person) in neighbors_for_person(dataset, &current) {
            if person == current {
                continue;
            }
            if !explored.insert(person.clone()) {
                continue;
            }

            let found = person == *target;
            nodes.push(SearchNode {
                state: person,
                parent: Some(idx),
                action: Some(movie),
            });
            let child = nodes.len() - 1;
            if found {
                log::debug!(
                    "Found target after {} expansions ({} nodes discovered)",
                    expanded,
                    nodes.len()
                );
                return SearchOutcome::Found(reconstruct(&nodes, child));
            }
            frontier.push_back(child);
        }
    }

    log::debug!("Frontier exhausted after {} expansions", expanded);
    SearchOutcome::NotConnected
}

fn reconstruct(nodes: &[SearchNode], mut idx: usize) -> Path {
    let mut steps = Vec::new();
    while let (Some(parent), Some(movie)) = (nodes[idx].parent, &nodes[idx].action) {
        steps.push(Step {
            movie: movie.clone(),
            person: nodes[idx].state.clone(),
        });
        idx = parent;
    }
    steps.reverse();
    Path::new(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetBuilder;

    fn id(s: &str) -> PersonId {
        PersonId::from(s)
    }

    fn step(movie: &str, person: &str) -> Step {
        Step {
            movie: MovieId::from(movie),
            person: PersonId::from(person),
        }
    }

    /// People named after their ids; `casts` maps movie id -> star ids.
    fn dataset(people: &[&str], casts: &[(&str, &[&str])]) -> Dataset {
        let mut builder = DatasetBuilder::new();
        for p in people {
            builder.add_person(p, p, None);
        }
        for (movie, stars) in casts {
            builder.add_movie(movie, movie, None);
            for star in *stars {
                builder.add_star(star, movie);
            }
        }
        builder.build()
    }

    #[test]
    fn test_same_person_is_zero_degrees() {
        let ds = dataset(&["a"], &[]);
        let path = shortest_path(&ds, &id("a"), &id("a")).unwrap();
        assert!(path.is_empty());
        assert_eq!(path.degrees(), 0);
    }

    #[test]
    fn test_single_shared_movie() {
        let ds = dataset(&["a", "b", "c"], &[("m", &["a", "b", "c"])]);
        let path = shortest_path(&ds, &id("a"), &id("b")).unwrap();
        assert_eq!(path.steps(), &[step("m", "b")]);
        assert_eq!(path.degrees(), 1);
    }

    #[test]
    fn test_two_hops() {
        let ds = dataset(
            &["a", "b", "c", "d"],
            &[("m1", &["a", "b"]), ("m2", &["b", "c"])],
        );
        let path = shortest_path(&ds, &id("a"), &id("c")).unwrap();
        assert_eq!(path.steps(), &[step("m1", "b"), step("m2", "c")]);
    }

    #[test]
    fn test_not_connected() {
        let ds = dataset(
            &["a", "b", "c", "d"],
            &[("m1", &["a", "b"]), ("m2", &["b", "c"]), ("m3", &["d"])],
        );
        assert_eq!(shortest_path(&ds, &id("a"), &id("d")), None);
        assert_eq!(
            search(&ds, &id("a"), &id("d"), &SearchLimits::unlimited()),
            SearchOutcome::NotConnected
        );
    }

    #[test]
    fn test_prefers_shorter_route() {
        // a-b-c-d-e chain plus a shortcut a-e via m5
        let ds = dataset(
            &["a", "b", "c", "d", "e"],
            &[
                ("m1", &["a", "b"]),
                ("m2", &["b", "c"]),
                ("m3", &["c", "d"]),
                ("m4", &["d", "e"]),
                ("m5", &["c", "e"]),
            ],
        );
        let path = shortest_path(&ds, &id("a"), &id("e")).unwrap();
        assert_eq!(
            path.steps(),
            &[step("m1", "b"), step("m2", "c"), step("m5", "e")]
        );
    }

    #[test]
    fn test_cycles_terminate() {
        let ds = dataset(
            &["a", "b", "c", "z"],
            &[("m1", &["a", "b"]), ("m2", &["b", "c"]), ("m3", &["c", "a"])],
        );
        assert_eq!(shortest_path(&ds, &id("a"), &id("z")), None);
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        let ds = dataset(
            &["a", "b", "c", "t"],
            &[
                ("m1", &["a", "c"]),
                ("m2", &["a", "b"]),
                ("m3", &["b", "t"]),
                ("m4", &["c", "t"]),
            ],
        );
        let first = shortest_path(&ds, &id("a"), &id("t")).unwrap();
        let second = shortest_path(&ds, &id("a"), &id("t")).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.steps(), &[step("m1", "c"), step("m4", "t")]);
    }

    #[test]
    fn test_lone_self_pair_is_never_a_step() {
        let ds = dataset(&["a", "b"], &[("solo", &["a"]), ("m", &["a", "b"])]);
        let path = shortest_path(&ds, &id("a"), &id("b")).unwrap();
        assert_eq!(path.steps(), &[step("m", "b")]);
    }

    #[test]
    fn test_unknown_source_is_not_connected() {
        let ds = dataset(&["a"], &[]);
        assert_eq!(shortest_path(&ds, &id("ghost"), &id("a")), None);
    }

    #[test]
    fn test_budget_exceeded() {
        let ds = dataset(
            &["a", "b", "c", "d"],
            &[("m1", &["a", "b"]), ("m2", &["b", "c"]), ("m3", &["c", "d"])],
        );
        let outcome = search(&ds, &id("a"), &id("d"), &SearchLimits::with_max_expansions(1));
        assert_eq!(outcome, SearchOutcome::BudgetExceeded { expanded: 1 });

        let outcome = search(&ds, &id("a"), &id("d"), &SearchLimits::with_max_expansions(3));
        assert!(matches!(outcome, SearchOutcome::Found(ref p) if p.degrees() == 3));
    }
}
