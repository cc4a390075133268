//! Name → person id resolution, with ambiguity surfaced to a chooser.

use serde::Serialize;

use crate::dataset::{Dataset, PersonId};
use crate::error::{DegreesError, Result};

/// A person offered when a name matches more than one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<i32>,
}

/// Result of looking up a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Unique(PersonId),
    /// Several people share the name; candidates are ordered by id.
    Ambiguous(Vec<Candidate>),
    NotFound,
}

impl Resolution {
    /// Settle an ambiguous resolution with the caller's pick.
    ///
    /// `Unique` ignores `chosen`. A pick that is not one of the candidates is
    /// rejected rather than guessed.
    pub fn choose(self, chosen: &str) -> Result<PersonId> {
        match self {
            Resolution::Unique(id) => Ok(id),
            Resolution::Ambiguous(candidates) => candidates
                .into_iter()
                .find(|c| c.id.as_str() == chosen)
                .map(|c| c.id)
                .ok_or_else(|| DegreesError::PersonNotFound(chosen.to_string())),
            Resolution::NotFound => Err(DegreesError::PersonNotFound(chosen.to_string())),
        }
    }
}

/// Look up `name` case-insensitively (exact match only).
pub fn resolve(dataset: &Dataset, name: &str) -> Resolution {
    let Some(ids) = dataset.person_ids_for_name(name) else {
        return Resolution::NotFound;
    };
    match ids.len() {
        0 => Resolution::NotFound,
        1 => ids
            .first()
            .cloned()
            .map_or(Resolution::NotFound, Resolution::Unique),
        _ => Resolution::Ambiguous(
            ids.iter()
                .filter_map(|id| dataset.person(id))
                .map(|p| Candidate {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    birth: p.birth,
                })
                .collect(),
        ),
    }
}

/// Resolve `name` to a single id, asking `chooser` when it is ambiguous.
///
/// The chooser receives the original name and the candidates and returns the
/// picked id, or `None` to decline.
pub fn person_id_for_name<F>(dataset: &Dataset, name: &str, chooser: F) -> Result<PersonId>
where
    F: FnOnce(&str, &[Candidate]) -> Option<String>,
{
    match resolve(dataset, name) {
        Resolution::Unique(id) => Ok(id),
        Resolution::NotFound => Err(DegreesError::PersonNotFound(name.to_string())),
        Resolution::Ambiguous(candidates) => {
            let chosen = chooser(name, &candidates)
                .ok_or_else(|| DegreesError::PersonNotFound(name.to_string()))?;
            Resolution::Ambiguous(candidates).choose(chosen.trim())
        }
    }
}
