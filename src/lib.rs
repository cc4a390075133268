pub mod config;
pub mod error;
pub mod dataset;
pub mod graph;
pub mod resolver;
pub mod report;
pub mod prompt;

pub use config::Config;
pub use dataset::{load_dataset, Dataset, DatasetBuilder, MovieId, PersonId};
pub use error::{DegreesError, Result};
pub use graph::{neighbors_for_person, search, shortest_path, Path, SearchLimits, SearchOutcome, Step};
pub use resolver::{person_id_for_name, resolve, Candidate, Resolution};
