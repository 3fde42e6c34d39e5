pub mod config;
pub mod input;
pub mod model;
pub mod validation;

pub use config::{default_catalog, SubjectConfig, WEIGHT};
pub use input::{clamp_score, parse_score};
pub use model::{ScoreModel, ScoreResult, Subject};
pub use validation::validate_catalog;
