use thiserror::Error;
use crate::data::EntityKind;

/// Errors raised while ingesting growth tree documents
///
/// Layout and selection never fail; only the loading boundary does.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("id '{id}' is used by both a {first} and a {second}")]
    DuplicateId {
        id: String,
        first: EntityKind,
        second: EntityKind,
    },
}

pub type Result<T> = std::result::Result<T, DataError>;
