use std::path::{Path, PathBuf};
use thiserror::Error;

/// errors of reading, writing and converting mechanism files
#[derive(Debug, Error)]
pub enum MechError {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no thermodynamic data for species '{0}'")]
    MissingThermo(String),
    #[error("reaction '{reaction}' uses undeclared species '{species}'")]
    UndeclaredSpecies { reaction: String, species: String },
    #[error("{section} entry '{name}' is given more than once")]
    DuplicateEntry { section: &'static str, name: String },
    #[error("'{0}' has no usable file name")]
    InvalidPath(PathBuf),
    #[error("settings error: {0}")]
    Settings(String),
}

impl MechError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        MechError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
