//! Repository root classification

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What a directory turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    #[default]
    NotYetTested,
    /// Root that is itself the repository storage
    BareRoot,
    /// Root named exactly `.git`, sitting inside a working copy
    NonBareRoot,
    /// Plain directory
    Regular,
}

impl Classification {
    pub fn is_root(self) -> bool {
        matches!(self, Classification::BareRoot | Classification::NonBareRoot)
    }
}

/// Which signature identified a root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Detection {
    /// Marker subdirectories present in its own listing
    Content,
    /// `<name>.git` child of a non-repository directory
    Name,
}

/// A repository root found during the walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRoot {
    pub path: PathBuf,
    pub classification: Classification,
    pub detection: Detection,
    /// Whether both marker subdirectories were present
    pub has_markers: bool,
}
