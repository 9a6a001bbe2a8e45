//! Catalog loading from a JSON data file.

use std::path::{Path, PathBuf};

use oncotree_domain::main_type::MainType;

use crate::error::CatalogError;
use crate::main_type_repo::InMemoryMainTypeRepository;

/// Configuration for the in-memory catalog adapter.
pub struct Config {
    /// Path to a JSON array of main type records.
    pub path: PathBuf,
}

impl Config {
    /// Load the data file and build the catalog.
    ///
    /// A missing file yields an empty catalog so the service can still start.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file can't be read, isn't valid JSON,
    /// or contains invalid or duplicate records.
    pub fn build(self) -> Result<InMemoryMainTypeRepository, CatalogError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let repo = parse(&content)?;
                tracing::info!(
                    path = %self.path.display(),
                    count = repo.len(),
                    "main type catalog loaded"
                );
                Ok(repo)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %self.path.display(),
                    "catalog file not found, starting with an empty catalog"
                );
                Ok(InMemoryMainTypeRepository::default())
            }
            Err(err) => Err(CatalogError::Io(err)),
        }
    }
}

/// Load a catalog from `path`.
///
/// # Errors
///
/// See [`Config::build`].
pub fn load(path: impl AsRef<Path>) -> Result<InMemoryMainTypeRepository, CatalogError> {
    Config {
        path: path.as_ref().to_path_buf(),
    }
    .build()
}

/// Build a catalog from the JSON text of a data file.
///
/// # Errors
///
/// Returns [`CatalogError::Json`] for malformed input and
/// [`CatalogError::Invalid`] for records that break catalog invariants.
pub fn parse(content: &str) -> Result<InMemoryMainTypeRepository, CatalogError> {
    let items: Vec<MainType> = serde_json::from_str(content)?;
    InMemoryMainTypeRepository::new(items).map_err(CatalogError::Invalid)
}
