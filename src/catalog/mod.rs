//! Component catalogs and build files.
//!
//! Both are read from TOML or JSON, picked by file extension. A build names
//! up to one component per slot, either inline or by catalog id.

mod build;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::component::{Category, Component};

pub use build::{BuildFile, Slot, SlotEntry, load_build, load_component};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid TOML in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unsupported file type {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("{slot} slot refers to unknown component '{id}'")]
    UnknownComponent { slot: Category, id: String },
    #[error("{slot} slot holds '{name}', which is a {found} component")]
    CategoryMismatch {
        slot: Category,
        found: Category,
        name: String,
    },
    #[error("catalog component '{0}' is defined more than once")]
    DuplicateId(String),
    #[error("catalog component '{0}' has no id")]
    MissingId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Format::Toml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Read and deserialize a TOML or JSON document.
pub(crate) fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let format =
        Format::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&text, format, path)
}

fn parse_document<T: DeserializeOwned>(
    text: &str,
    format: Format,
    path: &Path,
) -> Result<T, LoadError> {
    match format {
        Format::Toml => toml::from_str(text).map_err(|source| LoadError::Toml {
            path: path.to_path_buf(),
            source,
        }),
        Format::Json => serde_json::from_str(text).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Lookup of components by id.
pub trait Catalog {
    fn get(&self, id: &str) -> Option<&Component>;
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    components: Vec<Component>,
}

/// A catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    by_id: HashMap<String, Component>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog; every component needs a unique, non-empty id.
    pub fn from_components(
        components: impl IntoIterator<Item = Component>,
    ) -> Result<Self, LoadError> {
        let mut catalog = Self::new();
        for c in components {
            catalog.insert(c)?;
        }
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let file: CatalogFile = read_document(path)?;
        let catalog = Self::from_components(file.components)?;
        tracing::debug!(
            path = %path.display(),
            components = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn insert(&mut self, component: Component) -> Result<(), LoadError> {
        if component.id.is_empty() {
            return Err(LoadError::MissingId(component.name));
        }
        if self.by_id.contains_key(&component.id) {
            return Err(LoadError::DuplicateId(component.id));
        }
        self.by_id.insert(component.id.clone(), component);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Catalog for MemoryCatalog {
    fn get(&self, id: &str) -> Option<&Component> {
        self.by_id.get(id)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
