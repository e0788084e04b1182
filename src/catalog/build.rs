use std::path::Path;

use serde::Deserialize;

use super::{Catalog, LoadError, read_document};
use crate::component::{Build, Category, Component, SpecSheet};

/// A component written out in place. The category may be omitted; it is
/// taken from the slot the entry sits in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub specs: Option<SpecSheet>,
}

impl SlotEntry {
    fn into_component(self, slot: Category) -> Result<Component, LoadError> {
        match self.category {
            Some(found) if found != slot => Err(LoadError::CategoryMismatch {
                slot,
                found,
                name: self.name,
            }),
            _ => Ok(Component {
                id: self.id,
                category: slot,
                name: self.name,
                specs: self.specs,
            }),
        }
    }
}

/// One build slot: a catalog id or an inline component.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Slot {
    Id(String),
    Inline(SlotEntry),
}

impl Slot {
    fn resolve(self, slot: Category, catalog: Option<&dyn Catalog>) -> Result<Component, LoadError> {
        match self {
            Slot::Inline(entry) => entry.into_component(slot),
            Slot::Id(id) => {
                let Some(found) = catalog.and_then(|c| c.get(&id)) else {
                    tracing::warn!(%slot, %id, "unresolved catalog id");
                    return Err(LoadError::UnknownComponent { slot, id });
                };
                if found.category != slot {
                    return Err(LoadError::CategoryMismatch {
                        slot,
                        found: found.category,
                        name: found.name.clone(),
                    });
                }
                Ok(found.clone())
            }
        }
    }
}

/// A build as written on disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cpu: Option<Slot>,
    #[serde(default)]
    pub gpu: Option<Slot>,
    #[serde(default, alias = "ram")]
    pub memory: Option<Slot>,
    #[serde(default)]
    pub storage: Option<Slot>,
    #[serde(default, alias = "psu")]
    pub power_supply: Option<Slot>,
}

impl BuildFile {
    /// Turn every slot into a component, looking ids up in `catalog`.
    pub fn resolve(self, catalog: Option<&dyn Catalog>) -> Result<Build, LoadError> {
        let resolve = |slot: Option<Slot>, category: Category| {
            slot.map(|s| s.resolve(category, catalog)).transpose()
        };
        Ok(Build {
            cpu: resolve(self.cpu, Category::Cpu)?,
            gpu: resolve(self.gpu, Category::Gpu)?,
            memory: resolve(self.memory, Category::Memory)?,
            storage: resolve(self.storage, Category::Storage)?,
            power_supply: resolve(self.power_supply, Category::PowerSupply)?,
        })
    }
}

/// Load a build file and resolve its slots.
pub fn load_build(path: &Path, catalog: Option<&dyn Catalog>) -> Result<Build, LoadError> {
    let file: BuildFile = read_document(path)?;
    if let Some(name) = &file.name {
        tracing::debug!(path = %path.display(), %name, "build loaded");
    }
    file.resolve(catalog)
}

/// Load a file holding a single inline component of `category`.
pub fn load_component(path: &Path, category: Category) -> Result<Component, LoadError> {
    let entry: SlotEntry = read_document(path)?;
    entry.into_component(category)
}

#[cfg(test)]
#[path = "build_test.rs"]
mod tests;
