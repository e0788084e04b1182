use serde::Serialize;
use tracing::debug;

use super::{Bucket, CategoryReport, NormalizedSpecs, bucket_points, sheet};
use crate::component::normalize::storage_capacity_gb;
use crate::component::{Category, Component, SpecSheet};

const CAPACITY_LABELS: &[&str] = &["capacity", "Capacity", "size", "Size"];
const TYPE_LABELS: &[&str] = &["type", "Type", "storage_type"];
const INTERFACE_LABELS: &[&str] = &["interface", "Interface", "form_factor", "Form Factor"];
const READ_LABELS: &[&str] = &[
    "read_speed",
    "Read Speed",
    "sequential_read",
    "Sequential Read",
    "seq_read",
];

/// Capacity in GB: 0–25.
const CAPACITY_POINTS: &[Bucket<()>] = &[
    Bucket::at(2000.0, 25),
    Bucket::at(1000.0, 20),
    Bucket::at(500.0, 14),
    Bucket::at(250.0, 8),
];

/// Sequential read in MB/s: 0–15.
const READ_POINTS: &[Bucket<()>] = &[
    Bucket::at(7000.0, 15),
    Bucket::at(5000.0, 13),
    Bucket::at(3000.0, 11),
    Bucket::at(2000.0, 9),
    Bucket::at(500.0, 6),
];

const UNKNOWN_CAPACITY_POINTS: u32 = 12;
const UNKNOWN_READ_POINTS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageTech {
    /// NVMe on PCIe 4.0 or newer.
    NvmeGen4,
    Nvme,
    Ssd,
    Hdd,
    Unknown,
}

impl StorageTech {
    /// Points out of 60.
    fn points(self) -> u32 {
        match self {
            StorageTech::NvmeGen4 => 60,
            StorageTech::Nvme => 55,
            StorageTech::Ssd => 40,
            StorageTech::Hdd => 15,
            StorageTech::Unknown => 30,
        }
    }

    /// Classify one text. `nvme` beats `ssd`/`sata`, which beat `hdd`.
    fn detect(text: &str) -> Option<Self> {
        let t = text.to_lowercase();
        if t.contains("nvme") {
            let gen4 = ["gen4", "gen 4", "gen5", "gen 5", "pcie 4", "pcie 5", "4.0", "5.0"]
                .iter()
                .any(|m| t.contains(m));
            Some(if gen4 {
                StorageTech::NvmeGen4
            } else {
                StorageTech::Nvme
            })
        } else if t.contains("ssd") || t.contains("sata") || t.contains("solid state") {
            Some(StorageTech::Ssd)
        } else if t.contains("hdd") || t.contains("rpm") || t.contains("hard drive") {
            Some(StorageTech::Hdd)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageSpecs {
    pub capacity_gb: f64,
    pub technology: StorageTech,
    pub read_speed_mbps: f64,
}

/// Capacity field (with a unit, or a bare number read as GB), then the
/// product name. `None` when no capacity is stated anywhere.
fn resolve_capacity(specs: &SpecSheet, name: &str) -> Option<f64> {
    storage_capacity_gb(&specs.text(CAPACITY_LABELS))
        .or_else(|| specs.measured(CAPACITY_LABELS))
        .or_else(|| storage_capacity_gb(name))
}

/// Type field, then interface field, then the product name.
fn resolve_technology(specs: &SpecSheet, name: &str) -> StorageTech {
    StorageTech::detect(&specs.text(TYPE_LABELS))
        .or_else(|| StorageTech::detect(&specs.text(INTERFACE_LABELS)))
        .or_else(|| StorageTech::detect(name))
        .unwrap_or(StorageTech::Unknown)
}

pub fn score_storage(component: Option<&Component>) -> CategoryReport {
    let Some(specs) = sheet(component) else {
        return CategoryReport::missing(Category::Storage);
    };
    let name = component.map(|c| c.name.as_str()).unwrap_or_default();

    let capacity = resolve_capacity(specs, name);
    let technology = resolve_technology(specs, name);
    let read = specs.measured(READ_LABELS);

    let mut issues = Vec::new();

    let capacity_pts = match capacity {
        Some(gb) => {
            if gb > 0.0 && gb < 500.0 {
                issues.push(format!(
                    "Only {gb:.0} GB of storage: fills up quickly with modern games"
                ));
            }
            bucket_points(gb, CAPACITY_POINTS, 4)
        }
        None => UNKNOWN_CAPACITY_POINTS,
    };

    if technology == StorageTech::Hdd {
        issues.push("Hard drive as main storage: slow boot and load times, use an SSD".to_string());
    }
    let tech_pts = technology.points();

    let read_pts = read.map_or(UNKNOWN_READ_POINTS, |mbps| bucket_points(mbps, READ_POINTS, 3));

    debug!(
        capacity = capacity_pts,
        technology = tech_pts,
        read = read_pts,
        "storage criteria"
    );

    CategoryReport::scored(
        Category::Storage,
        capacity_pts + tech_pts + read_pts,
        issues,
        NormalizedSpecs::Storage(StorageSpecs {
            capacity_gb: capacity.unwrap_or(0.0),
            technology,
            read_speed_mbps: read.unwrap_or(0.0),
        }),
    )
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
