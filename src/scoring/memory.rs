//! RAM kit scoring.
//!
//! Capacity, speed and generation are each resolved through a fallback chain
//! because retailers put them in different places: an explicit field, a kit
//! notation such as `2 x 16GB`, or only the product name. When a value cannot
//! be found anywhere the criterion gets an average score and no issue; an
//! unparseable kit is not assumed to be a bad one.

use serde::Serialize;
use tracing::debug;

use super::{Bucket, CategoryReport, NormalizedSpecs, bucket_points, sheet};
use crate::component::normalize::{capacity_gb, ddr_generation, kit_capacity_gb, memory_speed};
use crate::component::{Category, Component, SpecSheet};

const CAPACITY_LABELS: &[&str] = &["capacity", "Capacity", "total_capacity", "Total Capacity", "size"];
const MODULE_LABELS: &[&str] = &["modules", "Modules", "kit", "Kit"];
const SPEED_LABELS: &[&str] = &["speed", "Speed", "frequency", "Frequency", "memory_speed"];
const TYPE_LABELS: &[&str] = &["type", "Type", "memory_type", "Memory Type"];
const FORM_FACTOR_LABELS: &[&str] = &["form_factor", "Form Factor", "module_type"];

/// Total capacity in GB: 0–35.
const CAPACITY_POINTS: &[Bucket<()>] = &[
    Bucket::at(64.0, 35),
    Bucket::at(32.0, 32),
    Bucket::at(16.0, 25),
    Bucket::at(8.0, 12),
];

/// Speed in MT/s: 0–35.
const SPEED_POINTS: &[Bucket<()>] = &[
    Bucket::at(6000.0, 35),
    Bucket::at(5200.0, 30),
    Bucket::at(3600.0, 26),
    Bucket::at(3200.0, 22),
    Bucket::at(2666.0, 15),
];

/// Awarded when capacity or speed cannot be found at all.
const AVERAGE_POINTS: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemorySpecs {
    pub capacity_gb: f64,
    pub speed_mts: f64,
    /// DDR generation (3, 4, 5), `None` when it could not be determined.
    pub generation: Option<u8>,
}

/// Explicit field, then kit notation, then the product name. `None` when
/// no capacity is stated anywhere.
fn resolve_capacity(specs: &SpecSheet, name: &str) -> Option<f64> {
    kit_capacity_gb(&specs.text(CAPACITY_LABELS))
        .or_else(|| specs.measured(CAPACITY_LABELS))
        .or_else(|| kit_capacity_gb(&specs.text(MODULE_LABELS)))
        .or_else(|| kit_capacity_gb(name))
        .or_else(|| capacity_gb(name))
}

/// Explicit field (pattern first, then plain number), then the product name.
/// Small positive plain numbers are not speeds and are skipped.
fn resolve_speed(specs: &SpecSheet, name: &str) -> Option<f64> {
    memory_speed(&specs.text(SPEED_LABELS))
        .or_else(|| {
            specs
                .measured(SPEED_LABELS)
                .filter(|n| *n >= 800.0 || *n < 0.0)
        })
        .or_else(|| memory_speed(&specs.text(TYPE_LABELS)))
        .or_else(|| memory_speed(name))
}

/// Type field, form factor, name, then a guess from the resolved speed.
fn resolve_generation(specs: &SpecSheet, name: &str, speed: f64) -> Option<u8> {
    ddr_generation(&specs.text(TYPE_LABELS))
        .or_else(|| ddr_generation(&specs.text(FORM_FACTOR_LABELS)))
        .or_else(|| ddr_generation(name))
        .or_else(|| infer_generation(speed))
}

fn infer_generation(speed: f64) -> Option<u8> {
    if speed >= 4800.0 {
        Some(5)
    } else if speed >= 2133.0 {
        Some(4)
    } else if speed > 0.0 {
        Some(3)
    } else {
        None
    }
}

pub fn score_memory(component: Option<&Component>) -> CategoryReport {
    let Some(specs) = sheet(component) else {
        return CategoryReport::missing(Category::Memory);
    };
    let name = component.map(|c| c.name.as_str()).unwrap_or_default();

    let capacity = resolve_capacity(specs, name);
    let speed = resolve_speed(specs, name);
    let generation = resolve_generation(specs, name, speed.unwrap_or(0.0));

    let mut issues = Vec::new();

    let capacity_pts = match capacity {
        Some(gb) => {
            if gb > 0.0 && gb < 16.0 {
                issues.push(format!(
                    "Only {gb:.0} GB of RAM: 16 GB is the practical minimum today"
                ));
            }
            bucket_points(gb, CAPACITY_POINTS, 5)
        }
        None => AVERAGE_POINTS,
    };

    let speed_pts = match speed {
        Some(mts) => {
            if mts > 0.0 && mts < 2666.0 {
                issues.push(format!("Slow memory ({mts:.0} MT/s)"));
            }
            bucket_points(mts, SPEED_POINTS, 8)
        }
        None => AVERAGE_POINTS,
    };

    let generation_pts = match generation {
        Some(5) => 30,
        Some(4) => 22,
        Some(3) => {
            issues.push("DDR3 memory is obsolete and limits platform upgrades".to_string());
            8
        }
        _ => 15,
    };

    debug!(
        capacity = capacity_pts,
        speed = speed_pts,
        generation = generation_pts,
        "memory criteria"
    );

    CategoryReport::scored(
        Category::Memory,
        capacity_pts + speed_pts + generation_pts,
        issues,
        NormalizedSpecs::Memory(MemorySpecs {
            capacity_gb: capacity.unwrap_or(0.0),
            speed_mts: speed.unwrap_or(0.0),
            generation,
        }),
    )
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
