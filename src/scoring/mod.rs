//! Per-category component scoring.
//!
//! Each scorer maps a component's spec sheet to a 0–100 score built from
//! additive criteria. A criterion is an ordered table of `(threshold, points)`
//! rows evaluated top-down with early exit, so a value satisfying several rows
//! is credited with the best one. Per-criterion maxima sum to 100.
//!
//! Tier, status and message are derived from the final score by the same
//! shared table for every category.

pub mod cpu;
pub mod gpu;
mod gpu_chips;
pub mod memory;
pub mod psu;
pub mod storage;

use std::fmt;

use serde::Serialize;

use crate::component::{Category, Component, SpecSheet};

pub use cpu::{CpuSpecs, score_cpu};
pub use gpu::{GpuGeneration, GpuSpecs, score_gpu};
pub use memory::{MemorySpecs, score_memory};
pub use psu::{Modularity, PsuSpecs, required_wattage, score_power_supply};
pub use storage::{StorageSpecs, StorageTech, score_storage};

/// Single-letter quality grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
    F,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
            Tier::D => "D",
            Tier::F => "F",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tier for an integer score. The only place tier bands are defined.
pub fn score_to_tier(score: u8) -> Tier {
    match score {
        85.. => Tier::S,
        75..=84 => Tier::A,
        60..=74 => Tier::B,
        45..=59 => Tier::C,
        30..=44 => Tier::D,
        _ => Tier::F,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Excellent,
    VeryGood,
    Good,
    Acceptable,
    Weak,
    Poor,
    /// No spec sheet at all; nothing was scored.
    Error,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Excellent => "excellent",
            Status::VeryGood => "very good",
            Status::Good => "good",
            Status::Acceptable => "acceptable",
            Status::Weak => "weak",
            Status::Poor => "poor",
            Status::Error => "error",
        }
    }
}

fn tier_status(tier: Tier) -> (Status, &'static str) {
    match tier {
        Tier::S => (Status::Excellent, "Top-end part, nothing to improve"),
        Tier::A => (Status::VeryGood, "Very capable part for demanding workloads"),
        Tier::B => (Status::Good, "Solid part for mainstream use"),
        Tier::C => (Status::Acceptable, "Adequate for everyday use, limited headroom"),
        Tier::D => (Status::Weak, "Entry-level part, expect compromises"),
        Tier::F => (Status::Poor, "Underpowered part, consider replacing it"),
    }
}

/// Technical risk tag, ordered from least to most serious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    Severe,
    Extreme,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::Severe => "SEVERE",
            RiskLevel::Extreme => "EXTREME",
        }
    }
}

/// One row of a bucket table: values `>= min` (or `> min` when `exclusive`)
/// earn `points` and `tag`.
#[derive(Debug, Clone, Copy)]
pub struct Bucket<T> {
    pub min: f64,
    pub exclusive: bool,
    pub points: u32,
    pub tag: T,
}

impl<T> Bucket<T> {
    pub const fn tagged(min: f64, points: u32, tag: T) -> Self {
        Bucket {
            min,
            exclusive: false,
            points,
            tag,
        }
    }

    /// Row that only matches values strictly above `min`.
    pub const fn above(min: f64, points: u32, tag: T) -> Self {
        Bucket {
            min,
            exclusive: true,
            points,
            tag,
        }
    }

    fn matches(&self, value: f64) -> bool {
        if self.exclusive {
            value > self.min
        } else {
            value >= self.min
        }
    }
}

impl Bucket<()> {
    pub const fn at(min: f64, points: u32) -> Self {
        Bucket::tagged(min, points, ())
    }
}

/// Evaluate a bucket table top-down; the first row whose threshold is met
/// wins, otherwise `fallback` applies. Rows must be sorted by descending `min`.
pub fn classify<T: Copy>(value: f64, table: &[Bucket<T>], fallback: (u32, T)) -> (u32, T) {
    debug_assert!(
        table.windows(2).all(|w| w[0].min >= w[1].min),
        "Bucket thresholds must be sorted in descending order"
    );
    table
        .iter()
        .find(|b| b.matches(value))
        .map(|b| (b.points, b.tag))
        .unwrap_or(fallback)
}

/// Points only, for tables without a tag.
pub fn bucket_points(value: f64, table: &[Bucket<()>], fallback: u32) -> u32 {
    classify(value, table, (fallback, ())).0
}

/// Normalized fields extracted for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizedSpecs {
    Cpu(CpuSpecs),
    Gpu(GpuSpecs),
    Memory(MemorySpecs),
    Storage(StorageSpecs),
    PowerSupply(PsuSpecs),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReport {
    pub category: Category,
    pub score: u8,
    pub tier: Tier,
    pub status: Status,
    pub message: String,
    pub issues: Vec<String>,
    pub specs: Option<NormalizedSpecs>,
}

impl CategoryReport {
    /// Hard failure report for a component with no spec sheet.
    pub fn missing(category: Category) -> Self {
        Self {
            category,
            score: 0,
            tier: Tier::F,
            status: Status::Error,
            message: "No specification data available".to_string(),
            issues: Vec::new(),
            specs: None,
        }
    }

    /// Build a report from accumulated criterion points.
    pub(crate) fn scored(
        category: Category,
        points: u32,
        issues: Vec<String>,
        specs: NormalizedSpecs,
    ) -> Self {
        let score = points.min(100) as u8;
        let tier = score_to_tier(score);
        let (status, message) = tier_status(tier);
        Self {
            category,
            score,
            tier,
            status,
            message: message.to_string(),
            issues,
            specs: Some(specs),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }

    pub fn cpu_specs(&self) -> Option<&CpuSpecs> {
        match &self.specs {
            Some(NormalizedSpecs::Cpu(s)) => Some(s),
            _ => None,
        }
    }

    pub fn gpu_specs(&self) -> Option<&GpuSpecs> {
        match &self.specs {
            Some(NormalizedSpecs::Gpu(s)) => Some(s),
            _ => None,
        }
    }

    pub fn memory_specs(&self) -> Option<&MemorySpecs> {
        match &self.specs {
            Some(NormalizedSpecs::Memory(s)) => Some(s),
            _ => None,
        }
    }

    pub fn storage_specs(&self) -> Option<&StorageSpecs> {
        match &self.specs {
            Some(NormalizedSpecs::Storage(s)) => Some(s),
            _ => None,
        }
    }

    pub fn psu_specs(&self) -> Option<&PsuSpecs> {
        match &self.specs {
            Some(NormalizedSpecs::PowerSupply(s)) => Some(s),
            _ => None,
        }
    }
}

/// Spec sheet of a present component, or `None` when the component or its
/// sheet is absent.
pub(crate) fn sheet(component: Option<&Component>) -> Option<&SpecSheet> {
    component.and_then(|c| c.specs.as_ref())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
