//! Power supply scoring.
//!
//! The PSU is judged against the rest of the build: required wattage is the
//! CPU and GPU TDP plus a fixed system overhead, and the recommendation adds
//! 25% headroom on top of that.

use serde::Serialize;
use tracing::debug;

use super::{Bucket, CategoryReport, NormalizedSpecs, RiskLevel, classify, sheet};
use crate::component::{Category, Component, SpecValue};

const WATTAGE_LABELS: &[&str] = &["wattage", "Wattage", "power", "Power", "capacity", "output"];
const EFFICIENCY_LABELS: &[&str] = &[
    "efficiency",
    "Efficiency",
    "efficiency_rating",
    "Efficiency Rating",
    "certification",
    "80_plus",
];
const MODULAR_LABELS: &[&str] = &["modular", "Modular", "modularity", "Modularity"];

/// Motherboard, drives, fans and peripherals.
pub const SYSTEM_OVERHEAD_W: f64 = 100.0;
pub const HEADROOM_FACTOR: f64 = 1.25;

/// Wattage / recommended wattage: 0–50.
const RATIO_POINTS: &[Bucket<RiskLevel>] = &[
    Bucket::tagged(1.4, 50, RiskLevel::Low),
    Bucket::tagged(1.15, 42, RiskLevel::Low),
    Bucket::tagged(1.0, 34, RiskLevel::Medium),
    Bucket::tagged(0.85, 18, RiskLevel::Severe),
];

const UNKNOWN_WATTAGE_POINTS: u32 = 25;

/// 80 Plus tiers, most specific first so "80 Plus Gold" is not read as plain 80 Plus.
const EFFICIENCY_TIERS: &[(&str, u32)] = &[
    ("titanium", 30),
    ("platinum", 27),
    ("gold", 22),
    ("silver", 15),
    ("bronze", 12),
    ("80 plus", 8),
    ("80plus", 8),
    ("80+", 8),
    ("white", 8),
    ("standard", 8),
];
const UNRECOGNIZED_EFFICIENCY_POINTS: u32 = 3;
const UNKNOWN_EFFICIENCY_POINTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Modularity {
    Full,
    Semi,
    NonModular,
    Unknown,
}

impl Modularity {
    /// Points out of 20.
    fn points(self) -> u32 {
        match self {
            Modularity::Full => 20,
            Modularity::Semi => 12,
            Modularity::NonModular => 5,
            Modularity::Unknown => 10,
        }
    }

    fn detect(value: Option<&SpecValue>) -> Self {
        let text = match value {
            None => return Modularity::Unknown,
            Some(SpecValue::Flag(true)) => return Modularity::Full,
            Some(SpecValue::Flag(false)) => return Modularity::NonModular,
            Some(v) => v.as_text().to_lowercase(),
        };
        // "semi-modular" and "non-modular" both contain "modular"
        if text.contains("semi") {
            Modularity::Semi
        } else if text.contains("non") || text == "no" || text == "false" {
            Modularity::NonModular
        } else if text.contains("full") || text.contains("modular") || text == "yes" || text == "true" {
            Modularity::Full
        } else {
            Modularity::Unknown
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PsuSpecs {
    pub wattage_w: f64,
    pub required_w: f64,
    pub recommended_w: f64,
    /// Wattage over recommended wattage, `0` when wattage is unknown.
    pub ratio: f64,
    pub sufficient: bool,
    pub power_level: RiskLevel,
    pub efficiency: Option<String>,
    pub modularity: Modularity,
}

/// Required wattage from the CPU and GPU reports (missing TDPs count as 0).
pub fn required_wattage(cpu: Option<&CategoryReport>, gpu: Option<&CategoryReport>) -> f64 {
    let cpu_tdp = cpu.and_then(|r| r.cpu_specs()).map_or(0.0, |s| s.tdp_w);
    let gpu_tdp = gpu.and_then(|r| r.gpu_specs()).map_or(0.0, |s| s.tdp_w);
    cpu_tdp + gpu_tdp + SYSTEM_OVERHEAD_W
}

pub fn score_power_supply(
    component: Option<&Component>,
    cpu: Option<&CategoryReport>,
    gpu: Option<&CategoryReport>,
) -> CategoryReport {
    let Some(specs) = sheet(component) else {
        return CategoryReport::missing(Category::PowerSupply);
    };

    let wattage = specs.measured(WATTAGE_LABELS);
    let required = required_wattage(cpu, gpu);
    let recommended = required * HEADROOM_FACTOR;

    let mut issues = Vec::new();

    let (ratio, ratio_pts, power_level) = match wattage {
        Some(watts) => {
            let ratio = watts / recommended;
            let (pts, level) = classify(ratio, RATIO_POINTS, (5, RiskLevel::Extreme));
            match level {
                RiskLevel::Extreme => issues.push(format!(
                    "PSU is badly undersized: {watts:.0} W for a recommended {recommended:.0} W"
                )),
                RiskLevel::Severe => issues.push(format!(
                    "PSU is below the recommended {recommended:.0} W: little margin under load"
                )),
                RiskLevel::Medium | RiskLevel::Low => {}
            }
            (ratio, pts, level)
        }
        None => (0.0, UNKNOWN_WATTAGE_POINTS, RiskLevel::Low),
    };

    let efficiency_text = specs.text(EFFICIENCY_LABELS);
    let efficiency_lower = efficiency_text.to_lowercase();
    let efficiency_pts = if efficiency_text.trim().is_empty() {
        UNKNOWN_EFFICIENCY_POINTS
    } else {
        EFFICIENCY_TIERS
            .iter()
            .find(|(tier, _)| efficiency_lower.contains(*tier))
            .map(|(_, pts)| *pts)
            .unwrap_or_else(|| {
                issues.push(format!(
                    "Unrecognized efficiency certification '{efficiency_text}'"
                ));
                UNRECOGNIZED_EFFICIENCY_POINTS
            })
    };

    let modularity = Modularity::detect(specs.first(MODULAR_LABELS));
    let modular_pts = modularity.points();

    debug!(
        ratio = ratio_pts,
        efficiency = efficiency_pts,
        modularity = modular_pts,
        required_w = required,
        "psu criteria"
    );

    CategoryReport::scored(
        Category::PowerSupply,
        ratio_pts + efficiency_pts + modular_pts,
        issues,
        NormalizedSpecs::PowerSupply(PsuSpecs {
            wattage_w: wattage.unwrap_or(0.0),
            required_w: required,
            recommended_w: recommended,
            ratio,
            sufficient: ratio >= 1.0,
            power_level,
            efficiency: (!efficiency_text.trim().is_empty()).then_some(efficiency_text),
            modularity,
        }),
    )
}

#[cfg(test)]
#[path = "psu_test.rs"]
mod tests;
