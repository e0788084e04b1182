use serde::Serialize;
use tracing::debug;

use super::gpu_chips::{self, UNRECOGNIZED_POINTS};
use super::{Bucket, CategoryReport, NormalizedSpecs, RiskLevel, bucket_points, classify, sheet};
use crate::component::{Category, Component};

const VRAM_LABELS: &[&str] = &["memory", "vram", "VRAM", "Memory", "memory_size", "Memory Size"];
const CHIPSET_LABELS: &[&str] = &["chipset", "Chipset", "gpu", "GPU"];
const BOOST_LABELS: &[&str] = &["boost_clock", "Boost Clock", "boost_clock_mhz", "core_clock", "Core Clock"];
const TDP_LABELS: &[&str] = &["tdp", "TDP", "tgp", "TGP", "power", "Power Consumption"];

/// VRAM in GB: 0–40.
const VRAM_POINTS: &[Bucket<()>] = &[
    Bucket::at(24.0, 40),
    Bucket::at(16.0, 35),
    Bucket::at(12.0, 32),
    Bucket::at(8.0, 28),
    Bucket::at(6.0, 20),
    Bucket::at(4.0, 12),
];

/// Boost clock in MHz: 0–15.
const BOOST_POINTS: &[Bucket<()>] = &[
    Bucket::at(2500.0, 15),
    Bucket::at(2200.0, 13),
    Bucket::at(1900.0, 11),
    Bucket::at(1700.0, 9),
    Bucket::at(1500.0, 6),
];

/// Board power in watts: 0–10. Lower draw scores higher.
const POWER_POINTS: &[Bucket<RiskLevel>] = &[
    Bucket::tagged(450.0, 2, RiskLevel::Extreme),
    Bucket::tagged(320.0, 4, RiskLevel::Severe),
    Bucket::tagged(220.0, 6, RiskLevel::Medium),
    Bucket::tagged(120.0, 8, RiskLevel::Low),
];

/// How the chip lookup classified the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GpuGeneration {
    /// Matched a named model.
    Current,
    /// Matched only an older-generation catch-all.
    Older,
    /// Matched nothing.
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpuSpecs {
    pub vram_gb: f64,
    pub chip: Option<String>,
    pub generation: GpuGeneration,
    pub boost_clock_mhz: f64,
    pub tdp_w: f64,
    pub power_risk: RiskLevel,
}

/// Clock values below 10 are taken to be GHz.
fn to_mhz(clock: f64) -> f64 {
    if clock > 0.0 && clock < 10.0 { clock * 1000.0 } else { clock }
}

pub fn score_gpu(component: Option<&Component>) -> CategoryReport {
    let Some(specs) = sheet(component) else {
        return CategoryReport::missing(Category::Gpu);
    };
    let name = component.map(|c| c.name.as_str()).unwrap_or_default();

    let vram = specs.number(VRAM_LABELS);
    let boost = to_mhz(specs.number(BOOST_LABELS));
    let tdp = specs.number(TDP_LABELS);

    let mut issues = Vec::new();

    let vram_pts = bucket_points(vram, VRAM_POINTS, 5);
    if vram > 0.0 && vram < 8.0 {
        issues.push(format!(
            "Only {vram:.0} GB of VRAM: modern games will need lower texture settings"
        ));
    }

    let haystack = format!("{name} {}", specs.text(CHIPSET_LABELS));
    let (chip_pts, chip, generation) = match gpu_chips::lookup(&haystack) {
        Some(c) => (c.points, Some(c.pattern.to_string()), c.generation),
        None => (UNRECOGNIZED_POINTS, None, GpuGeneration::Unrecognized),
    };
    if generation == GpuGeneration::Older {
        issues.push("Older GPU generation: no modern upscaling or ray tracing support".to_string());
    }

    let boost_pts = bucket_points(boost, BOOST_POINTS, 3);

    let (power_pts, power_risk) = classify(tdp, POWER_POINTS, (10, RiskLevel::Low));
    match power_risk {
        RiskLevel::Extreme => issues.push(format!(
            "Extreme board power ({tdp:.0} W): needs a high-wattage PSU and strong airflow"
        )),
        RiskLevel::Severe => issues.push(format!(
            "High board power ({tdp:.0} W): check PSU headroom"
        )),
        RiskLevel::Medium | RiskLevel::Low => {}
    }

    debug!(
        vram = vram_pts,
        chip = chip_pts,
        boost = boost_pts,
        power = power_pts,
        "gpu criteria"
    );

    CategoryReport::scored(
        Category::Gpu,
        vram_pts + chip_pts + boost_pts + power_pts,
        issues,
        NormalizedSpecs::Gpu(GpuSpecs {
            vram_gb: vram,
            chip,
            generation,
            boost_clock_mhz: boost,
            tdp_w: tdp,
            power_risk,
        }),
    )
}

#[cfg(test)]
#[path = "gpu_test.rs"]
mod tests;
