use serde::Serialize;
use tracing::debug;

use super::{Bucket, CategoryReport, NormalizedSpecs, RiskLevel, bucket_points, classify, sheet};
use crate::component::{Category, Component};

const CORE_LABELS: &[&str] = &["cores", "core_count", "Core Count", "Cores", "Total Cores"];
const BOOST_LABELS: &[&str] = &[
    "boost_clock",
    "Boost Clock",
    "Performance Core Boost Clock",
    "max_boost_clock",
    "Max Turbo Frequency",
    "turbo_clock",
];
const TDP_LABELS: &[&str] = &["tdp", "TDP", "Thermal Design Power", "Default TDP", "power"];
const L3_LABELS: &[&str] = &["l3_cache", "L3 Cache", "L3", "cache", "Cache"];

/// Core count: 0–35.
const CORE_POINTS: &[Bucket<()>] = &[
    Bucket::at(16.0, 35),
    Bucket::at(12.0, 30),
    Bucket::at(8.0, 25),
    Bucket::at(6.0, 18),
    Bucket::at(4.0, 12),
];

/// Boost clock in GHz: 0–30.
const BOOST_POINTS: &[Bucket<()>] = &[
    Bucket::at(5.0, 30),
    Bucket::at(4.5, 25),
    Bucket::at(4.0, 20),
    Bucket::at(3.5, 14),
    Bucket::at(3.0, 8),
];

/// TDP in watts: 0–20. Lower draw scores higher. 105–140 W is normal for
/// current desktop parts and stays at medium risk without an issue; anything
/// above 140 W is severe.
const THERMAL_POINTS: &[Bucket<RiskLevel>] = &[
    Bucket::tagged(200.0, 5, RiskLevel::Extreme),
    Bucket::above(140.0, 10, RiskLevel::Severe),
    Bucket::tagged(105.0, 15, RiskLevel::Medium),
];

/// L3 cache in MB: 0–15.
const L3_POINTS: &[Bucket<()>] = &[
    Bucket::at(32.0, 15),
    Bucket::at(16.0, 12),
    Bucket::at(8.0, 8),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpuSpecs {
    pub cores: f64,
    pub boost_clock_ghz: f64,
    pub tdp_w: f64,
    pub l3_cache_mb: f64,
    pub thermal_risk: RiskLevel,
}

/// Clock values above 100 are taken to be MHz.
fn to_ghz(clock: f64) -> f64 {
    if clock > 100.0 { clock / 1000.0 } else { clock }
}

pub fn score_cpu(component: Option<&Component>) -> CategoryReport {
    let Some(specs) = sheet(component) else {
        return CategoryReport::missing(Category::Cpu);
    };

    let cores = specs.number(CORE_LABELS);
    let boost = to_ghz(specs.number(BOOST_LABELS));
    let tdp = specs.number(TDP_LABELS);
    let l3 = specs.number(L3_LABELS);

    let mut issues = Vec::new();

    let core_pts = bucket_points(cores, CORE_POINTS, 5);
    if cores > 0.0 && cores < 6.0 {
        issues.push(format!(
            "Only {cores:.0} cores: limited for multitasking and modern games"
        ));
    }

    let boost_pts = bucket_points(boost, BOOST_POINTS, 4);
    if boost > 0.0 && boost < 3.5 {
        issues.push(format!(
            "Low boost clock ({boost:.1} GHz): weak single-thread performance"
        ));
    }

    let (thermal_pts, thermal_risk) = classify(tdp, THERMAL_POINTS, (20, RiskLevel::Low));
    match thermal_risk {
        RiskLevel::Extreme => issues.push(format!(
            "Very high TDP ({tdp:.0} W): needs a high-end cooler and good case airflow"
        )),
        RiskLevel::Severe => issues.push(format!(
            "High TDP ({tdp:.0} W): budget for a capable cooler"
        )),
        RiskLevel::Medium | RiskLevel::Low => {}
    }

    let l3_pts = bucket_points(l3, L3_POINTS, 4);
    if l3 > 0.0 && l3 < 8.0 {
        issues.push(format!("Small L3 cache ({l3:.0} MB)"));
    }

    debug!(
        cores = core_pts,
        boost = boost_pts,
        thermal = thermal_pts,
        l3 = l3_pts,
        "cpu criteria"
    );

    CategoryReport::scored(
        Category::Cpu,
        core_pts + boost_pts + thermal_pts + l3_pts,
        issues,
        NormalizedSpecs::Cpu(CpuSpecs {
            cores,
            boost_clock_ghz: boost,
            tdp_w: tdp,
            l3_cache_mb: l3,
            thermal_risk,
        }),
    )
}

#[cfg(test)]
#[path = "cpu_test.rs"]
mod tests;
