use std::collections::HashSet;

use serde::Serialize;

use crate::analysis::{
    BottleneckLevel, BottleneckReport, BudgetWasteReport, WasteSeverity, detect_bottleneck,
    detect_budget_waste,
};
use crate::component::Build;
use crate::scoring::{
    CategoryReport, RiskLevel, Tier, score_cpu, score_gpu, score_memory, score_power_supply,
    score_storage, score_to_tier,
};

/// Category weights for the overall score (sum to 1.0).
const W_CPU: f64 = 0.25;
const W_GPU: f64 = 0.25;
const W_MEMORY: f64 = 0.20;
const W_STORAGE: f64 = 0.15;
const W_PSU: f64 = 0.15;

const FALLBACK_USE: &str = "Office and web browsing";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemReport {
    pub cpu: CategoryReport,
    pub gpu: CategoryReport,
    pub memory: CategoryReport,
    pub storage: CategoryReport,
    pub power_supply: CategoryReport,
    pub bottleneck: BottleneckReport,
    pub budget: BudgetWasteReport,
    pub overall_score: u8,
    pub overall_tier: Tier,
    pub problem_level: RiskLevel,
    pub issues: Vec<String>,
    pub recommended_uses: Vec<String>,
}

impl SystemReport {
    /// Category reports in weighting order, paired with their weight.
    pub fn weighted_categories(&self) -> [(&CategoryReport, f64); 5] {
        [
            (&self.cpu, W_CPU),
            (&self.gpu, W_GPU),
            (&self.memory, W_MEMORY),
            (&self.storage, W_STORAGE),
            (&self.power_supply, W_PSU),
        ]
    }
}

/// Score every slot of `build` and combine the results into one verdict.
pub fn aggregate_system(build: &Build) -> SystemReport {
    let cpu = score_cpu(build.cpu.as_ref());
    let gpu = score_gpu(build.gpu.as_ref());
    let memory = score_memory(build.memory.as_ref());
    let storage = score_storage(build.storage.as_ref());
    let power_supply = score_power_supply(build.power_supply.as_ref(), Some(&cpu), Some(&gpu));

    let bottleneck = detect_bottleneck(Some(&cpu), Some(&gpu));
    let budget = detect_budget_waste(Some(&cpu), Some(&gpu), Some(&memory), Some(&power_supply));

    let overall_score = overall_score(&[
        (cpu.score, W_CPU),
        (gpu.score, W_GPU),
        (memory.score, W_MEMORY),
        (storage.score, W_STORAGE),
        (power_supply.score, W_PSU),
    ]);
    let problem_level = problem_level(&cpu, &gpu, &power_supply, &bottleneck, &budget);
    let issues = collect_issues(
        [&cpu, &gpu, &memory, &storage, &power_supply],
        &bottleneck,
        &budget,
    );
    let recommended_uses = recommended_uses(&cpu, &gpu, &memory);

    tracing::debug!(overall_score, ?problem_level, issues = issues.len(), "system aggregated");

    SystemReport {
        cpu,
        gpu,
        memory,
        storage,
        power_supply,
        bottleneck,
        budget,
        overall_score,
        overall_tier: score_to_tier(overall_score),
        problem_level,
        issues,
        recommended_uses,
    }
}

fn overall_score(weighted: &[(u8, f64)]) -> u8 {
    let total: f64 = weighted.iter().map(|(s, w)| f64::from(*s) * w).sum();
    total.round().clamp(0.0, 100.0) as u8
}

/// Worst technical risk across the build. Balance signals can lift a `Low`
/// result to `Medium` but never further.
fn problem_level(
    cpu: &CategoryReport,
    gpu: &CategoryReport,
    psu: &CategoryReport,
    bottleneck: &BottleneckReport,
    budget: &BudgetWasteReport,
) -> RiskLevel {
    let worst = [
        cpu.cpu_specs().map(|s| s.thermal_risk),
        gpu.gpu_specs().map(|s| s.power_risk),
        psu.psu_specs().map(|s| s.power_level),
    ]
    .into_iter()
    .flatten()
    .max()
    .unwrap_or(RiskLevel::Low);

    let imbalanced = bottleneck.level >= BottleneckLevel::Medium
        || budget.severity >= WasteSeverity::Medium;
    if worst == RiskLevel::Low && imbalanced {
        RiskLevel::Medium
    } else {
        worst
    }
}

fn collect_issues(
    categories: [&CategoryReport; 5],
    bottleneck: &BottleneckReport,
    budget: &BudgetWasteReport,
) -> Vec<String> {
    let category_issues = categories.into_iter().flat_map(|r| r.issues.iter());
    let bottleneck_issue = bottleneck
        .level
        .is_problem()
        .then_some(&bottleneck.message);

    let mut seen = HashSet::new();
    category_issues
        .chain(bottleneck_issue)
        .chain(budget.issues.iter())
        .filter(|issue| seen.insert(*issue))
        .cloned()
        .collect()
}

fn recommended_uses(
    cpu: &CategoryReport,
    gpu: &CategoryReport,
    memory: &CategoryReport,
) -> Vec<String> {
    let mut uses: Vec<&str> = Vec::new();

    if !gpu.is_error() {
        match gpu.score {
            85.. => uses.extend(["4K gaming", "Ray tracing"]),
            70..=84 => uses.push("1440p gaming"),
            55..=69 => uses.push("1080p gaming"),
            35..=54 => uses.push("Esports and light gaming"),
            _ => {}
        }
    }
    if !cpu.is_error() && matches!(cpu.tier, Tier::S | Tier::A) {
        uses.extend(["Programming", "Code compilation", "Virtual machines"]);
    }
    if memory.memory_specs().is_some_and(|s| s.capacity_gb >= 32.0) {
        uses.push("Video editing and 3D rendering");
    }
    if uses.is_empty() {
        uses.push(FALLBACK_USE);
    }

    uses.into_iter().map(String::from).collect()
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
