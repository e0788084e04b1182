use serde::Serialize;

use crate::scoring::CategoryReport;

/// PSU wattage above this multiple of the required wattage is overspend.
const PSU_OVERHEAD_LIMIT: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteSeverity {
    Low,
    Medium,
    High,
}

impl WasteSeverity {
    pub fn label(self) -> &'static str {
        match self {
            WasteSeverity::Low => "LOW",
            WasteSeverity::Medium => "MEDIUM",
            WasteSeverity::High => "HIGH",
        }
    }

    /// Severity is a function of the number of triggered rules alone.
    pub fn from_issue_count(count: usize) -> Self {
        match count {
            0 | 1 => WasteSeverity::Low,
            2 => WasteSeverity::Medium,
            _ => WasteSeverity::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetWasteReport {
    pub has_waste: bool,
    pub issues: Vec<String>,
    pub severity: WasteSeverity,
}

/// A report usable as rule input: present and actually scored.
fn scored(report: Option<&CategoryReport>) -> Option<&CategoryReport> {
    report.filter(|r| !r.is_error())
}

fn ram_vs_gpu(ram: &CategoryReport, gpu: &CategoryReport) -> Option<String> {
    let capacity = ram.memory_specs()?.capacity_gb;
    if capacity >= 64.0 && gpu.score < 75 {
        Some(format!(
            "{capacity:.0} GB of RAM is far more than this GPU tier can use; \
             32 GB and a better GPU would serve gaming better"
        ))
    } else if capacity >= 48.0 && gpu.score < 65 {
        Some(format!(
            "{capacity:.0} GB of RAM is generous for this GPU; consider moving budget to the GPU"
        ))
    } else {
        None
    }
}

fn psu_overhead(psu: &CategoryReport) -> Option<String> {
    let specs = psu.psu_specs()?;
    if specs.wattage_w <= 0.0 || specs.required_w <= 0.0 {
        return None;
    }
    let overhead = specs.wattage_w / specs.required_w;
    (overhead > PSU_OVERHEAD_LIMIT).then(|| {
        format!(
            "{:.0} W PSU is {:.0}% of the {:.0} W this build needs; a smaller unit would do",
            specs.wattage_w,
            overhead * 100.0,
            specs.required_w
        )
    })
}

fn cpu_vs_gpu(cpu: &CategoryReport, gpu: &CategoryReport) -> Option<String> {
    if cpu.score >= 85 && gpu.score < 70 {
        Some(format!(
            "High-end CPU ({}) paired with a much weaker GPU ({}); \
             for gaming the GPU budget matters more",
            cpu.score, gpu.score
        ))
    } else if cpu.score >= 80 && gpu.score < 60 {
        Some(format!(
            "Strong CPU ({}) with an entry-level GPU ({}); rebalance toward the GPU",
            cpu.score, gpu.score
        ))
    } else {
        None
    }
}

/// Independent overspend checks; several may fire at once. Rules whose
/// inputs are missing are skipped.
pub fn detect_budget_waste(
    cpu: Option<&CategoryReport>,
    gpu: Option<&CategoryReport>,
    ram: Option<&CategoryReport>,
    psu: Option<&CategoryReport>,
) -> BudgetWasteReport {
    let (cpu, gpu, ram, psu) = (scored(cpu), scored(gpu), scored(ram), scored(psu));

    let mut issues = Vec::new();
    if let (Some(ram), Some(gpu)) = (ram, gpu) {
        issues.extend(ram_vs_gpu(ram, gpu));
    }
    if let Some(psu) = psu {
        issues.extend(psu_overhead(psu));
    }
    if let (Some(cpu), Some(gpu)) = (cpu, gpu) {
        issues.extend(cpu_vs_gpu(cpu, gpu));
    }

    BudgetWasteReport {
        has_waste: !issues.is_empty(),
        severity: WasteSeverity::from_issue_count(issues.len()),
        issues,
    }
}

#[cfg(test)]
#[path = "budget_test.rs"]
mod tests;
