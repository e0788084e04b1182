use serde::Serialize;

use crate::scoring::CategoryReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BottleneckLevel {
    None,
    /// A small gap that is normal for real builds; reported as fine.
    Low,
    Medium,
    Severe,
    Extreme,
}

impl BottleneckLevel {
    pub fn label(self) -> &'static str {
        match self {
            BottleneckLevel::None => "NONE",
            BottleneckLevel::Low => "LOW",
            BottleneckLevel::Medium => "MEDIUM",
            BottleneckLevel::Severe => "SEVERE",
            BottleneckLevel::Extreme => "EXTREME",
        }
    }

    /// Whether this level is worth telling the user about.
    pub fn is_problem(self) -> bool {
        self >= BottleneckLevel::Medium
    }

    fn from_difference(diff: u8) -> Self {
        match diff {
            36.. => BottleneckLevel::Extreme,
            26..=35 => BottleneckLevel::Severe,
            16..=25 => BottleneckLevel::Medium,
            9..=15 => BottleneckLevel::Low,
            _ => BottleneckLevel::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeakerComponent {
    Cpu,
    Gpu,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BottleneckReport {
    pub level: BottleneckLevel,
    pub weaker_component: WeakerComponent,
    pub difference: u8,
    pub message: String,
    pub recommendation: String,
}

impl BottleneckReport {
    fn neutral(message: &str) -> Self {
        Self {
            level: BottleneckLevel::None,
            weaker_component: WeakerComponent::None,
            difference: 0,
            message: message.to_string(),
            recommendation: String::new(),
        }
    }
}

/// Compare CPU and GPU scores. Either report missing (or an error report)
/// yields a neutral result.
pub fn detect_bottleneck(
    cpu: Option<&CategoryReport>,
    gpu: Option<&CategoryReport>,
) -> BottleneckReport {
    let (Some(cpu), Some(gpu)) = (cpu, gpu) else {
        return BottleneckReport::neutral("Select both a CPU and a GPU to check for bottlenecks");
    };
    if cpu.is_error() || gpu.is_error() {
        return BottleneckReport::neutral("Select both a CPU and a GPU to check for bottlenecks");
    }

    let diff = cpu.score.abs_diff(gpu.score);
    let level = BottleneckLevel::from_difference(diff);
    let weaker = match cpu.score.cmp(&gpu.score) {
        std::cmp::Ordering::Less => WeakerComponent::Cpu,
        std::cmp::Ordering::Greater => WeakerComponent::Gpu,
        std::cmp::Ordering::Equal => WeakerComponent::None,
    };

    let (weak, strong) = match weaker {
        WeakerComponent::Cpu => ("CPU", "GPU"),
        _ => ("GPU", "CPU"),
    };

    let message = match level {
        BottleneckLevel::None => "CPU and GPU are well balanced".to_string(),
        BottleneckLevel::Low => format!(
            "Small {diff}-point gap between CPU and GPU; normal for real builds"
        ),
        BottleneckLevel::Medium => format!(
            "The {weak} may hold back the {strong} in some workloads ({diff}-point gap)"
        ),
        BottleneckLevel::Severe => format!(
            "The {weak} is a clear bottleneck for the {strong} ({diff}-point gap)"
        ),
        BottleneckLevel::Extreme => format!(
            "The {weak} severely limits the {strong} ({diff}-point gap)"
        ),
    };

    let recommendation = if level.is_problem() {
        match weaker {
            WeakerComponent::Cpu => {
                "Upgrade the CPU, or move budget from the GPU to the CPU".to_string()
            }
            _ => "Upgrade the GPU, or move budget from the CPU to the GPU".to_string(),
        }
    } else {
        String::new()
    };

    BottleneckReport {
        level,
        weaker_component: weaker,
        difference: diff,
        message,
        recommendation,
    }
}

#[cfg(test)]
#[path = "bottleneck_test.rs"]
mod tests;
