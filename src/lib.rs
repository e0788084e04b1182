//! Deterministic performance and compatibility scoring for PC builds.
//!
//! Components arrive as loosely structured spec sheets. Each category is
//! scored on its own, the scores are cross-checked for imbalance, and the
//! results are folded into a single [`SystemReport`].

pub mod advisor;
pub mod analysis;
pub mod catalog;
pub mod component;
pub mod report_helpers;
pub mod scoring;
pub mod system;

pub use analysis::{detect_bottleneck, detect_budget_waste};
pub use component::parse_numeric;
pub use scoring::{score_cpu, score_gpu, score_memory, score_power_supply, score_storage};
pub use system::{SystemReport, aggregate_system};
