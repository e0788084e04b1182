//! Cross-component checks that run on already-scored category reports.

pub mod bottleneck;
pub mod budget;

pub use bottleneck::{BottleneckLevel, BottleneckReport, WeakerComponent, detect_bottleneck};
pub use budget::{BudgetWasteReport, WasteSeverity, detect_budget_waste};
