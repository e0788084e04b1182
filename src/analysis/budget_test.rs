use super::*;
use crate::analysis::test_support::{report_for, report_with_score, with_score};
use crate::component::{Category, Component, SpecSheet};
use crate::scoring::{score_cpu, score_gpu, score_power_supply};

fn ram(capacity_gb: f64) -> CategoryReport {
    report_for(
        Category::Memory,
        SpecSheet::new().with("capacity", capacity_gb),
    )
}

fn psu(wattage: f64, cpu_tdp: f64, gpu_tdp: f64) -> CategoryReport {
    let cpu = score_cpu(Some(&Component::new(
        Category::Cpu,
        "CPU",
        SpecSheet::new().with("tdp", cpu_tdp),
    )));
    let gpu = score_gpu(Some(&Component::new(
        Category::Gpu,
        "GPU",
        SpecSheet::new().with("tdp", gpu_tdp),
    )));
    let unit = Component::new(
        Category::PowerSupply,
        "PSU",
        SpecSheet::new().with("wattage", wattage),
    );
    score_power_supply(Some(&unit), Some(&cpu), Some(&gpu))
}

#[test]
fn balanced_build_has_no_waste() {
    let cpu = report_with_score(Category::Cpu, 75);
    let gpu = report_with_score(Category::Gpu, 78);
    let r = detect_budget_waste(
        Some(&cpu),
        Some(&gpu),
        Some(&ram(32.0)),
        Some(&psu(750.0, 125.0, 320.0)),
    );
    assert!(!r.has_waste);
    assert!(r.issues.is_empty());
    assert_eq!(r.severity, WasteSeverity::Low);
}

#[test]
fn large_ram_with_midrange_gpu() {
    let gpu = report_with_score(Category::Gpu, 70);
    let r = detect_budget_waste(None, Some(&gpu), Some(&ram(64.0)), None);
    assert_eq!(r.issues.len(), 1);
    assert!(r.issues[0].contains("64 GB"));

    // 48 GB only counts against a weaker GPU
    let r = detect_budget_waste(None, Some(&gpu), Some(&ram(48.0)), None);
    assert!(!r.has_waste);
    let weak = with_score(gpu, 60);
    let r = detect_budget_waste(None, Some(&weak), Some(&ram(48.0)), None);
    assert!(r.has_waste);
}

#[test]
fn oversized_psu() {
    // required 100 + 65 + 120 = 285 W
    let r = detect_budget_waste(None, None, None, Some(&psu(1000.0, 65.0, 120.0)));
    assert_eq!(r.issues.len(), 1);
    assert!(r.issues[0].contains("1000 W"));

    // 1.5x is the limit itself, not waste
    let r = detect_budget_waste(None, None, None, Some(&psu(427.5, 65.0, 120.0)));
    assert!(!r.has_waste);
}

#[test]
fn psu_without_wattage_is_skipped() {
    let unknown = report_for(Category::PowerSupply, SpecSheet::new());
    let r = detect_budget_waste(None, None, None, Some(&unknown));
    assert!(!r.has_waste);
}

#[test]
fn cpu_gpu_imbalance_rules() {
    let gpu = report_with_score(Category::Gpu, 65);
    let cpu = report_with_score(Category::Cpu, 88);
    assert!(detect_budget_waste(Some(&cpu), Some(&gpu), None, None).has_waste);

    // 82 with 65 misses both rules
    let cpu = report_with_score(Category::Cpu, 82);
    assert!(!detect_budget_waste(Some(&cpu), Some(&gpu), None, None).has_waste);

    let gpu = report_with_score(Category::Gpu, 55);
    assert!(detect_budget_waste(Some(&cpu), Some(&gpu), None, None).has_waste);
}

#[test]
fn severity_follows_issue_count() {
    let cpu = report_with_score(Category::Cpu, 90);
    let gpu = report_with_score(Category::Gpu, 50);
    let r = detect_budget_waste(Some(&cpu), Some(&gpu), Some(&ram(64.0)), None);
    assert_eq!(r.issues.len(), 2);
    assert_eq!(r.severity, WasteSeverity::Medium);

    let r = detect_budget_waste(
        Some(&cpu),
        Some(&gpu),
        Some(&ram(64.0)),
        Some(&psu(1200.0, 65.0, 120.0)),
    );
    assert_eq!(r.issues.len(), 3);
    assert_eq!(r.severity, WasteSeverity::High);
}

#[test]
fn error_reports_are_skipped() {
    let cpu = report_with_score(Category::Cpu, 95);
    let gpu = CategoryReport::missing(Category::Gpu);
    let r = detect_budget_waste(Some(&cpu), Some(&gpu), Some(&ram(128.0)), None);
    assert!(!r.has_waste);
}
