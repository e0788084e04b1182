use super::*;
use crate::component::SpecSheet;
use crate::scoring::{Status, score_cpu, score_gpu};

fn psu(specs: SpecSheet) -> Component {
    Component::new(Category::PowerSupply, "Test PSU", specs)
}

fn reports(cpu_tdp: f64, gpu_tdp: f64) -> (CategoryReport, CategoryReport) {
    let cpu = Component::new(Category::Cpu, "CPU", SpecSheet::new().with("tdp", cpu_tdp));
    let gpu = Component::new(Category::Gpu, "GPU", SpecSheet::new().with("tdp", gpu_tdp));
    (score_cpu(Some(&cpu)), score_gpu(Some(&gpu)))
}

#[test]
fn required_wattage_example() {
    let (cpu, gpu) = reports(100.0, 250.0);
    let c = psu(SpecSheet::new().with("wattage", "750 W"));
    let r = score_power_supply(Some(&c), Some(&cpu), Some(&gpu));
    let s = r.psu_specs().unwrap();
    assert_eq!(s.required_w, 450.0);
    assert!((s.recommended_w - 562.5).abs() < 1e-9);
    assert!((s.ratio - 1.3333).abs() < 1e-3);
    assert!(s.sufficient);
    assert_eq!(s.power_level, RiskLevel::Low);
    // 42 (ratio) + 10 (no efficiency) + 10 (no modularity info)
    assert_eq!(r.score, 62);
    assert!(r.issues.is_empty());
}

#[test]
fn full_marks() {
    let (cpu, gpu) = reports(65.0, 200.0);
    let c = psu(SpecSheet::new()
        .with("wattage", 1000.0)
        .with("efficiency", "80+ Titanium")
        .with("modular", "Full"));
    let r = score_power_supply(Some(&c), Some(&cpu), Some(&gpu));
    assert_eq!(r.score, 100);
}

#[test]
fn undersized_psu_is_flagged() {
    let (cpu, gpu) = reports(125.0, 320.0);
    // required 545, recommended 681.25
    let c = psu(SpecSheet::new().with("wattage", 600.0));
    let r = score_power_supply(Some(&c), Some(&cpu), Some(&gpu));
    let s = r.psu_specs().unwrap();
    assert!(!s.sufficient);
    assert_eq!(s.power_level, RiskLevel::Severe);
    assert_eq!(r.issues.len(), 1);

    let c = psu(SpecSheet::new().with("wattage", 450.0));
    let r = score_power_supply(Some(&c), Some(&cpu), Some(&gpu));
    assert_eq!(r.psu_specs().unwrap().power_level, RiskLevel::Extreme);
}

#[test]
fn exactly_recommended_is_sufficient_medium() {
    let (cpu, gpu) = reports(100.0, 300.0);
    // required 500, recommended 625
    let c = psu(SpecSheet::new().with("wattage", 625.0));
    let r = score_power_supply(Some(&c), Some(&cpu), Some(&gpu));
    let s = r.psu_specs().unwrap();
    assert!(s.sufficient);
    assert_eq!(s.power_level, RiskLevel::Medium);
}

#[test]
fn without_cpu_and_gpu_reports_only_overhead_counts() {
    let c = psu(SpecSheet::new().with("wattage", 550.0));
    let r = score_power_supply(Some(&c), None, None);
    assert_eq!(r.psu_specs().unwrap().required_w, SYSTEM_OVERHEAD_W);
}

#[test]
fn efficiency_tiers_match_most_specific_first() {
    let (cpu, gpu) = reports(65.0, 200.0);
    let score_eff = |eff: &str| {
        let c = psu(SpecSheet::new().with("wattage", 1000.0).with("efficiency", eff));
        score_power_supply(Some(&c), Some(&cpu), Some(&gpu)).score
    };
    // 50 (ratio) + efficiency + 10 (modularity unknown)
    assert_eq!(score_eff("80 Plus Gold"), 82);
    assert_eq!(score_eff("80 PLUS Platinum"), 87);
    assert_eq!(score_eff("80 Plus"), 68);
    assert_eq!(score_eff("Bronze"), 72);
}

#[test]
fn unrecognized_efficiency_is_an_issue() {
    let c = psu(SpecSheet::new().with("efficiency", "Cybenetics Diamond"));
    let r = score_power_supply(Some(&c), None, None);
    assert!(r.issues.iter().any(|i| i.contains("Cybenetics Diamond")));
}

#[test]
fn modularity_variants() {
    assert_eq!(Modularity::detect(Some(&"Semi-Modular".into())), Modularity::Semi);
    assert_eq!(Modularity::detect(Some(&"Non-Modular".into())), Modularity::NonModular);
    assert_eq!(Modularity::detect(Some(&"No".into())), Modularity::NonModular);
    assert_eq!(Modularity::detect(Some(&"Fully Modular".into())), Modularity::Full);
    assert_eq!(Modularity::detect(Some(&SpecValue::Flag(true))), Modularity::Full);
    assert_eq!(Modularity::detect(None), Modularity::Unknown);
}

#[test]
fn unknown_wattage_is_neutral() {
    let r = score_power_supply(Some(&psu(SpecSheet::new())), None, None);
    let s = r.psu_specs().unwrap();
    assert!(!s.sufficient);
    assert_eq!(s.power_level, RiskLevel::Low);
    // 25 + 10 + 10
    assert_eq!(r.score, 45);
    assert!(r.issues.is_empty());
}

#[test]
fn negative_wattage_is_badly_undersized() {
    let c = psu(SpecSheet::new().with("wattage", -500.0));
    let r = score_power_supply(Some(&c), None, None);
    let s = r.psu_specs().unwrap();
    assert_eq!(s.wattage_w, -500.0);
    assert!(!s.sufficient);
    assert_eq!(s.power_level, RiskLevel::Extreme);
    // 5 + 10 + 10
    assert_eq!(r.score, 25);
    assert_eq!(r.issues.len(), 1);
    assert!(r.issues[0].contains("badly undersized"));
}

#[test]
fn missing_psu_is_error() {
    let r = score_power_supply(None, None, None);
    assert_eq!(r.status, Status::Error);
}
