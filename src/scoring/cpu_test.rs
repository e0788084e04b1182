use super::*;
use crate::component::SpecSheet;
use crate::scoring::{Status, Tier};

fn cpu(specs: SpecSheet) -> Component {
    Component::new(Category::Cpu, "Test CPU", specs)
}

#[test]
fn flagship_cpu_scores_100() {
    let c = cpu(SpecSheet::new()
        .with("cores", 16.0)
        .with("boost_clock", "5.0 GHz")
        .with("tdp", "65 W")
        .with("l3_cache", "32 MB"));
    let r = score_cpu(Some(&c));
    assert_eq!(r.score, 100);
    assert_eq!(r.tier, Tier::S);
    assert_eq!(r.status, Status::Excellent);
    assert!(r.issues.is_empty());
    assert_eq!(r.cpu_specs().unwrap().thermal_risk, RiskLevel::Low);
}

#[test]
fn missing_component_is_error() {
    let r = score_cpu(None);
    assert_eq!(r.score, 0);
    assert_eq!(r.tier, Tier::F);
    assert_eq!(r.status, Status::Error);
    assert!(r.issues.is_empty());
}

#[test]
fn component_without_sheet_is_error() {
    let mut c = cpu(SpecSheet::new());
    c.specs = None;
    let r = score_cpu(Some(&c));
    assert_eq!(r.status, Status::Error);
    assert_eq!(r.score, 0);
}

#[test]
fn empty_sheet_scores_fallbacks_without_issues() {
    let r = score_cpu(Some(&cpu(SpecSheet::new())));
    // 5 (cores) + 4 (clock) + 20 (no TDP -> low risk) + 4 (cache)
    assert_eq!(r.score, 33);
    assert!(r.issues.is_empty(), "missing values must not raise issues");
    assert_ne!(r.status, Status::Error);
}

#[test]
fn alternate_labels_are_probed() {
    let c = cpu(SpecSheet::new()
        .with("Core Count", 8.0)
        .with("Performance Core Boost Clock", "4.7 GHz")
        .with("TDP", "120 W")
        .with("L3 Cache", "16 MB"));
    let r = score_cpu(Some(&c));
    // 25 + 25 + 15 + 12
    assert_eq!(r.score, 77);
    assert_eq!(r.tier, Tier::A);
}

#[test]
fn medium_thermal_band_has_no_issue() {
    for tdp in [105.0, 120.0, 125.0, 140.0] {
        let c = cpu(SpecSheet::new().with("tdp", tdp));
        let r = score_cpu(Some(&c));
        let s = r.cpu_specs().unwrap();
        assert_eq!(s.thermal_risk, RiskLevel::Medium, "TDP {tdp}");
        assert!(r.issues.is_empty(), "TDP {tdp} should not raise an issue");
    }
}

#[test]
fn fractional_tdp_above_140_is_severe() {
    let r = score_cpu(Some(&cpu(SpecSheet::new().with("tdp", "140.5 W"))));
    assert_eq!(r.cpu_specs().unwrap().thermal_risk, RiskLevel::Severe);
    assert_eq!(r.issues.len(), 1);
}

#[test]
fn high_tdp_raises_thermal_issue() {
    let r = score_cpu(Some(&cpu(SpecSheet::new().with("tdp", 170.0))));
    assert_eq!(r.cpu_specs().unwrap().thermal_risk, RiskLevel::Severe);
    assert_eq!(r.issues.len(), 1);

    let r = score_cpu(Some(&cpu(SpecSheet::new().with("tdp", 253.0))));
    assert_eq!(r.cpu_specs().unwrap().thermal_risk, RiskLevel::Extreme);
    assert!(r.issues[0].contains("253 W"));
}

#[test]
fn clock_in_mhz_is_converted() {
    let r = score_cpu(Some(&cpu(SpecSheet::new().with("boost_clock", "4500 MHz"))));
    assert!((r.cpu_specs().unwrap().boost_clock_ghz - 4.5).abs() < 1e-9);
}

#[test]
fn weak_cpu_collects_issues() {
    let c = cpu(SpecSheet::new()
        .with("cores", 4.0)
        .with("boost_clock", "3.2 GHz")
        .with("tdp", 65.0)
        .with("l3_cache", "6 MB"));
    let r = score_cpu(Some(&c));
    // 12 + 8 + 20 + 4
    assert_eq!(r.score, 44);
    assert_eq!(r.tier, Tier::D);
    assert_eq!(r.issues.len(), 3);
}

#[test]
fn negative_values_land_in_lowest_bucket() {
    let r = score_cpu(Some(&cpu(SpecSheet::new().with("cores", -8.0))));
    let s = r.cpu_specs().unwrap();
    assert_eq!(s.cores, -8.0);
    assert_eq!(r.score, 33);
}
