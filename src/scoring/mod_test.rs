use super::*;

#[test]
fn test_score_to_tier_all_boundaries() {
    assert_eq!(score_to_tier(100), Tier::S);
    assert_eq!(score_to_tier(85), Tier::S);
    assert_eq!(score_to_tier(84), Tier::A);
    assert_eq!(score_to_tier(75), Tier::A);
    assert_eq!(score_to_tier(74), Tier::B);
    assert_eq!(score_to_tier(60), Tier::B);
    assert_eq!(score_to_tier(59), Tier::C);
    assert_eq!(score_to_tier(45), Tier::C);
    assert_eq!(score_to_tier(44), Tier::D);
    assert_eq!(score_to_tier(30), Tier::D);
    assert_eq!(score_to_tier(29), Tier::F);
    assert_eq!(score_to_tier(0), Tier::F);
}

#[test]
fn test_tiers_partition_the_score_range() {
    // Walking 0..=100 the tier only ever improves, one step at a time.
    let mut prev = score_to_tier(0);
    let mut changes = 0;
    for s in 1..=100u8 {
        let t = score_to_tier(s);
        assert!(t <= prev, "tier must not get worse as score rises ({s})");
        if t != prev {
            changes += 1;
        }
        prev = t;
    }
    assert_eq!(changes, 5, "six tiers means exactly five boundaries");
}

#[test]
fn test_classify_picks_highest_threshold_first() {
    let table = [Bucket::at(16.0, 35), Bucket::at(12.0, 30), Bucket::at(8.0, 25)];
    assert_eq!(bucket_points(24.0, &table, 5), 35);
    assert_eq!(bucket_points(16.0, &table, 5), 35);
    assert_eq!(bucket_points(15.9, &table, 5), 30);
    assert_eq!(bucket_points(8.0, &table, 5), 25);
    assert_eq!(bucket_points(2.0, &table, 5), 5);
}

#[test]
fn test_classify_negative_input_lands_in_fallback() {
    let table = [Bucket::tagged(100.0, 3, RiskLevel::Severe)];
    assert_eq!(classify(-50.0, &table, (10, RiskLevel::Low)), (10, RiskLevel::Low));
}

#[test]
fn test_exclusive_row_skips_its_own_threshold() {
    let table = [
        Bucket::above(140.0, 10, RiskLevel::Severe),
        Bucket::tagged(105.0, 15, RiskLevel::Medium),
    ];
    let fallback = (20, RiskLevel::Low);
    assert_eq!(classify(140.0, &table, fallback), (15, RiskLevel::Medium));
    assert_eq!(classify(140.01, &table, fallback), (10, RiskLevel::Severe));
    assert_eq!(classify(105.0, &table, fallback), (15, RiskLevel::Medium));
}

#[test]
fn test_missing_report_shape() {
    let r = CategoryReport::missing(Category::Storage);
    assert_eq!(r.score, 0);
    assert_eq!(r.tier, Tier::F);
    assert_eq!(r.status, Status::Error);
    assert!(r.issues.is_empty());
    assert!(r.specs.is_none());
    assert!(r.is_error());
}

#[test]
fn test_scored_clamps_to_100() {
    let r = CategoryReport::scored(
        Category::Storage,
        140,
        vec![],
        NormalizedSpecs::Storage(StorageSpecs {
            capacity_gb: 0.0,
            technology: StorageTech::Unknown,
            read_speed_mbps: 0.0,
        }),
    );
    assert_eq!(r.score, 100);
    assert_eq!(r.tier, Tier::S);
    assert_eq!(r.status, Status::Excellent);
}

#[test]
fn test_risk_levels_are_ordered() {
    assert!(RiskLevel::Low < RiskLevel::Medium);
    assert!(RiskLevel::Medium < RiskLevel::Severe);
    assert!(RiskLevel::Severe < RiskLevel::Extreme);
}
