use super::*;
use crate::scoring::{Status, Tier};

fn drive(name: &str, specs: SpecSheet) -> Component {
    Component::new(Category::Storage, name, specs)
}

#[test]
fn fast_nvme_is_s_tier() {
    let c = drive(
        "Samsung 990 Pro",
        SpecSheet::new()
            .with("capacity", "2TB")
            .with("interface", "PCIe 4.0 x4 NVMe")
            .with("read_speed", "7,450 MB/s"),
    );
    let r = score_storage(Some(&c));
    // 25 + 60 + 15
    assert_eq!(r.score, 100);
    assert_eq!(r.tier, Tier::S);
    let s = r.storage_specs().unwrap();
    assert_eq!(s.capacity_gb, 2000.0);
    assert_eq!(s.technology, StorageTech::NvmeGen4);
    assert_eq!(s.read_speed_mbps, 7450.0);
}

#[test]
fn terabytes_in_name_are_normalized() {
    let c = drive("WD Blue SN580 1TB NVMe", SpecSheet::new());
    let s = score_storage(Some(&c)).storage_specs().cloned().unwrap();
    assert_eq!(s.capacity_gb, 1000.0);
    assert_eq!(s.technology, StorageTech::Nvme);
}

#[test]
fn nvme_outranks_ssd_in_same_text() {
    assert_eq!(StorageTech::detect("M.2 NVMe SSD"), Some(StorageTech::Nvme));
    assert_eq!(StorageTech::detect("SATA SSD"), Some(StorageTech::Ssd));
    assert_eq!(StorageTech::detect("2.5\" HDD"), Some(StorageTech::Hdd));
    assert_eq!(StorageTech::detect("external"), None);
}

#[test]
fn type_field_wins_over_interface() {
    let c = drive(
        "Seagate Barracuda",
        SpecSheet::new()
            .with("type", "HDD 7200 RPM")
            .with("interface", "SATA 6 Gb/s")
            .with("capacity", "4TB"),
    );
    let r = score_storage(Some(&c));
    let s = r.storage_specs().unwrap();
    assert_eq!(s.technology, StorageTech::Hdd);
    assert!(r.issues.iter().any(|i| i.contains("Hard drive")));
    // 25 + 15 + 6 (no read speed)
    assert_eq!(r.score, 46);
}

#[test]
fn bare_numeric_capacity_is_gigabytes() {
    let c = drive("Drive", SpecSheet::new().with("capacity", 480.0));
    let r = score_storage(Some(&c));
    assert_eq!(r.storage_specs().unwrap().capacity_gb, 480.0);
    assert!(r.issues.iter().any(|i| i.contains("480 GB")));
}

#[test]
fn unknown_everything_is_neutral() {
    let r = score_storage(Some(&drive("Drive", SpecSheet::new())));
    // 12 + 30 + 6
    assert_eq!(r.score, 48);
    assert!(r.issues.is_empty());
    assert_eq!(r.storage_specs().unwrap().technology, StorageTech::Unknown);
}

#[test]
fn missing_storage_is_error() {
    let r = score_storage(None);
    assert_eq!(r.status, Status::Error);
}

#[test]
fn negative_values_land_in_lowest_bucket() {
    let c = drive(
        "Crucial P3 1TB NVMe",
        SpecSheet::new()
            .with("capacity", -500.0)
            .with("read_speed", -3500.0),
    );
    let r = score_storage(Some(&c));
    // 4 + 55 + 3; the 1TB in the name is not used once a capacity is stated
    assert_eq!(r.score, 62);
    let s = r.storage_specs().unwrap();
    assert_eq!(s.capacity_gb, -500.0);
    assert_eq!(s.read_speed_mbps, -3500.0);
    assert!(r.issues.is_empty());
}
