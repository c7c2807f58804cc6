//! End-to-end: catalog JSON from disk through parse -> analyze -> suggest.

use rig_analyze::{analyze, has_issue, IssueKind};
use rig_catalog::CatalogSnapshot;
use rig_extract::ComponentExtractor;
use rig_rank::Ranker;
use rig_roast::{suggest, Grade};
use std::io::Write;

const CATALOG_JSON: &str = r#"[
  {
    "id": "cpu-12400f",
    "name": "Intel Core i5-12400F",
    "normalized_name": "intel core i5-12400f",
    "category": "cpu",
    "brand": "Intel",
    "price": 14500,
    "retailer": "mdcomputers",
    "specs": { "type": "cpu", "socket": "LGA1700", "cores": 6, "tdp": "65W" }
  },
  {
    "id": "gpu-4060",
    "name": "MSI RTX 4060 Ventus 2X",
    "normalized_name": "msi rtx 4060 ventus 2x",
    "category": "gpu",
    "brand": "MSI",
    "price": 28999,
    "retailer": "primeabgb",
    "specs": { "type": "gpu", "tdp": "115W", "length": "199 mm" }
  },
  {
    "id": "ram-fury-16",
    "name": "Kingston Fury Beast 16GB DDR5 5600",
    "normalized_name": "kingston fury beast 16gb ddr5 5600",
    "category": "ram",
    "brand": "Kingston",
    "price": 5200,
    "retailer": "mdcomputers",
    "specs": { "type": "ram", "ddr": "DDR5", "speed_mhz": 5600, "capacity_gb": 16 }
  },
  {
    "id": "mb-b760",
    "name": "Gigabyte B760M DS3H",
    "normalized_name": "gigabyte b760m ds3h",
    "category": "motherboard",
    "brand": "Gigabyte",
    "price": 12500,
    "retailer": "vedant",
    "specs": { "type": "motherboard", "socket": "LGA1700", "chipset": "B760", "ddr": "DDR5" }
  },
  {
    "id": "psu-cv550",
    "name": "Corsair CV550 550W",
    "normalized_name": "corsair cv550 550w",
    "category": "psu",
    "brand": "Corsair",
    "price": 3800,
    "retailer": "mdcomputers",
    "specs": { "type": "psu", "wattage": "550W", "rating": "80+ Bronze" }
  },
  {
    "id": "sto-nv2",
    "name": "Kingston NV2 1TB NVMe",
    "normalized_name": "kingston nv2 1tb nvme",
    "category": "storage",
    "brand": "Kingston",
    "price": 4900,
    "retailer": "primeabgb",
    "specs": { "type": "storage", "capacity_gb": 1000, "kind": "nvme" }
  },
  {
    "id": "case-h5",
    "name": "NZXT H5 Flow",
    "normalized_name": "nzxt h5 flow",
    "category": "case",
    "brand": "NZXT",
    "price": 6500,
    "retailer": "vedant",
    "specs": { "type": "case", "max_gpu_length": "365 mm", "max_cooler_height": "165 mm" }
  },
  {
    "id": "cool-212",
    "name": "Cooler Master Hyper 212",
    "normalized_name": "cooler master hyper 212",
    "category": "cooler",
    "brand": "Cooler Master",
    "price": 2800,
    "retailer": "mdcomputers",
    "specs": { "type": "cooler", "height": "152 mm", "rated_tdp": "150W" }
  }
]"#;

fn load_catalog() -> CatalogSnapshot {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG_JSON.as_bytes()).unwrap();
    CatalogSnapshot::load(file.path()).unwrap()
}

#[test]
fn sane_build_grades_well() {
    let catalog = load_catalog();
    let build = ComponentExtractor::new(&catalog).parse(
        "i5-12400F, RTX 4060, 16GB DDR5, B760M board, Corsair CV550 psu, 1TB NVMe",
    );
    assert!(build.components.len() >= 6);

    let analysis = analyze(&catalog, &build);
    assert!(!has_issue(&analysis, IssueKind::SocketMismatch));
    assert!(!has_issue(&analysis, IssueKind::RamTypeMismatch));
    assert!(!has_issue(&analysis, IssueKind::PsuInsufficient));

    let roast = suggest(&catalog, &analysis, &build);
    assert!(roast.grade <= Grade::B, "expected a decent grade, got {}", roast.grade);
    assert!(roast.summary.contains("Intel Core i5-12400F"));
}

#[test]
fn ranking_honors_budget_share_on_build_queries() {
    let catalog = load_catalog();
    let ranked = Ranker::new(&catalog).rank("₹80k gaming pc", None, 10);
    assert_eq!(ranked.len(), 8, "one slot per category");
}

#[test]
fn analysis_is_idempotent_across_calls() {
    let catalog = load_catalog();
    let build = ComponentExtractor::new(&catalog).parse("i5-12400F, RTX 4060");
    let a = analyze(&catalog, &build);
    let b = analyze(&catalog, &build);
    assert_eq!(a.score, b.score);
    assert_eq!(a.issues.len(), b.issues.len());
}
