use rig_catalog::{CatalogItem, CatalogSnapshot, PerformanceTier};

/// Memory generation, detected from names, specs, speeds or chipsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DdrGen {
    Ddr3,
    Ddr4,
    Ddr5,
}

impl std::fmt::Display for DdrGen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DdrGen::Ddr3 => "DDR3",
            DdrGen::Ddr4 => "DDR4",
            DdrGen::Ddr5 => "DDR5",
        })
    }
}

/// CPU platform vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    Intel,
    Amd,
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Vendor::Intel => "Intel",
            Vendor::Amd => "AMD",
        })
    }
}

/// Chipsets that pin the board to one memory generation. Z690/B660 boards
/// shipped in both flavors and stay undetermined here.
const DDR5_CHIPSETS: [&str; 7] = ["b650", "x670", "b850", "x870", "z790", "z890", "b860"];
const DDR4_CHIPSETS: [&str; 7] = ["a520", "b450", "b550", "x570", "h610", "h670", "b560"];

/// Chipset → platform vendor table.
const AMD_CHIPSETS: [&str; 9] = [
    "a520", "b450", "b550", "x570", "a620", "b650", "x670", "b850", "x870",
];
const INTEL_CHIPSETS: [&str; 10] = [
    "h610", "b560", "b660", "h670", "z690", "b760", "z790", "b860", "h810", "z890",
];

fn keyword_ddr(text: &str) -> Option<DdrGen> {
    let text = text.to_lowercase();
    if text.contains("ddr5") {
        Some(DdrGen::Ddr5)
    } else if text.contains("ddr4") {
        Some(DdrGen::Ddr4)
    } else if text.contains("ddr3") {
        Some(DdrGen::Ddr3)
    } else {
        None
    }
}

/// DDR generation of a RAM kit: explicit spec/name keywords first, then
/// inferred from rated speed (>= 4800 MHz only exists as DDR5, 2133-4799
/// as DDR4). Slower or unstated speeds stay undetermined.
#[must_use]
pub fn ram_ddr_gen(item: &CatalogItem) -> Option<DdrGen> {
    let spec = item.specs.as_ram();
    if let Some(ddr) = spec.and_then(|s| s.ddr.as_deref()).and_then(keyword_ddr) {
        return Some(ddr);
    }
    if let Some(ddr) = keyword_ddr(&item.name) {
        return Some(ddr);
    }
    match spec.and_then(|s| s.speed_mhz) {
        Some(speed) if speed >= 4800 => Some(DdrGen::Ddr5),
        Some(speed) if speed >= 2133 => Some(DdrGen::Ddr4),
        _ => None,
    }
}

/// DDR generation a motherboard takes: spec/name keywords, else the
/// chipset table.
#[must_use]
pub fn board_ddr_gen(item: &CatalogItem) -> Option<DdrGen> {
    let spec = item.specs.as_board();
    if let Some(ddr) = spec.and_then(|s| s.ddr.as_deref()).and_then(keyword_ddr) {
        return Some(ddr);
    }
    if let Some(ddr) = keyword_ddr(&item.name) {
        return Some(ddr);
    }

    let chipset = board_chipset(item)?;
    if DDR5_CHIPSETS.iter().any(|c| chipset.contains(c)) {
        Some(DdrGen::Ddr5)
    } else if DDR4_CHIPSETS.iter().any(|c| chipset.contains(c)) {
        Some(DdrGen::Ddr4)
    } else {
        None
    }
}

/// CPU vendor from brand/name keywords.
#[must_use]
pub fn cpu_vendor(item: &CatalogItem) -> Option<Vendor> {
    let text = format!("{} {}", item.brand, item.name).to_lowercase();
    if text.contains("intel")
        || text.contains("core i")
        || text.contains("pentium")
        || text.contains("celeron")
        || text.contains("xeon")
    {
        Some(Vendor::Intel)
    } else if text.contains("amd")
        || text.contains("ryzen")
        || text.contains("athlon")
        || text.contains("threadripper")
    {
        Some(Vendor::Amd)
    } else {
        None
    }
}

/// Board platform vendor: chipset table first, name keywords as fallback.
#[must_use]
pub fn board_platform(item: &CatalogItem) -> Option<Vendor> {
    if let Some(chipset) = board_chipset(item) {
        if AMD_CHIPSETS.iter().any(|c| chipset.contains(c)) {
            return Some(Vendor::Amd);
        }
        if INTEL_CHIPSETS.iter().any(|c| chipset.contains(c)) {
            return Some(Vendor::Intel);
        }
    }
    let name = item.name.to_lowercase();
    if name.contains("intel") || name.contains("lga") {
        Some(Vendor::Intel)
    } else if name.contains("amd") || name.contains("am4") || name.contains("am5") {
        Some(Vendor::Amd)
    } else {
        None
    }
}

/// The board's chipset, lowercased: explicit spec field, else scraped from
/// the name.
fn board_chipset(item: &CatalogItem) -> Option<String> {
    if let Some(chipset) = item.specs.as_board().and_then(|s| s.chipset.as_deref()) {
        return Some(chipset.to_lowercase());
    }
    let name = item.name.to_lowercase();
    DDR5_CHIPSETS
        .iter()
        .chain(DDR4_CHIPSETS.iter())
        .chain(AMD_CHIPSETS.iter())
        .chain(INTEL_CHIPSETS.iter())
        .find(|c| name.contains(*c))
        .map(|c| (*c).to_string())
}

/// Effective tier with the reference registry taking precedence over the
/// catalog's own banding.
#[must_use]
pub fn effective_tier(catalog: &CatalogSnapshot, item: &CatalogItem) -> PerformanceTier {
    catalog
        .registry()
        .and_then(|r| r.lookup(&item.normalized_name))
        .and_then(|entry| entry.tier)
        .unwrap_or_else(|| item.tier())
}

/// Socket with the item's own spec first, registry as backstop.
#[must_use]
pub fn socket_of(catalog: &CatalogSnapshot, item: &CatalogItem) -> Option<String> {
    let own = item
        .specs
        .as_cpu()
        .and_then(|s| s.socket.clone())
        .or_else(|| item.specs.as_board().and_then(|s| s.socket.clone()));
    own.or_else(|| {
        catalog
            .registry()
            .and_then(|r| r.socket_for(item))
            .map(str::to_string)
    })
}
