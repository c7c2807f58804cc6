use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category-specific specification sheet.
///
/// Upstream feeds are heterogeneous and frequently incomplete, so every
/// field is optional and dimensioned values ("65W", "170 mm") are kept as
/// raw text; rule code parses them on demand via [`crate::parse_watts`] and
/// [`crate::parse_millimeters`] with documented fallbacks. Shapes that fit
/// no known category land in `Other` untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Specs {
    Cpu(CpuSpec),
    Gpu(GpuSpec),
    Ram(RamSpec),
    Motherboard(BoardSpec),
    Psu(PsuSpec),
    Case(CaseSpec),
    Storage(StorageSpec),
    Cooler(CoolerSpec),
    Other(BTreeMap<String, String>),
}

impl Default for Specs {
    fn default() -> Self {
        Specs::Other(BTreeMap::new())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CpuSpec {
    /// Socket name, e.g. "AM5" or "LGA1700"
    #[serde(default)]
    pub socket: Option<String>,

    #[serde(default)]
    pub cores: Option<u32>,

    /// Free-form, e.g. "65W" or "TDP 105 W"
    #[serde(default)]
    pub tdp: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GpuSpec {
    #[serde(default)]
    pub tdp: Option<String>,

    /// Card length including power connectors, e.g. "242 mm"
    #[serde(default)]
    pub length: Option<String>,

    #[serde(default)]
    pub vram_gb: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RamSpec {
    /// Memory generation when the feed states it, e.g. "DDR5"
    #[serde(default)]
    pub ddr: Option<String>,

    #[serde(default)]
    pub speed_mhz: Option<u32>,

    #[serde(default)]
    pub capacity_gb: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BoardSpec {
    #[serde(default)]
    pub socket: Option<String>,

    /// Chipset name, e.g. "B650" or "Z790"
    #[serde(default)]
    pub chipset: Option<String>,

    #[serde(default)]
    pub ddr: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PsuSpec {
    /// Free-form, e.g. "650W"
    #[serde(default)]
    pub wattage: Option<String>,

    /// Efficiency rating, e.g. "80+ Gold"
    #[serde(default)]
    pub rating: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CaseSpec {
    /// Longest GPU the case can take, e.g. "360 mm"
    #[serde(default)]
    pub max_gpu_length: Option<String>,

    /// Tallest air cooler the case can take, e.g. "165 mm"
    #[serde(default)]
    pub max_cooler_height: Option<String>,

    #[serde(default)]
    pub form_factor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorageSpec {
    #[serde(default)]
    pub capacity_gb: Option<u32>,

    /// "nvme", "sata-ssd", "hdd"
    #[serde(default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CoolerSpec {
    /// Tower height, e.g. "158 mm"; irrelevant for liquid coolers
    #[serde(default)]
    pub height: Option<String>,

    /// Maximum CPU TDP the cooler is rated for, e.g. "180W"
    #[serde(default)]
    pub rated_tdp: Option<String>,

    /// "air" or "liquid"
    #[serde(default)]
    pub kind: Option<String>,
}

impl Specs {
    #[must_use]
    pub fn as_cpu(&self) -> Option<&CpuSpec> {
        match self {
            Specs::Cpu(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_gpu(&self) -> Option<&GpuSpec> {
        match self {
            Specs::Gpu(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_ram(&self) -> Option<&RamSpec> {
        match self {
            Specs::Ram(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_board(&self) -> Option<&BoardSpec> {
        match self {
            Specs::Motherboard(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_psu(&self) -> Option<&PsuSpec> {
        match self {
            Specs::Psu(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_case(&self) -> Option<&CaseSpec> {
        match self {
            Specs::Case(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_storage(&self) -> Option<&StorageSpec> {
        match self {
            Specs::Storage(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_cooler(&self) -> Option<&CoolerSpec> {
        match self {
            Specs::Cooler(s) => Some(s),
            _ => None,
        }
    }
}
