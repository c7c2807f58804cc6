use once_cell::sync::Lazy;
use regex::Regex;
use rig_catalog::Category;

/// Ordered (category, pattern set) table for detecting which hardware
/// category a text fragment talks about. Evaluated top to bottom, first
/// match wins, so narrower vocabularies (coolers, boards) sit above the
/// broad ones (CPU, case). Data-driven on purpose: tuning detection means
/// editing this table, not rule code.
static CATEGORY_PATTERNS: Lazy<Vec<(Category, Regex)>> = Lazy::new(|| {
    let table: [(Category, &str); 8] = [
        (
            Category::Cooler,
            r"(?i)\b(cooler|aio|liquid cool|air cool|heatsink|nh-[du]\d|hyper ?212|fan tower)\b",
        ),
        (
            Category::Motherboard,
            r"(?i)\b(motherboard|mobo|mainboard|b[4-8]50m?|b[67]60m?|x[5-8]70e?|z[6-8]90|h[67]10|h[67]70|a520m?|a620m?|trx40|board)\b",
        ),
        (
            Category::Gpu,
            r"(?i)\b(gpu|graphics? card|video card|rtx ?\d{4}|gtx ?\d{3,4}|rx ?\d{3,4}|radeon|geforce|arc a\d{3})\b",
        ),
        (
            Category::Cpu,
            r"(?i)\b(cpu|processor|ryzen ?[3579]?|intel core|i[3579][- ]?\d{4,5}[kf]*|athlon|pentium|celeron|xeon|threadripper)\b",
        ),
        (
            Category::Ram,
            r"(?i)\b(ram|memory|ddr[345]|dimm|sodimm|\d{1,3}\s?gb\s?(kit)?\s?(ddr|@))",
        ),
        (
            Category::Storage,
            r"(?i)\b(ssd|nvme|hdd|hard ?(disk|drive)|m\.2|sata drive|\d+\s?tb\b)",
        ),
        (
            Category::Psu,
            r"(?i)\b(psu|power supply|smps|80\+|80 plus|\d{3,4}\s?w(att)?s?\b)",
        ),
        (
            Category::Case,
            r"(?i)\b(case|cabinet|chassis|mid tower|full tower|tempered glass)\b",
        ),
    ];
    table
        .into_iter()
        .map(|(category, pattern)| {
            (
                category,
                Regex::new(pattern).unwrap_or_else(|e| panic!("bad pattern for {category}: {e}")),
            )
        })
        .collect()
});

/// Detect the hardware category a fragment refers to, first pattern wins.
#[must_use]
pub fn detect_category(text: &str) -> Option<Category> {
    CATEGORY_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(category, _)| *category)
}

/// All categories whose patterns match anywhere in the text (used by the
/// whole-input fallback pass).
pub fn detect_all_categories(text: &str) -> Vec<Category> {
    CATEGORY_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(category, _)| *category)
        .collect()
}

/// Map a user-stated category label (table headers, "Mobo: ..." lines) to
/// the canonical category. Fixed synonym table.
#[must_use]
pub fn category_from_label(label: &str) -> Option<Category> {
    let label = label.trim().trim_matches('*').trim().to_lowercase();
    let category = match label.as_str() {
        "cpu" | "processor" => Category::Cpu,
        "gpu" | "graphics" | "graphics card" | "video card" => Category::Gpu,
        "ram" | "memory" => Category::Ram,
        "motherboard" | "mobo" | "mainboard" | "board" => Category::Motherboard,
        "psu" | "power supply" | "smps" => Category::Psu,
        "case" | "cabinet" | "chassis" => Category::Case,
        "storage" | "ssd" | "hdd" | "drive" | "disk" => Category::Storage,
        "cooler" | "cpu cooler" | "cooling" | "aio" => Category::Cooler,
        _ => return None,
    };
    Some(category)
}
