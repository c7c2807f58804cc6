use crate::detect::{
    board_ddr_gen, board_platform, cpu_vendor, effective_tier, ram_ddr_gen, socket_of,
};
use crate::types::{AnalysisIssue, IssueKind, Severity};
use rig_catalog::{parse_millimeters, parse_watts, CatalogItem, CatalogSnapshot, Category};
use std::collections::BTreeMap;

/// Assumed CPU draw when the TDP text is missing or unparseable.
const DEFAULT_CPU_TDP: u32 = 65;
/// Assumed GPU draw, likewise.
const DEFAULT_GPU_TDP: u32 = 150;
/// Board, RAM, storage and fans, lumped.
const SYSTEM_OVERHEAD_W: u32 = 100;
/// PSU must deliver at least this multiple of the estimated draw.
const PSU_HEADROOM: f32 = 1.2;
/// Recommended replacement targets this multiple, rounded up to 50 W.
const PSU_RECOMMEND_HEADROOM: f32 = 1.3;
/// CPUs at or above this TDP need a dedicated cooler.
const COOLER_NEEDED_TDP: u32 = 105;
/// A same-tier alternative at or below this fraction of the pick's price
/// counts as overspending.
const OVERSPEND_RATIO: f32 = 0.75;
/// Savings below this are not worth an issue.
const MIN_SAVING: u32 = 1_000;

/// Everything one rule invocation can see: the picked item per category
/// and the catalog to look up alternatives in.
pub struct RuleCtx<'a> {
    pub catalog: &'a CatalogSnapshot,
    pub picks: BTreeMap<Category, &'a CatalogItem>,
}

impl<'a> RuleCtx<'a> {
    fn pick(&self, category: Category) -> Option<&'a CatalogItem> {
        self.picks.get(&category).copied()
    }
}

/// The ordered rule set. Analysis runs them top to bottom; each one pushes
/// zero or more issues and skips itself when the data it needs is absent.
pub const RULES: [fn(&RuleCtx, &mut Vec<AnalysisIssue>); 9] = [
    check_missing_categories,
    check_bottleneck,
    check_psu_headroom,
    check_socket,
    check_ram_type,
    check_platform,
    check_clearance,
    check_cooling,
    check_overspending,
];

fn check_missing_categories(ctx: &RuleCtx, issues: &mut Vec<AnalysisIssue>) {
    let missing: Vec<&str> = Category::REQUIRED
        .iter()
        .filter(|c| !ctx.picks.contains_key(c))
        .map(|c| c.label())
        .collect();
    if missing.is_empty() {
        return;
    }
    issues.push(AnalysisIssue::new(
        IssueKind::MissingCategory,
        Severity::Info,
        "Build is incomplete",
        format!("No {} in the build.", missing.join(", ")),
        "Add the missing parts before ordering anything.",
    ));
}

fn check_bottleneck(ctx: &RuleCtx, issues: &mut Vec<AnalysisIssue>) {
    let (Some(cpu), Some(gpu)) = (ctx.pick(Category::Cpu), ctx.pick(Category::Gpu)) else {
        return;
    };
    let cpu_rank = effective_tier(ctx.catalog, cpu).rank();
    let gpu_rank = effective_tier(ctx.catalog, gpu).rank();

    if cpu_rank < gpu_rank {
        issues.push(AnalysisIssue::new(
            IssueKind::Bottleneck,
            Severity::Warning,
            "CPU bottleneck",
            format!(
                "{} is a tier below {}; the GPU will sit idle waiting for it.",
                cpu.name, gpu.name
            ),
            "Move the CPU up a tier or save money on the GPU.",
        ));
    } else if gpu_rank < cpu_rank {
        issues.push(AnalysisIssue::new(
            IssueKind::Bottleneck,
            Severity::Info,
            "GPU bottleneck",
            format!(
                "{} outclasses {}; games will be limited by the GPU.",
                cpu.name, gpu.name
            ),
            "A stronger GPU would make better use of this CPU.",
        ));
    }
}

fn check_psu_headroom(ctx: &RuleCtx, issues: &mut Vec<AnalysisIssue>) {
    let Some(psu) = ctx.pick(Category::Psu) else {
        return;
    };
    let Some(wattage) = psu_wattage(psu) else {
        return; // unrated PSU text, cannot evaluate
    };

    let cpu_tdp = ctx
        .pick(Category::Cpu)
        .and_then(cpu_tdp_watts)
        .unwrap_or(DEFAULT_CPU_TDP);
    let gpu_tdp = ctx
        .pick(Category::Gpu)
        .and_then(gpu_tdp_watts)
        .unwrap_or(DEFAULT_GPU_TDP);
    let draw = cpu_tdp + gpu_tdp + SYSTEM_OVERHEAD_W;
    let required = (draw as f32 * PSU_HEADROOM).ceil() as u32;

    if wattage >= required {
        return;
    }

    let recommended = round_up_50((draw as f32 * PSU_RECOMMEND_HEADROOM) as u32);
    let mut issue = AnalysisIssue::new(
        IssueKind::PsuInsufficient,
        Severity::Critical,
        "Power supply undersized",
        format!(
            "Estimated draw is {draw}W but the {wattage}W unit leaves no headroom \
             (need at least {required}W)."
        ),
        format!("Fit a {recommended}W or larger power supply."),
    );
    if let Some(alt) = cheapest_psu_at_least(ctx.catalog, recommended) {
        issue = issue.with_alternative(alt.clone());
    }
    issues.push(issue);
}

fn check_socket(ctx: &RuleCtx, issues: &mut Vec<AnalysisIssue>) {
    let (Some(cpu), Some(board)) = (ctx.pick(Category::Cpu), ctx.pick(Category::Motherboard))
    else {
        return;
    };
    let (Some(cpu_socket), Some(board_socket)) =
        (socket_of(ctx.catalog, cpu), socket_of(ctx.catalog, board))
    else {
        return;
    };
    if cpu_socket.trim().eq_ignore_ascii_case(board_socket.trim()) {
        return;
    }
    issues.push(AnalysisIssue::new(
        IssueKind::SocketMismatch,
        Severity::Critical,
        "CPU and motherboard sockets do not match",
        format!(
            "{} needs {cpu_socket} but {} is {board_socket}; the CPU will not \
             physically fit.",
            cpu.name, board.name
        ),
        "Pick a board with the matching socket or change the CPU.",
    ));
}

fn check_ram_type(ctx: &RuleCtx, issues: &mut Vec<AnalysisIssue>) {
    let (Some(ram), Some(board)) = (ctx.pick(Category::Ram), ctx.pick(Category::Motherboard))
    else {
        return;
    };
    let (Some(ram_gen), Some(board_gen)) = (ram_ddr_gen(ram), board_ddr_gen(board)) else {
        return; // either side undetermined: assume compatible
    };
    if ram_gen == board_gen {
        return;
    }
    issues.push(AnalysisIssue::new(
        IssueKind::RamTypeMismatch,
        Severity::Critical,
        "RAM generation does not fit the board",
        format!(
            "{} is {ram_gen} but {} takes {board_gen}; the slots are keyed \
             differently.",
            ram.name, board.name
        ),
        format!("Swap the memory for a {board_gen} kit."),
    ));
}

fn check_platform(ctx: &RuleCtx, issues: &mut Vec<AnalysisIssue>) {
    let (Some(cpu), Some(board)) = (ctx.pick(Category::Cpu), ctx.pick(Category::Motherboard))
    else {
        return;
    };
    let (Some(cpu_vendor), Some(board_vendor)) = (cpu_vendor(cpu), board_platform(board)) else {
        return;
    };
    if cpu_vendor == board_vendor {
        return;
    }
    issues.push(AnalysisIssue::new(
        IssueKind::PlatformMismatch,
        Severity::Critical,
        "CPU and motherboard platforms differ",
        format!(
            "{} is an {cpu_vendor} CPU but {} is an {board_vendor} board.",
            cpu.name, board.name
        ),
        format!("Use a {cpu_vendor} chipset board for this CPU."),
    ));
}

fn check_clearance(ctx: &RuleCtx, issues: &mut Vec<AnalysisIssue>) {
    let Some(case) = ctx.pick(Category::Case) else {
        return;
    };
    let case_spec = case.specs.as_case();

    if let (Some(cooler), Some(limit)) = (
        ctx.pick(Category::Cooler),
        case_spec
            .and_then(|s| s.max_cooler_height.as_deref())
            .and_then(parse_millimeters),
    ) {
        if let Some(height) = cooler
            .specs
            .as_cooler()
            .and_then(|s| s.height.as_deref())
            .and_then(parse_millimeters)
        {
            if height > limit {
                issues.push(AnalysisIssue::new(
                    IssueKind::CoolerClearance,
                    Severity::Critical,
                    "Cooler too tall for the case",
                    format!(
                        "{} stands {height:.0}mm but {} only clears {limit:.0}mm.",
                        cooler.name, case.name
                    ),
                    "Pick a lower-profile cooler or a wider case.",
                ));
            }
        }
    }

    if let (Some(gpu), Some(limit)) = (
        ctx.pick(Category::Gpu),
        case_spec
            .and_then(|s| s.max_gpu_length.as_deref())
            .and_then(parse_millimeters),
    ) {
        if let Some(length) = gpu
            .specs
            .as_gpu()
            .and_then(|s| s.length.as_deref())
            .and_then(parse_millimeters)
        {
            if length > limit {
                issues.push(AnalysisIssue::new(
                    IssueKind::GpuClearance,
                    Severity::Critical,
                    "GPU too long for the case",
                    format!(
                        "{} is {length:.0}mm but {} only fits {limit:.0}mm cards.",
                        gpu.name, case.name
                    ),
                    "Pick a shorter card or a deeper case.",
                ));
            }
        }
    }
}

fn check_cooling(ctx: &RuleCtx, issues: &mut Vec<AnalysisIssue>) {
    if ctx.pick(Category::Cooler).is_some() {
        return;
    }
    let Some(tdp) = ctx.pick(Category::Cpu).and_then(cpu_tdp_watts) else {
        return; // unknown TDP: assume the stock cooler copes
    };
    if tdp < COOLER_NEEDED_TDP {
        return;
    }
    let mut issue = AnalysisIssue::new(
        IssueKind::CoolingInadequate,
        Severity::Warning,
        "No cooler for a hot CPU",
        format!("A {tdp}W CPU will throttle on a stock cooler."),
        "Add a tower cooler or AIO rated for the CPU's TDP.",
    );
    if let Some(cooler) = cheapest_adequate_cooler(ctx.catalog, tdp) {
        issue = issue.with_alternative(cooler.clone());
    }
    issues.push(issue);
}

fn check_overspending(ctx: &RuleCtx, issues: &mut Vec<AnalysisIssue>) {
    for pick in ctx.picks.values() {
        let ceiling = (pick.price as f32 * OVERSPEND_RATIO) as u32;
        let tier = effective_tier(ctx.catalog, pick);
        let alternative = ctx
            .catalog
            .in_stock(pick.category)
            .filter(|alt| alt.id != pick.id)
            .filter(|alt| effective_tier(ctx.catalog, alt) == tier)
            .filter(|alt| alt.price <= ceiling)
            .min_by_key(|alt| alt.price);
        let Some(alt) = alternative else {
            continue;
        };
        let savings = pick.price - alt.price;
        if savings < MIN_SAVING {
            continue;
        }
        issues.push(
            AnalysisIssue::new(
                IssueKind::Overspending,
                Severity::Info,
                format!("{} costs more than it should", pick.category.label()),
                format!(
                    "{} performs in the same tier as {} yet costs {savings} more.",
                    pick.name, alt.name
                ),
                format!("Consider {} and pocket the difference.", alt.name),
            )
            .with_alternative(alt.clone())
            .with_savings(savings),
        );
    }
}

fn cpu_tdp_watts(cpu: &CatalogItem) -> Option<u32> {
    cpu.specs
        .as_cpu()
        .and_then(|s| s.tdp.as_deref())
        .and_then(parse_watts)
}

fn gpu_tdp_watts(gpu: &CatalogItem) -> Option<u32> {
    gpu.specs
        .as_gpu()
        .and_then(|s| s.tdp.as_deref())
        .and_then(parse_watts)
}

fn psu_wattage(psu: &CatalogItem) -> Option<u32> {
    psu.specs
        .as_psu()
        .and_then(|s| s.wattage.as_deref())
        .and_then(parse_watts)
        .or_else(|| parse_watts(&psu.name))
}

fn round_up_50(watts: u32) -> u32 {
    watts.div_ceil(50) * 50
}

fn cheapest_psu_at_least(catalog: &CatalogSnapshot, watts: u32) -> Option<&CatalogItem> {
    catalog
        .in_stock(Category::Psu)
        .filter(|psu| psu_wattage(psu).is_some_and(|w| w >= watts))
        .min_by_key(|psu| psu.price)
}

/// Cheapest in-stock cooler rated for the CPU. Coolers without a rated TDP
/// are treated as acceptable.
fn cheapest_adequate_cooler(catalog: &CatalogSnapshot, cpu_tdp: u32) -> Option<&CatalogItem> {
    catalog
        .in_stock(Category::Cooler)
        .filter(|cooler| {
            cooler
                .specs
                .as_cooler()
                .and_then(|s| s.rated_tdp.as_deref())
                .and_then(parse_watts)
                .map_or(true, |rated| rated >= cpu_tdp)
        })
        .min_by_key(|cooler| cooler.price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wattage_rounding_steps_by_fifty() {
        assert_eq!(round_up_50(500), 500);
        assert_eq!(round_up_50(501), 550);
        assert_eq!(round_up_50(385), 400);
    }
}
