use rig_catalog::{CatalogItem, CatalogSnapshot, Category, Specs};
use rig_extract::ComponentExtractor;

fn item(id: &str, name: &str, brand: &str, category: Category, price: u32) -> CatalogItem {
    CatalogItem {
        id: id.into(),
        name: name.into(),
        normalized_name: name.to_lowercase(),
        category,
        brand: brand.into(),
        price,
        retailer: "shop".into(),
        in_stock: true,
        specs: Specs::default(),
        tier: None,
        use_cases: Vec::new(),
        embedding: None,
    }
}

fn catalog() -> CatalogSnapshot {
    CatalogSnapshot::new(vec![
        item("gpu1", "MSI RTX 4060 Ventus", "MSI", Category::Gpu, 28_999),
        item("cpu1", "Intel Core i5-12400F", "Intel", Category::Cpu, 14_500),
        item("ram1", "Corsair Vengeance 16GB DDR5 5600", "Corsair", Category::Ram, 5_200),
        item("mb1", "ASRock B650 Pro", "ASRock", Category::Motherboard, 13_000),
        item("psu1", "Corsair CV650 650W", "Corsair", Category::Psu, 4_800),
    ])
    .unwrap()
}

#[test]
fn comma_separated_free_text_resolves_each_category() {
    let catalog = catalog();
    let build = ComponentExtractor::new(&catalog).parse("RTX 4060, i5-12400F, 16GB DDR5, B650 board");

    assert_eq!(build.components.len(), 4);
    let categories: Vec<Category> = build.components.iter().map(|c| c.category).collect();
    assert!(categories.contains(&Category::Gpu));
    assert!(categories.contains(&Category::Cpu));
    assert!(categories.contains(&Category::Ram));
    assert!(categories.contains(&Category::Motherboard));
    assert!(build.components.iter().all(|c| c.item.is_some()));
}

#[test]
fn markdown_table_input_wins_over_line_parsing() {
    let catalog = catalog();
    let input = "\
| Category | Item |
|----------|------|
| CPU | Intel Core i5-12400F |
| GPU | MSI RTX 4060 Ventus |";
    let build = ComponentExtractor::new(&catalog).parse(input);

    assert_eq!(build.components.len(), 2);
    let cpu = build.component_for(Category::Cpu).unwrap();
    assert_eq!(cpu.item.as_ref().unwrap().id, "cpu1");
    // Full normalized name present in the fragment.
    assert!(cpu.confidence > 0.9);
}

#[test]
fn labeled_lines_parse_as_table() {
    let catalog = catalog();
    let build = ComponentExtractor::new(&catalog).parse("Mobo: ASRock B650 Pro\nPSU: Corsair CV650 650W");
    assert_eq!(build.components.len(), 2);
    assert!(build.component_for(Category::Motherboard).is_some());
    assert!(build.component_for(Category::Psu).is_some());
}

#[test]
fn marketplace_url_binds_with_low_confidence_when_unresolved() {
    let catalog = catalog();
    let build = ComponentExtractor::new(&catalog)
        .parse("https://shop.example/p/zotac-rtx-3050-twin-edge/dp/B09XYZ1234");

    assert_eq!(build.components.len(), 1);
    let gpu = &build.components[0];
    assert_eq!(gpu.category, Category::Gpu);
    assert!(gpu.item.is_none());
    assert!((gpu.confidence - 0.3).abs() < 1e-6);
    assert!(gpu.source_url.as_deref().unwrap().contains("zotac"));
}

#[test]
fn duplicate_category_keeps_first_detection() {
    let catalog = catalog();
    let build = ComponentExtractor::new(&catalog).parse("RTX 4060, RX 7600");
    let gpus: Vec<_> = build
        .components
        .iter()
        .filter(|c| c.category == Category::Gpu)
        .collect();
    assert_eq!(gpus.len(), 1);
    assert_eq!(gpus[0].raw_text, "RTX 4060");
}

#[test]
fn unmatched_text_is_preserved_and_never_errors() {
    let catalog = catalog();
    let build = ComponentExtractor::new(&catalog).parse("a lovely walnut desk; two monitors");
    assert!(build.components.is_empty());
    assert!(!build.unmatched.is_empty());
}

#[test]
fn unresolved_line_keeps_its_own_price() {
    let catalog = catalog();
    let build = ComponentExtractor::new(&catalog).parse("Some obscure gpu graphics card ₹9,999");
    let component = &build.components[0];
    assert!(component.item.is_none());
    assert_eq!(component.price, Some(9_999));
}

#[test]
fn whole_input_fallback_sweeps_when_no_line_matched() {
    let catalog = catalog();
    // Bare host defeats slug extraction, and the line pass skips URLs, so
    // only the whole-input sweep can pick up the category mention.
    let build = ComponentExtractor::new(&catalog).parse("https://gpu-deals.example.com/");
    assert_eq!(build.components.len(), 1);
    assert_eq!(build.components[0].category, Category::Gpu);
    assert!(build.components[0].item.is_none());
}
