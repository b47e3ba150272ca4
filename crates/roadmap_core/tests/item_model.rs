use roadmap_core::{seed_items, Catalog, ItemId, Placement, ProductId, Quarter, RoadmapItem};

#[test]
fn item_serialization_uses_camel_case_wire_fields() {
    let item = RoadmapItem::with_id(
        ItemId::from("item-1"),
        "Unified backlog governance",
        ProductId::from("prod-1"),
        2024,
        Quarter::Q3,
    );

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], "item-1");
    assert_eq!(json["title"], "Unified backlog governance");
    assert_eq!(json["productId"], "prod-1");
    assert_eq!(json["year"], 2024);
    assert_eq!(json["quarter"], "Q3");

    let decoded: RoadmapItem = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn place_replaces_all_placement_fields() {
    let mut item = RoadmapItem::with_id(
        ItemId::from("item-9"),
        "Billing revamp",
        ProductId::from("prod-2"),
        2024,
        Quarter::Q1,
    );

    item.place(Placement::new(ProductId::from("prod-3"), 2026, Quarter::Q4));

    assert_eq!(
        item.placement(),
        Placement::new(ProductId::from("prod-3"), 2026, Quarter::Q4)
    );
    assert_eq!(item.id, ItemId::from("item-9"));
    assert_eq!(item.title, "Billing revamp");
}

#[test]
fn generated_ids_are_unique() {
    let first = ItemId::generate();
    let second = ItemId::generate();
    assert_ne!(first, second);
}

#[test]
fn seed_items_reference_catalog_products() {
    let catalog = Catalog::builtin();
    let items = seed_items(2024);

    assert_eq!(items.len(), 4);
    assert!(items.iter().all(|item| catalog.contains(&item.product_id)));
    assert_eq!(items[3].id, ItemId::from("item-4"));
    assert_eq!(items[3].year, 2025);
    assert_eq!(items[3].quarter, Quarter::Q1);
}

#[test]
fn builtin_catalog_lists_products_in_stable_order() {
    let catalog = Catalog::builtin();
    let names: Vec<&str> = catalog
        .list_products()
        .iter()
        .map(|product| product.name.as_str())
        .collect();
    assert_eq!(names, vec!["Core Platform", "Mobile App", "Admin Console"]);
    assert_eq!(
        catalog.default_product().map(|product| product.id.clone()),
        Some(ProductId::from("prod-1"))
    );
}
