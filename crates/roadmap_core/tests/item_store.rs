use roadmap_core::{
    InMemoryItemStore, ItemId, ItemStore, ProductId, Quarter, RoadmapItem, StoreError,
};

fn seeded_store() -> InMemoryItemStore {
    InMemoryItemStore::with_items(vec![
        RoadmapItem::with_id(
            ItemId::from("item-1"),
            "Unified backlog governance",
            ProductId::from("prod-1"),
            2024,
            Quarter::Q1,
        ),
        RoadmapItem::with_id(
            ItemId::from("item-2"),
            "New onboarding flow",
            ProductId::from("prod-2"),
            2024,
            Quarter::Q2,
        ),
    ])
    .unwrap()
}

#[test]
fn add_appends_one_item_in_q1_with_given_product_and_year() {
    let mut store = seeded_store();
    let before = store.list_all();

    let created = store.add("New Title", &ProductId::from("prod-3"), 2026);

    let after = store.list_all();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    let last = after.last().unwrap();
    assert_eq!(last, &created);
    assert_eq!(last.title, "New Title");
    assert_eq!(last.quarter, Quarter::Q1);
    assert_eq!(last.product_id, ProductId::from("prod-3"));
    assert_eq!(last.year, 2026);
    assert!(before.iter().all(|item| item.id != created.id));
}

#[test]
fn reassign_overwrites_placement_and_preserves_identity() {
    let mut store = seeded_store();

    let moved = store
        .reassign(
            &ItemId::from("item-2"),
            Quarter::Q4,
            &ProductId::from("prod-1"),
            2027,
        )
        .unwrap();

    assert_eq!(moved.id, ItemId::from("item-2"));
    assert_eq!(moved.title, "New onboarding flow");
    assert_eq!(moved.quarter, Quarter::Q4);
    assert_eq!(moved.product_id, ProductId::from("prod-1"));
    assert_eq!(moved.year, 2027);
    assert_eq!(store.get(&ItemId::from("item-2")), Some(moved));
}

#[test]
fn reassign_keeps_insertion_order() {
    let mut store = seeded_store();
    store
        .reassign(
            &ItemId::from("item-1"),
            Quarter::Q3,
            &ProductId::from("prod-1"),
            2024,
        )
        .unwrap();

    let ids: Vec<String> = store
        .list_all()
        .into_iter()
        .map(|item| item.id.to_string())
        .collect();
    assert_eq!(ids, vec!["item-1", "item-2"]);
}

#[test]
fn reassign_unknown_id_returns_not_found_and_changes_nothing() {
    let mut store = seeded_store();
    let before = store.list_all();

    let err = store
        .reassign(
            &ItemId::from("item-missing"),
            Quarter::Q2,
            &ProductId::from("prod-1"),
            2024,
        )
        .unwrap_err();

    assert_eq!(err, StoreError::NotFound(ItemId::from("item-missing")));
    assert_eq!(err.to_string(), "roadmap item not found: item-missing");
    assert_eq!(store.list_all(), before);
}

#[test]
fn seeding_rejects_duplicate_ids() {
    let duplicate = RoadmapItem::with_id(
        ItemId::from("item-1"),
        "again",
        ProductId::from("prod-1"),
        2024,
        Quarter::Q2,
    );
    let mut items = seeded_store().list_all();
    items.push(duplicate);

    let err = InMemoryItemStore::with_items(items).unwrap_err();
    assert_eq!(err, StoreError::DuplicateId(ItemId::from("item-1")));
}

#[test]
fn added_ids_never_collide_with_seed_ids() {
    let mut store = seeded_store();
    let product = ProductId::from("prod-1");
    let created: Vec<ItemId> = (0..50)
        .map(|n| store.add(&format!("item {n}"), &product, 2024).id)
        .collect();

    let mut all: Vec<ItemId> = store.list_all().into_iter().map(|item| item.id).collect();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 52);
    assert_eq!(created.len(), 50);
}
