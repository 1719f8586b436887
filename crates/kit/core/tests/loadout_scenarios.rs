//! End-to-end engine scenarios: placement rules, the full-suit lock, armor
//! exclusivity, and command serialization.

use kit_core::{
    ATTIRE_CATEGORY, CatalogOracle, EmptyCatalog, ExecuteError, HORSE_SUBCATEGORY, ItemDefinition,
    KitEngine, KitEnv, LoadoutState, PlaceAction, PlaceError, QuantityError, RuleSet, SlotRef,
    TransitionPhaseError, WearState, serialize_commands,
};

/// Minimal in-memory catalog covering the items the scenarios touch.
struct StubCatalog {
    items: Vec<ItemDefinition>,
}

impl StubCatalog {
    fn armory() -> Self {
        let attire = |id: &str, subcategory: &str| {
            ItemDefinition::new(id, id, None, ATTIRE_CATEGORY, subcategory)
        };
        Self {
            items: vec![
                attire("riot.helmet", "Helmets"),
                attire("metal.facemask", "Helmets"),
                attire("coffeecan.helmet", "Helmets"),
                attire("jacket", "Torso"),
                attire("roadsign.jacket", "Torso"),
                attire("shoes.boots", "Feet"),
                attire("horse.armor.roadsign", HORSE_SUBCATEGORY),
                ItemDefinition::new("rifle.ak", "Assault Rifle", None, "WEAPONS", "Rifles"),
                ItemDefinition::new("wood", "Wood", None, "RESOURCES", "Wood"),
                ItemDefinition::new(
                    "largebackpack",
                    "Large Backpack",
                    None,
                    ATTIRE_CATEGORY,
                    "Misc",
                ),
            ],
        }
    }
}

impl CatalogOracle for StubCatalog {
    fn find_item(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.id.eq_ignore_ascii_case(id))
    }

    fn is_attire(&self, id: &str) -> bool {
        self.find_item(id).is_some_and(|item| {
            item.category == ATTIRE_CATEGORY && item.subcategory != HORSE_SUBCATEGORY
        })
    }
}

fn place_err(result: Result<(), ExecuteError>) -> PlaceError {
    match result {
        Err(ExecuteError::Place(TransitionPhaseError { error, .. })) => error,
        other => panic!("expected place rejection, got {other:?}"),
    }
}

#[test]
fn lock_item_occupies_wear_bar_exclusively() {
    let rules = RuleSet::default();
    let catalog = StubCatalog::armory();
    let env = KitEnv::new(&catalog, &rules);
    let mut state = LoadoutState::default();
    let mut engine = KitEngine::new(&mut state);

    engine
        .place(&env, PlaceAction::from_palette(SlotRef::wear(0), "jacket", "Jacket"))
        .unwrap();
    engine
        .place(&env, PlaceAction::from_palette(SlotRef::wear(1), "shoes.boots", "Boots"))
        .unwrap();
    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::wear(3), "hazmatsuit", "Hazmat Suit"),
        )
        .unwrap();

    // Exactly one occupied wear slot remains, holding the suit.
    let worn: Vec<_> = state.worn().collect();
    assert_eq!(worn.len(), 1);
    assert_eq!(worn[0].0, SlotRef::wear(3));
    assert_eq!(worn[0].1.item_id, "hazmatsuit");
    assert_eq!(state.wear_state(), WearState::LockedBySuit);
}

#[test]
fn locked_wear_bar_rejects_until_suit_removed() {
    let rules = RuleSet::default();
    let catalog = StubCatalog::armory();
    let env = KitEnv::new(&catalog, &rules);
    let mut state = LoadoutState::default();
    let mut engine = KitEngine::new(&mut state);

    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::wear(0), "hazmatsuit", "Hazmat Suit"),
        )
        .unwrap();

    let err = place_err(engine.place(
        &env,
        PlaceAction::from_palette(SlotRef::wear(1), "jacket", "Jacket"),
    ));
    assert_eq!(err, PlaceError::WearBarLocked);

    // Hotbar and main stay unrestricted while the bar is locked.
    engine
        .place(&env, PlaceAction::from_palette(SlotRef::hotbar(0), "jacket", "Jacket"))
        .unwrap();

    engine.clear(&env, SlotRef::wear(0));
    assert_eq!(state.wear_state(), WearState::Unlocked);

    let mut engine = KitEngine::new(&mut state);
    engine
        .place(&env, PlaceAction::from_palette(SlotRef::wear(1), "jacket", "Jacket"))
        .unwrap();
}

#[test]
fn conflicting_armor_is_rejected_symmetrically() {
    let rules = RuleSet::default();
    let catalog = StubCatalog::armory();
    let env = KitEnv::new(&catalog, &rules);

    for (first, second) in [
        ("riot.helmet", "metal.facemask"),
        ("metal.facemask", "riot.helmet"),
    ] {
        let mut state = LoadoutState::default();
        let mut engine = KitEngine::new(&mut state);
        engine
            .place(&env, PlaceAction::from_palette(SlotRef::wear(0), first, first))
            .unwrap();

        let err = place_err(engine.place(
            &env,
            PlaceAction::from_palette(SlotRef::wear(4), second, second),
        ));
        assert_eq!(
            err,
            PlaceError::ConflictingArmor {
                candidate: second.to_owned(),
                worn: first.to_owned(),
            }
        );
    }
}

#[test]
fn conflict_check_inspects_every_wear_slot() {
    let rules = RuleSet::default();
    let catalog = StubCatalog::armory();
    let env = KitEnv::new(&catalog, &rules);
    let mut state = LoadoutState::default();
    let mut engine = KitEngine::new(&mut state);

    // Occupy a late wear slot; a naive first-match scan would miss it.
    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::wear(6), "riot.helmet", "Riot Helmet"),
        )
        .unwrap();

    let err = place_err(engine.place(
        &env,
        PlaceAction::from_palette(SlotRef::wear(0), "coffeecan.helmet", "Coffee Can"),
    ));
    assert!(matches!(err, PlaceError::ConflictingArmor { .. }));
}

#[test]
fn items_in_different_groups_coexist() {
    let rules = RuleSet::default();
    let catalog = StubCatalog::armory();
    let env = KitEnv::new(&catalog, &rules);
    let mut state = LoadoutState::default();
    let mut engine = KitEngine::new(&mut state);

    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::wear(0), "riot.helmet", "Riot Helmet"),
        )
        .unwrap();
    engine
        .place(&env, PlaceAction::from_palette(SlotRef::wear(1), "jacket", "Jacket"))
        .unwrap();
    engine
        .place(&env, PlaceAction::from_palette(SlotRef::wear(2), "shoes.boots", "Boots"))
        .unwrap();

    assert_eq!(state.worn().count(), 3);
}

#[test]
fn replacing_a_worn_item_with_its_own_group_is_allowed() {
    let rules = RuleSet::default();
    let catalog = StubCatalog::armory();
    let env = KitEnv::new(&catalog, &rules);
    let mut state = LoadoutState::default();
    let mut engine = KitEngine::new(&mut state);

    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::wear(0), "riot.helmet", "Riot Helmet"),
        )
        .unwrap();
    // Same destination slot: the old helmet is replaced, not conflicted with.
    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::wear(0), "metal.facemask", "Facemask"),
        )
        .unwrap();

    assert_eq!(state.occupancy(SlotRef::wear(0)).unwrap().item_id, "metal.facemask");
}

#[test]
fn non_attire_and_horse_items_rejected_from_wear() {
    let rules = RuleSet::default();
    let catalog = StubCatalog::armory();
    let env = KitEnv::new(&catalog, &rules);
    let mut state = LoadoutState::default();
    let mut engine = KitEngine::new(&mut state);

    let err = place_err(engine.place(
        &env,
        PlaceAction::from_palette(SlotRef::wear(0), "rifle.ak", "Assault Rifle"),
    ));
    assert!(matches!(err, PlaceError::NotWearable { .. }));

    // Horse attire is categorically unwearable.
    let err = place_err(engine.place(
        &env,
        PlaceAction::from_palette(SlotRef::wear(0), "horse.armor.roadsign", "Horse Armor"),
    ));
    assert!(matches!(err, PlaceError::NotWearable { .. }));

    // Both still place fine outside the wear bar.
    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::hotbar(0), "rifle.ak", "Assault Rifle"),
        )
        .unwrap();
    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::main(0), "horse.armor.roadsign", "Horse Armor"),
        )
        .unwrap();
}

#[test]
fn backpacks_never_enter_the_wear_bar() {
    let rules = RuleSet::default();
    let catalog = StubCatalog::armory();
    let env = KitEnv::new(&catalog, &rules);
    let mut state = LoadoutState::default();
    let mut engine = KitEngine::new(&mut state);

    // Catalog lists it under ATTIRE, but the id substring wins first.
    let err = place_err(engine.place(
        &env,
        PlaceAction::from_palette(SlotRef::wear(0), "LargeBackpack", "Large Backpack"),
    ));
    assert_eq!(err, PlaceError::BackpackNotWearable);
}

#[test]
fn rejection_leaves_state_untouched() {
    let rules = RuleSet::default();
    let catalog = StubCatalog::armory();
    let env = KitEnv::new(&catalog, &rules);
    let mut state = LoadoutState::default();
    let mut engine = KitEngine::new(&mut state);

    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::wear(0), "riot.helmet", "Riot Helmet"),
        )
        .unwrap();

    let before = state.clone();
    let mut engine = KitEngine::new(&mut state);
    for request in [
        PlaceAction::from_palette(SlotRef::wear(1), "metal.facemask", "Facemask"),
        PlaceAction::from_palette(SlotRef::wear(1), "wood", "Wood"),
        PlaceAction::from_palette(SlotRef::wear(99), "jacket", "Jacket"),
    ] {
        assert!(engine.place(&env, request).is_err());
    }
    assert_eq!(state, before);
}

#[test]
fn slot_to_slot_move_clears_source_and_rederives_lock() {
    let rules = RuleSet::default();
    let catalog = StubCatalog::armory();
    let env = KitEnv::new(&catalog, &rules);
    let mut state = LoadoutState::default();
    let mut engine = KitEngine::new(&mut state);

    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::wear(0), "hazmatsuit", "Hazmat Suit"),
        )
        .unwrap();
    assert!(state.wear_state().is_locked());

    // Stash the suit in main storage: source empties, bar unlocks.
    let mut engine = KitEngine::new(&mut state);
    engine
        .place(&env, PlaceAction::from_slot(SlotRef::main(5), SlotRef::wear(0)))
        .unwrap();
    assert!(state.occupancy(SlotRef::wear(0)).is_none());
    assert_eq!(state.occupancy(SlotRef::main(5)).unwrap().item_id, "hazmatsuit");
    assert_eq!(state.wear_state(), WearState::Unlocked);
}

#[test]
fn moving_armor_between_wear_slots_does_not_self_conflict() {
    let rules = RuleSet::default();
    let catalog = StubCatalog::armory();
    let env = KitEnv::new(&catalog, &rules);
    let mut state = LoadoutState::default();
    let mut engine = KitEngine::new(&mut state);

    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::wear(0), "riot.helmet", "Riot Helmet"),
        )
        .unwrap();
    engine
        .place(&env, PlaceAction::from_slot(SlotRef::wear(5), SlotRef::wear(0)))
        .unwrap();

    assert!(state.occupancy(SlotRef::wear(0)).is_none());
    assert_eq!(state.occupancy(SlotRef::wear(5)).unwrap().item_id, "riot.helmet");
}

#[test]
fn moving_from_an_empty_slot_is_rejected() {
    let rules = RuleSet::default();
    let catalog = StubCatalog::armory();
    let env = KitEnv::new(&catalog, &rules);
    let mut state = LoadoutState::default();
    let mut engine = KitEngine::new(&mut state);

    let err = place_err(engine.place(
        &env,
        PlaceAction::from_slot(SlotRef::main(0), SlotRef::hotbar(2)),
    ));
    assert_eq!(err, PlaceError::EmptySource(SlotRef::hotbar(2)));
}

#[test]
fn clear_all_is_idempotent() {
    let rules = RuleSet::default();
    let catalog = StubCatalog::armory();
    let env = KitEnv::new(&catalog, &rules);
    let mut state = LoadoutState::default();
    let mut engine = KitEngine::new(&mut state);

    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::wear(0), "hazmatsuit", "Hazmat Suit"),
        )
        .unwrap();
    engine
        .place(&env, PlaceAction::from_palette(SlotRef::main(3), "wood", "Wood"))
        .unwrap();

    engine.clear_all(&env);
    assert!(state.is_empty());
    assert_eq!(state.wear_state(), WearState::Unlocked);

    let after_once = state.clone();
    KitEngine::new(&mut state).clear_all(&env);
    assert_eq!(state, after_once);
}

#[test]
fn quantity_edits_clamp_and_respect_wear_slots() {
    let rules = RuleSet::default();
    let catalog = StubCatalog::armory();
    let env = KitEnv::new(&catalog, &rules);
    let mut state = LoadoutState::default();
    let mut engine = KitEngine::new(&mut state);

    engine
        .place(&env, PlaceAction::from_palette(SlotRef::main(0), "wood", "Wood"))
        .unwrap();
    engine.set_quantity(&env, SlotRef::main(0), 0).unwrap();
    assert_eq!(state.occupancy(SlotRef::main(0)).unwrap().quantity, 1);

    let mut engine = KitEngine::new(&mut state);
    engine.set_quantity(&env, SlotRef::main(0), 500).unwrap();
    assert_eq!(state.occupancy(SlotRef::main(0)).unwrap().quantity, 500);

    let mut engine = KitEngine::new(&mut state);
    engine
        .place(&env, PlaceAction::from_palette(SlotRef::wear(0), "jacket", "Jacket"))
        .unwrap();
    let err = engine.set_quantity(&env, SlotRef::wear(0), 3);
    assert!(matches!(
        err,
        Err(ExecuteError::SetQuantity(TransitionPhaseError {
            error: QuantityError::QuantityFixed(_),
            ..
        }))
    ));

    let err = engine.set_quantity(&env, SlotRef::main(1), 3);
    assert!(matches!(
        err,
        Err(ExecuteError::SetQuantity(TransitionPhaseError {
            error: QuantityError::SlotEmpty(_),
            ..
        }))
    ));
}

#[test]
fn catalog_down_fails_closed_except_rule_data() {
    let rules = RuleSet::default();
    let env = KitEnv::new(&EmptyCatalog, &rules);
    let mut state = LoadoutState::default();
    let mut engine = KitEngine::new(&mut state);

    // Ordinary attire is unknown to an empty catalog.
    let err = place_err(engine.place(
        &env,
        PlaceAction::from_palette(SlotRef::wear(0), "jacket", "Jacket"),
    ));
    assert!(matches!(err, PlaceError::NotWearable { .. }));

    // Rule-data wearables do not depend on the catalog.
    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::wear(0), "attire.bunnyears", "Bunny Ears"),
        )
        .unwrap();
    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::wear(1), "hazmatsuit", "Hazmat Suit"),
        )
        .unwrap();
    assert!(state.wear_state().is_locked());

    // Non-wear slots accept unknown ids regardless.
    let mut engine = KitEngine::new(&mut state);
    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::main(0), "does.not.exist", "Mystery"),
        )
        .unwrap();
}

#[test]
fn assembled_loadout_serializes_in_order() {
    let rules = RuleSet::default();
    let catalog = StubCatalog::armory();
    let env = KitEnv::new(&catalog, &rules);
    let mut state = LoadoutState::default();
    let mut engine = KitEngine::new(&mut state);

    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::wear(0), "scarecrowhead", "Scarecrow Head"),
        )
        .unwrap();
    engine
        .place(
            &env,
            PlaceAction::from_palette(SlotRef::hotbar(0), "rifle.ak", "Assault Rifle"),
        )
        .unwrap();
    engine.set_quantity(&env, SlotRef::hotbar(0), 2).unwrap();
    engine
        .place(&env, PlaceAction::from_palette(SlotRef::main(3), "wood", "Wood"))
        .unwrap();
    engine.set_quantity(&env, SlotRef::main(3), 10).unwrap();

    assert_eq!(
        serialize_commands("Raid", &state),
        "kit add \"Raid\" \"scarecrowhead\" 1 1 wear\n\
         kit add \"Raid\" \"rifle.ak\" 2 1 belt\n\
         kit add \"Raid\" \"wood\" 10 1 main"
    );
}
