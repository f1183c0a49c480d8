//! Property tests for the resolver: purity, base fallback, order
//! insensitivity, and leak-freedom under arbitrary relation soups.

use proptest::prelude::*;

use saga_core::models::{AttributeMap, EntitySnapshot, RelationPriority, RelationView};
use saga_temporal::resolver;

fn arb_value() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        any::<i64>().prop_map(|n| serde_json::json!(n)),
        "[a-z]{0,8}".prop_map(|s| serde_json::json!(s)),
        any::<bool>().prop_map(|b| serde_json::json!(b)),
    ]
}

// Small key alphabet so payloads actually collide with each other and with
// the base attributes.
fn arb_attrs() -> impl Strategy<Value = AttributeMap> {
    proptest::collection::btree_map("[a-e]", arb_value(), 0..4)
        .prop_map(|m| m.into_iter().collect())
}

fn arb_time() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn arb_priority() -> impl Strategy<Value = RelationPriority> {
    prop_oneof![
        Just(RelationPriority::Event),
        Just(RelationPriority::Manual)
    ]
}

fn arb_relation() -> impl Strategy<Value = RelationView> {
    (
        proptest::option::of(arb_time()),
        proptest::option::of(arb_time()),
        proptest::option::of(arb_time()),
        any::<bool>(),
        any::<bool>(),
        arb_priority(),
        arb_time(),
        arb_attrs(),
    )
        .prop_map(
            |(
                valid_from,
                valid_to,
                source_event_date,
                valid_from_is_dynamic,
                valid_to_is_dynamic,
                priority,
                modified_at,
                payload,
            )| {
                RelationView {
                    id: uuid::Uuid::new_v4().to_string().into(),
                    target_id: "prop-entity".into(),
                    source_event_date,
                    valid_from,
                    valid_to,
                    valid_from_is_dynamic,
                    valid_to_is_dynamic,
                    priority,
                    modified_at,
                    payload,
                }
            },
        )
}

fn arb_entity() -> impl Strategy<Value = EntitySnapshot> {
    arb_attrs().prop_map(|attributes| EntitySnapshot::new("prop-entity", attributes))
}

// Resolving twice yields deep-equal results and leaves the inputs untouched.
proptest! {
    #[test]
    fn prop_resolution_is_pure(
        entity in arb_entity(),
        relations in proptest::collection::vec(arb_relation(), 0..8),
        time in arb_time(),
    ) {
        let entity_before = entity.clone();
        let relations_before = relations.clone();

        let first = resolver::resolve(&entity, &relations, time, true).unwrap();
        let second = resolver::resolve(&entity, &relations, time, true).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(entity, entity_before);
        prop_assert_eq!(relations, relations_before);
    }
}

// With no relations, the resolved state is exactly the base attributes.
proptest! {
    #[test]
    fn prop_no_relations_yield_base(entity in arb_entity(), time in arb_time()) {
        let state = resolver::resolve(&entity, &[], time, true).unwrap();
        prop_assert_eq!(state.attributes, entity.attributes);
    }
}

// The replay order is total, so the store's iteration order cannot matter.
proptest! {
    #[test]
    fn prop_input_order_is_irrelevant(
        entity in arb_entity(),
        relations in proptest::collection::vec(arb_relation(), 0..8),
        time in arb_time(),
    ) {
        let mut reversed = relations.clone();
        reversed.reverse();

        let forward = resolver::resolve(&entity, &relations, time, true).unwrap();
        let backward = resolver::resolve(&entity, &reversed, time, true).unwrap();
        prop_assert_eq!(forward, backward);
    }
}

// Relations starting strictly in the future contribute nothing.
proptest! {
    #[test]
    fn prop_future_overrides_never_leak(
        entity in arb_entity(),
        future in proptest::collection::vec((0.001..1.0e6f64, arb_attrs()), 0..6),
    ) {
        let relations: Vec<RelationView> = future
            .into_iter()
            .map(|(from, payload)| RelationView {
                id: uuid::Uuid::new_v4().to_string().into(),
                target_id: "prop-entity".into(),
                source_event_date: None,
                valid_from: Some(from),
                valid_to: None,
                valid_from_is_dynamic: false,
                valid_to_is_dynamic: false,
                priority: RelationPriority::Event,
                modified_at: 0.0,
                payload,
            })
            .collect();

        let state = resolver::resolve(&entity, &relations, 0.0, true).unwrap();
        prop_assert_eq!(state.attributes, entity.attributes);
    }
}

// Without the base, every resolved key must come from some payload.
proptest! {
    #[test]
    fn prop_overrides_only_keys_come_from_payloads(
        entity in arb_entity(),
        relations in proptest::collection::vec(arb_relation(), 0..8),
        time in arb_time(),
    ) {
        let changes = resolver::resolve(&entity, &relations, time, false).unwrap();
        for key in changes.attributes.keys() {
            let from_payload = relations.iter().any(|r| r.payload.contains_key(key));
            prop_assert!(from_payload, "key {} not present in any payload", key);
        }
    }
}
