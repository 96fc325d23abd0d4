use std::collections::HashMap;

use equality_core::{
    DispatchKey, dispatch_equals, dispatch_hash, hash_of,
    equality::facade::global_engine,
    types::type_key::TypeKey,
    value_equals,
    values::value::Value,
};
use indexmap::IndexMap;

use crate::equality::fixtures::{self, money, node, person, point};

#[test]
fn dispatch_matches_value_equality() {
    fixtures::init();
    let values = [
        point(1, 2),
        point(1, 2),
        money(5, "EUR"),
        money(5, "EUR"),
        person("bob", 40, Some("b"), point(3, 3)),
        person("bob", 40, Some("b"), point(3, 3)),
        Value::Null,
        1.25f32.into(),
    ];
    for a in &values {
        for b in &values {
            assert_eq!(dispatch_equals(a, b), value_equals(a, b), "{a} / {b}");
        }
        assert_eq!(dispatch_hash(a), hash_of(a));
    }
}

#[test]
fn values_as_hash_map_keys() {
    fixtures::init();
    let mut map = HashMap::new();
    map.insert(DispatchKey(point(0, 0)), "origin");
    map.insert(DispatchKey(money(100, "EUR")), "hundred");
    map.insert(DispatchKey(person("ann", 30, None, point(1, 1))), "ann");

    assert_eq!(map.get(&DispatchKey(point(0, 0))), Some(&"origin"));
    assert_eq!(map.get(&DispatchKey(money(100, "EUR"))), Some(&"hundred"));
    assert_eq!(map.get(&DispatchKey(money(100, "USD"))), None);
    assert_eq!(
        map.get(&DispatchKey(person("ann", 30, None, point(1, 1)))),
        Some(&"ann")
    );
    assert_eq!(
        map.get(&DispatchKey(person("ann", 31, None, point(1, 1)))),
        None
    );
}

#[test]
fn identity_keys_in_index_map() {
    fixtures::init();
    let shared = node();
    let mut map = IndexMap::new();
    map.insert(DispatchKey(shared.clone()), 1);
    map.insert(DispatchKey(node()), 2);
    map.insert(DispatchKey(shared.clone()), 3);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&DispatchKey(shared)), Some(&3));
}

#[test]
fn dispatcher_for_hot_paths() {
    fixtures::init();
    let dispatcher = global_engine().dispatcher(TypeKey::named("fixture:point"));
    let points: Vec<Value> = (0..16).map(|index| point(index, index)).collect();
    for (index, value) in points.iter().enumerate() {
        assert!(dispatcher.equals(value, &point(index as i32, index as i32)));
        assert!(!dispatcher.equals(value, &point(index as i32, -1)));
        assert_eq!(dispatcher.hash(value), hash_of(value));
    }
}
