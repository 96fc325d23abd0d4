use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use equality_core::{
    EqualityEngine, dispatch_equals, dispatch_hash,
    types::{
        core_type::CoreType,
        definition::{FieldDescriptor, TypeDefinition},
        registry::TypeRegistry,
        type_key::TypeKey,
    },
    values::{
        core_values::{array::Array, structure::Struct},
        value::Value,
    },
};

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::default();
    registry
        .insert(TypeDefinition::structure(
            "bench:point",
            vec![
                FieldDescriptor::new("x", CoreType::I32),
                FieldDescriptor::new("y", CoreType::I32),
            ],
        ))
        .unwrap();
    registry
        .insert(TypeDefinition::structure(
            "bench:label",
            vec![
                FieldDescriptor::new("text", CoreType::Text),
                FieldDescriptor::new("at", TypeKey::named("bench:point")),
            ],
        ))
        .unwrap();
    registry
}

fn label(text: &str, x: i32) -> Value {
    Struct::new(
        "bench:label",
        vec![
            text.into(),
            Struct::new("bench:point", vec![x.into(), 0i32.into()]).into(),
        ],
    )
    .into()
}

fn bench_dispatch(c: &mut Criterion) {
    let numbers: Value =
        Array::new(CoreType::I64, (0..256i64).map(Value::from).collect()).into();
    let same_numbers: Value =
        Array::new(CoreType::I64, (0..256i64).map(Value::from).collect()).into();

    c.bench_function("dispatch_equals i64", |b| {
        b.iter(|| dispatch_equals(black_box(&1i64.into()), black_box(&1i64.into())))
    });
    c.bench_function("dispatch_equals array", |b| {
        b.iter(|| dispatch_equals(black_box(&numbers), black_box(&same_numbers)))
    });
    c.bench_function("dispatch_hash array", |b| {
        b.iter(|| dispatch_hash(black_box(&numbers)))
    });
}

fn bench_resolution(c: &mut Criterion) {
    let a = label("north", 3);
    let b = label("north", 3);

    let warm = EqualityEngine::with_registry(registry());
    warm.value_equals(&a, &b);
    c.bench_function("value_equals memberwise (warm)", |bencher| {
        bencher.iter(|| warm.value_equals(black_box(&a), black_box(&b)))
    });

    c.bench_function("value_equals memberwise (cold)", |bencher| {
        bencher.iter_batched(
            || EqualityEngine::with_registry(registry()),
            |engine| engine.value_equals(black_box(&a), black_box(&b)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_dispatch, bench_resolution);
criterion_main!(benches);
