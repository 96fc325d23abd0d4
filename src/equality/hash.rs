//! Hash composition. Every hash is derived along the same strategy the
//! equality path takes for the value, so values that compare equal under
//! `value_equals` always hash equally.

use std::hash::{BuildHasher, Hash, Hasher};

use foldhash::fast::FixedState;
use num_traits::ToPrimitive;
use ordered_float::OrderedFloat;

use crate::equality::{
    engine::EqualityEngine,
    numeric::{Number, number_of},
    strategy::{EqualityStrategy, FieldStrategy},
    structural::{ElementComparer, ValueComparer},
};
use crate::types::type_key::TypeKey;
use crate::values::value::Value;

/// Hash of the absent value.
pub const NULL_HASH: u64 = 0;

/// Fallback for values whose strategy cannot hash them.
pub const DEFAULT_HASH: u64 = 0x0bad_5eed;

const HASH_SEED: u64 = 0x243f_6a88_85a3_08d3;

pub(crate) fn hasher() -> impl Hasher {
    FixedState::with_seed(HASH_SEED).build_hasher()
}

/// Deterministic (per process) hash of a plain Rust value.
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut state = hasher();
    value.hash(&mut state);
    state.finish()
}

pub(crate) fn strategy_hash(
    engine: &EqualityEngine,
    strategy: &EqualityStrategy,
    value: &Value,
) -> u64 {
    if value.is_absent() {
        return NULL_HASH;
    }
    match strategy {
        EqualityStrategy::IdentityOnly => value
            .address()
            .map(|address| hash_one(&address))
            .unwrap_or(DEFAULT_HASH),
        EqualityStrategy::RawBytes { .. } => value
            .raw_bytes()
            .map(|bytes| hash_one(&bytes))
            .unwrap_or(DEFAULT_HASH),
        EqualityStrategy::Memberwise(fields) => {
            memberwise_hash(engine, fields, value)
        }
        EqualityStrategy::CustomEquatable(equatable) => equatable.hash(value),
        EqualityStrategy::NullableWrap(inner) => match value {
            Value::Nullable(nullable) => match nullable.get() {
                Some(inner_value) => {
                    declared_hash(engine, &nullable.inner, inner, inner_value)
                }
                None => NULL_HASH,
            },
            _ => DEFAULT_HASH,
        },
        EqualityStrategy::NumericPromoted(_) => numeric_hash(value),
        EqualityStrategy::StructuralContainer => {
            structural_hash(value, &ValueComparer::new(engine))
        }
    }
}

/// Hashes a value stored under a declared type, following the same
/// declared-versus-concrete rule as the comparator.
pub(crate) fn declared_hash(
    engine: &EqualityEngine,
    declared: &TypeKey,
    strategy: &EqualityStrategy,
    value: &Value,
) -> u64 {
    if value.is_absent() {
        return NULL_HASH;
    }
    match value.type_key() {
        Some(key) if &key == declared => strategy_hash(engine, strategy, value),
        _ => engine.hash_of(value),
    }
}

fn memberwise_hash(
    engine: &EqualityEngine,
    fields: &[FieldStrategy],
    value: &Value,
) -> u64 {
    let Value::Struct(structure) = value else {
        return DEFAULT_HASH;
    };
    let mut state = hasher();
    for (field, field_value) in fields.iter().zip(&structure.fields) {
        state.write_u64(declared_hash(
            engine,
            &field.ty,
            &field.strategy,
            field_value,
        ));
    }
    state.finish()
}

/// Hash of a numeric value, computed on its logical value in its own width:
/// integers by their exact value, floats by their exact value with signed
/// zeros and `NaN` payloads normalized. Integral floats hash like the
/// equal integer.
pub fn numeric_hash(value: &Value) -> u64 {
    match value {
        Value::Enum(enumeration) => {
            number_hash(&Number::Integer(enumeration.value))
        }
        _ => match number_of(value) {
            Some(number) => number_hash(&number),
            None => DEFAULT_HASH,
        },
    }
}

fn number_hash(number: &Number) -> u64 {
    let mut state = hasher();
    match number {
        Number::Boolean(value) => value.hash(&mut state),
        Number::Integer(integer) => match integer.to_i128() {
            Some(value) => value.hash(&mut state),
            None => integer.to_u128().hash(&mut state),
        },
        Number::Float(decimal) => {
            let value = decimal.as_f64();
            if value.is_finite()
                && value.fract() == 0.0
                && value >= i128::MIN as f64
                && value < i128::MAX as f64
            {
                (value as i128).hash(&mut state);
            } else {
                OrderedFloat(value).hash(&mut state);
            }
        }
    }
    state.finish()
}

/// Hash agreeing with operator-style comparison. Every number is hashed
/// at `f32` precision, the coarsest width promotion can reach.
pub(crate) fn promoted_hash(number: Number) -> u64 {
    let mut state = hasher();
    match number {
        Number::Boolean(value) => value.hash(&mut state),
        _ => number.to_f32().map(OrderedFloat).hash(&mut state),
    }
    state.finish()
}

/// Order-dependent hash of a container's elements under `comparer`.
/// Non-container values are hashed by `comparer` directly.
pub fn structural_hash(value: &Value, comparer: &dyn ElementComparer) -> u64 {
    if value.is_null() {
        return NULL_HASH;
    }
    let Some(elements) = value.elements() else {
        return comparer.hash(value);
    };
    let mut state = hasher();
    state.write_usize(elements.len());
    for element in elements {
        state.write_u64(comparer.hash(element));
    }
    state.finish()
}
