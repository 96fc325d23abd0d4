use itertools::Itertools;

use crate::equality::{
    engine::EqualityEngine,
    facade,
    hash::{promoted_hash, structural_hash},
    numeric::{number_of, numeric_equals},
};
use crate::values::{traits::identity::Identity, value::Value};

/// Per-element comparison injected into structural comparison. `hash` must
/// agree with `equals`.
pub trait ElementComparer {
    fn equals(&self, a: &Value, b: &Value) -> bool;
    fn hash(&self, value: &Value) -> u64;
}

/// Compares elements with `value_equals` of an engine.
#[derive(Clone, Copy)]
pub struct ValueComparer<'e> {
    engine: &'e EqualityEngine,
}

impl<'e> ValueComparer<'e> {
    pub fn new(engine: &'e EqualityEngine) -> Self {
        ValueComparer { engine }
    }
}

impl Default for ValueComparer<'static> {
    fn default() -> Self {
        ValueComparer::new(facade::global_engine())
    }
}

impl ElementComparer for ValueComparer<'_> {
    fn equals(&self, a: &Value, b: &Value) -> bool {
        self.engine.value_equals(a, b)
    }

    fn hash(&self, value: &Value) -> u64 {
        self.engine.hash_of(value)
    }
}

/// Compares numbers operator-style (width promotion, IEEE `NaN`). Other
/// values go through `value_equals`. Not reflexive for `NaN`.
#[derive(Clone, Copy)]
pub struct NumericComparer<'e> {
    engine: &'e EqualityEngine,
}

impl<'e> NumericComparer<'e> {
    pub fn new(engine: &'e EqualityEngine) -> Self {
        NumericComparer { engine }
    }
}

impl Default for NumericComparer<'static> {
    fn default() -> Self {
        NumericComparer::new(facade::global_engine())
    }
}

impl ElementComparer for NumericComparer<'_> {
    fn equals(&self, a: &Value, b: &Value) -> bool {
        match (number_of(a), number_of(b)) {
            (Some(_), Some(_)) => numeric_equals(a, b),
            _ => self.engine.value_equals(a, b),
        }
    }

    fn hash(&self, value: &Value) -> u64 {
        match number_of(value) {
            Some(number) => promoted_hash(number),
            None => self.engine.hash_of(value),
        }
    }
}

/// Recurses into nested containers through itself and hands leaves to the
/// wrapped comparer, so `[[1, 2], [3]]` is compared element by element at
/// every depth.
#[derive(Clone, Copy, Default)]
pub struct Structural<C>(pub C);

impl<C: ElementComparer> ElementComparer for Structural<C> {
    fn equals(&self, a: &Value, b: &Value) -> bool {
        if a.is_container() || b.is_container() {
            structural_equals(a, b, self)
        } else {
            self.0.equals(a, b)
        }
    }

    fn hash(&self, value: &Value) -> u64 {
        if value.is_container() {
            structural_hash(value, self)
        } else {
            self.0.hash(value)
        }
    }
}

/// Element-wise comparison of two containers under `comparer`. Values that
/// are not containers are handed to `comparer` as a whole.
pub(crate) fn structural_equals(
    a: &Value,
    b: &Value,
    comparer: &dyn ElementComparer,
) -> bool {
    match (a.is_null(), b.is_null()) {
        (true, true) => return true,
        (true, false) | (false, true) => return false,
        _ => {}
    }
    if a.identical(b) {
        return true;
    }
    let (a_elements, b_elements) = match (a, b) {
        (Value::Array(a), Value::Array(b)) => (a.elements(), b.elements()),
        (Value::Tuple(a), Value::Tuple(b)) => {
            (a.elements.as_slice(), b.elements.as_slice())
        }
        _ if a.is_container() || b.is_container() => return false,
        _ => return comparer.equals(a, b),
    };
    if a_elements.len() != b_elements.len() {
        return false;
    }
    a_elements
        .iter()
        .zip_eq(b_elements)
        .all(|(a, b)| comparer.equals(a, b))
}
