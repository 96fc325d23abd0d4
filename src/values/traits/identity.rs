use crate::values::value::Value;

pub trait Identity {
    /// Check if two values are the same allocation.
    fn identical(&self, other: &Self) -> bool;
}

/// Only identity-bearing values (text, objects, arrays) can be identical.
/// Two absent values are identical; values without identity never are,
/// not even to themselves.
impl Identity for Value {
    fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Text(a), Value::Text(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

#[macro_export]
macro_rules! assert_identical {
    ($left_val:expr, $right_val:expr $(,)?) => {
        if !$crate::values::traits::identity::Identity::identical(&$left_val, &$right_val) {
            panic!(
                "identity assertion failed: `(left is right)`\n  left: `{:?}`,\n right: `{:?}`",
                $left_val, $right_val
            );
        }
    };
}
