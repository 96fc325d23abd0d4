use crate::equality::facade;
use crate::values::value::Value;

pub trait ValueEq {
    /// Check if two values have equal logical content.
    fn value_eq(&self, other: &Self) -> bool;
}

impl ValueEq for Value {
    fn value_eq(&self, other: &Self) -> bool {
        facade::value_equals(self, other)
    }
}

#[macro_export]
macro_rules! assert_value_eq {
    ($left_val:expr, $right_val:expr $(,)?) => {
        if !$crate::values::traits::value_eq::ValueEq::value_eq(&$left_val, &$right_val) {
            panic!(
                "value equality assertion failed: `(left === right)`\n  left: `{:?}`,\n right: `{:?}`",
                $left_val, $right_val
            );
        }
    };
}
