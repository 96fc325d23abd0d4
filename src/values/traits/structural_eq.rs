use crate::equality::facade;
use crate::values::value::Value;

pub trait StructuralEq {
    /// Check if two values are element-wise equal.
    fn structural_eq(&self, other: &Self) -> bool;
}

impl StructuralEq for Value {
    fn structural_eq(&self, other: &Self) -> bool {
        facade::structural_equals(self, other, None)
    }
}

#[macro_export]
macro_rules! assert_structural_eq {
    ($left_val:expr, $right_val:expr $(,)?) => {
        if !$crate::values::traits::structural_eq::StructuralEq::structural_eq(&$left_val, &$right_val) {
            panic!(
                "structural equality assertion failed: `(left == right)`\n  left: `{:?}`,\n right: `{:?}`",
                $left_val, $right_val
            );
        }
    };
}
