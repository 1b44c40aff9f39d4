//! Field element trait for generic cell values

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in a field cell.
///
/// Bounds the types usable as sample values, ensuring they support the
/// numeric conversions the rasterizer needs.
pub trait FieldElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Whether this value is usable for rendering (finite for floats,
    /// always true for integers)
    fn is_valid(&self) -> bool;

    /// Whether this type is a floating point type
    fn is_float() -> bool;

    /// Convert self to f32
    fn to_f32(self) -> Option<f32> {
        NumCast::from(self)
    }

    /// Convert self to f64
    fn to_f64(self) -> Option<f64> {
        NumCast::from(self)
    }
}

macro_rules! impl_field_element_int {
    ($t:ty) => {
        impl FieldElement for $t {
            fn is_valid(&self) -> bool {
                true
            }

            fn is_float() -> bool {
                false
            }
        }
    };
}

macro_rules! impl_field_element_float {
    ($t:ty) => {
        impl FieldElement for $t {
            fn is_valid(&self) -> bool {
                self.is_finite()
            }

            fn is_float() -> bool {
                true
            }
        }
    };
}

impl_field_element_int!(i8);
impl_field_element_int!(i16);
impl_field_element_int!(i32);
impl_field_element_int!(i64);
impl_field_element_int!(u8);
impl_field_element_int!(u16);
impl_field_element_int!(u32);
impl_field_element_int!(u64);
impl_field_element_float!(f32);
impl_field_element_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_validity() {
        assert!(1.5f32.is_valid());
        assert!(!f32::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
    }

    #[test]
    fn int_always_valid() {
        assert!(0i32.is_valid());
        assert!(u8::MAX.is_valid());
    }

    #[test]
    fn conversions() {
        assert_eq!(42i16.to_f32(), Some(42.0));
        assert_eq!(2.5f64.to_f32(), Some(2.5));
    }
}
