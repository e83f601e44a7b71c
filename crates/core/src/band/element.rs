//! Band element trait for values that can be read as reflectance

use num_traits::ToPrimitive;
use std::fmt::Debug;

/// Trait for values that can be coerced to a 64-bit float band cell.
///
/// Every arithmetic step of an index runs on `f64`, so integer inputs are
/// upcast here before anything else touches them. A `None` return means the
/// value has no real-number reading and the whole conversion fails.
pub trait BandElement: Debug {
    /// Read this value as `f64`
    fn to_f64(&self) -> Option<f64>;
}

macro_rules! impl_band_element_num {
    ($($t:ty),* $(,)?) => {
        $(
            impl BandElement for $t {
                #[inline]
                fn to_f64(&self) -> Option<f64> {
                    ToPrimitive::to_f64(self)
                }
            }
        )*
    };
}

impl_band_element_num!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl BandElement for bool {
    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(if *self { 1.0 } else { 0.0 })
    }
}

/// Decimal text, surrounding whitespace ignored.
impl BandElement for str {
    fn to_f64(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok()
    }
}

impl BandElement for String {
    fn to_f64(&self) -> Option<f64> {
        self.as_str().to_f64()
    }
}

/// Missing values read as NaN.
impl<T: BandElement> BandElement for Option<T> {
    fn to_f64(&self) -> Option<f64> {
        match self {
            Some(v) => v.to_f64(),
            None => Some(f64::NAN),
        }
    }
}

impl<T: BandElement + ?Sized> BandElement for &T {
    #[inline]
    fn to_f64(&self) -> Option<f64> {
        (**self).to_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_upcast() {
        assert_eq!(BandElement::to_f64(&7u8), Some(7.0));
        assert_eq!(BandElement::to_f64(&-3i16), Some(-3.0));
        assert_eq!(BandElement::to_f64(&10_000u16), Some(10_000.0));
        assert_eq!(BandElement::to_f64(&u64::MAX), Some(u64::MAX as f64));
    }

    #[test]
    fn test_floats_pass_through() {
        assert_eq!(BandElement::to_f64(&0.25f32), Some(0.25));
        assert!(BandElement::to_f64(&f64::NAN).unwrap().is_nan());
        assert_eq!(BandElement::to_f64(&f64::INFINITY), Some(f64::INFINITY));
    }

    #[test]
    fn test_bool() {
        assert_eq!(true.to_f64(), Some(1.0));
        assert_eq!(false.to_f64(), Some(0.0));
    }

    #[test]
    fn test_text() {
        assert_eq!(" 0.8 ".to_f64(), Some(0.8));
        assert_eq!(String::from("1e-3").to_f64(), Some(1e-3));
        assert_eq!("vegetation".to_f64(), None);
        assert_eq!("".to_f64(), None);
    }

    #[test]
    fn test_option() {
        assert_eq!(Some(2u8).to_f64(), Some(2.0));
        assert!(None::<f64>.to_f64().unwrap().is_nan());
        assert_eq!(Some("x").to_f64(), None);
    }
}
