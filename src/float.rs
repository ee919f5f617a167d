//! Float width selection for the encoder and widening for the decoder.
//!
//! A [`Value::Double`](crate::Value::Double) is written at the narrowest IEEE 754 width that
//! holds its exact bits. Every NaN is written as the half-precision quiet NaN `0x7e00`.

use half::f16;

/// An `f64` narrowed to the width it will be written at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Float {
    Half(f16),
    Single(f32),
    Double(f64),
}

/// The canonical NaN, as half-precision bits.
pub(crate) const HALF_NAN: u16 = 0x7e00;

impl Float {
    /// Picks the narrowest width that reproduces `f` exactly.
    ///
    /// # Example
    ///
    /// ```
    /// use cbor_value::float::Float;
    ///
    /// assert!(matches!(Float::narrowest(1.5), Float::Half(_)));
    /// assert!(matches!(Float::narrowest(100000.0), Float::Single(_)));
    /// assert!(matches!(Float::narrowest(1.1), Float::Double(_)));
    /// ```
    pub fn narrowest(f: f64) -> Float {
        if f.is_nan() {
            return Float::Half(f16::from_bits(HALF_NAN));
        }

        let single = f as f32;
        if single as f64 != f {
            return Float::Double(f);
        }

        // from_f32 rounds, so compare bits to catch lost precision and signed zeros
        let half = f16::from_f32(single);
        if half.to_f32().to_bits() == single.to_bits() {
            Float::Half(half)
        } else {
            Float::Single(single)
        }
    }

    /// Widens back to `f64`. Exact for every width.
    pub fn to_f64(self) -> f64 {
        match self {
            Float::Half(h) => h.to_f64(),
            Float::Single(s) => s as f64,
            Float::Double(d) => d,
        }
    }
}

impl From<f64> for Float {
    fn from(f: f64) -> Float { Float::narrowest(f) }
}
