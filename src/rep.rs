//! Conversions between Rust types and [`Value`].
//!
//! # Example
//!
//! ```
//! use cbor_value::prelude::*;
//!
//! let pairs = vec![(1u8, "one".to_string()), (2, "two".to_string())];
//!
//! let v = pairs.to_value();
//! let back: Vec<(u8, String)> = v.into_rep().unwrap();
//!
//! assert_eq!(back, pairs);
//! ```

use crate::{errors::ValueError, vecmap::VecMap, BigInteger, Type, Value};
use bytes::Bytes;
use num_bigint::BigInt;
use std::{
    collections::{BTreeMap, HashMap},
    convert::TryFrom,
    hash::{BuildHasher, Hash},
};

/// A value representable as a [`Value`].
pub trait ValueRep: Clone + Sized {
    /// Converts value into a [`Value`].
    ///
    /// # Example
    ///
    /// ```
    /// use cbor_value::rep::*;
    ///
    /// let v = 1u32.to_value();
    /// ```
    fn to_value(&self) -> Value { self.clone().into_value() }

    /// Consumes value, converting it into a [`Value`].
    fn into_value(self) -> Value { self.to_value() }

    /// Converts value from a [`Value`].
    ///
    /// # Errors
    ///
    /// [`ValueError::TypeMismatch`] for the wrong variant, [`ValueError::OutOfRange`] for an
    /// integer that does not fit.
    ///
    /// # Example
    ///
    /// ```
    /// use cbor_value::prelude::*;
    ///
    /// assert_eq!(u8::from_value(Value::from(200)), Ok(200));
    /// assert_eq!(u8::from_value(Value::from(300)), Err(ValueError::OutOfRange("u8")));
    /// ```
    fn from_value(v: Value) -> Result<Self, ValueError>;
}

impl Value {
    /// Converts into any [`ValueRep`] type.
    pub fn into_rep<T: ValueRep>(self) -> Result<T, ValueError> { T::from_value(self) }
}

fn mismatch<T>(expected: Type, v: &Value) -> Result<T, ValueError> {
    Err(ValueError::mismatch(expected, v.value_type()))
}

impl ValueRep for Value {
    fn into_value(self) -> Value { self }

    fn from_value(v: Value) -> Result<Self, ValueError> { Ok(v) }
}

impl ValueRep for bool {
    fn into_value(self) -> Value { Value::Bool(self) }

    fn from_value(v: Value) -> Result<Self, ValueError> { v.to_bool() }
}

impl ValueRep for u64 {
    fn into_value(self) -> Value { Value::PositiveInteger(self) }

    fn from_value(v: Value) -> Result<Self, ValueError> { v.to_positive_integer() }
}

impl ValueRep for i64 {
    fn into_value(self) -> Value { Value::from(self) }

    fn from_value(v: Value) -> Result<Self, ValueError> {
        match v {
            Value::PositiveInteger(u) => i64::try_from(u).map_err(|_| ValueError::OutOfRange("i64")),
            Value::NegativeInteger(m) => i64::try_from(m)
                .map(|m| -m - 1)
                .map_err(|_| ValueError::OutOfRange("i64")),
            Value::BigInteger(_) => Err(ValueError::OutOfRange("i64")),
            other => mismatch(Type::PositiveInteger, &other),
        }
    }
}

macro_rules! narrow_rep {
    ($t:ty, $wide:ty) => {
        impl ValueRep for $t {
            fn into_value(self) -> Value { Value::from(self) }

            fn from_value(v: Value) -> Result<Self, ValueError> {
                let wide = <$wide>::from_value(v)?;
                <$t>::try_from(wide).map_err(|_| ValueError::OutOfRange(stringify!($t)))
            }
        }
    };
}

narrow_rep!(u8, i64);
narrow_rep!(u16, i64);
narrow_rep!(u32, i64);
narrow_rep!(usize, u64);
narrow_rep!(i8, i64);
narrow_rep!(i16, i64);
narrow_rep!(i32, i64);
narrow_rep!(isize, i64);

impl ValueRep for i128 {
    fn into_value(self) -> Value { Value::from(self) }

    fn from_value(v: Value) -> Result<Self, ValueError> {
        let found = v.value_type();
        let i = v
            .as_bigint()
            .ok_or_else(|| ValueError::mismatch(Type::PositiveInteger, found))?;
        i128::try_from(i).map_err(|_| ValueError::OutOfRange("i128"))
    }
}

impl ValueRep for BigInt {
    fn into_value(self) -> Value { Value::from(self) }

    fn from_value(v: Value) -> Result<Self, ValueError> {
        let found = v.value_type();
        v.as_bigint()
            .ok_or_else(|| ValueError::mismatch(Type::BigInteger, found))
    }
}

impl ValueRep for BigInteger {
    fn into_value(self) -> Value { Value::from(self) }

    fn from_value(v: Value) -> Result<Self, ValueError> {
        match v {
            Value::BigInteger(b) => Ok(b),
            other => mismatch(Type::BigInteger, &other),
        }
    }
}

impl ValueRep for f64 {
    fn into_value(self) -> Value { Value::Double(self) }

    fn from_value(v: Value) -> Result<Self, ValueError> { v.to_double() }
}

impl ValueRep for f32 {
    fn into_value(self) -> Value { Value::from(self) }

    fn from_value(v: Value) -> Result<Self, ValueError> {
        let d = v.to_double()?;
        let f = d as f32;
        if f as f64 == d || d.is_nan() {
            Ok(f)
        } else {
            Err(ValueError::OutOfRange("f32"))
        }
    }
}

impl ValueRep for String {
    fn into_value(self) -> Value { Value::String(self) }

    fn from_value(v: Value) -> Result<Self, ValueError> { v.into_text() }
}

impl ValueRep for Bytes {
    fn into_value(self) -> Value { Value::ByteString(self) }

    fn from_value(v: Value) -> Result<Self, ValueError> { v.into_byte_string() }
}

impl<T: ValueRep> ValueRep for Vec<T> {
    fn into_value(self) -> Value { Value::Array(self.into_iter().map(T::into_value).collect()) }

    fn to_value(&self) -> Value { Value::Array(self.iter().map(T::to_value).collect()) }

    fn from_value(v: Value) -> Result<Self, ValueError> {
        v.into_array()?.into_iter().map(T::from_value).collect()
    }
}

/// `None` is [`Value::Null`], `Some(x)` is `x` itself.
impl<T: ValueRep> ValueRep for Option<T> {
    fn into_value(self) -> Value { self.map_or(Value::Null, T::into_value) }

    fn to_value(&self) -> Value { self.as_ref().map_or(Value::Null, T::to_value) }

    fn from_value(v: Value) -> Result<Self, ValueError> {
        match v {
            Value::Null => Ok(None),
            v => T::from_value(v).map(Some),
        }
    }
}

impl<K: ValueRep + Ord, V: ValueRep> ValueRep for VecMap<K, V> {
    fn into_value(self) -> Value {
        Value::Map(
            self.into_iter()
                .map(|(k, v)| (k.into_value(), v.into_value()))
                .collect(),
        )
    }

    fn to_value(&self) -> Value {
        Value::Map(self.iter().map(|(k, v)| (k.to_value(), v.to_value())).collect())
    }

    fn from_value(v: Value) -> Result<Self, ValueError> {
        v.into_map()?
            .into_iter()
            .map(|(k, v)| Ok((K::from_value(k)?, V::from_value(v)?)))
            .collect()
    }
}

impl<K: ValueRep + Ord, V: ValueRep> ValueRep for BTreeMap<K, V> {
    fn into_value(self) -> Value {
        Value::Map(
            self.into_iter()
                .map(|(k, v)| (k.into_value(), v.into_value()))
                .collect(),
        )
    }

    fn from_value(v: Value) -> Result<Self, ValueError> {
        v.into_map()?
            .into_iter()
            .map(|(k, v)| Ok((K::from_value(k)?, V::from_value(v)?)))
            .collect()
    }
}

impl<K, V, S> ValueRep for HashMap<K, V, S>
where
    K: ValueRep + Hash + Eq,
    V: ValueRep,
    S: BuildHasher + Default + Clone,
{
    fn into_value(self) -> Value {
        Value::Map(
            self.into_iter()
                .map(|(k, v)| (k.into_value(), v.into_value()))
                .collect(),
        )
    }

    fn from_value(v: Value) -> Result<Self, ValueError> {
        v.into_map()?
            .into_iter()
            .map(|(k, v)| Ok((K::from_value(k)?, V::from_value(v)?)))
            .collect()
    }
}

fn take_tuple(v: Value, len: usize) -> Result<std::vec::IntoIter<Value>, ValueError> {
    let arr = v.into_array()?;
    if arr.len() == len {
        Ok(arr.into_iter())
    } else {
        Err(ValueError::OutOfRange("tuple length"))
    }
}

macro_rules! tuple_rep {
    ($len:expr, $($name:ident $idx:tt),+) => {
        impl<$($name: ValueRep),+> ValueRep for ($($name,)+) {
            fn into_value(self) -> Value { Value::Array(vec![$(self.$idx.into_value()),+]) }

            fn from_value(v: Value) -> Result<Self, ValueError> {
                let mut iter = take_tuple(v, $len)?;
                Ok(($($name::from_value(iter.next().unwrap_or_default())?,)+))
            }
        }
    };
}

tuple_rep!(2, A 0, B 1);
tuple_rep!(3, A 0, B 1, C 2);
tuple_rep!(4, A 0, B 1, C 2, D 3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(i64::from_value(Value::from(-5)), Ok(-5));
        assert_eq!(
            i64::from_value(Value::NegativeInteger(i64::max_value() as u64)),
            Ok(i64::min_value())
        );
        assert_eq!(
            i64::from_value(Value::NegativeInteger(1 << 63)),
            Err(ValueError::OutOfRange("i64"))
        );
        assert!(u64::from_value(Value::from(-1)).is_err());
        assert_eq!(i8::from_value(Value::from(-128)), Ok(-128));
        assert_eq!(i8::from_value(Value::from(128)), Err(ValueError::OutOfRange("i8")));
        assert_eq!(
            u16::from_value(Value::from("7")),
            Err(ValueError::TypeMismatch {
                expected: Type::PositiveInteger,
                found: Type::String,
            })
        );
    }

    #[test]
    fn wide_integers() {
        let big: BigInt = BigInt::from(u64::max_value()) * 4u32;
        let v = big.clone().into_value();
        assert!(v.is_big_integer());
        assert_eq!(BigInt::from_value(v.clone()), Ok(big));
        assert_eq!(i128::from_value(v), Ok(u64::max_value() as i128 * 4));
        assert_eq!(i128::from_value(Value::from(-3)), Ok(-3));
    }

    #[test]
    fn containers() {
        let mut m = BTreeMap::new();
        m.insert("k".to_string(), vec![Some(1u32), None]);
        let v = m.clone().into_value();
        assert_eq!(v.member("k").unwrap().at(1), &Value::Null);
        assert_eq!(BTreeMap::from_value(v), Ok(m));

        let t = (true, "x".to_string(), 2.5);
        assert_eq!(<(bool, String, f64)>::from_value(t.to_value()), Ok(t));
        assert!(<(bool, bool)>::from_value(Value::from(vec![true])).is_err());
    }

    #[test]
    fn floats() {
        assert_eq!(f32::from_value(Value::from(1.5)), Ok(1.5f32));
        assert_eq!(f32::from_value(Value::from(1.1)), Err(ValueError::OutOfRange("f32")));
        assert!(f32::from_value(Value::from(f64::NAN)).unwrap().is_nan());
        assert!(f64::from_value(Value::from(1)).is_err());
    }
}
