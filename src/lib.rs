//! # cbor_value
//!
//! A dynamically typed value model for CBOR ([RFC 7049](https://tools.ietf.org/html/rfc7049))
//! together with an encoder that always picks the smallest wire form and a decoder that
//! reports every malformed or unsupported input as an error.
//!
//! # Usage
//!
//! ```
//! use cbor_value::prelude::*;
//!
//! let mut fields = BTreeMap::new();
//! fields.insert("id", Value::from(7));
//! fields.insert("ratio", Value::from(1.5));
//! fields.insert("tags", Value::from(vec!["a", "b"]));
//!
//! let value = Value::from(fields);
//!
//! // encode
//! let encoded = encode(&value);
//!
//! // and decode it again
//! let decoded = decode(&encoded).unwrap();
//!
//! assert_eq!(value, decoded);
//! assert_eq!(decoded.member("id").unwrap(), &Value::from(7));
//! ```
//!
//! # An overview of the value model
//!
//! [`Value`] is a closed enum. Every variant has a predicate (`is_*`) and a typed accessor
//! (`to_*`) that fails with [`ValueError::TypeMismatch`] when called on the wrong variant.
//!
//! ## Integers
//!
//! Integers from `-2^64` to `2^64 - 1` are held natively, as [`Value::PositiveInteger`] or
//! [`Value::NegativeInteger`]. A negative integer stores `m` and stands for `-(m + 1)`, the
//! same convention the wire uses. Anything wider becomes a [`BigInteger`].
//!
//! ```
//! use cbor_value::prelude::*;
//!
//! let small = Value::from(23u8);
//!
//! let negative = Value::from(-25);
//! assert_eq!(negative.to_negative_integer().unwrap(), 24);
//!
//! let large = Value::from(BigInt::from(u64::max_value()) * 1000u32);
//! assert!(large.is_big_integer());
//! ```
//!
//! ## Floats
//!
//! Floats are held as `f64`. The encoder writes them at half, single or double precision,
//! whichever is the narrowest that reproduces the exact bits.
//!
//! ## Strings
//!
//! Text strings are [`String`]s, byte strings are [`Bytes`].
//!
//! ```
//! use cbor_value::prelude::*;
//!
//! let text = Value::from("hello world");
//!
//! let literal = Value::from_static(b"this is a byte string literal");
//! ```
//!
//! ## Maps
//!
//! Maps are [`VecMap`]s ordered by the total order on [`Value`], so two maps with the same
//! entries encode to the same bytes regardless of how they were built.
//!
//! # Wire format
//!
//! This section describes the subset of CBOR this crate reads and writes.
//!
//! ## Headers
//!
//! The first byte of every item is the *header*. The first 3 bits are the *major type*,
//! the remaining 5 bits are the *additional information*.
//!
//! | Major | Meaning          | Additional information                                  |
//! | ---   | ---              | ---                                                     |
//! | 0     | unsigned integer | value below 24, else 24/25/26/27 for 1/2/4/8 bytes      |
//! | 1     | negative integer | as major 0, giving `m` for the integer `-(m + 1)`       |
//! | 2     | byte string      | length, as major 0                                      |
//! | 3     | text string      | length, as major 0                                      |
//! | 4     | array            | item count, as major 0                                  |
//! | 5     | map              | pair count, as major 0                                  |
//! | 6     | tag              | only 2 (positive bignum) and 3 (negative bignum)        |
//! | 7     | simple / float   | 20-23 false/true/null/undefined, 25/26/27 half/single/double |
//!
//! Indefinite-length items, one-byte simple values and all other tags are rejected with
//! [`DecodeError::UnsupportedFeature`].

#![warn(
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    unreachable_pub,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::cast_lossless)]

#[macro_use]
mod util;

pub mod bigint;
pub mod encoding;
pub mod errors;
pub mod float;
pub mod iter;
pub mod limits;
mod order;
pub mod prelude;
pub mod rep;
pub mod vecmap;

pub use bigint::{BigInteger, Sign};
pub use errors::{DecodeError, Unsupported, ValueError};
pub use iter::Cursor;
pub use vecmap::VecMap;

use bytes::Bytes;
use half::f16;
use num_bigint::BigInt;
use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    hash::{BuildHasher, Hash},
};

/// Returned by [`Value::at`] and the cursor when there is nothing to return.
pub(crate) static NULL: Value = Value::Null;

/// The variant of a [`Value`], in the order the total order sorts them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Type {
    Null,
    Undefined,
    Bool,
    PositiveInteger,
    NegativeInteger,
    Double,
    String,
    ByteString,
    Array,
    Map,
    BigInteger,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Type::Null => "null",
            Type::Undefined => "undefined",
            Type::Bool => "bool",
            Type::PositiveInteger => "positive integer",
            Type::NegativeInteger => "negative integer",
            Type::Double => "double",
            Type::String => "string",
            Type::ByteString => "byte string",
            Type::Array => "array",
            Type::Map => "map",
            Type::BigInteger => "big integer",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug)]
/// A decoded or encodable CBOR item.
///
/// Equality, ordering and hashing all follow one total order: variants compare in
/// declaration order, then by payload. See [`Value::cmp`](Ord::cmp).
///
/// # Example
///
/// ```
/// use cbor_value::prelude::*;
///
/// let b = Value::Bool(true);
///
/// let val = match b {
///     Value::Bool(b) => b,
///     _ => panic!(),
/// };
///
/// assert!(val);
/// ```
pub enum Value {
    /// Null.
    Null,
    /// Undefined.
    Undefined,
    /// Boolean.
    Bool(bool),
    /// An integer from `0` to `2^64 - 1`.
    PositiveInteger(u64),
    /// Holds `m` for the integer `-(m + 1)`.
    ///
    /// ```
    /// use cbor_value::prelude::*;
    ///
    /// assert_eq!(Value::NegativeInteger(0), Value::from(-1));
    /// ```
    NegativeInteger(u64),
    /// Floating point number, whatever its width on the wire.
    Double(f64),
    /// UTF-8 text.
    String(String),
    /// Raw bytes.
    ByteString(Bytes),
    /// Array.
    Array(Vec<Value>),
    /// Map, iterated in key order.
    Map(VecMap<Value, Value>),
    /// An integer outside the range of the two integer variants, or `-2^64`.
    BigInteger(BigInteger),
}

macro_rules! accessor {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $out:ty, $bind:ident => $ret:expr) => {
        $(#[$doc])*
        pub fn $name(&self) -> Result<$out, ValueError> {
            match self {
                Value::$variant($bind) => Ok($ret),
                other => Err(ValueError::mismatch(Type::$variant, other.value_type())),
            }
        }
    };
}

impl Value {
    /// The null value.
    pub fn null() -> Value { Value::Null }

    /// The undefined value.
    pub fn undefined() -> Value { Value::Undefined }

    /// Converts a byte string literal to a [`Value::ByteString`].
    ///
    /// # Example
    ///
    /// ```
    /// use cbor_value::prelude::*;
    ///
    /// let v = Value::from_static(b"\x00\x01");
    ///
    /// assert_eq!(&v.to_byte_string().unwrap()[..], &[0, 1]);
    /// ```
    pub fn from_static(bytes: &'static [u8]) -> Value { Value::ByteString(Bytes::from_static(bytes)) }

    /// Builds a [`Value::ByteString`] from anything convertible to [`Bytes`].
    pub fn byte_string<B: Into<Bytes>>(bytes: B) -> Value { Value::ByteString(bytes.into()) }

    /// Builds an array by converting each element.
    ///
    /// # Example
    ///
    /// ```
    /// use cbor_value::prelude::*;
    ///
    /// let v = Value::convert_from_seq(vec![vec![1, 2], vec![3]]);
    ///
    /// assert_eq!(v.at(1).at(0), &Value::from(3));
    /// ```
    pub fn convert_from_seq<I, T>(items: I) -> Value
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Array(items.into_iter().map(T::into).collect())
    }

    /// Builds a map by converting each key and value. Later duplicate keys win.
    pub fn convert_from_map<I, K, V>(entries: I) -> Value
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// The variant of this value.
    pub fn value_type(&self) -> Type {
        match self {
            Value::Null => Type::Null,
            Value::Undefined => Type::Undefined,
            Value::Bool(_) => Type::Bool,
            Value::PositiveInteger(_) => Type::PositiveInteger,
            Value::NegativeInteger(_) => Type::NegativeInteger,
            Value::Double(_) => Type::Double,
            Value::String(_) => Type::String,
            Value::ByteString(_) => Type::ByteString,
            Value::Array(_) => Type::Array,
            Value::Map(_) => Type::Map,
            Value::BigInteger(_) => Type::BigInteger,
        }
    }

    pub fn is_null(&self) -> bool { self.value_type() == Type::Null }

    pub fn is_undefined(&self) -> bool { self.value_type() == Type::Undefined }

    pub fn is_bool(&self) -> bool { self.value_type() == Type::Bool }

    pub fn is_positive_integer(&self) -> bool { self.value_type() == Type::PositiveInteger }

    pub fn is_negative_integer(&self) -> bool { self.value_type() == Type::NegativeInteger }

    pub fn is_double(&self) -> bool { self.value_type() == Type::Double }

    pub fn is_string(&self) -> bool { self.value_type() == Type::String }

    pub fn is_byte_string(&self) -> bool { self.value_type() == Type::ByteString }

    pub fn is_array(&self) -> bool { self.value_type() == Type::Array }

    pub fn is_map(&self) -> bool { self.value_type() == Type::Map }

    pub fn is_big_integer(&self) -> bool { self.value_type() == Type::BigInteger }

    accessor!(
        /// Tries to read a [`bool`].
        ///
        /// # Example
        ///
        /// ```
        /// use cbor_value::prelude::*;
        ///
        /// assert!(Value::from(true).to_bool().unwrap());
        /// assert!(Value::from(1).to_bool().is_err());
        /// ```
        to_bool, Bool, bool, b => *b
    );

    accessor!(
        /// Tries to read the payload of a [`Value::PositiveInteger`].
        to_positive_integer, PositiveInteger, u64, u => *u
    );

    accessor!(
        /// Tries to read the stored `m` of a [`Value::NegativeInteger`], which stands for
        /// `-(m + 1)`.
        to_negative_integer, NegativeInteger, u64, m => *m
    );

    accessor!(
        /// Tries to read a [`Value::Double`].
        to_double, Double, f64, d => *d
    );

    accessor!(
        /// Tries to read a [`Value::String`].
        to_text, String, &str, s => s.as_str()
    );

    accessor!(
        /// Tries to read a [`Value::ByteString`].
        to_byte_string, ByteString, &Bytes, b => b
    );

    accessor!(
        /// Tries to read the elements of a [`Value::Array`].
        to_array, Array, &[Value], a => a.as_slice()
    );

    accessor!(
        /// Tries to read a [`Value::Map`].
        to_map, Map, &VecMap<Value, Value>, m => m
    );

    accessor!(
        /// Tries to read a [`Value::BigInteger`].
        to_big_integer, BigInteger, &BigInteger, b => b
    );

    /// Consumes the value, returning its text.
    pub fn into_text(self) -> Result<String, ValueError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(ValueError::mismatch(Type::String, other.value_type())),
        }
    }

    /// Consumes the value, returning its bytes.
    pub fn into_byte_string(self) -> Result<Bytes, ValueError> {
        match self {
            Value::ByteString(b) => Ok(b),
            other => Err(ValueError::mismatch(Type::ByteString, other.value_type())),
        }
    }

    /// Consumes the value, returning its elements.
    pub fn into_array(self) -> Result<Vec<Value>, ValueError> {
        match self {
            Value::Array(a) => Ok(a),
            other => Err(ValueError::mismatch(Type::Array, other.value_type())),
        }
    }

    /// Consumes the value, returning its entries.
    pub fn into_map(self) -> Result<VecMap<Value, Value>, ValueError> {
        match self {
            Value::Map(m) => Ok(m),
            other => Err(ValueError::mismatch(Type::Map, other.value_type())),
        }
    }

    /// Reads any integer variant as a [`BigInt`]. Returns `None` for everything else.
    ///
    /// # Example
    ///
    /// ```
    /// use cbor_value::prelude::*;
    ///
    /// assert_eq!(Value::NegativeInteger(9).as_bigint(), Some(BigInt::from(-10)));
    /// assert_eq!(Value::from("ten").as_bigint(), None);
    /// ```
    pub fn as_bigint(&self) -> Option<BigInt> {
        match self {
            Value::PositiveInteger(u) => Some(BigInt::from(*u)),
            Value::NegativeInteger(m) => Some(-BigInt::from(*m) - 1),
            Value::BigInteger(b) => Some(b.to_bigint()),
            _ => None,
        }
    }

    /// Number of elements of an array or entries of a map.
    ///
    /// # Errors
    ///
    /// [`ValueError::TypeMismatch`] for every other variant.
    pub fn size(&self) -> Result<usize, ValueError> {
        match self {
            Value::Array(a) => Ok(a.len()),
            Value::Map(m) => Ok(m.len()),
            other => Err(ValueError::mismatch(Type::Array, other.value_type())),
        }
    }

    /// Whether an array or map has no elements.
    pub fn is_empty(&self) -> Result<bool, ValueError> { Ok(self.size()? == 0) }

    /// Whether a map contains `key`. Text keys are wrapped as [`Value::String`].
    ///
    /// # Example
    ///
    /// ```
    /// use cbor_value::prelude::*;
    ///
    /// let m = Value::convert_from_map(vec![("a", 1)]);
    ///
    /// assert!(m.has_member("a").unwrap());
    /// assert!(!m.has_member("b").unwrap());
    /// assert!(Value::from(1).has_member("a").is_err());
    /// ```
    pub fn has_member<K: Into<Value>>(&self, key: K) -> Result<bool, ValueError> {
        Ok(self.to_map()?.contains_key(&key.into()))
    }

    /// Looks up `key` in a map.
    ///
    /// # Errors
    ///
    /// [`ValueError::TypeMismatch`] if this is not a map, [`ValueError::KeyNotFound`] if the
    /// key is absent.
    pub fn member<K: Into<Value>>(&self, key: K) -> Result<&Value, ValueError> {
        let key = key.into();
        self.to_map()?
            .get(&key)
            .ok_or_else(|| ValueError::KeyNotFound(key.inspect()))
    }

    /// The element of an array at `index`, or [`Value::Null`] when the index is out of range
    /// or this is not an array. Unlike [`Value::member`], this never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use cbor_value::prelude::*;
    ///
    /// let arr = Value::from(vec![1, 2]);
    ///
    /// assert_eq!(arr.at(1), &Value::from(2));
    /// assert!(arr.at(2).is_null());
    /// ```
    pub fn at(&self, index: usize) -> &Value {
        match self {
            Value::Array(a) => a.get(index).unwrap_or(&NULL),
            _ => &NULL,
        }
    }

    /// A cursor over the elements of an array or the entries of a map.
    pub fn cursor(&self) -> Cursor<'_> { Cursor::new(self) }

    /// A human readable rendering for debugging. The format is not stable.
    ///
    /// # Example
    ///
    /// ```
    /// use cbor_value::prelude::*;
    ///
    /// let v = Value::from(vec![Value::from(1), Value::from_static(b"\xab")]);
    ///
    /// assert_eq!(v.inspect(), "[1, (0xAB)]");
    /// ```
    pub fn inspect(&self) -> String { self.to_string() }
}

fn fmt_hex(f: &mut fmt::Formatter, bytes: &[u8]) -> fmt::Result {
    bytes.iter().try_for_each(|b| write!(f, "{:02X}", b))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => f.write_str("(null)"),
            Value::Undefined => f.write_str("(undefined)"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::PositiveInteger(u) => write!(f, "{}", u),
            Value::NegativeInteger(m) => write!(f, "-{}", u128::from(*m) + 1),
            Value::Double(d) => write!(f, "{:?}", d),
            Value::String(s) => write!(f, "{:?}", s),
            Value::ByteString(b) => {
                f.write_str("(0x")?;
                fmt_hex(f, b)?;
                f.write_str(")")
            }
            Value::Array(a) => {
                f.write_str("[")?;
                for (i, v) in a.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                f.write_str("]")
            }
            Value::Map(m) => {
                f.write_str("{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                f.write_str("}")
            }
            Value::BigInteger(b) => {
                if b.is_positive() {
                    f.write_str("(big integer: 0x")?;
                } else {
                    f.write_str("(negative big integer: 0x")?;
                }
                fmt_hex(f, b.magnitude())?;
                f.write_str(")")
            }
        }
    }
}

impl Default for Value {
    fn default() -> Self { Value::Null }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        if i < 0 {
            Value::NegativeInteger((-(i + 1)) as u64)
        } else {
            Value::PositiveInteger(i as u64)
        }
    }
}

impl From<i128> for Value {
    fn from(i: i128) -> Value {
        if i < 0 {
            let m = -(i + 1);
            if m < u64::max_value() as i128 {
                Value::NegativeInteger(m as u64)
            } else {
                Value::from(BigInt::from(i))
            }
        } else if i <= u64::max_value() as i128 {
            Value::PositiveInteger(i as u64)
        } else {
            Value::from(BigInt::from(i))
        }
    }
}

impl From<BigInteger> for Value {
    fn from(b: BigInteger) -> Value {
        debug_assert!(b.is_canonical());
        Value::BigInteger(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value { Value::String(s.to_owned()) }
}

impl From<&String> for Value {
    fn from(s: &String) -> Value { Value::String(s.clone()) }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Value { v.clone() }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Value { Value::convert_from_seq(v) }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(o: Option<T>) -> Value { o.map_or(Value::Null, T::into) }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(m: BTreeMap<K, V>) -> Value { Value::convert_from_map(m) }
}

impl<K: Into<Value> + Hash + Eq, V: Into<Value>, S: BuildHasher> From<HashMap<K, V, S>> for Value {
    fn from(m: HashMap<K, V, S>) -> Value { Value::convert_from_map(m) }
}

from_fn!(Value, bool, Value::Bool);
from_fn!(Value, u64, Value::PositiveInteger);
from_fn!(Value, f64, Value::Double);
from_fn!(Value, String, Value::String);
from_fn!(Value, Bytes, Value::ByteString);
from_fn!(Value, VecMap<Value, Value>, Value::Map);
from_fn!(Value, u128, |u: u128| {
    if u <= u64::max_value() as u128 {
        Value::PositiveInteger(u as u64)
    } else {
        Value::from(BigInt::from(u))
    }
});
from_fn!(Value, f32, |f: f32| Value::Double(f as f64));
from_fn!(Value, f16, |f: f16| Value::Double(f.to_f64()));
from_fn!(Value, &BigInt, |i: &BigInt| BigInteger::from_bigint(i).normalize());
from_fn!(Value, BigInt, |i: BigInt| Value::from(&i));
from_prims!(Value);
