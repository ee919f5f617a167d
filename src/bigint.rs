//! Arbitrary precision integers as carried on the wire: a sign and a big-endian magnitude.
//!
//! A [`BigInteger`] is only canonical when its value does not fit one of the 64-bit integer
//! variants of [`Value`]. The one exception is `-2^64`, which has no
//! [`Value::NegativeInteger`] representation.

use crate::Value;
use num_bigint::{BigInt, Sign as BigSign};
use num_traits::Zero;
use std::convert::TryFrom;

/// The sign of a [`BigInteger`]. `Negative` orders before `Positive`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Debug)]
pub enum Sign {
    /// Below zero.
    Negative,
    /// Zero or above.
    Positive,
}

/// An integer stored as a sign and the big-endian bytes of its absolute value.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug)]
pub struct BigInteger {
    sign: Sign,
    magnitude: Vec<u8>,
}

impl BigInteger {
    /// Creates a [`BigInteger`] from a sign and big-endian magnitude. Leading zero bytes are
    /// ignored.
    ///
    /// # Errors
    ///
    /// A value that fits [`Value::PositiveInteger`] or [`Value::NegativeInteger`] has no
    /// [`BigInteger`] form and is returned as that smaller [`Value`] instead.
    ///
    /// # Example
    ///
    /// ```
    /// use cbor_value::prelude::*;
    ///
    /// let b = BigInteger::new(Sign::Positive, vec![0, 1, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
    /// assert_eq!(b.magnitude(), &[1, 0, 0, 0, 0, 0, 0, 0, 0]);
    ///
    /// assert_eq!(BigInteger::new(Sign::Negative, vec![1]), Err(Value::from(-1)));
    /// ```
    pub fn new(sign: Sign, magnitude: Vec<u8>) -> Result<Self, Value> {
        match BigInteger::from_parts(sign, magnitude).normalize() {
            Value::BigInteger(b) => Ok(b),
            small => Err(small),
        }
    }

    /// Like [`BigInteger::new`] without the range check. Callers normalize.
    pub(crate) fn from_parts(sign: Sign, magnitude: Vec<u8>) -> Self {
        let mut magnitude = magnitude;
        strip_leading_zeros(&mut magnitude);
        BigInteger { sign, magnitude }
    }

    pub(crate) fn from_bigint(i: &BigInt) -> Self {
        let (sign, magnitude) = i.to_bytes_be();
        let sign = match sign {
            BigSign::Minus => Sign::Negative,
            BigSign::NoSign | BigSign::Plus => Sign::Positive,
        };
        if i.is_zero() {
            BigInteger::from_parts(sign, vec![])
        } else {
            BigInteger::from_parts(sign, magnitude)
        }
    }

    /// `2^64` with a negative sign, the one negative value a 64-bit magnitude cannot hold.
    pub fn negative_two_pow_64() -> Self {
        BigInteger {
            sign: Sign::Negative,
            magnitude: vec![1, 0, 0, 0, 0, 0, 0, 0, 0],
        }
    }

    pub fn sign(&self) -> Sign { self.sign }

    pub fn is_positive(&self) -> bool { self.sign == Sign::Positive }

    /// Big-endian bytes of the absolute value.
    pub fn magnitude(&self) -> &[u8] { &self.magnitude }

    pub fn into_parts(self) -> (Sign, Vec<u8>) { (self.sign, self.magnitude) }

    /// Whether this value has no smaller [`Value`] representation.
    pub(crate) fn is_canonical(&self) -> bool {
        self.magnitude.len() > 8
            || (self.sign == Sign::Negative && self.magnitude == [1, 0, 0, 0, 0, 0, 0, 0, 0])
    }

    /// Converts into the smallest [`Value`] variant that holds the same integer.
    pub(crate) fn normalize(self) -> Value {
        match self.split() {
            Split::Positive(u) => Value::PositiveInteger(u),
            Split::Negative(m) if m != u64::max_value() => Value::NegativeInteger(m),
            Split::Negative(_) | Split::Big => Value::BigInteger(self),
        }
    }

    /// Classifies the value by the wire form it needs. `-2^64` reports as
    /// `Negative(u64::MAX)` since it still fits a major type 1 header.
    pub(crate) fn split(&self) -> Split {
        let mag = self.magnitude.as_slice();
        if mag.len() > 9 {
            return Split::Big;
        }
        match self.sign {
            Sign::Positive if mag.len() <= 8 => Split::Positive(be_to_u64(mag)),
            Sign::Positive => Split::Big,
            Sign::Negative if mag.is_empty() => Split::Positive(0),
            Sign::Negative => {
                let mut m = mag.to_vec();
                decr_be(&mut m);
                if m.len() <= 8 {
                    Split::Negative(be_to_u64(&m))
                } else {
                    Split::Big
                }
            }
        }
    }

    /// Converts to a [`BigInt`].
    pub fn to_bigint(&self) -> BigInt {
        let sign = match self.sign {
            Sign::Positive => BigSign::Plus,
            Sign::Negative => BigSign::Minus,
        };
        BigInt::from_bytes_be(sign, &self.magnitude)
    }
}

/// Fails with the smaller [`Value`] when `i` fits a 64-bit integer variant.
impl TryFrom<&BigInt> for BigInteger {
    type Error = Value;

    fn try_from(i: &BigInt) -> Result<Self, Value> {
        match BigInteger::from_bigint(i).normalize() {
            Value::BigInteger(b) => Ok(b),
            small => Err(small),
        }
    }
}

impl TryFrom<BigInt> for BigInteger {
    type Error = Value;

    fn try_from(i: BigInt) -> Result<Self, Value> { BigInteger::try_from(&i) }
}

impl From<BigInteger> for BigInt {
    fn from(b: BigInteger) -> BigInt { b.to_bigint() }
}

/// The wire form a [`BigInteger`] reduces to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Split {
    /// Fits major type 0.
    Positive(u64),
    /// Fits major type 1, holding `|n| - 1`.
    Negative(u64),
    /// Needs a bignum tag.
    Big,
}

pub(crate) fn strip_leading_zeros(digs: &mut Vec<u8>) {
    let start = digs.iter().position(|b| *b != 0).unwrap_or(digs.len());
    digs.drain(..start);
}

fn be_to_u64(digs: &[u8]) -> u64 {
    debug_assert!(digs.len() <= 8);
    digs.iter().fold(0u64, |acc, d| (acc << 8) | u64::from(*d))
}

/// Adds one to a big-endian magnitude, growing it by a byte when the carry runs off the top.
pub(crate) fn incr_be(digs: &mut Vec<u8>) {
    for dig in digs.iter_mut().rev() {
        *dig = dig.wrapping_add(1);
        if *dig != 0 {
            return;
        }
    }
    digs.insert(0, 1);
}

/// Subtracts one from a nonzero big-endian magnitude and strips the leading zeros left behind.
pub(crate) fn decr_be(digs: &mut Vec<u8>) {
    debug_assert!(digs.iter().any(|d| *d != 0));
    for dig in digs.iter_mut().rev() {
        *dig = dig.wrapping_sub(1);
        if *dig != 255 {
            break;
        }
    }
    strip_leading_zeros(digs);
}
