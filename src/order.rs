//! The total order on [`Value`]. Equality and hashing are derived from it so the three
//! always agree, which lets values serve as map keys.

use crate::Value;
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

fn rank(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Undefined => 1,
        Value::Bool(_) => 2,
        Value::PositiveInteger(_) => 3,
        Value::NegativeInteger(_) => 4,
        Value::Double(_) => 5,
        Value::String(_) => 6,
        Value::ByteString(_) => 7,
        Value::Array(_) => 8,
        Value::Map(_) => 9,
        Value::BigInteger(_) => 10,
    }
}

/// All NaNs are one value, greater than every other double.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Value) -> Ordering {
        use Value::*;
        match (self, other) {
            (Null, Null) | (Undefined, Undefined) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (PositiveInteger(a), PositiveInteger(b)) => a.cmp(b),
            // -(m + 1) shrinks as m grows
            (NegativeInteger(a), NegativeInteger(b)) => b.cmp(a),
            (Double(a), Double(b)) => cmp_f64(*a, *b),
            (String(a), String(b)) => a.as_bytes().cmp(b.as_bytes()),
            (ByteString(a), ByteString(b)) => a.cmp(b),
            (Array(a), Array(b)) => a.cmp(b),
            (Map(a), Map(b)) => a.iter().cmp(b.iter()),
            (BigInteger(a), BigInteger(b)) => a.cmp(b),
            (a, b) => rank(a).cmp(&rank(b)),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool { self.cmp(other) == Ordering::Equal }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        rank(self).hash(state);
        match self {
            Value::Null | Value::Undefined => {}
            Value::Bool(b) => b.hash(state),
            Value::PositiveInteger(u) | Value::NegativeInteger(u) => u.hash(state),
            Value::Double(d) => {
                let bits = if d.is_nan() { f64::NAN.to_bits() } else { d.to_bits() };
                bits.hash(state)
            }
            Value::String(s) => s.hash(state),
            Value::ByteString(b) => b.hash(state),
            Value::Array(a) => a.hash(state),
            Value::Map(m) => m.hash(state),
            Value::BigInteger(b) => b.hash(state),
        }
    }
}
