use super::*;
use crate::{bigint::Split, float::Float};
use bytes::{BufMut, BytesMut};
use smallvec::SmallVec;

/// A byte sink the encoder writes into.
pub trait Serializer {
    /// The type of the output value.
    type Out;
    /// Add a byte to the output value.
    fn put_u8(&mut self, u: u8);
    /// Add a slice to the output value.
    fn put_slice(&mut self, slice: &[u8]);
    /// Return the output value.
    fn finalize(self) -> Self::Out;
}

impl Serializer for Vec<u8> {
    type Out = Self;

    fn put_u8(&mut self, u: u8) { self.push(u) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }

    fn finalize(self) -> Self::Out { self }
}

impl Serializer for BytesMut {
    type Out = Bytes;

    fn put_u8(&mut self, u: u8) { BufMut::put_u8(self, u) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }

    fn finalize(self) -> Self::Out { self.freeze() }
}

/// CBOR items on top of a [`Serializer`].
pub trait SerializerExt: Serializer {
    /// Writes a major type and its argument in the shortest header form.
    ///
    /// Arguments below 24 go in the header byte itself, larger ones follow it in 1, 2, 4 or
    /// 8 big-endian bytes.
    fn put_header(&mut self, major: u8, arg: u64);

    /// Add [`Value::Null`] to the output value.
    fn put_null(&mut self);

    /// Add [`Value::Undefined`] to the output value.
    fn put_undefined(&mut self);

    /// Add a [`bool`] to the output value.
    fn put_bool(&mut self, b: bool);

    /// Add an unsigned integer to the output value.
    fn put_uint(&mut self, u: u64);

    /// Add the negative integer `-(m + 1)` to the output value.
    fn put_nint(&mut self, m: u64);

    /// Add an [`i64`] to the output value.
    fn put_i64(&mut self, i: i64);

    /// Add an [`f64`] to the output value at the narrowest exact width.
    fn put_float(&mut self, f: f64);

    /// Add a text string to the output value.
    fn put_text(&mut self, s: &str);

    /// Add a byte string to the output value.
    fn put_bytes(&mut self, b: &[u8]);

    /// Add a [`BigInteger`] to the output value, as a plain integer when it fits and as a
    /// tag 2 or 3 bignum otherwise.
    fn put_big_integer(&mut self, b: &BigInteger);

    /// Add an array to the output value.
    fn put_arr<T: Ser>(&mut self, v: &[T]);

    /// Add a map to the output value, entries in key order.
    fn put_map<K: Ser + Ord, V: Ser>(&mut self, m: &VecMap<K, V>);
}

impl<S: Serializer> SerializerExt for S {
    #[inline]
    fn put_header(&mut self, major: u8, arg: u64) {
        debug_assert_eq!(major & MASK_INFO, 0);
        let mut head: SmallVec<[u8; 9]> = SmallVec::new();
        if arg <= INFO_INLINE_MAX as u64 {
            head.push(major | arg as u8);
        } else if arg <= u8::max_value() as u64 {
            head.push(major | INFO_U8);
            head.push(arg as u8);
        } else if arg <= u16::max_value() as u64 {
            head.push(major | INFO_U16);
            head.extend_from_slice(&(arg as u16).to_be_bytes());
        } else if arg <= u32::max_value() as u64 {
            head.push(major | INFO_U32);
            head.extend_from_slice(&(arg as u32).to_be_bytes());
        } else {
            head.push(major | INFO_U64);
            head.extend_from_slice(&arg.to_be_bytes());
        }
        self.put_slice(&head);
    }

    fn put_null(&mut self) { self.put_u8(CON_NULL) }

    fn put_undefined(&mut self) { self.put_u8(CON_UNDEFINED) }

    fn put_bool(&mut self, b: bool) {
        if b {
            self.put_u8(CON_TRUE)
        } else {
            self.put_u8(CON_FALSE)
        }
    }

    #[inline]
    fn put_uint(&mut self, u: u64) { self.put_header(TYPE_UINT, u) }

    #[inline]
    fn put_nint(&mut self, m: u64) { self.put_header(TYPE_NINT, m) }

    fn put_i64(&mut self, i: i64) {
        if i < 0 {
            self.put_nint(!(i as u64))
        } else {
            self.put_uint(i as u64)
        }
    }

    fn put_float(&mut self, f: f64) {
        match Float::narrowest(f) {
            Float::Half(h) => {
                self.put_u8(HALF);
                self.put_slice(&h.to_bits().to_be_bytes());
            }
            Float::Single(s) => {
                self.put_u8(SINGLE);
                self.put_slice(&s.to_bits().to_be_bytes());
            }
            Float::Double(d) => {
                self.put_u8(DOUBLE);
                self.put_slice(&d.to_bits().to_be_bytes());
            }
        }
    }

    fn put_text(&mut self, s: &str) {
        self.put_header(TYPE_STR, s.len() as u64);
        self.put_slice(s.as_bytes());
    }

    fn put_bytes(&mut self, b: &[u8]) {
        self.put_header(TYPE_BYT, b.len() as u64);
        self.put_slice(b);
    }

    fn put_big_integer(&mut self, b: &BigInteger) {
        match b.split() {
            Split::Positive(u) => self.put_uint(u),
            Split::Negative(m) => self.put_nint(m),
            Split::Big if b.is_positive() => {
                self.put_header(TYPE_TAG, TAG_POS_BIGNUM);
                self.put_bytes(b.magnitude());
            }
            Split::Big => {
                // the wire carries |n| - 1
                let mut digs = b.magnitude().to_vec();
                decr_be(&mut digs);
                self.put_header(TYPE_TAG, TAG_NEG_BIGNUM);
                self.put_bytes(&digs);
            }
        }
    }

    fn put_arr<T: Ser>(&mut self, v: &[T]) {
        self.put_header(TYPE_ARR, v.len() as u64);
        for t in v {
            t.ser(self);
        }
    }

    fn put_map<K: Ser + Ord, V: Ser>(&mut self, m: &VecMap<K, V>) {
        self.put_header(TYPE_MAP, m.len() as u64);
        for (k, v) in m.iter() {
            k.ser(self);
            v.ser(self);
        }
    }
}

/// A value that can be serialized.
pub trait Ser {
    /// Writes `self` into `s`.
    fn ser<S: Serializer>(&self, s: &mut S);
}

impl<T: Ser + ?Sized> Ser for &T {
    fn ser<S: Serializer>(&self, s: &mut S) { T::ser(*self, s) }
}

impl Ser for Value {
    fn ser<S: Serializer>(&self, s: &mut S) {
        match self {
            Value::Null => s.put_null(),
            Value::Undefined => s.put_undefined(),
            Value::Bool(b) => s.put_bool(*b),
            Value::PositiveInteger(u) => s.put_uint(*u),
            Value::NegativeInteger(m) => s.put_nint(*m),
            Value::Double(d) => s.put_float(*d),
            Value::String(t) => s.put_text(t),
            Value::ByteString(b) => s.put_bytes(b),
            Value::Array(a) => s.put_arr(a),
            Value::Map(m) => s.put_map(m),
            Value::BigInteger(b) => s.put_big_integer(b),
        }
    }
}

impl Ser for bool {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_bool(*self) }
}

impl Ser for u64 {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_uint(*self) }
}

impl Ser for i64 {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_i64(*self) }
}

impl Ser for f64 {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_float(*self) }
}

impl Ser for str {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_text(self) }
}

impl Ser for String {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_text(self) }
}

impl Ser for Bytes {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_bytes(self) }
}

impl Ser for BigInteger {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_big_integer(self) }
}

impl<T: Ser> Ser for Vec<T> {
    fn ser<S: Serializer>(&self, s: &mut S) { s.put_arr(self) }
}
