//! # CBOR binary encoder and decoder
//!
//! Encode and decode functions for [`Value`].
//!
//! # Example
//!
//! ```
//! use cbor_value::prelude::*;
//!
//! let value = Value::convert_from_map(vec![("x", 1), ("y", -2)]);
//!
//! // encode it
//! let enc = encode(&value);
//!
//! // let's encode it a different way too
//! let mut out = BytesMut::new();
//! encode_into(&value, &mut out);
//!
//! // but they are equivalent
//! assert_eq!(&out[..], enc.as_slice());
//!
//! // Note: decoding returns a `Result`
//! let dec = decode(&enc).unwrap();
//!
//! // success!
//! assert_eq!(dec, value);
//! ```

#![allow(clippy::inconsistent_digit_grouping)]
use crate::{
    bigint::decr_be,
    errors::DecodeError,
    limits::DecodeLimits,
    vecmap::VecMap,
    BigInteger, Value,
};
use bytes::{Buf, Bytes};
use log::debug;

pub mod ser;
pub use ser::*;
pub mod de;
pub use de::*;
mod constants;
use constants::*;

/// Encodes a value into a new vector of bytes.
///
/// Integers, lengths and floats use their shortest exact form and map entries are written in
/// key order, so equal values always encode to equal bytes.
///
/// # Example
///
/// ```
/// use cbor_value::prelude::*;
///
/// assert_eq!(encode(&Value::from(256)), vec![0x19, 0x01, 0x00]);
/// assert_eq!(encode(&Value::from(1.0)), vec![0xf9, 0x3c, 0x00]);
/// ```
pub fn encode<T: Ser + ?Sized>(t: &T) -> Vec<u8> {
    let mut out = Vec::new();
    t.ser(&mut out);
    out
}

/// Encodes a value, appending the output to `out`.
pub fn encode_into<T: Ser + ?Sized, S: Serializer>(t: &T, out: &mut S) { t.ser(out) }

/// Decodes the first item in `bytes` with the default [`DecodeLimits`]. Empty input decodes
/// to [`Value::Null`] and bytes after the first item are ignored.
///
/// # Example
///
/// ```
/// use cbor_value::prelude::*;
///
/// assert_eq!(decode(&[0x38, 0x18]), Ok(Value::from(-25)));
/// assert_eq!(decode(&[]), Ok(Value::Null));
/// assert!(decode(&[0x19, 0x01]).is_err());
/// ```
pub fn decode(bytes: &[u8]) -> Result<Value, DecodeError> {
    decode_with(bytes, &DecodeLimits::default())
}

/// Decodes the first item in `bytes` under `limits`. Empty input decodes to [`Value::Null`].
///
/// # Errors
///
/// Any [`DecodeError`], including [`DecodeError::TrailingBytes`] when `limits` rejects
/// trailing data.
pub fn decode_with(bytes: &[u8], limits: &DecodeLimits) -> Result<Value, DecodeError> {
    if bytes.is_empty() {
        return Ok(Value::Null);
    }
    let (value, consumed) = decode_prefix(bytes, limits)?;
    let trailing = bytes.len() - consumed;
    if trailing > 0 && !limits.allow_trailing {
        debug!("rejecting {} trailing bytes", trailing);
        return Err(DecodeError::TrailingBytes(trailing));
    }
    Ok(value)
}

/// Decodes the first item in `bytes`, returning it with the number of bytes it took up.
///
/// Unlike [`decode`], empty input is an error here.
///
/// # Example
///
/// ```
/// use cbor_value::prelude::*;
///
/// let stream = [0x61, 0x61, 0x02];
/// let (first, used) = decode_prefix(&stream, &DecodeLimits::default()).unwrap();
///
/// assert_eq!(first, Value::from("a"));
/// assert_eq!(used, 2);
/// ```
pub fn decode_prefix(bytes: &[u8], limits: &DecodeLimits) -> Result<(Value, usize), DecodeError> {
    let mut dec = Decoder::with_limits(bytes, *limits);
    let value = dec.read_value().map_err(|e| {
        debug!("decoding failed: {}", e);
        e
    })?;
    Ok((value, bytes.len() - dec.remaining()))
}

/// Decodes one item from the front of `buf`, advancing it past the item.
pub fn decode_buf<B: Buf>(buf: &mut B, limits: &DecodeLimits) -> Result<Value, DecodeError> {
    Decoder::with_limits(buf, *limits).read_value().map_err(|e| {
        debug!("decoding failed: {}", e);
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bigint::Sign, errors::Unsupported};
    use bytes::BytesMut;
    use num_bigint::BigInt;

    #[test]
    fn integer_width_thresholds() {
        assert_eq!(encode(&Value::from(0)), [0x00]);
        assert_eq!(encode(&Value::from(23)), [0x17]);
        assert_eq!(encode(&Value::from(24)), [0x18, 0x18]);
        assert_eq!(encode(&Value::from(255)), [0x18, 0xff]);
        assert_eq!(encode(&Value::from(256)), [0x19, 0x01, 0x00]);
        assert_eq!(encode(&Value::from(65535)), [0x19, 0xff, 0xff]);
        assert_eq!(encode(&Value::from(65536)), [0x1a, 0x00, 0x01, 0x00, 0x00]);
        assert_eq!(
            encode(&Value::from(4294967296u64)),
            [0x1b, 0, 0, 0, 1, 0, 0, 0, 0]
        );
    }

    #[test]
    fn negatives() {
        assert_eq!(decode(&[0x20]), Ok(Value::from(-1)));
        assert_eq!(decode(&[0x37]), Ok(Value::from(-24)));
        assert_eq!(decode(&[0x38, 0x18]), Ok(Value::from(-25)));
        assert_eq!(encode(&Value::from(-256)), [0x38, 0xff]);
        assert_eq!(
            encode(&Value::from(-4294967296i64)),
            [0x3a, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn negative_two_pow_64() {
        let bytes = [0x3b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
        let min = BigInteger::negative_two_pow_64();

        assert_eq!(decode(&bytes), Ok(Value::BigInteger(min.clone())));
        assert_eq!(encode(&Value::BigInteger(min)), bytes);

        // the non-canonical form still encodes to the same bytes
        assert_eq!(encode(&Value::NegativeInteger(u64::max_value())), bytes);
    }

    #[test]
    fn bignums() {
        let pos = [0xc2, 0x49, 0x01, 0, 0, 0, 0, 0, 0, 0, 0x01];
        let neg = [0xc3, 0x49, 0x01, 0, 0, 0, 0, 0, 0, 0, 0x00];
        let magnitude = vec![0x01, 0, 0, 0, 0, 0, 0, 0, 0x01];

        let p = Value::BigInteger(BigInteger::new(Sign::Positive, magnitude.clone()).unwrap());
        let n = Value::BigInteger(BigInteger::new(Sign::Negative, magnitude).unwrap());

        assert_eq!(decode(&pos), Ok(p.clone()));
        assert_eq!(encode(&p), pos);
        assert_eq!(decode(&neg), Ok(n.clone()));
        assert_eq!(encode(&n), neg);
    }

    #[test]
    fn small_big_integers_encode_as_integers() {
        let five = BigInteger::from_parts(Sign::Positive, vec![5]);
        assert_eq!(encode(&five), [0x05]);
        let minus_two = BigInteger::from_parts(Sign::Negative, vec![2]);
        assert_eq!(encode(&minus_two), [0x21]);
    }

    #[test]
    fn small_magnitudes_round_trip() {
        let cases = vec![
            (Sign::Positive, vec![5]),
            (Sign::Positive, vec![0, 0, 0xff, 0xff]),
            (Sign::Positive, vec![0xff; 8]),
            (Sign::Negative, vec![2]),
            (Sign::Negative, vec![0xff; 8]),
            (Sign::Negative, vec![1, 0, 0, 0, 0, 0, 0, 0, 0]),
            (Sign::Negative, vec![]),
        ];
        for (sign, magnitude) in cases {
            let v = match BigInteger::new(sign, magnitude) {
                Ok(b) => Value::BigInteger(b),
                Err(small) => small,
            };
            assert_eq!(decode(&encode(&v)), Ok(v.clone()), "{}", v);
        }
        assert_eq!(
            Value::from(BigInt::from(5)),
            Value::PositiveInteger(5)
        );
    }

    #[test]
    fn floats() {
        assert_eq!(decode(&[0xf9, 0x3c, 0x00]), Ok(Value::from(1.0)));
        assert_eq!(encode(&Value::from(1.0)), [0xf9, 0x3c, 0x00]);
        assert_eq!(encode(&Value::from(f64::NAN)), [0xf9, 0x7e, 0x00]);
        assert_eq!(encode(&Value::from(f32::NAN)), [0xf9, 0x7e, 0x00]);
        assert_eq!(encode(&Value::from(100000.0)), [0xfa, 0x47, 0xc3, 0x50, 0x00]);
        assert_eq!(
            encode(&Value::from(1.1)),
            [0xfb, 0x3f, 0xf1, 0x99, 0x99, 0x99, 0x99, 0x99, 0x9a]
        );

        let nan = decode(&[0xfa, 0x7f, 0xc0, 0x00, 0x00]).unwrap();
        assert!(nan.to_double().unwrap().is_nan());
        let inf = decode(&[0xf9, 0xfc, 0x00]).unwrap();
        assert_eq!(inf.to_double().unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn constants() {
        assert_eq!(encode(&Value::from(false)), [0xf4]);
        assert_eq!(encode(&Value::from(true)), [0xf5]);
        assert_eq!(encode(&Value::Null), [0xf6]);
        assert_eq!(encode(&Value::Undefined), [0xf7]);
        assert_eq!(decode(&[0xf7]), Ok(Value::Undefined));
    }

    #[test]
    fn strings() {
        assert_eq!(encode(&Value::from("")), [0x60]);
        assert_eq!(encode(&Value::from("\u{6c34}")), [0x63, 0xe6, 0xb0, 0xb4]);
        assert_eq!(encode(&Value::from_static(b"")), [0x40]);
        assert_eq!(
            encode(&Value::from_static(&[1, 2, 3, 4])),
            [0x44, 0x01, 0x02, 0x03, 0x04]
        );

        let long = "x".repeat(300);
        let enc = encode(&Value::from(long.as_str()));
        assert_eq!(enc[..3], [0x79, 0x01, 0x2c]);
        assert_eq!(decode(&enc), Ok(Value::from(long)));
    }

    #[test]
    fn map_order_is_insertion_independent() {
        let orders = vec![
            vec!["a", "b", "c"],
            vec!["c", "b", "a"],
            vec!["b", "c", "a"],
        ];
        let expected = [0xa3, 0x61, 0x61, 0x01, 0x61, 0x62, 0x01, 0x61, 0x63, 0x01];
        for keys in orders {
            let map = Value::convert_from_map(keys.into_iter().map(|k| (k, 1)));
            assert_eq!(encode(&map), expected);
        }
    }

    #[test]
    fn duplicate_keys_keep_the_last() {
        let bytes = [0xa2, 0x01, 0x61, 0x61, 0x01, 0x61, 0x62];
        let map = decode(&bytes).unwrap();
        assert_eq!(map.size().unwrap(), 1);
        assert_eq!(map.member(1).unwrap(), &Value::from("b"));
    }

    #[test]
    fn trailing_bytes() {
        let strict = DecodeLimits::default().with_allow_trailing(false);
        assert_eq!(decode(&[0x01, 0x02]), Ok(Value::from(1)));
        assert_eq!(
            decode_with(&[0x01, 0x02], &strict),
            Err(DecodeError::TrailingBytes(1))
        );
        assert_eq!(decode_with(&[0x01], &strict), Ok(Value::from(1)));
    }

    #[test]
    fn prefix_and_buf() {
        let limits = DecodeLimits::default();
        assert!(matches!(
            decode_prefix(&[], &limits),
            Err(DecodeError::TruncatedInput { .. })
        ));

        let mut buf = Bytes::from_static(&[0x01, 0x82, 0x02, 0x03, 0xf8]);
        assert_eq!(decode_buf(&mut buf, &limits), Ok(Value::from(1)));
        assert_eq!(decode_buf(&mut buf, &limits), Ok(Value::from(vec![2, 3])));
        assert_eq!(
            decode_buf(&mut buf, &limits),
            Err(DecodeError::UnsupportedFeature(Unsupported::SimpleValue))
        );
    }

    #[test]
    fn bytes_mut_sink() {
        let value = Value::from(vec![Value::from("a"), Value::from(-1)]);
        let mut out = BytesMut::new();
        encode_into(&value, &mut out);
        let frozen = out.finalize();
        assert_eq!(&frozen[..], encode(&value).as_slice());
    }
}
