use super::*;
use crate::{
    bigint::{incr_be, Sign},
    errors::Unsupported,
    limits::DecodeLimits,
};
use bytes::Buf;
use half::f16;
use log::trace;

/// A recursive-descent CBOR reader over any [`Buf`].
///
/// Every read checks the remaining length first, so truncated input is reported as
/// [`DecodeError::TruncatedInput`] and never panics. After an error the buffer position is
/// unspecified, but the nesting count starts over on the next [`Decoder::read_value`].
///
/// # Example
///
/// ```
/// use cbor_value::prelude::*;
///
/// let mut dec = Decoder::new(&[0x01, 0x20, 0xf6][..]);
///
/// assert_eq!(dec.read_value().unwrap(), Value::from(1));
/// assert_eq!(dec.read_value().unwrap(), Value::from(-1));
/// assert_eq!(dec.read_value().unwrap(), Value::Null);
/// assert_eq!(dec.remaining(), 0);
/// ```
#[derive(Debug)]
pub struct Decoder<B> {
    buf: B,
    limits: DecodeLimits,
    depth: usize,
}

impl<B: Buf> Decoder<B> {
    /// A decoder with [`DecodeLimits::default`].
    pub fn new(buf: B) -> Self { Decoder::with_limits(buf, DecodeLimits::default()) }

    pub fn with_limits(buf: B, limits: DecodeLimits) -> Self {
        Decoder {
            buf,
            limits,
            depth: 0,
        }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize { self.buf.remaining() }

    pub fn into_inner(self) -> B { self.buf }

    #[inline]
    fn ensure(&self, needed: u64) -> Result<(), DecodeError> {
        let remaining = self.buf.remaining();
        if needed > remaining as u64 {
            Err(DecodeError::TruncatedInput { needed, remaining })
        } else {
            Ok(())
        }
    }

    #[inline]
    fn take_byte(&mut self) -> Result<u8, DecodeError> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    /// Reads the argument that follows a header with additional information `info`.
    #[inline]
    fn read_arg(&mut self, info: u8) -> Result<u64, DecodeError> {
        match info {
            0..=INFO_INLINE_MAX => Ok(info as u64),
            INFO_U8 => self.take_byte().map(u64::from),
            INFO_U16 => {
                self.ensure(2)?;
                Ok(self.buf.get_u16() as u64)
            }
            INFO_U32 => {
                self.ensure(4)?;
                Ok(self.buf.get_u32() as u64)
            }
            INFO_U64 => {
                self.ensure(8)?;
                Ok(self.buf.get_u64())
            }
            INFO_INDEFINITE => Err(unsupported(Unsupported::IndefiniteLength)),
            reserved => Err(unsupported(Unsupported::ReservedAdditionalInfo(reserved))),
        }
    }

    #[inline]
    fn read_payload(&mut self, len: u64) -> Result<Bytes, DecodeError> {
        self.ensure(len)?;
        Ok(self.buf.copy_to_bytes(len as usize))
    }

    fn enter(&mut self) -> Result<(), DecodeError> {
        if self.depth >= self.limits.max_depth {
            return Err(DecodeError::DepthLimitExceeded(self.limits.max_depth));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) { self.depth -= 1 }

    /// Reads one complete item.
    pub fn read_value(&mut self) -> Result<Value, DecodeError> {
        self.depth = 0;
        self.read_item()
    }

    fn read_item(&mut self) -> Result<Value, DecodeError> {
        let byte = self.take_byte()?;
        let info = byte & MASK_INFO;
        match byte & MASK_TYPE {
            TYPE_UINT => self.read_arg(info).map(Value::PositiveInteger),
            TYPE_NINT => self.read_arg(info).map(negative),
            TYPE_BYT => {
                let len = self.read_arg(info)?;
                self.read_payload(len).map(Value::ByteString)
            }
            TYPE_STR => {
                let len = self.read_arg(info)?;
                let bytes = self.read_payload(len)?;
                std::str::from_utf8(&bytes)
                    .map(|s| Value::String(s.to_owned()))
                    .map_err(|_| DecodeError::InvalidUtf8)
            }
            TYPE_ARR => {
                let count = self.read_arg(info)?;
                self.read_array(count)
            }
            TYPE_MAP => {
                let count = self.read_arg(info)?;
                self.read_map(count)
            }
            TYPE_TAG => {
                let tag = self.read_arg(info)?;
                self.read_bignum(tag)
            }
            _ => {
                debug_assert_eq!(byte & MASK_TYPE, TYPE_SIMPLE);
                self.read_simple(byte, info)
            }
        }
    }

    fn read_array(&mut self, count: u64) -> Result<Value, DecodeError> {
        self.enter()?;
        trace!("array of {} items at depth {}", count, self.depth);
        // each item takes at least one byte
        self.ensure(count)?;
        let mut items = Vec::with_capacity(count as usize);
        for _ in 0..count {
            items.push(self.read_item()?);
        }
        self.leave();
        Ok(Value::Array(items))
    }

    fn read_map(&mut self, count: u64) -> Result<Value, DecodeError> {
        self.enter()?;
        trace!("map of {} entries at depth {}", count, self.depth);
        self.ensure(count.saturating_mul(2))?;
        let mut entries = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let key = self.read_item()?;
            let val = self.read_item()?;
            entries.push((key, val));
        }
        self.leave();
        // later duplicates win
        Ok(Value::Map(VecMap::from(entries)))
    }

    fn read_bignum(&mut self, tag: u64) -> Result<Value, DecodeError> {
        let sign = match tag {
            TAG_POS_BIGNUM => Sign::Positive,
            TAG_NEG_BIGNUM => Sign::Negative,
            other => return Err(unsupported(Unsupported::Tag(other))),
        };

        let byte = self.take_byte()?;
        if byte & MASK_TYPE != TYPE_BYT {
            return Err(DecodeError::InvalidTagContent);
        }
        let len = self.read_arg(byte & MASK_INFO)?;
        let mut digs = self.read_payload(len)?.to_vec();

        // the wire carries |n| - 1 for negatives
        if sign == Sign::Negative {
            incr_be(&mut digs);
        }
        Ok(BigInteger::from_parts(sign, digs).normalize())
    }

    fn read_simple(&mut self, byte: u8, info: u8) -> Result<Value, DecodeError> {
        match info {
            SIMPLE_FALSE => Ok(Value::Bool(false)),
            SIMPLE_TRUE => Ok(Value::Bool(true)),
            SIMPLE_NULL => Ok(Value::Null),
            SIMPLE_UNDEFINED => Ok(Value::Undefined),
            SIMPLE_EXT => Err(unsupported(Unsupported::SimpleValue)),
            INFO_U16 => {
                self.ensure(2)?;
                let half = f16::from_bits(self.buf.get_u16());
                Ok(Value::Double(half.to_f64()))
            }
            INFO_U32 => {
                self.ensure(4)?;
                Ok(Value::Double(f32::from_bits(self.buf.get_u32()) as f64))
            }
            INFO_U64 => {
                self.ensure(8)?;
                Ok(Value::Double(f64::from_bits(self.buf.get_u64())))
            }
            INFO_INDEFINITE => Err(unsupported(Unsupported::IndefiniteLength)),
            _ => Err(DecodeError::MalformedHeader(byte)),
        }
    }
}

fn unsupported(feature: Unsupported) -> DecodeError { DecodeError::UnsupportedFeature(feature) }

/// `-(m + 1)`, promoted to a [`BigInteger`] for `-2^64`.
fn negative(m: u64) -> Value {
    if m == u64::max_value() {
        Value::BigInteger(BigInteger::negative_two_pow_64())
    } else {
        Value::NegativeInteger(m)
    }
}
