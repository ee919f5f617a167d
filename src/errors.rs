//! Error types for decoding bytes and for reading values.

use crate::Type;
use failure::Fail;
use std::fmt;

/// A wire feature that is well-formed CBOR but that this codec does not handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    /// Indefinite-length strings, arrays and maps, and the `0xff` break marker.
    IndefiniteLength,
    /// One-byte simple values (major type 7, additional info 24).
    SimpleValue,
    /// Any tag other than 2 (positive bignum) or 3 (negative bignum).
    Tag(u64),
    /// Additional information 28 through 30.
    ReservedAdditionalInfo(u8),
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Unsupported::IndefiniteLength => write!(f, "indefinite-length item"),
            Unsupported::SimpleValue => write!(f, "one-byte simple value"),
            Unsupported::Tag(tag) => write!(f, "tag {}", tag),
            Unsupported::ReservedAdditionalInfo(info) => {
                write!(f, "reserved additional information {}", info)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
/// An error encountered when decoding fails.
pub enum DecodeError {
    /// A header or a length-prefixed payload runs past the end of the input.
    #[fail(
        display = "truncated input: needed {} more bytes, {} remaining",
        needed, remaining
    )]
    TruncatedInput {
        /// Bytes the item still required.
        needed: u64,
        /// Bytes left in the input.
        remaining: usize,
    },
    /// The input uses a CBOR feature outside the supported subset.
    #[fail(display = "unsupported feature: {}", _0)]
    UnsupportedFeature(Unsupported),
    /// The header byte is not a valid major/minor combination.
    #[fail(display = "malformed header byte {:#04x}", _0)]
    MalformedHeader(u8),
    /// A text string is not valid UTF-8.
    #[fail(display = "text string is not valid UTF-8")]
    InvalidUtf8,
    /// A bignum tag wraps something other than a byte string.
    #[fail(display = "bignum tag content must be a byte string")]
    InvalidTagContent,
    /// Containers are nested deeper than the configured limit.
    #[fail(display = "nesting depth exceeds the limit of {}", _0)]
    DepthLimitExceeded(usize),
    /// Bytes remain after the first item and trailing data is not allowed.
    #[fail(display = "{} trailing bytes after the decoded item", _0)]
    TrailingBytes(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
/// An error encountered when a [`Value`](crate::Value) is read as the wrong variant.
pub enum ValueError {
    /// The accessor expected a different variant.
    #[fail(display = "type mismatch: expected {}, found {}", expected, found)]
    TypeMismatch {
        /// What the accessor needed.
        expected: Type,
        /// What the value holds.
        found: Type,
    },
    /// An integer does not fit the requested Rust type.
    #[fail(display = "integer out of range for {}", _0)]
    OutOfRange(&'static str),
    /// `member()` on a map that does not contain the key.
    #[fail(display = "key not found: {}", _0)]
    KeyNotFound(String),
}

impl ValueError {
    pub(crate) fn mismatch(expected: Type, found: Type) -> Self {
        ValueError::TypeMismatch { expected, found }
    }
}
