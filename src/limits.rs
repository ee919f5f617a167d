//! Decoder configuration.

/// Default bound on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Bounds applied while decoding untrusted input.
///
/// # Example
///
/// ```
/// use cbor_value::prelude::*;
///
/// let strict = DecodeLimits::default()
///     .with_max_depth(2)
///     .with_allow_trailing(false);
///
/// // three levels of nesting
/// let nested = [0x81, 0x81, 0x81, 0x00];
///
/// assert_eq!(
///     decode_with(&nested, &strict),
///     Err(DecodeError::DepthLimitExceeded(2))
/// );
/// assert_eq!(
///     decode_with(&[0x00, 0x00], &strict),
///     Err(DecodeError::TrailingBytes(1))
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Deepest allowed nesting of arrays and maps. A scalar at the top level has depth 0.
    pub max_depth: usize,
    /// Whether bytes after the first complete item are ignored rather than rejected.
    pub allow_trailing: bool,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        DecodeLimits {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing: true,
        }
    }
}

impl DecodeLimits {
    pub fn with_max_depth(self, max_depth: usize) -> Self { DecodeLimits { max_depth, ..self } }

    pub fn with_allow_trailing(self, allow_trailing: bool) -> Self {
        DecodeLimits {
            allow_trailing,
            ..self
        }
    }
}
