/// 0xe0
pub(crate) const MASK_TYPE: u8 = 0b1110_0000;
/// 0x1f
pub(crate) const MASK_INFO: u8 = 0b0001_1111;

/// Unsigned integer type bits, 0x00
pub(crate) const TYPE_UINT: u8 = 0b000_00000;
/// Negative integer type bits, 0x20
pub(crate) const TYPE_NINT: u8 = 0b001_00000;
/// Byte string type bits, 0x40
pub(crate) const TYPE_BYT: u8 = 0b010_00000;
/// Text string type bits, 0x60
pub(crate) const TYPE_STR: u8 = 0b011_00000;
/// Array type bits, 0x80
pub(crate) const TYPE_ARR: u8 = 0b100_00000;
/// Map type bits, 0xa0
pub(crate) const TYPE_MAP: u8 = 0b101_00000;
/// Tag type bits, 0xc0
pub(crate) const TYPE_TAG: u8 = 0b110_00000;
/// Simple value and float type bits, 0xe0
pub(crate) const TYPE_SIMPLE: u8 = 0b111_00000;

/// Largest argument stored directly in the header.
pub(crate) const INFO_INLINE_MAX: u8 = 23;
/// Argument follows in 1 byte.
pub(crate) const INFO_U8: u8 = 24;
/// Argument follows in 2 bytes.
pub(crate) const INFO_U16: u8 = 25;
/// Argument follows in 4 bytes.
pub(crate) const INFO_U32: u8 = 26;
/// Argument follows in 8 bytes.
pub(crate) const INFO_U64: u8 = 27;
/// Indefinite length, or the break marker under major type 7.
pub(crate) const INFO_INDEFINITE: u8 = 31;

pub(crate) const SIMPLE_FALSE: u8 = 20;
pub(crate) const SIMPLE_TRUE: u8 = 21;
pub(crate) const SIMPLE_NULL: u8 = 22;
pub(crate) const SIMPLE_UNDEFINED: u8 = 23;
/// One-byte simple value follows.
pub(crate) const SIMPLE_EXT: u8 = 24;

/// `false`, 0xf4
pub(crate) const CON_FALSE: u8 = TYPE_SIMPLE | SIMPLE_FALSE;
/// `true`, 0xf5
pub(crate) const CON_TRUE: u8 = TYPE_SIMPLE | SIMPLE_TRUE;
/// `null`, 0xf6
pub(crate) const CON_NULL: u8 = TYPE_SIMPLE | SIMPLE_NULL;
/// `undefined`, 0xf7
pub(crate) const CON_UNDEFINED: u8 = TYPE_SIMPLE | SIMPLE_UNDEFINED;

/// Half-precision header, 0xf9
pub(crate) const HALF: u8 = TYPE_SIMPLE | INFO_U16;
/// Single-precision header, 0xfa
pub(crate) const SINGLE: u8 = TYPE_SIMPLE | INFO_U32;
/// Double-precision header, 0xfb
pub(crate) const DOUBLE: u8 = TYPE_SIMPLE | INFO_U64;

/// Positive bignum tag number.
pub(crate) const TAG_POS_BIGNUM: u64 = 2;
/// Negative bignum tag number.
pub(crate) const TAG_NEG_BIGNUM: u64 = 3;
