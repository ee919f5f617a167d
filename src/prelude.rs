pub use crate::{
    bigint::{BigInteger, Sign},
    encoding::{
        decode, decode_buf, decode_prefix, decode_with, encode, encode_into, Decoder, Ser,
        Serializer, SerializerExt,
    },
    errors::{DecodeError, Unsupported, ValueError},
    iter::Cursor,
    limits::DecodeLimits,
    rep::*,
    vecmap::VecMap,
    Type, Value,
};
pub use bytes::{Bytes, BytesMut};
pub use half::f16;
pub use num_bigint::BigInt;
pub use std::collections::BTreeMap;
