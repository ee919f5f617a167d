use bytes::Bytes;
use cbor_value::{
    prelude::{f16, BigInteger, Sign},
    Value,
};
use num_bigint::BigInt;
use num_traits::Num;
use proptest::prelude::*;

/// arbitrary integer wider than 64 bits for use with proptest
pub fn arb_bigint() -> impl Strategy<Value = BigInt> {
    "-?1[0-1]{64,100}".prop_map(|n| -> BigInt {
        BigInt::from_str_radix(&n, 2).unwrap_or_default()
    })
}

/// arbitrary sign and magnitude of up to 12 bytes, built through `BigInteger::new`, so small
/// magnitudes come out as plain integers
pub fn arb_big_integer() -> impl Strategy<Value = Value> {
    (any::<bool>(), prop::collection::vec(any::<u8>(), 0..12)).prop_map(|(neg, magnitude)| {
        let sign = if neg { Sign::Negative } else { Sign::Positive };
        match BigInteger::new(sign, magnitude) {
            Ok(b) => Value::BigInteger(b),
            Err(small) => small,
        }
    })
}

/// arbitrary Bytes for use with proptest
pub fn arb_bytes() -> impl Strategy<Value = Bytes> {
    prop::collection::vec(any::<u8>(), 0..64).prop_map(Bytes::from)
}

/// arbitrary scalar Value for use with proptest
pub fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::Undefined),
        // misc
        any::<bool>().prop_map(Value::Bool),
        any::<String>().prop_map(Value::from),
        // integers
        any::<u8>().prop_map(Value::from),
        any::<i8>().prop_map(Value::from),
        any::<u16>().prop_map(Value::from),
        any::<i16>().prop_map(Value::from),
        any::<u32>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u128>().prop_map(Value::from),
        any::<i128>().prop_map(Value::from),
        // floats
        any::<u16>().prop_map(|n| Value::from(f16::from_bits(n))),
        any::<f32>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        // bigint
        arb_bigint().prop_map(Value::from),
        arb_big_integer(),
        // bytestrings
        arb_bytes().prop_map(Value::from),
    ]
}

/// arbitrary Value for use with proptest
pub fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(
        8,  // max depth
        64, // max nodes
        10, // max items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..10).prop_map(Value::from),
                prop::collection::vec((inner.clone(), inner), 0..10)
                    .prop_map(Value::convert_from_map),
            ]
        },
    )
}
