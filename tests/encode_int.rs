use cbor_value::prelude::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

    #[test]
    fn encode_decode_i64(i in proptest::num::i64::ANY) {
        let enc = encode(&i);

        let dec = decode(&enc).ok().and_then(|v| v.into_rep::<i64>().ok());

        if dec != Some(i) {
            panic!("Tried encoding\n {:?}\n as \n{:x?}\n got \n{:?}\n", i, enc, dec)
        }
    }

    #[test]
    fn encode_decode_u64(u in proptest::num::u64::ANY) {
        let enc = encode(&u);

        prop_assert_eq!(decode(&enc), Ok(Value::PositiveInteger(u)));
    }

    #[test]
    fn header_is_minimal(u in proptest::num::u64::ANY) {
        let expected = match u {
            0..=23 => 1,
            24..=0xff => 2,
            0x100..=0xffff => 3,
            0x1_0000..=0xffff_ffff => 5,
            _ => 9,
        };

        prop_assert_eq!(encode(&u).len(), expected);
    }

    #[test]
    fn encode_decode_i128(i in proptest::num::i128::ANY) {
        let v = Value::from(i);
        let dec = decode(&encode(&v)).unwrap();

        prop_assert_eq!(&dec, &v);
        prop_assert_eq!(dec.into_rep::<i128>(), Ok(i));
    }
}
