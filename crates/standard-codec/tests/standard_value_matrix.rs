use channel_standard_codec::{
    DecodeError, Endian, StandardDecoder, StandardEncoder, WireValue,
};

struct Fixture {
    name: &'static str,
    bytes: &'static [u8],
    value: fn() -> WireValue,
}

const NULL: &[u8] = &[0x00];

const TRUE: &[u8] = &[0x01];

const FALSE: &[u8] = &[0x02];

const I32_ONE: &[u8] = &[
    0x03, // tag
    0x00, 0x00, 0x00, // padding to 4
    0x01, 0x00, 0x00, 0x00, // 1
];

const I64_VALUE: &[u8] = &[
    0x04, // tag
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // padding to 8
    0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01, // 0x0102030405060708
];

const BIGINT_NEG_TWELVE: &[u8] = &[
    0x05, // tag
    0x03, // size
    0x2d, 0x31, 0x32, // "-12"
];

const F64_HALF: &[u8] = &[
    0x06, // tag
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // padding to 8
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xe0, 0x3f, // 0.5
];

const STR_PATH: &[u8] = &[
    0x07, // tag
    0x07, // size
    0x75, 0x73, 0x65, 0x72, 0x73, 0x2f, 0x31, // "users/1"
];

const BYTES_THREE: &[u8] = &[
    0x08, // tag
    0x03, // count
    0x01, 0x02, 0x03,
];

const I32_ARRAY: &[u8] = &[
    0x09, // tag
    0x02, // count
    0x00, 0x00, // padding to 4
    0x01, 0x00, 0x00, 0x00, // 1
    0xff, 0xff, 0xff, 0xff, // -1
];

const I64_ARRAY: &[u8] = &[
    0x0a, // tag
    0x01, // count
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // padding to 8
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 1
];

const F64_ARRAY: &[u8] = &[
    0x0b, // tag
    0x01, // count
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // padding to 8
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xe0, 0x3f, // 0.5
];

const LIST_NULL_TRUE: &[u8] = &[
    0x0c, // tag
    0x02, // count
    0x00, // Null
    0x01, // true
];

const MAP_PATH: &[u8] = &[
    0x0d, // tag
    0x01, // pair count
    0x07, 0x04, 0x70, 0x61, 0x74, 0x68, // "path"
    0x07, 0x07, 0x75, 0x73, 0x65, 0x72, 0x73, 0x2f, 0x31, // "users/1"
];

const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "null",
        bytes: NULL,
        value: || WireValue::Null,
    },
    Fixture {
        name: "true",
        bytes: TRUE,
        value: || WireValue::Bool(true),
    },
    Fixture {
        name: "false",
        bytes: FALSE,
        value: || WireValue::Bool(false),
    },
    Fixture {
        name: "i32",
        bytes: I32_ONE,
        value: || WireValue::I32(1),
    },
    Fixture {
        name: "i64",
        bytes: I64_VALUE,
        value: || WireValue::I64(0x0102030405060708),
    },
    Fixture {
        name: "bigint",
        bytes: BIGINT_NEG_TWELVE,
        value: || WireValue::BigInt("-12".to_owned()),
    },
    Fixture {
        name: "f64",
        bytes: F64_HALF,
        value: || WireValue::F64(0.5),
    },
    Fixture {
        name: "string",
        bytes: STR_PATH,
        value: || WireValue::from("users/1"),
    },
    Fixture {
        name: "bytes",
        bytes: BYTES_THREE,
        value: || WireValue::Bytes(vec![1, 2, 3]),
    },
    Fixture {
        name: "i32_array",
        bytes: I32_ARRAY,
        value: || WireValue::I32Array(vec![1, -1]),
    },
    Fixture {
        name: "i64_array",
        bytes: I64_ARRAY,
        value: || WireValue::I64Array(vec![1]),
    },
    Fixture {
        name: "f64_array",
        bytes: F64_ARRAY,
        value: || WireValue::F64Array(vec![0.5]),
    },
    Fixture {
        name: "list",
        bytes: LIST_NULL_TRUE,
        value: || WireValue::List(vec![WireValue::Null, WireValue::Bool(true)]),
    },
    Fixture {
        name: "map",
        bytes: MAP_PATH,
        value: || {
            WireValue::Map(vec![(WireValue::from("path"), WireValue::from("users/1"))])
        },
    },
];

#[test]
fn fixture_encode_matrix() {
    for f in FIXTURES {
        let mut enc = StandardEncoder::new();
        let bytes = enc.encode(&(f.value)()).expect(f.name);
        assert_eq!(bytes, f.bytes, "encode {}", f.name);
    }
}

#[test]
fn fixture_decode_matrix() {
    let dec = StandardDecoder::new();
    for f in FIXTURES {
        let value = dec.decode(f.bytes).expect(f.name);
        assert_eq!(value, (f.value)(), "decode {}", f.name);
    }
}

#[test]
fn fixture_truncation_matrix() {
    // Chopping any number of trailing bytes must fail, never yield a
    // partial value.
    let dec = StandardDecoder::new();
    for f in FIXTURES {
        for cut in 0..f.bytes.len() {
            assert!(
                dec.decode(&f.bytes[..cut]).is_err(),
                "truncated {} at {} decoded",
                f.name,
                cut
            );
        }
    }
}

#[test]
fn fixture_trailing_byte_matrix() {
    let dec = StandardDecoder::new();
    for f in FIXTURES {
        let mut extended = f.bytes.to_vec();
        extended.push(0x00);
        assert_eq!(
            dec.decode(&extended),
            Err(DecodeError::TrailingBytes(1)),
            "extended {}",
            f.name
        );
    }
}

#[test]
fn nested_container_roundtrip() {
    let value = WireValue::Map(vec![
        (
            WireValue::from("doc"),
            WireValue::Map(vec![
                (WireValue::from("id"), WireValue::I64(1 << 40)),
                (WireValue::from("score"), WireValue::F64(0.25)),
                (WireValue::from("deleted"), WireValue::Bool(false)),
            ]),
        ),
        (
            WireValue::from("pages"),
            WireValue::List(vec![
                WireValue::I32Array(vec![3, 1, 4, 1, 5]),
                WireValue::F64Array(vec![2.5, -0.5]),
                WireValue::Bytes(vec![0xde, 0xad]),
            ]),
        ),
        (WireValue::I32(7), WireValue::Null),
    ]);
    let mut enc = StandardEncoder::new();
    let bytes = enc.encode(&value).unwrap();
    assert_eq!(StandardDecoder::new().decode(&bytes).unwrap(), value);
}

#[test]
fn alignment_invariant_holds_for_any_prefix_length() {
    // A variable-length prefix in front of each aligned payload exercises
    // every padding width; the payload sits at the end of the buffer, so
    // its offset is directly observable.
    for k in 0..=16 {
        let prefix = WireValue::Bytes(vec![0xaa; k]);

        let mut enc = StandardEncoder::new();
        let bytes = enc
            .encode(&WireValue::List(vec![prefix.clone(), WireValue::F64(0.5)]))
            .unwrap();
        assert_eq!((bytes.len() - 8) % 8, 0, "f64 offset, prefix {}", k);
        assert_eq!(&bytes[bytes.len() - 8..], &0.5f64.to_le_bytes());

        let bytes = enc
            .encode(&WireValue::List(vec![prefix.clone(), WireValue::I64(-9)]))
            .unwrap();
        assert_eq!((bytes.len() - 8) % 8, 0, "i64 offset, prefix {}", k);

        let bytes = enc
            .encode(&WireValue::List(vec![prefix, WireValue::I32(-9)]))
            .unwrap();
        assert_eq!((bytes.len() - 4) % 4, 0, "i32 offset, prefix {}", k);
    }
}

#[test]
fn size_field_boundaries_roundtrip() {
    let dec = StandardDecoder::new();
    let mut enc = StandardEncoder::new();
    for n in [0usize, 1, 253, 254, 255, 65535, 65536, 70000] {
        let value = WireValue::Str("x".repeat(n));
        let bytes = enc.encode(&value).unwrap();
        assert_eq!(dec.decode(&bytes).unwrap(), value, "size {}", n);
    }
}

#[test]
fn big_endian_deployment_roundtrip() {
    let value = WireValue::List(vec![
        WireValue::I32(-5),
        WireValue::I64(1 << 33),
        WireValue::F64(2.75),
        WireValue::I32Array(vec![1, 2]),
        WireValue::Str("x".repeat(300)),
    ]);
    let mut enc = StandardEncoder::with_endian(Endian::Big);
    let bytes = enc.encode(&value).unwrap();
    let dec = StandardDecoder::with_endian(Endian::Big);
    assert_eq!(dec.decode(&bytes).unwrap(), value);
}

#[test]
fn endianness_changes_the_wire_bytes() {
    let mut le = StandardEncoder::new();
    let mut be = StandardEncoder::with_endian(Endian::Big);
    let value = WireValue::I32(1);
    assert_ne!(le.encode(&value).unwrap(), be.encode(&value).unwrap());
}

#[test]
fn nan_payload_bits_survive_the_wire() {
    let mut enc = StandardEncoder::new();
    let bytes = enc.encode(&WireValue::F64(f64::NAN)).unwrap();
    match StandardDecoder::new().decode(&bytes).unwrap() {
        WireValue::F64(f) => assert_eq!(f.to_bits(), f64::NAN.to_bits()),
        other => panic!("expected F64, got {:?}", other),
    }
}

#[test]
fn deeply_nested_hostile_buffer_fails_cleanly() {
    // A small buffer of nothing but one-element list headers must come back
    // as an error through the public entry point, not take down the process.
    let mut data = Vec::with_capacity(200_000);
    for _ in 0..100_000 {
        data.extend_from_slice(&[0x0c, 0x01]);
    }
    assert_eq!(
        StandardDecoder::new().decode(&data),
        Err(DecodeError::NestingTooDeep)
    );
}

#[test]
fn duplicate_map_keys_are_preserved_in_wire_order() {
    let value = WireValue::Map(vec![
        (WireValue::from("k"), WireValue::I32(1)),
        (WireValue::from("k"), WireValue::I32(2)),
    ]);
    let mut enc = StandardEncoder::new();
    let bytes = enc.encode(&value).unwrap();
    assert_eq!(StandardDecoder::new().decode(&bytes).unwrap(), value);
}
