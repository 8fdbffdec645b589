use num_bigint::BigInt;
use secret_recovery::encoding::radix::{DecodeError, decode, decode_share, encode, parse_radix};

#[test]
fn decodes_hexadecimal() {
    assert_eq!(decode(16, "1A").unwrap(), BigInt::from(26));
    assert_eq!(decode_share("16", "1A").unwrap(), BigInt::from(26));
}

#[test]
fn letters_are_case_insensitive() {
    assert_eq!(decode(36, "zZ").unwrap(), decode(36, "ZZ").unwrap());
    assert_eq!(decode(36, "zz").unwrap(), BigInt::from(36 * 36 - 1));
}

#[test]
fn decodes_small_bases() {
    assert_eq!(decode(2, "111").unwrap(), BigInt::from(7));
    assert_eq!(decode(4, "213").unwrap(), BigInt::from(39));
    assert_eq!(decode(10, "0").unwrap(), BigInt::from(0));
    assert_eq!(decode(10, "007").unwrap(), BigInt::from(7));
}

#[test]
fn accepts_leading_sign() {
    assert_eq!(decode(10, "-42").unwrap(), BigInt::from(-42));
    assert_eq!(decode(10, "+42").unwrap(), BigInt::from(42));
    assert_eq!(decode(4, "-213").unwrap(), BigInt::from(-39));
}

#[test]
fn decodes_values_beyond_native_width() {
    let expected = BigInt::from(1u8) << 200u32;
    let digits = format!("1{}", "0".repeat(200));

    assert_eq!(decode(2, &digits).unwrap(), expected);
}

#[test]
fn rejects_digit_outside_base() {
    let err = decode(2, "121").unwrap_err();

    assert_eq!(
        err,
        DecodeError::MalformedDigits {
            value: "121".to_owned(),
            base: 2,
        }
    );
}

#[test]
fn rejects_empty_digits() {
    assert!(matches!(
        decode(10, ""),
        Err(DecodeError::MalformedDigits { .. })
    ));
}

#[test]
fn rejects_invalid_base() {
    for base in ["0", "1", "37", "-10", "ten", "", " 10"] {
        assert_eq!(
            decode_share(base, "1"),
            Err(DecodeError::InvalidBase {
                base: base.to_owned()
            }),
            "base {base:?}"
        );
    }

    assert!(matches!(decode(1, "0"), Err(DecodeError::InvalidBase { .. })));
    assert!(matches!(decode(37, "0"), Err(DecodeError::InvalidBase { .. })));
}

#[test]
fn parse_radix_accepts_full_range() {
    for radix in 2..=36u32 {
        assert_eq!(parse_radix(&radix.to_string()).unwrap(), radix);
    }
}

#[test]
fn encode_uses_lowercase_digits() {
    assert_eq!(encode(&BigInt::from(26), 16).unwrap(), "1a");
    assert_eq!(encode(&BigInt::from(-39), 4).unwrap(), "-213");
    assert!(encode(&BigInt::from(1), 40).is_err());
}

#[test]
fn error_message_names_value_and_base() {
    let message = decode_share("8", "19").unwrap_err().to_string();

    assert!(message.contains("\"19\""));
    assert!(message.contains('8'));
}
