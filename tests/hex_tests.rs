use bpx::hex::{decode_hex, encode_hex};
use bpx::{HexError, HexLike};

#[test]
fn test_offset_from_int_and_string_agree() {
    assert_eq!(HexLike::from(32u64).to_offset().unwrap(), 32);
    assert_eq!(HexLike::from("20").to_offset().unwrap(), 32);
    assert_eq!(HexLike::from("0x20").to_offset().unwrap(), 32);
    assert_eq!(HexLike::from("0X20").to_offset().unwrap(), 32);
}

#[test]
fn test_offset_leading_zeros_are_harmless() {
    assert_eq!(HexLike::from("00000020").to_offset().unwrap(), 32);
}

#[test]
fn test_offset_rejects_malformed_strings() {
    assert_eq!(HexLike::from("").to_offset(), Err(HexError::Empty));
    assert_eq!(HexLike::from("0x").to_offset(), Err(HexError::Empty));
    assert!(matches!(
        HexLike::from("xyz").to_offset(),
        Err(HexError::InvalidDigit(_))
    ));
    assert!(matches!(
        HexLike::from("12 34").to_offset(),
        Err(HexError::InvalidDigit(_))
    ));
}

#[test]
fn test_payload_from_int_is_minimal_big_endian() {
    assert_eq!(HexLike::from(0xBEEFu64).to_payload().unwrap(), vec![0xBE, 0xEF]);
    assert_eq!(HexLike::from(0x01u64).to_payload().unwrap(), vec![0x01]);
    assert_eq!(
        HexLike::from(0xDEADBEEFu64).to_payload().unwrap(),
        vec![0xDE, 0xAD, 0xBE, 0xEF]
    );
}

#[test]
fn test_payload_zero_encodes_to_no_bytes() {
    assert_eq!(HexLike::from(0u64).to_payload().unwrap(), Vec::<u8>::new());
    assert_eq!(HexLike::from("0").to_payload().unwrap(), Vec::<u8>::new());
    assert_eq!(HexLike::from("0x0000").to_payload().unwrap(), Vec::<u8>::new());
}

#[test]
fn test_payload_string_drops_leading_zero_bytes() {
    // Byte width derives from the numeric value, not the digit count
    assert_eq!(HexLike::from("00BEEF").to_payload().unwrap(), vec![0xBE, 0xEF]);
    assert_eq!(HexLike::from("0x00BEEF").to_payload().unwrap(), vec![0xBE, 0xEF]);
}

#[test]
fn test_payload_odd_digit_count_gets_a_leading_nibble() {
    assert_eq!(HexLike::from("ABC").to_payload().unwrap(), vec![0x0A, 0xBC]);
}

#[test]
fn test_payload_longer_than_eight_bytes() {
    // Strings are not limited to a machine word
    let payload = HexLike::from("B0C1F0C1B0C1C1CADEADBEEF1EE7FEE7")
        .to_payload()
        .unwrap();
    assert_eq!(payload.len(), 16);
    assert_eq!(payload[0], 0xB0);
    assert_eq!(payload[15], 0xE7);
}

#[test]
fn test_payload_rejects_malformed_strings() {
    assert_eq!(HexLike::from("").to_payload(), Err(HexError::Empty));
    assert!(matches!(
        HexLike::from("BEEG").to_payload(),
        Err(HexError::InvalidDigit(_))
    ));
}

#[test]
fn test_encode_hex_is_uppercase_two_digits_per_byte() {
    assert_eq!(encode_hex(&[0xDE, 0xAD, 0x01]), "DEAD01");
    assert_eq!(encode_hex(&[]), "");
    assert_eq!(encode_hex(&[0x00, 0xFF]), "00FF");
}

#[test]
fn test_decode_hex_roundtrip() {
    let bytes = vec![0x00, 0x11, 0xAB, 0xFF];
    assert_eq!(decode_hex(&encode_hex(&bytes)).unwrap(), bytes);
    // Lowercase input decodes too
    assert_eq!(decode_hex("dead01").unwrap(), vec![0xDE, 0xAD, 0x01]);
}

#[test]
fn test_decode_hex_rejects_odd_length() {
    assert!(decode_hex("ABC").is_err());
}
