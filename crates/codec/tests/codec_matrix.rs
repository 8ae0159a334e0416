//! Round-trip matrix for the base64, hex and UTF-8 codecs.

use octetbuf_codec::{
    decode, encode, from_base64, from_hex, from_utf8, read_code_unit, to_base64, to_hex,
    write_code_unit, Encoding, EncodingError,
};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};

#[test]
fn base64_known_vectors() {
    assert_eq!(to_base64(b"Man"), "TWFu");
    assert_eq!(from_base64("TWFu").unwrap(), b"Man");
    assert_eq!(to_base64(b"any carnal pleasure."), "YW55IGNhcm5hbCBwbGVhc3VyZS4=");
    assert_eq!(to_base64(b"any carnal pleasure"), "YW55IGNhcm5hbCBwbGVhc3VyZQ==");
}

#[test]
fn base64_rejects_bad_length() {
    // Length five is not a multiple of four.
    assert_eq!(from_base64("TWFuX"), Err(EncodingError::Base64Length));
}

#[test]
fn hex_known_vectors() {
    assert_eq!(to_hex(&[0x00, 0xFF, 0x10]), "00ff10");
    assert_eq!(from_hex("00ff10").unwrap(), vec![0x00, 0xFF, 0x10]);
}

#[test]
fn base64_roundtrip_random_bytes() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for len in 0..64 {
        let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        assert_eq!(from_base64(&to_base64(&bytes)).unwrap(), bytes);
    }
}

#[test]
fn hex_roundtrip_random_bytes() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for len in 0..64 {
        let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        assert_eq!(from_hex(&to_hex(&bytes)).unwrap(), bytes);
    }
}

#[test]
fn utf8_code_unit_roundtrip_across_all_lengths() {
    // One value per sequence length, including the extended forms.
    for code in [
        0x00u32, 0x41, 0x7F, 0x80, 0x7FF, 0x800, 0xFFFF, 0x1_0000, 0x1F_FFFF, 0x20_0000,
        0x3FF_FFFF, 0x400_0000, 0x7FFF_FFFF,
    ] {
        let mut bytes = Vec::new();
        write_code_unit(&mut bytes, code);
        let mut pos = 0;
        assert_eq!(read_code_unit(&bytes, &mut pos), code, "code {code:#x}");
        assert_eq!(pos, bytes.len());
    }
}

#[test]
fn utf8_string_roundtrip() {
    let text = "pure ASCII, déjà vu, €99, 𝄞 clef, 日本語";
    let bytes = decode(text, Encoding::Utf8).unwrap();
    assert_eq!(encode(&bytes, Encoding::Utf8), text);
}

proptest! {
    #[test]
    fn prop_base64_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(from_base64(&to_base64(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn prop_hex_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(from_hex(&to_hex(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn prop_utf8_code_unit_roundtrip(codes in proptest::collection::vec(0u32..=0x7FFF_FFFF, 0..64)) {
        let mut bytes = Vec::new();
        for &code in &codes {
            write_code_unit(&mut bytes, code);
        }
        let mut pos = 0;
        let mut back = Vec::new();
        while pos < bytes.len() {
            back.push(read_code_unit(&bytes, &mut pos));
        }
        prop_assert_eq!(back, codes);
    }

    #[test]
    fn prop_utf8_string_roundtrip(text in "\\PC*") {
        let bytes = from_utf8(&text);
        prop_assert_eq!(octetbuf_codec::to_utf8(&bytes), text);
    }
}
